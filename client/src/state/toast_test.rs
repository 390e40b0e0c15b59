use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut q = ToastQueue::default();
    let a = q.push("a", "", ToastVariant::Default);
    let b = q.push("b", "", ToastVariant::Destructive);
    assert!(b > a);
    assert_eq!(q.toasts().len(), 2);
    assert_eq!(q.toasts()[1].variant, ToastVariant::Destructive);
}

#[test]
fn push_past_limit_drops_oldest() {
    let mut q = ToastQueue::default();
    for i in 0..=TOAST_LIMIT {
        q.push(format!("t{i}"), "", ToastVariant::Default);
    }
    assert_eq!(q.toasts().len(), TOAST_LIMIT);
    assert_eq!(q.toasts()[0].title, "t1");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut q = ToastQueue::default();
    let a = q.push("a", "", ToastVariant::Default);
    let b = q.push("b", "", ToastVariant::Default);
    assert!(q.dismiss(a));
    assert!(!q.dismiss(a));
    assert_eq!(q.toasts().len(), 1);
    assert_eq!(q.toasts()[0].id, b);
}
