use super::*;
use crate::state::user::Role;

#[test]
fn failed_login_toast_is_destructive() {
    let (variant, title, description) = login_toast(&Err(AuthError::InvalidCredentials));
    assert_eq!(variant, ToastVariant::Destructive);
    assert_eq!(title, "Login failed");
    assert_eq!(description, "Invalid email or password");
}

#[test]
fn successful_login_toast_greets_user() {
    let user = User {
        id: "user-1".to_owned(),
        name: "Priyansh".to_owned(),
        email: "priyanshr230@gmail.com".to_owned(),
        role: Role::Family,
    };
    let (variant, title, description) = login_toast(&Ok(user));
    assert_eq!(variant, ToastVariant::Default);
    assert_eq!(title, "Login successful");
    assert_eq!(description, "Welcome back, Priyansh!");
}
