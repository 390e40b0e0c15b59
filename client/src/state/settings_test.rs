use super::*;

fn priyansh() -> User {
    User {
        id: "user-1".to_owned(),
        name: "Priyansh".to_owned(),
        email: "priyanshr230@gmail.com".to_owned(),
        role: Role::Family,
    }
}

#[test]
fn profile_prefills_from_user() {
    let form = ProfileForm::from_user(Some(&priyansh()));
    assert_eq!(form.name, "Priyansh");
    assert_eq!(form.email, "priyanshr230@gmail.com");
    assert_eq!(form.role, Role::Family);
    assert!(form.new_password.is_empty());
}

#[test]
fn profile_is_blank_without_user() {
    assert_eq!(ProfileForm::from_user(None), ProfileForm::default());
}

#[test]
fn alert_defaults_leave_email_off() {
    let prefs = NotificationPrefs::default();
    assert!(prefs.get(Alert::Fall));
    assert!(prefs.get(Alert::Visitor));
    assert!(prefs.get(Alert::Reminder));
    assert!(!prefs.get(Alert::Email));
}

#[test]
fn set_touches_only_named_alert() {
    let mut prefs = NotificationPrefs::default();
    prefs.set(Alert::Email, true);
    prefs.set(Alert::Fall, false);
    assert!(prefs.email_notifications);
    assert!(!prefs.fall_alerts);
    assert!(prefs.visitor_alerts);
    assert!(prefs.reminder_alerts);
}

#[test]
fn appearance_defaults_to_medium_font() {
    let appearance = Appearance::default();
    assert_eq!(appearance.font_size, FontSize::Medium);
    assert!(!appearance.reduce_motion);
    assert!(!appearance.high_contrast);
    assert_eq!(FontSize::parse("large"), Some(FontSize::Large));
    assert_eq!(FontSize::parse("huge"), None);
}

#[test]
fn save_flag_ignores_double_click() {
    let mut state = SettingsState::for_user(Some(&priyansh()));
    assert!(state.begin_save());
    assert!(!state.begin_save());
    state.finish_save();
    assert!(!state.saving);
    assert!(state.begin_save());
}

#[test]
fn role_labels_match_select_options() {
    assert_eq!(role_label(Role::Family), "Family Member");
    assert_eq!(role_label(Role::Caregiver), "Caregiver");
}
