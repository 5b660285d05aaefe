use super::*;

#[test]
fn validate_login_input_trims_username_and_requires_both() {
    assert_eq!(validate_login_input("  acme  ", "secret"), Ok(("acme".to_owned(), "secret".to_owned())));
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("acme", ""), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("acme", " pw "), Ok(("acme".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_reset_email_requires_an_address() {
    assert_eq!(validate_reset_email(" owner@acme.test "), Ok("owner@acme.test".to_owned()));
    assert_eq!(validate_reset_email(""), Err("Enter the email address on your account."));
    assert_eq!(validate_reset_email("owner"), Err("Enter the email address on your account."));
}
