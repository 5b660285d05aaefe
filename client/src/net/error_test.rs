use super::*;

#[test]
fn status_error_prefers_detail() {
    let err = ApiError::from_status(400, br#"{"detail": "Bad credentials"}"#, "Login failed");
    assert_eq!(err.to_string(), "Bad credentials");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn status_error_reads_error_field() {
    let err = ApiError::from_status(403, br#"{"error": "Campaign ended"}"#, "Failed");
    assert_eq!(err.to_string(), "Campaign ended");
}

#[test]
fn status_error_formats_field_validation() {
    let err = ApiError::from_status(400, br#"{"name": ["This field is required."]}"#, "Failed");
    assert_eq!(err.to_string(), "name: This field is required.");
}

#[test]
fn status_error_falls_back_for_non_json() {
    let err = ApiError::from_status(500, b"Internal Server Error", "Failed to fetch campaigns");
    assert_eq!(err.to_string(), "Failed to fetch campaigns");
}

#[test]
fn non_status_errors_have_no_status() {
    assert_eq!(ApiError::SessionExpired.status(), None);
    assert_eq!(ApiError::Network("offline".into()).status(), None);
}
