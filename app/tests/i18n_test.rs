// Integration tests for the message catalog

use booth_app::i18n::{error_text, format_message, get_message, screen_text, MESSAGES};
use booth_shared::errors::{error_codes, ErrorResponse};
use booth_shared::types::Language;
use std::collections::HashMap;

const ALL_ERROR_CODES: &[&str] = &[
    error_codes::INTERNAL_ERROR,
    error_codes::VALIDATION_ERROR,
    error_codes::IDENTIFIER_INVALID,
    error_codes::CODE_INCOMPLETE,
    error_codes::SLOT_OUT_OF_RANGE,
    error_codes::INPUT_LOCKED,
    error_codes::SUBMISSION_PENDING,
    error_codes::RESEND_PENDING,
    error_codes::ALREADY_VERIFIED,
    error_codes::NOT_SUBMITTING,
    error_codes::CODE_REJECTED,
    error_codes::VERIFICATION_FAILED,
    error_codes::RESEND_FAILED,
];

#[test]
fn test_every_error_code_is_translated() {
    for code in ALL_ERROR_CODES {
        let message = MESSAGES
            .errors
            .get(*code)
            .unwrap_or_else(|| panic!("missing catalog entry for {}", code));
        assert!(!message.en.is_empty(), "{} has no English text", code);
        assert!(!message.es.is_empty(), "{} has no Spanish text", code);
    }
}

#[test]
fn test_screen_message_english() {
    assert_eq!(
        get_message("screen", "resend", Language::English).as_deref(),
        Some("Resend code")
    );
    assert_eq!(screen_text("title", Language::English, &[]), "Verify your email");
}

#[test]
fn test_screen_message_spanish_with_param() {
    let text = screen_text("expires_in", Language::Spanish, &[("time", "09:59".to_string())]);
    assert_eq!(text, "El código vence en 09:59");
}

#[test]
fn test_unknown_lookups() {
    assert!(get_message("toasts", "title", Language::English).is_none());
    assert!(get_message("screen", "missing", Language::English).is_none());
    assert_eq!(screen_text("missing", Language::English, &[]), "missing");
}

#[test]
fn test_format_message_multiple_params() {
    let mut params = HashMap::new();
    params.insert("required", "6".to_string());
    params.insert("filled", "2".to_string());
    assert_eq!(
        format_message("Enter all {required} digits ({filled} entered)", &params),
        "Enter all 6 digits (2 entered)"
    );
}

#[test]
fn test_error_text_uses_details() {
    let response = ErrorResponse::new(error_codes::SLOT_OUT_OF_RANGE, "Slot out of range: 7")
        .add_detail("slot", 7);
    assert_eq!(error_text(&response, Language::English), "There is no digit box 7");
    assert_eq!(error_text(&response, Language::Spanish), "No existe la casilla 7");
}

#[test]
fn test_error_text_falls_back_to_response_message() {
    let response = ErrorResponse::new("SOMETHING_NEW", "Raw message");
    assert_eq!(error_text(&response, Language::English), "Raw message");
}
