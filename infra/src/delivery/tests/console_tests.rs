//! Unit tests for the console delivery provider

use crate::delivery::{write_echo, CodeDelivery, ConsoleDelivery};
use crate::InfrastructureError;

#[tokio::test]
async fn test_send_code_success() {
    let delivery = ConsoleDelivery::with_options(false, false);

    let message_id = delivery
        .send_code("artist@booth33.app", "123456")
        .await
        .unwrap();

    assert!(message_id.starts_with("console_"));
    assert_eq!(delivery.get_message_count(), 1);
}

#[tokio::test]
async fn test_message_ids_are_unique() {
    let delivery = ConsoleDelivery::with_options(false, false);

    let first = delivery.send_code("artist@booth33.app", "111111").await.unwrap();
    let second = delivery.send_code("artist@booth33.app", "222222").await.unwrap();

    assert_ne!(first, second);
    assert_eq!(delivery.get_message_count(), 2);
}

#[tokio::test]
async fn test_invalid_identifier() {
    let delivery = ConsoleDelivery::with_options(false, false);

    let result = delivery.send_code("not-an-email", "123456").await;
    match result {
        Err(InfrastructureError::Delivery(message)) => {
            assert!(message.contains("Invalid email address"));
        }
        _ => panic!("Expected delivery error"),
    }
    assert_eq!(delivery.get_message_count(), 0);
}

#[tokio::test]
async fn test_simulated_failure() {
    let delivery = ConsoleDelivery::with_options(false, true);
    assert!(!delivery.is_available().await);

    let result = delivery.send_code("artist@booth33.app", "123456").await;
    assert!(matches!(result, Err(InfrastructureError::Delivery(_))));

    delivery.set_simulate_failure(false);
    assert!(delivery.is_available().await);
    assert!(delivery.send_code("artist@booth33.app", "123456").await.is_ok());
}

#[tokio::test]
async fn test_clones_share_counters() {
    let delivery = ConsoleDelivery::with_options(false, false);
    let clone = delivery.clone();

    clone.send_code("artist@booth33.app", "123456").await.unwrap();
    assert_eq!(delivery.get_message_count(), 1);
    assert_eq!(delivery.provider_name(), "console");
}

#[test]
fn test_echo_lists_code_and_masked_recipient() {
    let mut out = Vec::new();
    write_echo(&mut out, 3, "ar****@booth33.app", "console_abc", "048213").unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("BOOTH 33 VERIFICATION EMAIL #3"));
    assert!(text.contains("To: ar****@booth33.app"));
    assert!(text.contains("Message ID: console_abc"));
    assert!(text.contains("Your Booth 33 verification code is 048213"));
    assert!(!text.contains("\x1b["));
}
