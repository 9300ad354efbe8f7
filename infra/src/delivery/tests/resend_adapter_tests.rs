//! Unit tests for the resend adapter

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use booth_core::services::verification::ResendCollaborator;

use crate::delivery::{generate_code, CodeDelivery, ConsoleDelivery, DeliveryResendAdapter};
use crate::InfrastructureError;

/// Delivery that records every code it is asked to send
struct RecordingDelivery {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl CodeDelivery for RecordingDelivery {
    async fn send_code(&self, identifier: &str, code: &str) -> Result<String, InfrastructureError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((identifier.to_string(), code.to_string()));
        Ok(format!("recorded-{}", sent.len()))
    }

    fn provider_name(&self) -> &str {
        "recording"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn test_generate_code_format() {
    for _ in 0..200 {
        let code = generate_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}

#[tokio::test]
async fn test_resend_delivers_fresh_code() {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let adapter = DeliveryResendAdapter::new(Box::new(RecordingDelivery { sent: sent.clone() }));
    assert_eq!(adapter.provider_name(), "recording");

    let delivery_id = adapter.resend("artist@booth33.app").await.unwrap();
    assert_eq!(delivery_id, "recorded-1");

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "artist@booth33.app");
    assert_eq!(sent[0].1.len(), 6);
}

#[tokio::test]
async fn test_resend_maps_delivery_errors() {
    let adapter = DeliveryResendAdapter::new(Box::new(ConsoleDelivery::with_options(false, false)));

    let error = adapter.resend("not-an-email").await.unwrap_err();
    assert!(error.contains("Invalid email address"));
}

#[tokio::test]
async fn test_resend_skips_unavailable_provider() {
    let delivery = ConsoleDelivery::with_options(false, true);
    let adapter = DeliveryResendAdapter::new(Box::new(delivery.clone()));

    let error = adapter.resend("artist@booth33.app").await.unwrap_err();
    assert!(error.contains("Provider console is unavailable"));
    assert_eq!(delivery.get_message_count(), 0);

    delivery.set_simulate_failure(false);
    assert!(adapter.resend("artist@booth33.app").await.is_ok());
    assert_eq!(delivery.get_message_count(), 1);
}
