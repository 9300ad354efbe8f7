//! Integration tests for the verification session through the public API

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use booth_core::{
    DomainError, EntryError, EntryState, ResendCollaborator, ResendResult,
    VerificationCollaborator, VerificationSession,
};
use booth_shared::config::VerificationConfig;

// Backend stand-in: one live code per identifier, replaced on resend
struct FakeBackend {
    codes: RwLock<HashMap<String, String>>,
    next_codes: RwLock<Vec<String>>,
}

impl FakeBackend {
    fn new(identifier: &str, first: &str, later: &[&str]) -> Self {
        let mut codes = HashMap::new();
        codes.insert(identifier.to_string(), first.to_string());
        Self {
            codes: RwLock::new(codes),
            next_codes: RwLock::new(later.iter().rev().map(|c| c.to_string()).collect()),
        }
    }
}

#[async_trait]
impl VerificationCollaborator for FakeBackend {
    async fn verify(&self, identifier: &str, code: &str) -> Result<bool, String> {
        let codes = self.codes.read().await;
        Ok(codes.get(identifier).map(|c| c == code).unwrap_or(false))
    }
}

#[async_trait]
impl ResendCollaborator for FakeBackend {
    async fn resend(&self, identifier: &str) -> Result<String, String> {
        let next = self
            .next_codes
            .write()
            .await
            .pop()
            .ok_or_else(|| "No more codes".to_string())?;
        self.codes.write().await.insert(identifier.to_string(), next);
        Ok(format!("delivery-{}", identifier))
    }
}

#[tokio::test(start_paused = true)]
async fn test_full_flow_wrong_code_then_resend_then_verify() {
    let identifier = "producer@booth33.app";
    let backend = Arc::new(FakeBackend::new(identifier, "111111", &["654321"]));
    let session = VerificationSession::start(
        identifier,
        backend.clone(),
        backend.clone(),
        &VerificationConfig::default(),
    )
    .unwrap();

    // Type the first five digits one by one, then try to submit early
    for (slot, digit) in "99999".chars().enumerate() {
        session.input(&digit.to_string(), slot).unwrap();
        assert_eq!(session.snapshot().focus_index, slot + 1);
    }
    assert!(matches!(
        session.submit().await,
        Err(DomainError::Entry(EntryError::IncompleteCode { .. }))
    ));

    // Finish with a wrong code
    session.input("9", 5).unwrap();
    let result = session.submit().await.unwrap();
    assert!(!result.verified);
    assert!(matches!(session.snapshot().state, EntryState::Failed { .. }));

    // Resend is blocked during the first 30 seconds
    assert!(matches!(
        session.resend().await.unwrap(),
        ResendResult::Throttled { .. }
    ));

    tokio::time::sleep(Duration::from_secs(31)).await;
    assert!(matches!(
        session.resend().await.unwrap(),
        ResendResult::Sent { .. }
    ));
    assert!(session.snapshot().slots.iter().all(String::is_empty));

    // Paste the new code
    session.input("code: 654-321", 0).unwrap();
    let result = session.submit().await.unwrap();
    assert!(result.verified);
    assert_eq!(session.snapshot().state, EntryState::Verified);
}

#[tokio::test(start_paused = true)]
async fn test_backspace_walks_back_across_empty_slots() {
    let identifier = "engineer@booth33.app";
    let backend = Arc::new(FakeBackend::new(identifier, "123456", &[]));
    let session = VerificationSession::start(
        identifier,
        backend.clone(),
        backend,
        &VerificationConfig::default(),
    )
    .unwrap();

    session.input("12", 4).unwrap();
    session.input("", 5).unwrap();
    assert_eq!(session.snapshot().focus_index, 4);

    session.input("", 4).unwrap();
    assert_eq!(session.snapshot().focus_index, 3);
    for slot in (1..=3).rev() {
        session.backspace_at_empty(slot).unwrap();
        assert_eq!(session.snapshot().focus_index, slot - 1);
    }
    assert!(session.snapshot().slots.iter().all(String::is_empty));
}
