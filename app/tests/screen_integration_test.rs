// End-to-end tests of the verification screen with the simulated collaborators

use std::sync::Arc;
use std::time::Duration;

use booth_app::dto::LaunchRequest;
use booth_app::screen::{ScreenEvent, VerifyCodeScreen};
use booth_app::terminal::{dispatch, parse_command, render, Command};
use booth_core::domain::entities::code_entry::EntryState;
use booth_infra::config::InfrastructureConfig;
use booth_infra::create_collaborators;
use booth_shared::config::{AppConfig, CollaboratorConfig, Environment};
use booth_shared::errors::error_codes;
use booth_shared::types::Language;
use tokio::sync::mpsc;

fn test_config() -> AppConfig {
    let mut config = AppConfig::for_environment(Environment::Staging);
    config.collaborators = CollaboratorConfig {
        console_output: false,
        ..Default::default()
    };
    config
}

#[tokio::test(start_paused = true)]
async fn test_mount_rejects_invalid_identifier() {
    let config = test_config();
    let (verifier, resender) =
        create_collaborators(&InfrastructureConfig::new(config.collaborators.clone())).unwrap();

    let result = VerifyCodeScreen::mount(
        &LaunchRequest::new("artist-at-booth33"),
        verifier,
        resender,
        &config,
    );
    match result {
        Err(response) => assert_eq!(response.error, error_codes::IDENTIFIER_INVALID),
        Ok(_) => panic!("Expected the identifier to be rejected"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_terminal_session_flow() {
    let config = test_config();
    let (verifier, resender) =
        create_collaborators(&InfrastructureConfig::new(config.collaborators.clone())).unwrap();
    let screen = VerifyCodeScreen::mount(
        &LaunchRequest::new("Artist@Booth33.app"),
        verifier,
        resender,
        &config,
    )
    .unwrap();
    assert_eq!(screen.session().identifier(), "artist@booth33.app");

    // Type, make a mistake, correct it, then submit
    for line in ["48", "2", "@3 7", "bs", "bs", "@3 913", "submit"] {
        let view = screen.view();
        match parse_command(line, &view).unwrap() {
            Command::Event(event) => {
                screen.handle(event).await;
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    let view = screen.view();
    assert_eq!(view.slots.concat(), "482913");
    assert_eq!(view.state, EntryState::Verified);
    assert!(render(&view).contains("+ Email verified"));
}

#[tokio::test(start_paused = true)]
async fn test_change_stream_fires_on_tick() {
    let config = test_config();
    let (verifier, resender) =
        create_collaborators(&InfrastructureConfig::new(config.collaborators.clone())).unwrap();
    let mut request = LaunchRequest::new("artist@booth33.app");
    request.language = Some(Language::Spanish);
    let screen = VerifyCodeScreen::mount(&request, verifier, resender, &config).unwrap();
    assert_eq!(screen.language(), Language::Spanish);

    let mut changes = screen.subscribe();
    tokio::time::timeout(Duration::from_secs(2), changes.changed())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(screen.view().expiry_label, "El código vence en 09:59");

    let view = screen.handle(ScreenEvent::Focus { slot: 4 }).await;
    assert_eq!(view.focus_index, 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_back_to_back_digits_keep_input_order() {
    let config = test_config();

    let infra_config = InfrastructureConfig::new(config.collaborators.clone());
    let request = LaunchRequest::new("artist@booth33.app");

    for _ in 0..50 {
        let (verifier, resender) = create_collaborators(&infra_config).unwrap();
        let screen =
            Arc::new(VerifyCodeScreen::mount(&request, verifier, resender, &config).unwrap());
        let (views_tx, _views_rx) = mpsc::unbounded_channel();

        for line in ["1", "2", "3", "4", "5", "6"] {
            let event = match parse_command(line, &screen.view()).unwrap() {
                Command::Event(event) => event,
                other => panic!("Unexpected command {:?}", other),
            };
            assert!(dispatch(&screen, event, &views_tx).await.is_some());
        }

        let view = screen.view();
        assert_eq!(view.slots, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(view.focus_index, 5);
        assert!(view.submit_enabled);
    }
}

#[tokio::test(start_paused = true)]
async fn test_submit_reports_through_channel() {
    let config = test_config();
    let (verifier, resender) =
        create_collaborators(&InfrastructureConfig::new(config.collaborators.clone())).unwrap();
    let request = LaunchRequest::new("artist@booth33.app");
    let screen = Arc::new(VerifyCodeScreen::mount(&request, verifier, resender, &config).unwrap());
    let (views_tx, mut views_rx) = mpsc::unbounded_channel();

    let typed = dispatch(&screen, ScreenEvent::text(0, "482913"), &views_tx).await;
    assert_eq!(typed.unwrap().slots.concat(), "482913");

    assert!(dispatch(&screen, ScreenEvent::Submit, &views_tx).await.is_none());

    let view = views_rx.recv().await.unwrap();
    assert!(view.is_verified());
}
