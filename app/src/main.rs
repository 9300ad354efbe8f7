use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use booth_app::dto::LaunchRequest;
use booth_app::logging::init_tracing;
use booth_app::screen::{ScreenView, VerifyCodeScreen};
use booth_app::terminal::{
    dispatch, help_text, parse_command, render, unknown_command_text, Command,
};
use booth_infra::config::InfrastructureConfig;
use booth_infra::create_collaborators;
use booth_shared::config::{AppConfig, ENV_PREFIX};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env files as part of configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        language = %config.language,
        "Starting Booth 33 verification screen"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let identifier = match std::env::args().nth(1) {
        Some(identifier) => identifier,
        None => {
            print!("Email: ");
            std::io::stdout().flush()?;
            lines.next_line().await?.unwrap_or_default()
        }
    };

    let (verifier, resender) =
        create_collaborators(&InfrastructureConfig::new(config.collaborators.clone()))?;

    let request = LaunchRequest::new(identifier).with_locale(system_locale().as_deref());
    let screen = VerifyCodeScreen::mount(&request, verifier, resender, &config)
        .map_err(|response| anyhow::anyhow!("{}: {}", response.error, response.message))?;
    let screen = Arc::new(screen);
    let lang = screen.language();

    let mut changes = screen.subscribe();
    let (views_tx, mut views_rx) = mpsc::unbounded_channel::<ScreenView>();
    let mut status: Option<String> = Some(help_text(lang));

    draw(&screen.view(), status.as_deref())?;

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&screen.view(), status.as_deref())?;
            }
            Some(view) = views_rx.recv() => {
                draw(&view, status.as_deref())?;
                if view.is_verified() {
                    break;
                }
            }
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };
                let view = screen.view();
                status = None;
                match parse_command(&line, &view) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => status = Some(help_text(lang)),
                    Ok(Command::Redraw) => {}
                    Ok(Command::Event(event)) => {
                        // Edits land before the next line is read; requests report back
                        // through the channel so ticks keep redrawing meanwhile
                        if let Some(view) = dispatch(&screen, event, &views_tx).await {
                            draw(&view, status.as_deref())?;
                        }
                        continue;
                    }
                    Err(command) => status = Some(unknown_command_text(&command, lang)),
                }
                draw(&screen.view(), status.as_deref())?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    info!("Verification screen closed");
    Ok(())
}

/// Locale from the environment unless the language is configured explicitly
fn system_locale() -> Option<String> {
    if std::env::var_os(format!("{}__LANGUAGE", ENV_PREFIX)).is_some() {
        return None;
    }
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .ok()
}

fn draw(view: &ScreenView, status: Option<&str>) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\x1b[2J\x1b[H{}", render(view))?;
    if let Some(status) = status {
        writeln!(stdout, "{}", status)?;
    }
    write!(stdout, "> ")?;
    stdout.flush()
}
