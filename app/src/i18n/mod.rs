//! Localized messages for the verification screen

use booth_shared::errors::ErrorResponse;
use booth_shared::types::Language;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog location, relative to the working directory
pub const CATALOG_PATH: &str = "i18n/messages.toml";

/// Compiled-in catalog used when no file is found on disk
const EMBEDDED_CATALOG: &str = include_str!("../../i18n/messages.toml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedMessage {
    pub en: String,
    pub es: String,
}

impl LocalizedMessage {
    pub fn text(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.en,
            Language::Spanish => &self.es,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    pub screen: HashMap<String, LocalizedMessage>,
    #[serde(default)]
    pub errors: HashMap<String, LocalizedMessage>,
}

pub static MESSAGES: Lazy<MessageCatalog> = Lazy::new(|| match load_messages() {
    Ok(catalog) => catalog,
    Err(e) => {
        tracing::warn!(error = %e, "Failed to load message catalog; using message keys");
        MessageCatalog::default()
    }
});

fn load_messages() -> Result<MessageCatalog, Box<dyn std::error::Error>> {
    let path = Path::new(CATALOG_PATH);
    if path.exists() {
        let content = fs::read_to_string(path)?;
        match toml::from_str(&content) {
            Ok(messages) => return Ok(messages),
            Err(e) => {
                tracing::warn!(
                    path = CATALOG_PATH,
                    error = %e,
                    "Invalid message catalog on disk; using embedded copy"
                );
            }
        }
    }

    load_default_messages()
}

fn load_default_messages() -> Result<MessageCatalog, Box<dyn std::error::Error>> {
    Ok(toml::from_str(EMBEDDED_CATALOG)?)
}

/// Look up a message template by category (`screen` or `errors`) and key
pub fn get_message(category: &str, key: &str, lang: Language) -> Option<String> {
    let messages = &*MESSAGES;

    let category_map = match category {
        "screen" => &messages.screen,
        "errors" => &messages.errors,
        _ => return None,
    };

    category_map.get(key).map(|msg| msg.text(lang).to_string())
}

/// Replace `{name}` placeholders in `template`
pub fn format_message(template: &str, params: &HashMap<&str, String>) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{}}}", key), value)
        })
}

/// Screen label with placeholders filled; falls back to the key itself
pub fn screen_text(key: &str, lang: Language, params: &[(&str, String)]) -> String {
    let params: HashMap<&str, String> = params.iter().cloned().collect();
    match get_message("screen", key, lang) {
        Some(template) => format_message(&template, &params),
        None => key.to_string(),
    }
}

/// Localized text for an error response.
///
/// Detail fields fill the placeholders; unknown codes keep the response's
/// own message.
pub fn error_text(response: &ErrorResponse, lang: Language) -> String {
    let template = match get_message("errors", &response.error, lang) {
        Some(template) => template,
        None => return response.message.clone(),
    };

    let params: HashMap<&str, String> = response
        .details
        .iter()
        .flatten()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.as_str(), value)
        })
        .collect();

    format_message(&template, &params)
}
