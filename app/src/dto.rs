use booth_shared::errors::{error_codes, ErrorResponse};
use booth_shared::types::Language;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Parameters the verification screen is mounted with
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LaunchRequest {
    #[validate(email)]
    pub identifier: String,
    #[serde(default)]
    pub language: Option<Language>,
}

impl LaunchRequest {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into().trim().to_string(),
            language: None,
        }
    }

    /// Take the display language from a locale such as `$LANG`
    pub fn with_locale(mut self, locale: Option<&str>) -> Self {
        if let Some(locale) = locale.filter(|l| !l.is_empty()) {
            self.language = Some(Language::from_locale(locale));
        }
        self
    }

    /// Validate the identifier, mapping failures to an error response
    pub fn check(&self) -> Result<(), ErrorResponse> {
        self.validate().map_err(|errors| {
            let fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            ErrorResponse::new(error_codes::IDENTIFIER_INVALID, errors.to_string())
                .add_detail("fields", fields)
        })
    }
}
