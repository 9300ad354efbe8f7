//! External collaborator configuration (verification and resend services)

use serde::{Deserialize, Serialize};

/// Configuration for the verification and resend collaborators
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CollaboratorConfig {
    /// Provider name ("simulated" is the only built-in provider)
    pub provider: String,

    /// Fixed delay applied by the simulated verifier, in milliseconds
    pub simulated_delay_ms: u64,

    /// Print delivered codes to the console (development only)
    pub console_output: bool,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            provider: String::from("simulated"),
            simulated_delay_ms: 1500,
            console_output: true,
        }
    }
}

impl CollaboratorConfig {
    /// Configuration for production: no console echo of codes
    pub fn production() -> Self {
        Self {
            console_output: false,
            ..Default::default()
        }
    }
}
