//! Email delivery configuration

use super::*;
use serde::{Deserialize, Serialize};

/// SMTP configuration for outbound OTP mail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// From address shown to recipients
    #[serde(default)]
    pub from_address: String,
    /// SMTP server hostname
    #[serde(default)]
    pub smtp_host: String,
    /// SMTP server port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password
    #[serde(default)]
    pub smtp_password: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from_address: String::new(),
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

impl EmailConfig {
    /// Validate email configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.smtp_host.is_empty() {
            return Err("SMTP_HOST must be set".to_string());
        }

        if self.smtp_port == 0 {
            return Err("SMTP_PORT cannot be 0".to_string());
        }

        Ok(())
    }
}
