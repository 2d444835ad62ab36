//! SMTP delivery of one-time codes

use crate::config::EmailConfig;
use lettre::transport::smtp::PoolConfig;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, warn};

use super::OtpNotifier;
use super::templates::otp_email_body;

/// Notifier that delivers codes over SMTP
///
/// Delivery runs on a background task: the request path never waits on the
/// mail server, and failures are logged rather than surfaced.
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    config: EmailConfig,
}

impl SmtpNotifier {
    /// Create a new SMTP notifier
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

impl OtpNotifier for SmtpNotifier {
    fn deliver(&self, recipient: &str, code: &str) {
        let config = self.config.clone();
        let recipient = recipient.to_string();
        let code = code.to_string();

        tokio::task::spawn_blocking(move || {
            match send_otp_email(&config, &recipient, &code) {
                Ok(()) => info!("Sent OTP email to {}", recipient),
                Err(e) => warn!("Failed to send OTP email to {}: {}", recipient, e),
            }
        });
    }
}

/// Build and send the OTP message over a blocking SMTP transport
fn send_otp_email(config: &EmailConfig, recipient: &str, code: &str) -> Result<(), String> {
    let email = Message::builder()
        .from(
            format!("Unibook <{}>", config.from_address)
                .parse()
                .map_err(|e| format!("Invalid from address: {}", e))?,
        )
        .to(recipient
            .parse()
            .map_err(|e| format!("Invalid to address: {}", e))?)
        .subject("Your Unibook Verification Code")
        .header(lettre::message::header::ContentType::TEXT_HTML)
        .body(otp_email_body(code))
        .map_err(|e| format!("Failed to create email: {}", e))?;

    let mailer = SmtpTransport::relay(&config.smtp_host)
        .map_err(|e| format!("Failed to create SMTP transport: {}", e))?
        .credentials(Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        ))
        .port(config.smtp_port)
        .pool_config(PoolConfig::new().max_size(1))
        .timeout(Some(std::time::Duration::from_secs(10)))
        .build();

    mailer
        .send(&email)
        .map(|_| ())
        .map_err(|e| format!("Failed to send email: {}", e))
}
