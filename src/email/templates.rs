//! Outbound email bodies

/// HTML body carrying a one-time verification code
pub fn otp_email_body(code: &str) -> String {
    format!(
        r#"
      <div style="background-color: #ffffff; color: #000000; font-family: Arial, sans-serif; padding: 20px; text-align: center;">
        <h2 style="color: #000000;">Your Verification Code</h2>
        <p style="color: #333333;">Please use the following code to complete your registration.</p>
        <div style="font-size: 36px; font-weight: bold; letter-spacing: 8px; margin: 20px 0; color: #000000;">
          {}
        </div>
        <p style="color: #555555; font-size: 12px;">This code will expire in 10 minutes.</p>
      </div>"#,
        code
    )
}
