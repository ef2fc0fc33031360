//! Resend implementation of EnrollmentNotifier.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::ports::{EnrollmentNotice, EnrollmentNotifier, NotifyError};

/// Sends enrollment confirmation emails through the Resend API.
pub struct ResendNotifier {
    api_key: SecretString,
    from: String,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl ResendNotifier {
    /// Creates a notifier sending as `from` (a "Name <addr>" header value).
    pub fn new(api_key: SecretString, from: impl Into<String>) -> Self {
        Self {
            api_key,
            from: from.into(),
            api_base_url: "https://api.resend.com".to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    html: String,
}

fn rupee_display(paise: i64) -> String {
    let rupees = paise / 100;
    format!("₹{}", rupees)
}

fn render_subject(notice: &EnrollmentNotice) -> String {
    format!("You're enrolled in {}", notice.package_name)
}

fn render_html(notice: &EnrollmentNotice) -> String {
    format!(
        "<p>Hi {},</p>\
         <p>Your payment of {} was received and you now have access to \
         <strong>{}</strong>.</p>\
         <p>Happy learning!<br>The SkillBridge team</p>",
        notice.name,
        rupee_display(notice.amount),
        notice.package_name,
    )
}

#[async_trait]
impl EnrollmentNotifier for ResendNotifier {
    async fn send(&self, notice: EnrollmentNotice) -> Result<(), NotifyError> {
        let url = format!("{}/emails", self.api_base_url);

        let body = SendEmailBody {
            from: &self.from,
            to: [notice.to.as_str()],
            subject: render_subject(&notice),
            html: render_html(&notice),
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(NotifyError(format!(
                "Resend API error ({}): {}",
                status, error_text
            )));
        }

        Ok(())
    }
}
