//! Contact form endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::validation::{validate_email, validate_text, MAX_LINE_LENGTH, MAX_MESSAGE_LENGTH};

/// Contact form body.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// Acknowledgement of a contact submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub received: bool,
}

/// Accept a contact form submission.
///
/// Messages are logged, not delivered anywhere.
pub async fn contact_api(Json(request): Json<ContactRequest>) -> Result<Json<ContactResponse>> {
    validate_text("name", &request.name, MAX_LINE_LENGTH)?;
    validate_email(&request.email)?;
    if !request.subject.trim().is_empty() {
        validate_text("subject", &request.subject, MAX_LINE_LENGTH)?;
    }
    validate_text("message", &request.message, MAX_MESSAGE_LENGTH)?;

    info!(
        email = %request.email.trim(),
        subject = %request.subject.trim(),
        message_len = request.message.trim().chars().count(),
        "Contact form received"
    );

    Ok(Json(ContactResponse { received: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WebError;

    fn request(name: &str, email: &str, message: &str) -> Json<ContactRequest> {
        Json(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: message.to_string(),
        })
    }

    #[tokio::test]
    async fn test_valid_contact_is_received() {
        let Json(response) = contact_api(request("Ada", "ada@example.com", "Hello"))
            .await
            .unwrap();
        assert!(response.received);
    }

    #[tokio::test]
    async fn test_invalid_contact_is_rejected() {
        for (name, email, message) in [
            ("", "ada@example.com", "Hello"),
            ("Ada", "not-an-email", "Hello"),
            ("Ada", "ada@example.com", "   "),
        ] {
            let err = contact_api(request(name, email, message)).await.unwrap_err();
            assert!(matches!(err, WebError::Validation(_)));
        }
    }
}
