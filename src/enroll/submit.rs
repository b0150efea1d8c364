//! Enrollment and newsletter submission.

use crate::api::Cms;
use crate::error::{AppError, Result};
use crate::models::EnrollmentRequest;

pub const ENROLL_FAILED: &str = "Form submission failed";
pub const ENROLL_OK: &str = "Demo booked successfully!";
pub const NEWSLETTER_EMPTY: &str = "Please enter an email";
pub const NEWSLETTER_OK: &str = "Thank you! You will be contacted soon.";
pub const NEWSLETTER_FAILED: &str = "Failed to save email";

/// Name recorded for newsletter sign-ups.
const NEWSLETTER_NAME: &str = "From Footer";
const NEWSLETTER_PAGE: &str = "footer";

/// Forward a validated enrollment. Returns the message to show.
pub async fn submit_enrollment(cms: &Cms, request: &EnrollmentRequest) -> Result<String> {
    match cms.enroll(request).await {
        Ok(reply) => {
            log::info!("Enrollment accepted from page '{}'", request.page);
            Ok(reply.message.unwrap_or_else(|| ENROLL_OK.to_string()))
        }
        Err(e) => {
            log::warn!("Enrollment rejected: {e}");
            Err(AppError::submission(ENROLL_FAILED))
        }
    }
}

/// Sign `email` up through the enrollment endpoint.
///
/// Only an explicit `success: true` counts; anything else surfaces the
/// backend's message.
pub async fn subscribe_newsletter(cms: &Cms, email: &str, phone: &str) -> Result<String> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::validation(NEWSLETTER_EMPTY));
    }

    let request = EnrollmentRequest {
        name: NEWSLETTER_NAME.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        courses: Vec::new(),
        page: NEWSLETTER_PAGE.to_string(),
    };

    let reply = cms.enroll(&request).await.map_err(|e| {
        log::warn!("Newsletter sign-up failed: {e}");
        match e {
            AppError::Status { body, .. } if !body.trim().is_empty() => AppError::submission(body),
            AppError::Status { status, .. } => {
                AppError::submission(format!("Request failed: {status}"))
            }
            _ => AppError::submission("Submission failed"),
        }
    })?;

    if reply.success == Some(true) {
        Ok(NEWSLETTER_OK.to_string())
    } else {
        Err(AppError::submission(
            reply.message.unwrap_or_else(|| NEWSLETTER_FAILED.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::memory::MemorySource;

    fn request() -> EnrollmentRequest {
        EnrollmentRequest {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: "+91 9876543210".into(),
            courses: vec![1],
            page: "home".into(),
        }
    }

    #[tokio::test]
    async fn test_enrollment_message_default() {
        let cms = Cms::new(Arc::new(MemorySource::new().with("/enroll", json!({}))));
        assert_eq!(submit_enrollment(&cms, &request()).await.unwrap(), ENROLL_OK);
    }

    #[tokio::test]
    async fn test_enrollment_uses_backend_message() {
        let cms = Cms::new(Arc::new(
            MemorySource::new().with("/enroll", json!({"message": "See you soon"})),
        ));
        assert_eq!(
            submit_enrollment(&cms, &request()).await.unwrap(),
            "See you soon"
        );
    }

    #[tokio::test]
    async fn test_enrollment_non_ok_status() {
        let cms = Cms::new(Arc::new(MemorySource::new().with_status("/enroll", 422)));
        let err = submit_enrollment(&cms, &request()).await.unwrap_err();
        assert_eq!(err.user_message(), ENROLL_FAILED);
    }

    #[tokio::test]
    async fn test_newsletter_requires_email() {
        let source = MemorySource::new();
        let cms = Cms::new(Arc::new(source.clone()));
        let err = subscribe_newsletter(&cms, "  ", "+91 9999999999")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), NEWSLETTER_EMPTY);
        assert!(source.posted().is_empty());
    }

    #[tokio::test]
    async fn test_newsletter_success_flag() {
        let source = MemorySource::new().with("/enroll", json!({"success": true}));
        let cms = Cms::new(Arc::new(source.clone()));
        let msg = subscribe_newsletter(&cms, "me@example.com", "+91 9999999999")
            .await
            .unwrap();
        assert_eq!(msg, NEWSLETTER_OK);

        let posted = source.posted();
        assert_eq!(posted[0].1["name"], "From Footer");
        assert_eq!(posted[0].1["page"], "footer");
        assert_eq!(posted[0].1["phone"], "+91 9999999999");
    }

    #[tokio::test]
    async fn test_newsletter_without_success_fails() {
        let cms = Cms::new(Arc::new(
            MemorySource::new().with("/enroll", json!({"message": "Already subscribed"})),
        ));
        let err = subscribe_newsletter(&cms, "me@example.com", "x").await.unwrap_err();
        assert_eq!(err.user_message(), "Already subscribed");

        let cms = Cms::new(Arc::new(
            MemorySource::new().with("/enroll", json!({"success": false})),
        ));
        let err = subscribe_newsletter(&cms, "me@example.com", "x").await.unwrap_err();
        assert_eq!(err.user_message(), NEWSLETTER_FAILED);
    }
}
