// src/enroll/validate.rs

//! Demo-booking form validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::EnrollmentRequest;

pub const INVALID_EMAIL: &str = "Please enter a valid email.";
pub const INVALID_PHONE: &str = "Enter a valid phone number (7–12 digits).";
pub const INVALID_INDIAN_PHONE: &str = "Enter a valid Indian number starting with 6–9.";
pub const NO_COURSE: &str = "Select at least one course.";
pub const TERMS_REQUIRED: &str = "Please accept Terms & Conditions.";

const INDIA: &str = "+91";

static EMAIL_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
static INDIAN_MOBILE_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn email_pattern() -> Option<&'static Regex> {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").ok())
        .as_ref()
}

fn indian_mobile_pattern() -> Option<&'static Regex> {
    INDIAN_MOBILE_PATTERN
        .get_or_init(|| Regex::new(r"^[6-9][0-9]{9}$").ok())
        .as_ref()
}

fn default_country_code() -> String {
    INDIA.to_string()
}

/// Demo-booking form as submitted by the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Phone as typed, with or without the country code
    #[serde(default)]
    pub phone: String,
    /// Dial code, e.g. `+91`
    #[serde(default = "default_country_code")]
    pub country_code: String,
    #[serde(default)]
    pub courses: Vec<u64>,
    /// Consent checkbox; absent means not accepted
    #[serde(default)]
    pub terms: bool,
    /// Page the form was submitted from
    #[serde(default)]
    pub page: String,
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            country_code: default_country_code(),
            courses: Vec::new(),
            terms: false,
            page: String::new(),
        }
    }
}

/// Whether `email` looks like an address.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// Local part of a phone number: digits only, with the country code's
/// digits removed when the number starts with them.
pub fn local_number(phone: &str, country_code: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let code: String = country_code.chars().filter(char::is_ascii_digit).collect();
    match digits.strip_prefix(code.as_str()) {
        Some(rest) if !code.is_empty() => rest.to_string(),
        _ => digits,
    }
}

/// Check a phone number against its country rules.
pub fn validate_phone(phone: &str, country_code: &str) -> Result<String> {
    let local = local_number(phone, country_code);
    if !(7..=12).contains(&local.len()) {
        return Err(AppError::validation(INVALID_PHONE));
    }
    if country_code.trim() == INDIA && !indian_mobile_pattern().is_some_and(|re| re.is_match(&local)) {
        return Err(AppError::validation(INVALID_INDIAN_PHONE));
    }
    Ok(local)
}

impl EnrollmentForm {
    /// Validate in display order and build the backend request.
    ///
    /// `offered_courses` is the number of courses the form listed; a course
    /// is only required when there was something to pick.
    pub fn validate(&self, offered_courses: usize) -> Result<EnrollmentRequest> {
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(AppError::validation(INVALID_EMAIL));
        }

        let local = validate_phone(&self.phone, &self.country_code)?;

        if offered_courses > 0 && self.courses.is_empty() {
            return Err(AppError::validation(NO_COURSE));
        }

        if !self.terms {
            return Err(AppError::validation(TERMS_REQUIRED));
        }

        let code = self.country_code.trim();
        let phone = if code.is_empty() {
            local
        } else {
            format!("{code} {local}")
        };

        Ok(EnrollmentRequest {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            phone,
            courses: self.courses.clone(),
            page: self.page.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> EnrollmentForm {
        EnrollmentForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "+91 98765 43210".into(),
            courses: vec![7],
            terms: true,
            page: "about".into(),
            ..EnrollmentForm::default()
        }
    }

    fn message(form: &EnrollmentForm, offered: usize) -> String {
        form.validate(offered).unwrap_err().user_message()
    }

    #[test]
    fn test_valid_form_builds_request() {
        let req = valid_form().validate(3).unwrap();
        assert_eq!(req.phone, "+91 9876543210");
        assert_eq!(req.courses, vec![7]);
        assert_eq!(req.page, "about");
    }

    #[test]
    fn test_email_checked_first() {
        let form = EnrollmentForm {
            email: "not-an-email".into(),
            phone: "1".into(),
            courses: vec![],
            terms: false,
            ..valid_form()
        };
        assert_eq!(message(&form, 3), INVALID_EMAIL);
    }

    #[test]
    fn test_phone_length() {
        let form = EnrollmentForm {
            phone: "12345".into(),
            country_code: "+1".into(),
            ..valid_form()
        };
        assert_eq!(message(&form, 3), INVALID_PHONE);

        let form = EnrollmentForm {
            phone: "+1 415 555 0100".into(),
            country_code: "+1".into(),
            ..valid_form()
        };
        assert!(form.validate(3).is_ok());
    }

    #[test]
    fn test_indian_numbers_start_with_six_to_nine() {
        let form = EnrollmentForm {
            phone: "5123456789".into(),
            ..valid_form()
        };
        assert_eq!(message(&form, 3), INVALID_INDIAN_PHONE);
    }

    #[test]
    fn test_course_required_only_when_offered() {
        let form = EnrollmentForm {
            courses: vec![],
            ..valid_form()
        };
        assert_eq!(message(&form, 2), NO_COURSE);
        assert!(form.validate(0).is_ok());
    }

    #[test]
    fn test_terms_checked_last() {
        let form = EnrollmentForm {
            terms: false,
            ..valid_form()
        };
        assert_eq!(message(&form, 1), TERMS_REQUIRED);
    }

    #[test]
    fn test_missing_terms_is_not_consent() {
        let form: EnrollmentForm = serde_json::from_value(serde_json::json!({
            "name": "Asha",
            "email": "asha@example.com",
            "phone": "9876543210",
            "courses": [7],
        }))
        .unwrap();
        assert!(!form.terms);
        assert_eq!(form.country_code, "+91");
        assert_eq!(message(&form, 1), TERMS_REQUIRED);
    }

    #[test]
    fn test_local_number_strips_country_code() {
        assert_eq!(local_number("+91-98765-43210", "+91"), "9876543210");
        assert_eq!(local_number("9876543210", "+91"), "9876543210");
        assert_eq!(local_number("(415) 555-0100", ""), "4155550100");
    }
}
