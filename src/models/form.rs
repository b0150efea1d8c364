//! Lead form copy and enrollment payloads.

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Labels and placeholders of the shared demo-booking form.
///
/// Every field is optional on the wire; accessors supply the default copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDetails {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub form_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub form_subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub full_name_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub full_name_placeholder: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email_placeholder: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone_placeholder: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub course_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub course_placeholder: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub terms_prefix: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub terms_link_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub terms_link_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub submit_button_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub form_footer_text: Option<String>,
}

macro_rules! copy_accessors {
    ($($field:ident => $default:expr),* $(,)?) => {
        impl FormDetails {
            $(
                pub fn $field(&self) -> &str {
                    self.$field.as_deref().unwrap_or($default)
                }
            )*
        }
    };
}

copy_accessors! {
    form_title => "Book Your Free Demo",
    form_subtitle => "Our team will contact you shortly.",
    full_name_label => "Full Name",
    full_name_placeholder => "Enter your full name",
    email_label => "Email Address",
    email_placeholder => "you@example.com",
    phone_label => "Phone Number",
    phone_placeholder => "Enter phone number",
    course_label => "Select Courses",
    course_placeholder => "Search courses...",
    terms_prefix => "I agree to the",
    terms_link_text => "Terms & Conditions",
    terms_link_url => "/terms",
    submit_button_text => "Submit your details",
    form_footer_text => "Your information is safe.",
}

/// Body of `POST /enroll`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<u64>,
    pub page: String,
}

/// Backend reply to an enrollment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub message: Option<String>,
}

/// Outcome returned to the browser by the form endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOutcome {
    pub success: bool,
    pub message: String,
}

impl FormOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
