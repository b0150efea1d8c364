//! Lead capture: form validation, course picker, submission.

mod picker;
mod submit;
mod validate;

pub use picker::pick_courses;
pub use submit::{
    ENROLL_FAILED, ENROLL_OK, NEWSLETTER_EMPTY, NEWSLETTER_FAILED, NEWSLETTER_OK, submit_enrollment,
    subscribe_newsletter,
};
pub use validate::{
    EnrollmentForm, INVALID_EMAIL, INVALID_INDIAN_PHONE, INVALID_PHONE, NO_COURSE, TERMS_REQUIRED,
    is_valid_email, local_number, validate_phone,
};
