//! Demo-booking form.

use maud::{Markup, html};

use crate::pages::DemoForm;

/// Dial codes offered next to the phone field; the first is the default.
const COUNTRY_CODES: [(&str, &str); 5] = [
    ("+91", "IN +91"),
    ("+1", "US +1"),
    ("+44", "UK +44"),
    ("+61", "AU +61"),
    ("+971", "AE +971"),
];

pub fn demo_form(form: &DemoForm) -> Markup {
    let copy = &form.details;
    html! {
        form.demo-form data-source=(form.source) novalidate {
            h3 { (copy.form_title()) }
            p { (copy.form_subtitle()) }
            label {
                (copy.full_name_label())
                input type="text" name="name" placeholder=(copy.full_name_placeholder()) required;
            }
            label {
                (copy.email_label())
                input type="email" name="email" placeholder=(copy.email_placeholder()) required;
            }
            label {
                (copy.phone_label())
                span.phone {
                    select name="country_code" {
                        @for (code, label) in COUNTRY_CODES {
                            option value=(code) { (label) }
                        }
                    }
                    input type="tel" name="phone" placeholder=(copy.phone_placeholder()) required;
                }
            }
            @if !form.courses.is_empty() {
                fieldset {
                    legend { (copy.course_label()) }
                    input.course-search type="search" placeholder=(copy.course_placeholder())
                        autocomplete="off";
                    div.course-options {
                        @for course in &form.courses {
                            label {
                                input type="checkbox" name="courses" value=(course.id);
                                " " (course.display_title())
                            }
                        }
                    }
                }
            }
            label.terms {
                input type="checkbox" name="terms" checked;
                " " (copy.terms_prefix()) " "
                a href=(copy.terms_link_url()) target="_blank" { (copy.terms_link_text()) }
            }
            button type="submit" { (copy.submit_button_text()) }
            p.form-message role="status" {}
            p.form-footer { (copy.form_footer_text()) }
        }
    }
}
