//! Contact Form Component
//!
//! Name, email and message fields with native `required` and email-format
//! validation. No submission target is configured: submitting is a no-op.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

/// A labelled form field
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
}

pub const NAME_FIELD: FieldSpec = FieldSpec {
    id: "name",
    label: "Name",
    input_type: "text",
};

pub const EMAIL_FIELD: FieldSpec = FieldSpec {
    id: "email",
    label: "Email",
    input_type: "email",
};

pub const MESSAGE_FIELD: FieldSpec = FieldSpec {
    id: "message",
    label: "Message",
    input_type: "textarea",
};

#[component]
pub fn ContactForm() -> Element {
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::debug!("Contact form submitted; no submission target configured");
    };
    let message = MESSAGE_FIELD;

    rsx! {
        form { class: "contact-form", onsubmit: on_submit,
            for field in [NAME_FIELD, EMAIL_FIELD] {
                div { key: "{field.id}", class: "form-field",
                    label { class: "form-label", r#for: "{field.id}", "{field.label}" }
                    input {
                        class: "form-input",
                        r#type: "{field.input_type}",
                        id: "{field.id}",
                        name: "{field.id}",
                        required: true,
                    }
                }
            }
            div { class: "form-field",
                label { class: "form-label", r#for: "{message.id}", "{message.label}" }
                textarea {
                    class: "form-input",
                    id: "{message.id}",
                    name: "{message.id}",
                    rows: 4,
                    required: true,
                }
            }
            Button { variant: ButtonVariant::Primary, button_type: "submit".to_string(),
                "Send Message "
                span { class: "send-icon", "\u{27A4}" }
            }
        }
    }
}
