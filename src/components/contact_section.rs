//! Contact section: click-to-copy email address and the contact form.

use dioxus::prelude::*;
use folio_core::{ContactFields, FormStatus};
use folio_ui::{Button, ButtonVariant};

use crate::context::use_contact_client;

/// How long the "Copied!" tooltip stays up.
const TOOLTIP_DURATION: std::time::Duration = std::time::Duration::from_secs(2);

#[component]
pub fn ContactSection(email: String) -> Element {
    rsx! {
        div { class: "contact-grid",
            CopyEmail { email }
            ContactForm {}
        }
    }
}

/// Email address that copies itself to the clipboard when clicked.
#[component]
fn CopyEmail(email: String) -> Element {
    let mut copied = use_signal(|| false);
    let address = email.clone();

    let copy = move |_| {
        let address = address.clone();
        spawn(async move {
            let result =
                arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(address));
            match result {
                Ok(()) => {
                    copied.set(true);
                    tokio::time::sleep(TOOLTIP_DURATION).await;
                    copied.set(false);
                }
                Err(e) => tracing::error!("Failed to copy email: {}", e),
            }
        });
    };

    rsx! {
        div { class: "contact-info",
            h3 { "Get in touch" }
            p { "Prefer email? Click the address to copy it." }
            button {
                class: "copy-email",
                r#type: "button",
                onclick: copy,
                i { class: "fa-solid fa-envelope" }
                " {email}"
                span {
                    class: if copied() { "copy-tooltip visible" } else { "copy-tooltip" },
                    "Copied!"
                }
            }
        }
    }
}

/// Contact form posting to the configured endpoint.
///
/// Submitting while a request is in flight is ignored.
#[component]
fn ContactForm() -> Element {
    let client = use_contact_client();
    let mut fields = use_signal(ContactFields::default);
    let mut status = use_signal(FormStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status.peek().is_pending() {
            return;
        }
        status.set(FormStatus::Sending);

        let client = client.clone();
        let snapshot = fields.peek().clone();
        spawn(async move {
            let outcome = client.submit(&snapshot).await;
            if outcome == FormStatus::Sent {
                fields.write().reset();
            }
            status.set(outcome);
        });
    };

    let current = status();
    let status_class = format!("form-status {}", current.class());
    let values = fields.read().clone();

    rsx! {
        form { class: "contact-form", onsubmit: submit,
            input {
                r#type: "text",
                name: "name",
                placeholder: "Your name",
                required: true,
                value: "{values.name}",
                oninput: move |evt| fields.write().name = evt.value(),
            }
            input {
                r#type: "email",
                name: "email",
                placeholder: "Your email",
                required: true,
                value: "{values.email}",
                oninput: move |evt| fields.write().email = evt.value(),
            }
            textarea {
                name: "message",
                placeholder: "Your message",
                rows: "6",
                required: true,
                value: "{values.message}",
                oninput: move |evt| fields.write().message = evt.value(),
            }

            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit".to_string(),
                disabled: current.is_pending(),
                "Send Message"
            }

            if current.is_visible() {
                p { id: "form-status", class: status_class, {current.message()} }
            }
        }
    }
}
