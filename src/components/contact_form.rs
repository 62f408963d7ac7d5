//! Contact Section
//!
//! Simulated contact form: nothing is sent by the app. A valid form opens a
//! prefilled Gmail compose window in the system browser.

use dioxus::prelude::*;
use folio_core::contact::{
    mailto_compose_url, NOTE_CLEAR_DELAY, OPENING_LABEL, REDIRECT_DELAY, SENT_NOTE,
};
use folio_core::ContactForm;
use folio_ui::{Button, ButtonVariant, Icon};

use crate::context::use_site;

/// Status line under the form
#[derive(Clone, PartialEq, Debug)]
enum FormNote {
    Error(String),
    Sent,
}

fn open_in_browser(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        tracing::warn!(error = %e, "Failed to open browser");
    }
}

#[component]
pub fn ContactSection() -> Element {
    let site = use_site();

    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut note: Signal<Option<FormNote>> = use_signal(|| None);
    let mut opening = use_signal(|| false);

    let recipient = site.read().recipient.clone();
    let mailto = format!("mailto:{}", recipient);
    let mailto_href = mailto.clone();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if opening() {
            return;
        }

        let form = ContactForm::new(email(), subject(), message());
        let compose = match form.validate() {
            Ok(compose) => compose,
            Err(err) => {
                note.set(Some(FormNote::Error(err.to_string())));
                return;
            }
        };
        let url = match compose.compose_url(&site.peek().recipient) {
            Ok(url) => url,
            Err(err) => {
                tracing::error!(error = %err, "Failed to build compose URL");
                return;
            }
        };

        note.set(None);
        opening.set(true);
        spawn(async move {
            tokio::time::sleep(REDIRECT_DELAY).await;
            open_in_browser(url.as_str());

            email.set(String::new());
            subject.set(String::new());
            message.set(String::new());
            opening.set(false);
            note.set(Some(FormNote::Sent));

            tokio::time::sleep(NOTE_CLEAR_DELAY).await;
            if *note.peek() == Some(FormNote::Sent) {
                note.set(None);
            }
        });
    };

    rsx! {
        section { class: "section contact", id: "contact",
            h2 { class: "section-title", "Contact" }

            div { class: "contact-grid",
                div { class: "contact-info",
                    p { "Have a project in mind or want to book a training session? Get in touch." }
                    a {
                        class: "contact-link",
                        href: "{mailto_href}",
                        onclick: move |e| {
                            e.prevent_default();
                            if let Some(url) = mailto_compose_url(&mailto) {
                                open_in_browser(url.as_str());
                            }
                        },
                        Icon { class: "fas fa-envelope" }
                        " {recipient}"
                    }
                }

                form { class: "contact-form", id: "contactForm", onsubmit: on_submit,
                    div { class: "form-group",
                        label { r#for: "email", "Email *" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            placeholder: "you@example.com",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "subject", "Subject" }
                        input {
                            id: "subject",
                            r#type: "text",
                            value: "{subject}",
                            placeholder: "Portfolio Inquiry",
                            oninput: move |e| subject.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "message", "Message *" }
                        textarea {
                            id: "message",
                            rows: "5",
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        disabled: opening(),
                        if opening() {
                            Icon { class: "fas fa-external-link-alt" }
                            " {OPENING_LABEL}"
                        } else {
                            "Send Message "
                            Icon { class: "fas fa-paper-plane" }
                        }
                    }

                    match note() {
                        Some(FormNote::Error(text)) => rsx! {
                            p { class: "form-note error", id: "formNote", "{text}" }
                        },
                        Some(FormNote::Sent) => rsx! {
                            p { class: "form-note", id: "formNote", "✅ {SENT_NOTE}" }
                        },
                        None => rsx! {
                            p { class: "form-note", id: "formNote" }
                        },
                    }
                }
            }
        }
    }
}
