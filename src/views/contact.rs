use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::submission::fields::{EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD, PHONE_FIELD};

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    submit_path: &'static str,
    name_field: &'static str,
    email_field: &'static str,
    phone_field: &'static str,
    message_field: &'static str,
}

pub async fn contact_page() -> impl IntoResponse {
    let template = ContactTemplate {
        submit_path: "/api/submit-form",
        name_field: NAME_FIELD,
        email_field: EMAIL_FIELD,
        phone_field: PHONE_FIELD,
        message_field: MESSAGE_FIELD,
    };
    Html(template.render().unwrap_or_default())
}
