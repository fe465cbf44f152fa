//! Contact-form delivery through the EmailJS REST API.
//!
//! The three credential strings are baked in at build time (the same
//! lifecycle as Vite-style `VITE_*` variables): set `EMAILJS_SERVICE_ID`,
//! `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY` in the environment when
//! compiling the WASM bundle. Missing or placeholder values are a detectable
//! configuration error surfaced to the user before any send is attempted.

use serde::Serialize;
use thiserror::Error;

const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Address the contact form delivers to.
pub const OWNER_EMAIL: &str = "narayaaana11@gmail.com";

const DEFAULT_SUBJECT: &str = "Contact Form Submission";

const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

// Values shipped by the provider's setup docs; treat them as absent.
const PLACEHOLDERS: [&str; 3] = ["your_service_id", "your_template_id", "your_public_key"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("email delivery is not configured (missing {})", .0.join(", "))]
    Missing(Vec<&'static str>),
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("email delivery request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Reads the delivery credentials baked in at compile time.
pub fn config_from_build_env() -> Result<EmailConfig, ConfigError> {
    validate_config(
        option_env!("EMAILJS_SERVICE_ID"),
        option_env!("EMAILJS_TEMPLATE_ID"),
        option_env!("EMAILJS_PUBLIC_KEY"),
    )
}

fn is_configured(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.is_empty() && !PLACEHOLDERS.contains(&v),
        None => false,
    }
}

fn validate_config(
    service_id: Option<&str>,
    template_id: Option<&str>,
    public_key: Option<&str>,
) -> Result<EmailConfig, ConfigError> {
    let mut missing = Vec::new();
    if !is_configured(service_id) {
        missing.push(SERVICE_ID_VAR);
    }
    if !is_configured(template_id) {
        missing.push(TEMPLATE_ID_VAR);
    }
    if !is_configured(public_key) {
        missing.push(PUBLIC_KEY_VAR);
    }
    if !missing.is_empty() {
        return Err(ConfigError::Missing(missing));
    }
    Ok(EmailConfig {
        service_id: service_id.unwrap_or_default().to_string(),
        template_id: template_id.unwrap_or_default().to_string(),
        public_key: public_key.unwrap_or_default().to_string(),
    })
}

/// Payload handed to the provider-side template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        let subject = if subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            subject
        };
        TemplateParams {
            from_name: name,
            from_email: email,
            subject,
            message,
            to_email: OWNER_EMAIL.to_string(),
        }
    }
}

/// The submit control is enabled iff these three fields are filled in;
/// subject is optional.
pub fn is_submittable(name: &str, email: &str, message: &str) -> bool {
    !name.is_empty() && !email.is_empty() && !message.is_empty()
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends one message through EmailJS. Best effort: any non-2xx response or
/// transport failure is reported as a [`DeliveryError`] and the caller
/// decides what to tell the user. The response body is not interpreted.
pub async fn send(config: &EmailConfig, params: &TemplateParams) -> Result<(), DeliveryError> {
    let request = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: params,
    };
    reqwest::Client::new()
        .post(SEND_ENDPOINT)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_config_validates() {
        let config = validate_config(Some("service_abc"), Some("template_xyz"), Some("key_123"))
            .expect("real values should validate");
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.template_id, "template_xyz");
        assert_eq!(config.public_key, "key_123");
    }

    #[test]
    fn missing_values_are_named() {
        let err = validate_config(None, Some("template_xyz"), None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec![SERVICE_ID_VAR, PUBLIC_KEY_VAR])
        );
    }

    #[test]
    fn placeholder_values_count_as_missing() {
        let err = validate_config(
            Some("your_service_id"),
            Some("your_template_id"),
            Some("your_public_key"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec![SERVICE_ID_VAR, TEMPLATE_ID_VAR, PUBLIC_KEY_VAR])
        );
    }

    #[test]
    fn empty_values_count_as_missing() {
        let err = validate_config(Some(""), Some("t"), Some("k")).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec![SERVICE_ID_VAR]));
    }

    #[test]
    fn config_error_message_lists_variables() {
        let err = validate_config(None, None, Some("k")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "email delivery is not configured (missing EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID)"
        );
    }

    #[test]
    fn blank_subject_gets_a_default() {
        let params = TemplateParams::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            String::new(),
            "hello".to_string(),
        );
        assert_eq!(params.subject, DEFAULT_SUBJECT);
        assert_eq!(params.to_email, OWNER_EMAIL);
    }

    #[test]
    fn provided_subject_is_preserved() {
        let params = TemplateParams::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Job opportunity".to_string(),
            "hello".to_string(),
        );
        assert_eq!(params.subject, "Job opportunity");
    }

    #[test]
    fn submit_requires_name_email_and_message() {
        assert!(is_submittable("A", "a@b.com", "hi"));
        assert!(!is_submittable("A", "", "hi"));
        assert!(!is_submittable("", "a@b.com", "hi"));
        assert!(!is_submittable("A", "a@b.com", ""));
        // subject is not part of the predicate at all
    }

    #[test]
    fn send_request_serializes_with_provider_field_names() {
        let params = TemplateParams::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            String::new(),
            "hello".to_string(),
        );
        let request = SendRequest {
            service_id: "s",
            template_id: "t",
            user_id: "k",
            template_params: &params,
        };
        let value = serde_json::to_value(&request).expect("serializable");
        assert_eq!(value["service_id"], "s");
        assert_eq!(value["user_id"], "k");
        assert_eq!(value["template_params"]["from_name"], "Ada");
        assert_eq!(value["template_params"]["to_email"], OWNER_EMAIL);
    }
}
