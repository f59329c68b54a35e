//! Sentry integration for xero-xml errors.
//!
//! Only available with the `sentry` feature:
//!
//! ```toml
//! [dependencies]
//! xero-xml = { version = "0.1", features = ["sentry"] }
//! ```

use std::collections::BTreeMap;

use sentry_core::{Breadcrumb, protocol::Value};

use crate::error::Error;

const RESPONSE_PREVIEW_LEN: usize = 500;

impl<'a> From<&'a Error> for Breadcrumb {
    fn from(error: &'a Error) -> Self {
        let (category, message, data) = match error {
            Error::Request(source) => (
                "http.request",
                format!("HTTP request error: {source}"),
                BTreeMap::new(),
            ),

            Error::Api {
                status_code,
                message,
            } => {
                let mut data = BTreeMap::new();
                data.insert("status_code".to_string(), Value::from(status_code.as_u16()));
                if let Some(message) = message {
                    data.insert("message".to_string(), Value::from(message.clone()));
                }
                (
                    "xero.api",
                    format!("Xero API error: {}", status_code.as_u16()),
                    data,
                )
            }

            Error::Deserialization { entity, .. } => {
                let mut data = BTreeMap::new();
                data.insert("entity".to_string(), Value::from(*entity));
                (
                    "http.response",
                    format!("Failed to decode {entity} response"),
                    data,
                )
            }

            Error::Serialization { entity, .. } => {
                let mut data = BTreeMap::new();
                data.insert("entity".to_string(), Value::from(*entity));
                (
                    "xero.validation",
                    format!("Failed to encode {entity} request"),
                    data,
                )
            }

            Error::MultipleResults { entity, count, .. } => {
                let mut data = BTreeMap::new();
                data.insert("entity".to_string(), Value::from(*entity));
                data.insert("count".to_string(), Value::from(*count));
                (
                    "http.response",
                    format!("Multiple {entity} results for a single identifier"),
                    data,
                )
            }

            Error::UnsupportedParameter {
                resource,
                parameter,
            } => {
                let mut data = BTreeMap::new();
                data.insert("resource".to_string(), Value::from(*resource));
                data.insert("parameter".to_string(), Value::from(parameter.clone()));
                (
                    "xero.validation",
                    format!("Unsupported parameter for {resource}"),
                    data,
                )
            }

            Error::PrivateKey(_) | Error::Signing(_) => {
                ("auth", error.to_string(), BTreeMap::new())
            }

            Error::MissingConfiguration(_) | Error::InvalidEndpoint | Error::DateFormat(_) => {
                ("xero.config", error.to_string(), BTreeMap::new())
            }
        };

        Breadcrumb {
            ty: "error".to_string(),
            category: Some(category.to_string()),
            message: Some(message),
            data,
            level: sentry_core::Level::Error,
            ..Default::default()
        }
    }
}

/// Extracts the error's context for use as Sentry extras.
///
/// ```ignore
/// use sentry::configure_scope;
/// use xero_xml::sentry_integration::error_to_sentry_context;
///
/// if let Err(e) = client.invoices().list_all().await {
///     configure_scope(|scope| {
///         for (key, value) in error_to_sentry_context(&e) {
///             scope.set_extra(&key, value);
///         }
///     });
/// }
/// ```
pub fn error_to_sentry_context(error: &Error) -> BTreeMap<String, Value> {
    let mut context = BTreeMap::new();

    if let Some(span_trace) = error.span_trace() {
        context.insert(
            "xero.span_trace".to_string(),
            Value::from(format!("{span_trace}")),
        );
    }

    if let Some(status) = error.status_code() {
        context.insert("xero.status_code".to_string(), Value::from(status.as_u16()));
    }

    if let Some(message) = error.message() {
        context.insert("xero.message".to_string(), Value::from(message));
    }

    if let Error::Deserialization { response_body, .. } = error {
        let preview: String = response_body.chars().take(RESPONSE_PREVIEW_LEN).collect();
        context.insert("xero.response_body".to_string(), Value::from(preview));
    }

    context
}
