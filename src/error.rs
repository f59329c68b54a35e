use std::borrow::Cow;
use std::sync::LazyLock;

use miette::Diagnostic;
use regex::Regex;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing_error::SpanTrace;

use crate::utils::serde_helpers::empty_string_as_none;

/// Boxed source error carried by codec failures, so any [`Codec`](crate::codec::Codec)
/// implementation can report through the same variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// Non-greedy so that `<Message>A</Message><Message>B</Message>` on one line
// yields two matches.
static MESSAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("<Message>(.*?)</Message>").expect("message pattern is a valid regex")
});

/// The structured part of an `<ApiException>` error document.
///
/// Validation failures nest further `<Message>` elements under polymorphic
/// `xsi:type` elements which are not modelled here; those are recovered by
/// scanning the raw body instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiException {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub error_number: Option<u32>,
    #[serde(default, rename = "Type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Failures while loading the RSA private key used for request signing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrivateKeyError {
    #[error("could not read private key")]
    Io(#[from] std::io::Error),

    #[error("PKCS#1 key error")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    /// Returned when the key parses neither as PKCS#1 nor as PKCS#8.
    #[error("PKCS#8 key error")]
    Pkcs8(#[from] rsa::pkcs8::Error),
}

/// Errors that can occur when interacting with the Xero API.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid private key: {0}")]
    #[diagnostic(
        code(xero_xml::private_key),
        help("Provide the PEM-encoded RSA private key whose certificate is registered with your Xero application")
    )]
    PrivateKey(#[source] PrivateKeyError),

    #[error("missing configuration: {0} is not set")]
    #[diagnostic(
        code(xero_xml::missing_configuration),
        help("Set the environment variable or construct the client explicitly")
    )]
    MissingConfiguration(&'static str),

    #[error("error making request: {0:?}")]
    #[diagnostic(
        code(xero_xml::request_error),
        help("Check your network connection and Xero API availability")
    )]
    Request(#[source] reqwest::Error),

    /// Any non-200 response. `message` is recovered from the body on a best
    /// effort basis and is absent when the body carried nothing usable.
    #[error("{}", describe_api_error(.status_code, .message))]
    #[diagnostic(
        code(xero_xml::api_error),
        help("Inspect the status code and message returned by the Xero API")
    )]
    Api {
        status_code: StatusCode,
        message: Option<String>,
    },

    /// A 200 response whose body is not the promised envelope.
    #[error("error decoding {entity} response: {source}")]
    #[diagnostic(
        code(xero_xml::deserialization_error),
        help("The API returned data in an unexpected format")
    )]
    Deserialization {
        entity: &'static str,
        source: BoxError,
        response_body: String,
        span_trace: SpanTrace,
    },

    #[error("error encoding {entity} request: {source}")]
    #[diagnostic(
        code(xero_xml::serialization_error),
        help("The request object could not be written as XML")
    )]
    Serialization {
        entity: &'static str,
        source: BoxError,
        span_trace: SpanTrace,
    },

    /// An identifier-scoped query returned more than one element.
    #[error("got multiple results for query: expected at most one {entity}, found {count}")]
    #[diagnostic(
        code(xero_xml::multiple_results),
        help("The Xero API returned several {entity} records for a single identifier")
    )]
    MultipleResults {
        entity: &'static str,
        count: usize,
        span_trace: SpanTrace,
    },

    #[error("endpoint could not be parsed as a URL")]
    #[diagnostic(
        code(xero_xml::invalid_endpoint),
        help("Check that the base URL and resource path are correctly formatted")
    )]
    InvalidEndpoint,

    #[error("{resource} does not accept the `{parameter}` parameter")]
    #[diagnostic(
        code(xero_xml::unsupported_parameter),
        help("Only the filters Xero documents for {resource} can be sent")
    )]
    UnsupportedParameter {
        resource: &'static str,
        parameter: String,
    },

    #[error("error signing request: {0}")]
    #[diagnostic(code(xero_xml::signing_error))]
    Signing(#[source] rsa::signature::Error),

    #[error("error formatting timestamp: {0}")]
    #[diagnostic(code(xero_xml::date_format))]
    DateFormat(#[from] time::error::Format),
}

#[allow(clippy::ref_option)]
fn describe_api_error(status_code: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("{} response: {message}", status_code.as_u16()),
        None => format!("{} response.", status_code.as_u16()),
    }
}

impl Error {
    /// Classifies a non-200 response.
    ///
    /// `exception` is the body parsed as an `<ApiException>`, if that worked.
    /// The body is scanned for `<Message>` elements independently of it.
    #[must_use]
    pub fn from_response(
        status_code: StatusCode,
        exception: Option<&ApiException>,
        body: &str,
    ) -> Self {
        let mut messages = scan_messages(body);
        if messages.is_empty()
            && let Some(message) = exception.and_then(|e| e.message.as_ref())
        {
            messages.push(message.clone());
        }

        let error_number = exception.and_then(|e| e.error_number);
        Self::Api {
            status_code,
            message: compose_message(error_number, &messages),
        }
    }

    /// Builds the error a [`Codec`](crate::codec::Codec) reports for an undecodable 200 body.
    #[must_use]
    pub fn deserialization(
        entity: &'static str,
        response_body: &str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Deserialization {
            entity,
            source: source.into(),
            response_body: response_body.to_string(),
            span_trace: SpanTrace::capture(),
        }
    }

    #[must_use]
    pub fn serialization(entity: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Serialization {
            entity,
            source: source.into(),
            span_trace: SpanTrace::capture(),
        }
    }

    pub(crate) fn multiple_results(entity: &'static str, count: usize) -> Self {
        Self::MultipleResults {
            entity,
            count,
            span_trace: SpanTrace::capture(),
        }
    }

    /// The HTTP status code, for errors that carry one.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            Self::Request(e) => e.status(),
            _ => None,
        }
    }

    /// The message recovered from an error response body.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the caller can reasonably handle this error (retry, report to a
    /// user). Configuration errors and broken response contracts are not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Request(_))
    }

    /// The span trace captured where the error was created, if any.
    #[must_use]
    pub fn span_trace(&self) -> Option<&SpanTrace> {
        match self {
            Self::Deserialization { span_trace, .. }
            | Self::Serialization { span_trace, .. }
            | Self::MultipleResults { span_trace, .. } => Some(span_trace),
            _ => None,
        }
    }
}

/// Every `<Message>` text in the body, in document order.
fn scan_messages(body: &str) -> Vec<String> {
    MESSAGE_PATTERN
        .captures_iter(body)
        .filter_map(|captures| captures.get(1))
        .map(|m| {
            quick_xml::escape::unescape(m.as_str())
                .map_or_else(|_| m.as_str().to_string(), Cow::into_owned)
        })
        .collect()
}

fn compose_message(error_number: Option<u32>, messages: &[String]) -> Option<String> {
    let joined = messages.join(", ");
    match (error_number, joined.is_empty()) {
        (Some(number), false) => Some(format!("Error number {number}. {joined}")),
        (Some(number), true) => Some(format!("Error number {number}.")),
        (None, false) => Some(joined),
        (None, true) => None,
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<PrivateKeyError> for Error {
    fn from(e: PrivateKeyError) -> Self {
        Self::PrivateKey(e)
    }
}

/// Type alias for results from this crate.
///
/// This is already a Miette diagnostic result due to the implementation of
/// the Diagnostic trait for the Error type.
pub type Result<O> = std::result::Result<O, Error>;
