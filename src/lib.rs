//! # xero-xml
//!
//! A client for the Xero accounting API speaking its XML dialect, for private
//! applications authenticating with OAuth 1.0a `RSA-SHA1`.
//!
//! Every call is a single signed round trip. A `200` response is decoded into
//! typed records; any other status becomes [`Error::Api`] carrying whatever
//! error number and messages could be recovered from the body.
//!
//! ```ignore
//! use xero_xml::{Client, Credentials, ListParameters};
//!
//! let client = Client::from_pem_file("privatekey.pem", Credentials::new(key, secret))?;
//! let drafts = client
//!     .invoices()
//!     .list(&ListParameters::builder().with_where(r#"Status=="DRAFT""#))
//!     .await?;
//! ```
//!
//! ## Sentry Integration
//!
//! Errors that indicate a broken response contract carry an async span trace
//! captured where they were created. Install
//! [`ErrorLayer`](tracing_error::ErrorLayer) to populate them:
//!
//! ```ignore
//! use tracing_subscriber::prelude::*;
//! use tracing_error::ErrorLayer;
//!
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .with(ErrorLayer::default())
//!     .with(sentry::integrations::tracing::layer())
//!     .init();
//! ```
//!
//! With the `sentry` feature enabled, [`Error`] converts into a Sentry
//! breadcrumb.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod client;
pub mod codec;
pub mod endpoints;
pub mod entities;
pub mod error;
pub mod oauth;
pub mod parameters;
pub mod utils;

#[cfg(feature = "sentry")]
pub mod sentry_integration;

pub use client::{Client, ResourceApi};
pub use codec::{Codec, Envelope, XmlCodec};
pub use endpoints::XeroEndpoint;
pub use entities::*;
pub use error::{Error, Result};
pub use oauth::{Credentials, RsaSha1Signer, Signer};
pub use parameters::ListParameters;

// Re-export SpanTrace for users who want to inspect it
pub use tracing_error::SpanTrace;
