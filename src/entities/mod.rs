use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

pub mod account;
pub mod bank_transaction;
pub mod bank_transfer;
pub mod branding_theme;
pub mod contact;
pub mod credit_note;
pub mod currency;
pub mod employee;
pub mod expense_claim;
pub mod invoice;
pub mod item;
pub mod journal;
pub mod line_item;
pub mod manual_journal;
pub mod organisation;
pub mod payment;
pub mod receipt;
pub mod repeating_invoice;
pub mod tax_rate;
pub mod tracking_category;
pub mod user;

/// Describes one business entity exposed by the API: where it lives, what it
/// is called on the wire, and which list filters it accepts.
///
/// A single generic read/write implementation is driven by these constants,
/// see [`ResourceApi`](crate::client::ResourceApi).
pub trait Resource: DeserializeOwned + fmt::Debug + Send + Sync {
    /// Element name of one record, e.g. `Invoice`.
    const ELEMENT: &'static str;

    /// Element name of the collection inside a `<Response>` and of the bulk
    /// write wrapper, e.g. `Invoices`.
    const COLLECTION: &'static str;

    /// Path below the API base URL.
    const PATH: &'static str;

    /// Query keys accepted on list requests, with their exact casing.
    const QUERYABLE: &'static [&'static str] = &[];

    /// Whether list requests honour `If-Modified-Since`.
    const SUPPORTS_MODIFIED_AFTER: bool = false;
}

/// Records that can be fetched individually at `PATH/{id}`.
pub trait Addressable: Resource {}

/// Records that can be created with a `PUT`.
pub trait Creatable: Resource + Serialize {}

/// Records that can be updated with a `POST`.
pub trait Updatable: Resource + Serialize {}

pub(crate) const WHERE_ORDER: &[&str] = &["Where", "order"];

/// Reduces the collection returned by an identifier-scoped query.
///
/// Such queries return at most one record; anything more means the API broke
/// that contract and is reported as [`Error::MultipleResults`].
pub fn single_result<T>(mut items: Vec<T>, entity: &'static str) -> Result<Option<T>> {
    match items.len() {
        0 => Ok(None),
        1 => Ok(items.pop()),
        count => Err(Error::multiple_results(entity, count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_reduces_to_none() {
        assert_eq!(single_result(Vec::<u8>::new(), "Invoice").unwrap(), None);
    }

    #[test]
    fn single_element_is_returned() {
        assert_eq!(single_result(vec![7], "Invoice").unwrap(), Some(7));
    }

    #[test]
    fn several_elements_are_an_invariant_violation() {
        let error = single_result(vec![1, 2], "Invoice").unwrap_err();
        assert!(matches!(
            error,
            Error::MultipleResults {
                entity: "Invoice",
                count: 2,
                ..
            }
        ));
        assert!(!error.is_recoverable());
    }
}
