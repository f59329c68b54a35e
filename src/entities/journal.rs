use rust_decimal::Decimal;
use serde::Deserialize;
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{Addressable, Resource, account::AccountType};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

/// One posting of a general ledger journal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JournalLine {
    #[serde(rename = "JournalLineID", default, deserialize_with = "empty_string_as_none")]
    pub journal_line_id: Option<Uuid>,
    #[serde(rename = "AccountID", default, deserialize_with = "empty_string_as_none")]
    pub account_id: Option<Uuid>,
    #[serde(default)]
    pub account_code: Option<String>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub net_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub gross_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tax_amount: Option<Decimal>,
    #[serde(default)]
    pub tax_type: Option<String>,
    #[serde(default)]
    pub tax_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct JournalLines {
    #[serde(rename = "JournalLine", default)]
    pub items: Vec<JournalLine>,
}

/// A general ledger journal, generated by Xero for every posted transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Journal {
    #[serde(rename = "JournalID", default, deserialize_with = "empty_string_as_none")]
    pub journal_id: Option<Uuid>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub journal_date: Option<PrimitiveDateTime>,
    /// Sequential, used as the `offset` when paging through journals.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub journal_number: Option<u64>,
    #[serde(
        rename = "CreatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub created_date_utc: Option<PrimitiveDateTime>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(rename = "SourceID", default, deserialize_with = "empty_string_as_none")]
    pub source_id: Option<Uuid>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub journal_lines: JournalLines,
}

impl Resource for Journal {
    const ELEMENT: &'static str = "Journal";
    const COLLECTION: &'static str = "Journals";
    const PATH: &'static str = "Journals";
    const QUERYABLE: &'static [&'static str] = &["offset", "Where", "order"];
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for Journal {}
