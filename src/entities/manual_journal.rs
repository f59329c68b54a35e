use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{
    Addressable, Creatable, Resource, WHERE_ORDER,
    line_item::{LineAmountType, Tracking},
};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ManualJournalStatus {
    Draft,
    Posted,
    Deleted,
    Voided,
}

/// A debit (positive) or credit (negative) against one account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManualJournalLine {
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub tax_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Tracking::is_empty")]
    pub tracking: Tracking,
}

impl ManualJournalLine {
    #[must_use]
    pub fn new(account_code: impl Into<String>, line_amount: Decimal) -> Self {
        Self {
            account_code: Some(account_code.into()),
            line_amount: Some(line_amount),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualJournalLines {
    #[serde(rename = "JournalLine", default)]
    pub items: Vec<ManualJournalLine>,
}

impl ManualJournalLines {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ManualJournalLine>> for ManualJournalLines {
    fn from(items: Vec<ManualJournalLine>) -> Self {
        Self { items }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManualJournal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    #[serde(default, skip_serializing_if = "ManualJournalLines::is_empty")]
    pub journal_lines: ManualJournalLines,
    #[serde(
        default,
        with = "xero_datetime_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<PrimitiveDateTime>,
    #[serde(
        default,
        deserialize_with = "enum_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_amount_types: Option<LineAmountType>,
    #[serde(
        default,
        deserialize_with = "enum_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<ManualJournalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_on_cash_basis_reports: Option<bool>,
    #[serde(
        rename = "ManualJournalID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub manual_journal_id: Option<Uuid>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        deserialize_with = "xero_datetime_format_option::deserialize",
        skip_serializing
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for ManualJournal {
    const ELEMENT: &'static str = "ManualJournal";
    const COLLECTION: &'static str = "ManualJournals";
    const PATH: &'static str = "ManualJournals";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for ManualJournal {}
impl Creatable for ManualJournal {}
