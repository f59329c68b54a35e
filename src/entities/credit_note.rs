use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{
    Addressable, Resource, WHERE_ORDER,
    contact::ContactRef,
    invoice::InvoiceStatus,
    line_item::{LineAmountType, LineItems},
};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditNoteType {
    #[serde(rename = "ACCPAYCREDIT")]
    AccountsPayable,
    #[serde(rename = "ACCRECCREDIT")]
    AccountsReceivable,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditNote {
    #[serde(rename = "CreditNoteID", default, deserialize_with = "empty_string_as_none")]
    pub credit_note_id: Option<Uuid>,
    #[serde(default)]
    pub credit_note_number: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "enum_or_none")]
    pub credit_note_type: Option<CreditNoteType>,
    #[serde(default)]
    pub contact: Option<ContactRef>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub date: Option<PrimitiveDateTime>,
    /// Credit notes share the invoice life cycle.
    #[serde(default, deserialize_with = "enum_or_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub line_amount_types: Option<LineAmountType>,
    #[serde(default)]
    pub line_items: LineItems,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sub_total: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total_tax: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub remaining_credit: Option<Decimal>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for CreditNote {
    const ELEMENT: &'static str = "CreditNote";
    const COLLECTION: &'static str = "CreditNotes";
    const PATH: &'static str = "CreditNotes";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for CreditNote {}
