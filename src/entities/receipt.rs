use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{
    Addressable, Creatable, Resource, WHERE_ORDER,
    contact::ContactRef,
    line_item::{LineAmountType, LineItems},
    user::UserRef,
};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReceiptStatus {
    Draft,
    Submitted,
    Authorised,
    Declined,
    Voided,
}

/// A draft expense receipt, later gathered into an expense claim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Receipt {
    #[serde(
        default,
        with = "xero_datetime_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<PrimitiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactRef>,
    #[serde(default, skip_serializing_if = "LineItems::is_empty")]
    pub line_items: LineItems,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(
        default,
        deserialize_with = "enum_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_amount_types: Option<LineAmountType>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_total: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_tax: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<Decimal>,
    #[serde(
        rename = "ReceiptID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub receipt_id: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "enum_or_none",
        skip_serializing
    )]
    pub status: Option<ReceiptStatus>,
    #[serde(default, skip_serializing)]
    pub receipt_number: Option<String>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        deserialize_with = "xero_datetime_format_option::deserialize",
        skip_serializing
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for Receipt {
    const ELEMENT: &'static str = "Receipt";
    const COLLECTION: &'static str = "Receipts";
    const PATH: &'static str = "Receipts";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for Receipt {}
impl Creatable for Receipt {}
