use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{Addressable, Resource, WHERE_ORDER, user::UserRef};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpenseClaimStatus {
    Submitted,
    Authorised,
    Paid,
    Voided,
    Deleted,
}

/// A receipt included in an expense claim; only its id is listed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimedReceipt {
    #[serde(rename = "ReceiptID", default, deserialize_with = "empty_string_as_none")]
    pub receipt_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ClaimedReceipts {
    #[serde(rename = "Receipt", default)]
    pub items: Vec<ClaimedReceipt>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpenseClaim {
    #[serde(
        rename = "ExpenseClaimID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub expense_claim_id: Option<Uuid>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub status: Option<ExpenseClaimStatus>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub receipts: ClaimedReceipts,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub amount_due: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub amount_paid: Option<Decimal>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub payment_due_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub reporting_date: Option<PrimitiveDateTime>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for ExpenseClaim {
    const ELEMENT: &'static str = "ExpenseClaim";
    const COLLECTION: &'static str = "ExpenseClaims";
    const PATH: &'static str = "ExpenseClaims";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for ExpenseClaim {}
