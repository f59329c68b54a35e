use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{Addressable, Resource, WHERE_ORDER, account::AccountRef, invoice::InvoiceRef};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Authorised,
    Deleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    #[serde(rename = "ACCRECPAYMENT")]
    AccountsReceivable,
    #[serde(rename = "ACCPAYPAYMENT")]
    AccountsPayable,
    #[serde(rename = "ARCREDITPAYMENT")]
    ReceivableCredit,
    #[serde(rename = "APCREDITPAYMENT")]
    PayableCredit,
    #[serde(rename = "AROVERPAYMENTPAYMENT")]
    ReceivableOverpayment,
    #[serde(rename = "ARPREPAYMENTPAYMENT")]
    ReceivablePrepayment,
    #[serde(rename = "APPREPAYMENTPAYMENT")]
    PayablePrepayment,
    #[serde(rename = "APOVERPAYMENTPAYMENT")]
    PayableOverpayment,
}

/// A payment applied to an invoice or credit note.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    #[serde(rename = "PaymentID", default, deserialize_with = "empty_string_as_none")]
    pub payment_id: Option<Uuid>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub date: Option<PrimitiveDateTime>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub currency_rate: Option<Decimal>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_reconciled: Option<bool>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(default)]
    pub account: Option<AccountRef>,
    #[serde(default)]
    pub invoice: Option<InvoiceRef>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for Payment {
    const ELEMENT: &'static str = "Payment";
    const COLLECTION: &'static str = "Payments";
    const PATH: &'static str = "Payments";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for Payment {}
