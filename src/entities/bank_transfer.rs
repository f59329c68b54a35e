use rust_decimal::Decimal;
use serde::Deserialize;
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{Resource, account::AccountRef};
use crate::utils::{date_format::xero_datetime_format_option, serde_helpers::empty_string_as_none};

/// A transfer of money between two of the organisation's bank accounts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankTransfer {
    #[serde(
        rename = "BankTransferID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub bank_transfer_id: Option<Uuid>,
    #[serde(default)]
    pub from_bank_account: Option<AccountRef>,
    #[serde(default)]
    pub to_bank_account: Option<AccountRef>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub amount: Option<Decimal>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub date: Option<PrimitiveDateTime>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub currency_rate: Option<Decimal>,
    #[serde(
        rename = "FromBankTransactionID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub from_bank_transaction_id: Option<Uuid>,
    #[serde(
        rename = "ToBankTransactionID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub to_bank_transaction_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub has_attachments: Option<bool>,
    #[serde(
        rename = "CreatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub created_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for BankTransfer {
    const ELEMENT: &'static str = "BankTransfer";
    const COLLECTION: &'static str = "BankTransfers";
    const PATH: &'static str = "BankTransfers";
}
