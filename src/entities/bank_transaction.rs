use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{
    Addressable, Creatable, Resource, WHERE_ORDER,
    account::AccountRef,
    contact::ContactRef,
    line_item::{LineAmountType, LineItems},
};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum BankTransactionType {
    Receive,
    Spend,
    ReceiveOverpayment,
    SpendOverpayment,
    ReceivePrepayment,
    SpendPrepayment,
    ReceiveTransfer,
    SpendTransfer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankTransactionStatus {
    Authorised,
    Deleted,
}

/// Money received into or spent from a bank account, outside of invoices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankTransaction {
    #[serde(
        rename = "Type",
        default,
        deserialize_with = "enum_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_type: Option<BankTransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactRef>,
    #[serde(default, skip_serializing_if = "LineItems::is_empty")]
    pub line_items: LineItems,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<AccountRef>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_reconciled: Option<bool>,
    #[serde(
        default,
        with = "xero_datetime_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<PrimitiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub currency_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "enum_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<BankTransactionStatus>,
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
        rename = "BankTransactionID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_transaction_id: Option<Uuid>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        deserialize_with = "xero_datetime_format_option::deserialize",
        skip_serializing
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing
    )]
    pub has_attachments: Option<bool>,
}

impl Resource for BankTransaction {
    const ELEMENT: &'static str = "BankTransaction";
    const COLLECTION: &'static str = "BankTransactions";
    const PATH: &'static str = "BankTransactions";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for BankTransaction {}
impl Creatable for BankTransaction {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_types_round_through_the_wire_names() {
        let transaction = BankTransaction {
            transaction_type: Some(BankTransactionType::SpendOverpayment),
            bank_account: Some(AccountRef::by_code("090")),
            ..BankTransaction::default()
        };
        let xml = quick_xml::se::to_string_with_root("BankTransaction", &transaction).unwrap();
        assert_eq!(
            xml,
            "<BankTransaction><Type>SPEND-OVERPAYMENT</Type><BankAccount><Code>090</Code></BankAccount></BankTransaction>"
        );

        let decoded: BankTransaction = quick_xml::de::from_str(
            "<BankTransaction><Type>RECEIVE-PREPAYMENT</Type><IsReconciled>true</IsReconciled></BankTransaction>",
        )
        .unwrap();
        assert_eq!(
            decoded.transaction_type,
            Some(BankTransactionType::ReceivePrepayment)
        );
        assert_eq!(decoded.is_reconciled, Some(true));
    }
}
