use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{Addressable, Resource, WHERE_ORDER};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

/// `<Type>` of an account.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Bank,
    Current,
    #[serde(rename = "CURRLIAB")]
    CurrentLiability,
    #[serde(rename = "DEPRECIATN")]
    Depreciation,
    #[serde(rename = "DIRECTCOSTS")]
    DirectCosts,
    Equity,
    Expense,
    Fixed,
    Inventory,
    Liability,
    #[serde(rename = "NONCURRENT")]
    NonCurrent,
    #[serde(rename = "OTHERINCOME")]
    OtherIncome,
    Overheads,
    Prepayment,
    Revenue,
    Sales,
    #[serde(rename = "TERMLIAB")]
    TermLiability,
    #[serde(rename = "PAYGLIABILITY")]
    PaygLiability,
    #[serde(rename = "SUPERANNUATIONEXPENSE")]
    SuperannuationExpense,
    #[serde(rename = "SUPERANNUATIONLIABILITY")]
    SuperannuationLiability,
    #[serde(rename = "WAGESEXPENSE")]
    WagesExpense,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountStatus {
    Active,
    Archived,
}

/// Computed by Xero from the account type.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountClass {
    Asset,
    Equity,
    Expense,
    Liability,
    Revenue,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankAccountType {
    Bank,
    #[serde(rename = "CREDITCARD")]
    CreditCard,
    #[serde(rename = "PAYPAL")]
    PayPal,
}

/// An entry in the chart of accounts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    #[serde(rename = "AccountID", default, deserialize_with = "empty_string_as_none")]
    pub account_id: Option<Uuid>,

    /// Customer defined alpha numeric account code. System accounts may not
    /// have one.
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "Type", default, deserialize_with = "enum_or_none")]
    pub account_type: Option<AccountType>,

    #[serde(default, deserialize_with = "enum_or_none")]
    pub status: Option<AccountStatus>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tax_type: Option<String>,

    #[serde(default, deserialize_with = "enum_or_none")]
    pub class: Option<AccountClass>,

    #[serde(default)]
    pub system_account: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub enable_payments_to_account: Option<bool>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub show_in_expense_claims: Option<bool>,

    #[serde(default)]
    pub bank_account_number: Option<String>,

    /// Only set for `BANK` accounts; others carry an empty element.
    #[serde(default, deserialize_with = "enum_or_none")]
    pub bank_account_type: Option<BankAccountType>,

    #[serde(default)]
    pub currency_code: Option<String>,

    #[serde(default)]
    pub reporting_code: Option<String>,

    #[serde(default)]
    pub reporting_code_name: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub has_attachments: Option<bool>,

    #[serde(
        rename = "UpdatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for Account {
    const ELEMENT: &'static str = "Account";
    const COLLECTION: &'static str = "Accounts";
    const PATH: &'static str = "Accounts";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for Account {}

/// Reference to an account from another document, e.g. the bank account of a
/// bank transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountRef {
    #[serde(
        rename = "AccountID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AccountRef {
    #[must_use]
    pub fn by_id(account_id: Uuid) -> Self {
        Self {
            account_id: Some(account_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn decodes_a_bank_account() {
        let xml = r"<Account>
  <AccountID>ceef66a5-a545-413b-9312-78a53caadbc4</AccountID>
  <Code>090</Code>
  <Name>Business Bank Account</Name>
  <Status>ACTIVE</Status>
  <Type>BANK</Type>
  <TaxType>NONE</TaxType>
  <Class>ASSET</Class>
  <EnablePaymentsToAccount>false</EnablePaymentsToAccount>
  <ShowInExpenseClaims>false</ShowInExpenseClaims>
  <BankAccountNumber>0908007006543</BankAccountNumber>
  <BankAccountType>BANK</BankAccountType>
  <CurrencyCode>NZD</CurrencyCode>
  <ReportingCode>ASS</ReportingCode>
  <HasAttachments>false</HasAttachments>
  <UpdatedDateUTC>2014-04-05T17:35:20.94</UpdatedDateUTC>
</Account>";

        let account: Account = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(account.account_type, Some(AccountType::Bank));
        assert_eq!(account.class, Some(AccountClass::Asset));
        assert_eq!(account.bank_account_type, Some(BankAccountType::Bank));
        assert_eq!(account.enable_payments_to_account, Some(false));
        assert_eq!(
            account.updated_date_utc,
            Some(datetime!(2014-04-05 17:35:20.94))
        );
    }

    #[test]
    fn non_bank_accounts_have_no_bank_type() {
        let xml = "<Account><Code>200</Code><Type>REVENUE</Type><BankAccountType /></Account>";
        let account: Account = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(account.account_type, Some(AccountType::Revenue));
        assert_eq!(account.bank_account_type, None);
    }
}
