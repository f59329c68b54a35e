use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{Addressable, Resource, WHERE_ORDER};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrganisationRole {
    #[serde(rename = "READONLY")]
    ReadOnly,
    #[serde(rename = "INVOICEONLY")]
    InvoiceOnly,
    Standard,
    #[serde(rename = "FINANCIALADVISER")]
    FinancialAdviser,
    #[serde(rename = "MANAGEDCLIENT")]
    ManagedClient,
    #[serde(rename = "CASHBOOKCLIENT")]
    CashbookClient,
}

/// A user of the organisation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "UserID", default, deserialize_with = "empty_string_as_none")]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_subscriber: Option<bool>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub organisation_role: Option<OrganisationRole>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for User {
    const ELEMENT: &'static str = "User";
    const COLLECTION: &'static str = "Users";
    const PATH: &'static str = "Users";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for User {}

/// The user a receipt or expense claim belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRef {
    #[serde(
        rename = "UserID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<Uuid>,
}

impl UserRef {
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}
