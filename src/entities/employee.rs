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
pub enum EmployeeStatus {
    Active,
    Archived,
    #[serde(rename = "GDPRREQUEST")]
    GdprRequest,
}

/// An employee as known to the accounting API. Payroll details live in the
/// separate payroll APIs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    #[serde(rename = "EmployeeID", default, deserialize_with = "empty_string_as_none")]
    pub employee_id: Option<Uuid>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub external_link: Option<ExternalLink>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalLink {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Employee {
    const ELEMENT: &'static str = "Employee";
    const COLLECTION: &'static str = "Employees";
    const PATH: &'static str = "Employees";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for Employee {}
