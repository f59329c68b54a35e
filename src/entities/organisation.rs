use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::Resource;
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrganisationType {
    Company,
    Charity,
    #[serde(rename = "CLUBSOCIETY")]
    ClubSociety,
    Partnership,
    Practice,
    Person,
    #[serde(rename = "SOLETRADER")]
    SoleTrader,
    Trust,
}

/// The organisation the credentials are connected to.
///
/// The API returns it as a one element collection; see
/// [`Client::organisation`](crate::Client::organisation).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Organisation {
    #[serde(
        rename = "OrganisationID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub organisation_id: Option<Uuid>,
    #[serde(rename = "APIKey", default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub pays_tax: Option<bool>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub organisation_type: Option<OrganisationType>,
    #[serde(default)]
    pub base_currency: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_demo_company: Option<bool>,
    #[serde(default)]
    pub organisation_status: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub financial_year_end_day: Option<u8>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub financial_year_end_month: Option<u8>,
    #[serde(default)]
    pub sales_tax_basis: Option<String>,
    #[serde(default)]
    pub sales_tax_period: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(
        rename = "CreatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub created_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for Organisation {
    const ELEMENT: &'static str = "Organisation";
    const COLLECTION: &'static str = "Organisations";
    const PATH: &'static str = "Organisation";
}
