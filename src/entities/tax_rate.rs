use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Resource, WHERE_ORDER};
use crate::utils::serde_helpers::{empty_string_as_none, enum_or_none};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxRateStatus {
    Active,
    Deleted,
    Archived,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxComponent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub rate: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_compound: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TaxComponents {
    #[serde(rename = "TaxComponent", default)]
    pub items: Vec<TaxComponent>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxRate {
    #[serde(default)]
    pub name: Option<String>,
    /// The code used on line items, e.g. `OUTPUT2`.
    #[serde(default)]
    pub tax_type: Option<String>,
    #[serde(default)]
    pub tax_components: TaxComponents,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub status: Option<TaxRateStatus>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub can_apply_to_assets: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub can_apply_to_equity: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub can_apply_to_expenses: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub can_apply_to_liabilities: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub can_apply_to_revenue: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub display_tax_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub effective_rate: Option<Decimal>,
}

impl Resource for TaxRate {
    const ELEMENT: &'static str = "TaxRate";
    const COLLECTION: &'static str = "TaxRates";
    const PATH: &'static str = "TaxRates";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
}
