use serde::Deserialize;
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::Resource;
use crate::utils::{date_format::xero_datetime_format_option, serde_helpers::empty_string_as_none};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrandingTheme {
    #[serde(
        rename = "BrandingThemeID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub branding_theme_id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort_order: Option<i32>,
    #[serde(
        rename = "CreatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub created_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for BrandingTheme {
    const ELEMENT: &'static str = "BrandingTheme";
    const COLLECTION: &'static str = "BrandingThemes";
    const PATH: &'static str = "BrandingThemes";
    const QUERYABLE: &'static [&'static str] = &["Name", "sortOrder", "CreatedDateUTC"];
}
