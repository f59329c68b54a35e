use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Addressable, Resource, WHERE_ORDER};
use crate::utils::serde_helpers::{empty_string_as_none, enum_or_none};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrackingStatus {
    Active,
    Archived,
    Deleted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingOption {
    #[serde(
        rename = "TrackingOptionID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub tracking_option_id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub status: Option<TrackingStatus>,
}

/// `<Options><Option/>…</Options>`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TrackingOptions {
    #[serde(rename = "Option", default)]
    pub items: Vec<TrackingOption>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingCategory {
    #[serde(
        rename = "TrackingCategoryID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub tracking_category_id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub status: Option<TrackingStatus>,
    #[serde(default)]
    pub options: TrackingOptions,
}

impl Resource for TrackingCategory {
    const ELEMENT: &'static str = "TrackingCategory";
    const COLLECTION: &'static str = "TrackingCategories";
    const PATH: &'static str = "TrackingCategories";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
}

impl Addressable for TrackingCategory {}
