use serde::Deserialize;

use super::Resource;

/// A currency enabled for the organisation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    /// ISO 4217 code, e.g. `NZD`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Currency {
    const ELEMENT: &'static str = "Currency";
    const COLLECTION: &'static str = "Currencies";
    const PATH: &'static str = "Currencies";
}
