use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::serde_helpers::empty_string_as_none;

/// How line amounts relate to tax on a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineAmountType {
    Exclusive,
    Inclusive,
    NoTax,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingSummary {
    #[serde(
        rename = "TrackingCategoryID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

/// `<Tracking><TrackingCategory/>…</Tracking>`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracking {
    #[serde(rename = "TrackingCategory", default)]
    pub categories: Vec<TrackingSummary>,
}

impl Tracking {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineItem {
    #[serde(
        rename = "LineItemID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_item_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub tax_amount: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_amount: Option<Decimal>,
    /// Percentage discount, only honoured on sales documents.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Tracking::is_empty")]
    pub tracking: Tracking,
}

impl LineItem {
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_amount: Decimal,
        account_code: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            quantity: Some(quantity),
            unit_amount: Some(unit_amount),
            account_code: Some(account_code.into()),
            ..Self::default()
        }
    }
}

/// `<LineItems><LineItem/>…</LineItems>`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItems {
    #[serde(rename = "LineItem", default)]
    pub items: Vec<LineItem>,
}

impl LineItems {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<LineItem>> for LineItems {
    fn from(items: Vec<LineItem>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn unset_fields_are_not_written() {
        let xml = quick_xml::se::to_string_with_root(
            "LineItem",
            &LineItem::new("Consulting", dec!(2), dec!(150.00), "200"),
        )
        .unwrap();
        assert_eq!(
            xml,
            "<LineItem><Description>Consulting</Description><Quantity>2</Quantity><UnitAmount>150.00</UnitAmount><AccountCode>200</AccountCode></LineItem>"
        );
    }

    #[test]
    fn nested_items_and_tracking_decode() {
        let xml = r#"<LineItems>
  <LineItem>
    <Description>Consulting</Description>
    <Quantity>2.0000</Quantity>
    <UnitAmount>150.00</UnitAmount>
    <TaxAmount />
    <LineItemID>b1c9e4a4-3c2a-4f8e-9a7e-1f2d8a0f5b11</LineItemID>
    <Tracking>
      <TrackingCategory>
        <Name>Region</Name>
        <Option>North</Option>
      </TrackingCategory>
    </Tracking>
  </LineItem>
  <LineItem>
    <Description>Travel</Description>
  </LineItem>
</LineItems>"#;

        let items: LineItems = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(items.items.len(), 2);
        assert_eq!(items.items[0].quantity, Some(dec!(2)));
        assert_eq!(items.items[0].tax_amount, None);
        assert_eq!(
            items.items[0].tracking.categories[0].option.as_deref(),
            Some("North")
        );
        assert!(items.items[1].tracking.is_empty());
    }
}
