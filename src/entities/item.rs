use rust_decimal::Decimal;
use serde::Deserialize;
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{Addressable, Resource, WHERE_ORDER};
use crate::utils::{date_format::xero_datetime_format_option, serde_helpers::empty_string_as_none};

/// Pricing used when buying or selling an item
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeDetails {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit_price: Option<Decimal>,

    #[serde(default)]
    pub account_code: Option<String>,

    /// Cost of goods sold account, tracked inventory only
    #[serde(rename = "COGSAccountCode", default)]
    pub cogs_account_code: Option<String>,

    #[serde(default)]
    pub tax_type: Option<String>,
}

/// Represents an inventory item or service
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "ItemID", default, deserialize_with = "empty_string_as_none")]
    pub item_id: Option<Uuid>,

    /// User-defined item code (unique)
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub purchase_description: Option<String>,

    #[serde(default)]
    pub purchase_details: Option<TradeDetails>,

    #[serde(default)]
    pub sales_details: Option<TradeDetails>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_tracked_as_inventory: Option<bool>,

    #[serde(default)]
    pub inventory_asset_account_code: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total_cost_pool: Option<Decimal>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub quantity_on_hand: Option<Decimal>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_sold: Option<bool>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_purchased: Option<bool>,

    #[serde(
        rename = "UpdatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Resource for Item {
    const ELEMENT: &'static str = "Item";
    const COLLECTION: &'static str = "Items";
    const PATH: &'static str = "Items";
    const QUERYABLE: &'static [&'static str] = WHERE_ORDER;
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for Item {}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn purchase_and_sales_details_decode() {
        let xml = r"<Item>
  <ItemID>9a59ea90-942e-484d-9b71-d00ab607e03b</ItemID>
  <Code>Merino-2011-LG</Code>
  <Description>2011 Merino Sweater - LARGE</Description>
  <PurchaseDetails>
    <UnitPrice>149.0000</UnitPrice>
    <COGSAccountCode>310</COGSAccountCode>
  </PurchaseDetails>
  <SalesDetails>
    <UnitPrice>299.0000</UnitPrice>
    <AccountCode>200</AccountCode>
    <TaxType>OUTPUT2</TaxType>
  </SalesDetails>
  <IsTrackedAsInventory>true</IsTrackedAsInventory>
  <QuantityOnHand />
</Item>";

        let item: Item = quick_xml::de::from_str(xml).unwrap();
        let purchase = item.purchase_details.unwrap();
        assert_eq!(purchase.unit_price, Some(dec!(149)));
        assert_eq!(purchase.cogs_account_code.as_deref(), Some("310"));
        assert_eq!(item.sales_details.unwrap().tax_type.as_deref(), Some("OUTPUT2"));
        assert_eq!(item.is_tracked_as_inventory, Some(true));
        assert_eq!(item.quantity_on_hand, None);
    }
}
