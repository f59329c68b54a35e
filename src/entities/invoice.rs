use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{
    Addressable, Creatable, Resource, Updatable, contact::ContactRef,
    line_item::{LineAmountType, LineItems},
};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceType {
    /// A bill from a supplier.
    #[serde(rename = "ACCPAY")]
    AccountsPayable,

    /// A sales invoice.
    #[serde(rename = "ACCREC")]
    AccountsReceivable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Draft,
    Submitted,
    Deleted,
    Authorised,
    Paid,
    Voided,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Invoice {
    #[serde(
        rename = "Type",
        default,
        deserialize_with = "enum_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_type: Option<InvoiceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactRef>,
    #[serde(
        default,
        with = "xero_datetime_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<PrimitiveDateTime>,
    #[serde(
        default,
        with = "xero_datetime_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<PrimitiveDateTime>,
    #[serde(
        default,
        deserialize_with = "enum_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<InvoiceStatus>,
    #[serde(
        default,
        deserialize_with = "enum_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_amount_types: Option<LineAmountType>,
    #[serde(default, skip_serializing_if = "LineItems::is_empty")]
    pub line_items: LineItems,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_total: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_tax: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(
        rename = "InvoiceID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(
        rename = "BrandingThemeID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub branding_theme_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub sent_to_contact: Option<bool>,

    // Read-only totals and bookkeeping, never written back.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing
    )]
    pub amount_due: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing
    )]
    pub amount_paid: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing
    )]
    pub amount_credited: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing
    )]
    pub has_attachments: Option<bool>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        deserialize_with = "xero_datetime_format_option::deserialize",
        skip_serializing
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
}

impl Invoice {
    #[must_use]
    pub fn new(invoice_type: InvoiceType, contact: ContactRef) -> Self {
        Self {
            invoice_type: Some(invoice_type),
            contact: Some(contact),
            ..Self::default()
        }
    }
}

impl Resource for Invoice {
    const ELEMENT: &'static str = "Invoice";
    const COLLECTION: &'static str = "Invoices";
    const PATH: &'static str = "Invoices";
    const QUERYABLE: &'static [&'static str] = &["Where", "order", "page"];
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for Invoice {}
impl Creatable for Invoice {}
impl Updatable for Invoice {}

/// Reference to an invoice, e.g. the one a payment settles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceRef {
    #[serde(
        rename = "InvoiceID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    use super::*;
    use crate::entities::line_item::LineItem;

    #[test]
    fn new_invoice_writes_only_what_was_set() {
        let mut invoice = Invoice::new(
            InvoiceType::AccountsReceivable,
            ContactRef::by_name("ABC Limited"),
        );
        invoice.date = Some(datetime!(2014-04-05 00:00));
        invoice.line_amount_types = Some(LineAmountType::Exclusive);
        invoice.line_items = vec![LineItem::new("Consulting", dec!(1), dec!(100), "200")].into();

        let xml = quick_xml::se::to_string_with_root("Invoice", &invoice).unwrap();
        assert_eq!(
            xml,
            "<Invoice><Type>ACCREC</Type><Contact><Name>ABC Limited</Name></Contact><Date>2014-04-05T00:00:00</Date><LineAmountTypes>Exclusive</LineAmountTypes><LineItems><LineItem><Description>Consulting</Description><Quantity>1</Quantity><UnitAmount>100</UnitAmount><AccountCode>200</AccountCode></LineItem></LineItems></Invoice>"
        );
    }

    #[test]
    fn decodes_a_response_invoice() {
        let xml = r"<Invoice>
  <Type>ACCPAY</Type>
  <Contact>
    <ContactID>bd2270c3-8706-4c11-9cfb-000b551c3f51</ContactID>
    <Name>ABC Limited</Name>
  </Contact>
  <Date>2014-04-05T00:00:00</Date>
  <DueDate>2014-04-20T00:00:00</DueDate>
  <Status>AUTHORISED</Status>
  <LineAmountTypes>Inclusive</LineAmountTypes>
  <LineItems>
    <LineItem><Description>Paper</Description><LineAmount>115.00</LineAmount></LineItem>
  </LineItems>
  <SubTotal>100.00</SubTotal>
  <TotalTax>15.00</TotalTax>
  <Total>115.00</Total>
  <UpdatedDateUTC>2014-04-05T17:35:20.94</UpdatedDateUTC>
  <CurrencyCode>NZD</CurrencyCode>
  <InvoiceID>243216c5-369e-4056-ac67-05388f86dc81</InvoiceID>
  <InvoiceNumber>INV-0001</InvoiceNumber>
  <BrandingThemeID />
  <AmountDue>115.00</AmountDue>
  <AmountPaid>0.00</AmountPaid>
  <HasAttachments>false</HasAttachments>
</Invoice>";

        let invoice: Invoice = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(invoice.invoice_type, Some(InvoiceType::AccountsPayable));
        assert_eq!(invoice.status, Some(InvoiceStatus::Authorised));
        assert_eq!(invoice.line_amount_types, Some(LineAmountType::Inclusive));
        assert_eq!(invoice.line_items.items.len(), 1);
        assert_eq!(invoice.total, Some(dec!(115.00)));
        assert_eq!(invoice.amount_due, Some(dec!(115)));
        assert_eq!(invoice.branding_theme_id, None);
        assert_eq!(
            invoice.contact.and_then(|c| c.name).as_deref(),
            Some("ABC Limited")
        );
    }

    #[test]
    fn read_only_fields_are_not_written_back() {
        let invoice = Invoice {
            invoice_id: Some(Uuid::nil()),
            amount_due: Some(dec!(10)),
            has_attachments: Some(true),
            updated_date_utc: Some(datetime!(2014-04-05 17:35:20)),
            ..Invoice::default()
        };
        let xml = quick_xml::se::to_string_with_root("Invoice", &invoice).unwrap();
        assert_eq!(
            xml,
            "<Invoice><InvoiceID>00000000-0000-0000-0000-000000000000</InvoiceID></Invoice>"
        );
    }
}
