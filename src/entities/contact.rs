use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{Addressable, Resource};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContactStatus {
    Active,
    Archived,
    #[serde(rename = "GDPRREQUEST")]
    GdprRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AddressType {
    #[serde(rename = "POBOX")]
    PoBox,
    Street,
    Delivery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneType {
    Default,
    Ddi,
    Mobile,
    Fax,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, deserialize_with = "enum_or_none")]
    pub address_type: Option<AddressType>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub attention_to: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Phone {
    #[serde(default, deserialize_with = "enum_or_none")]
    pub phone_type: Option<PhoneType>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone_area_code: Option<String>,
    #[serde(default)]
    pub phone_country_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Addresses {
    #[serde(rename = "Address", default)]
    pub items: Vec<Address>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Phones {
    #[serde(rename = "Phone", default)]
    pub items: Vec<Phone>,
}

/// A customer or supplier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(rename = "ContactID", default, deserialize_with = "empty_string_as_none")]
    pub contact_id: Option<Uuid>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub contact_status: Option<ContactStatus>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub skype_user_name: Option<String>,
    #[serde(default)]
    pub bank_account_details: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub accounts_receivable_tax_type: Option<String>,
    #[serde(default)]
    pub accounts_payable_tax_type: Option<String>,
    #[serde(default)]
    pub addresses: Addresses,
    #[serde(default)]
    pub phones: Phones,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_supplier: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub is_customer: Option<bool>,
    #[serde(default)]
    pub default_currency: Option<String>,
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        with = "xero_datetime_format_option"
    )]
    pub updated_date_utc: Option<PrimitiveDateTime>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub has_attachments: Option<bool>,
}

impl Resource for Contact {
    const ELEMENT: &'static str = "Contact";
    const COLLECTION: &'static str = "Contacts";
    const PATH: &'static str = "Contacts";
    const QUERYABLE: &'static [&'static str] = &["Where", "order", "page", "includeArchived"];
    const SUPPORTS_MODIFIED_AFTER: bool = true;
}

impl Addressable for Contact {}

/// The contact a document is raised against. Either the id or the name
/// identifies it; Xero creates a new contact for an unknown name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactRef {
    #[serde(
        rename = "ContactID",
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ContactRef {
    #[must_use]
    pub fn by_id(contact_id: Uuid) -> Self {
        Self {
            contact_id: Some(contact_id),
            name: None,
        }
    }

    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            contact_id: None,
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_addresses_and_phones() {
        let xml = r"<Contact>
  <ContactID>bd2270c3-8706-4c11-9cfb-000b551c3f51</ContactID>
  <ContactStatus>ACTIVE</ContactStatus>
  <Name>ABC Limited</Name>
  <EmailAddress>john@abc.co</EmailAddress>
  <Addresses>
    <Address>
      <AddressType>POBOX</AddressType>
      <AddressLine1>P O Box 123</AddressLine1>
      <City>Wellington</City>
    </Address>
    <Address>
      <AddressType>STREET</AddressType>
    </Address>
  </Addresses>
  <Phones>
    <Phone>
      <PhoneType>MOBILE</PhoneType>
      <PhoneNumber>1234567</PhoneNumber>
    </Phone>
  </Phones>
  <IsSupplier>false</IsSupplier>
  <IsCustomer>true</IsCustomer>
</Contact>";

        let contact: Contact = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(contact.contact_status, Some(ContactStatus::Active));
        assert_eq!(contact.addresses.items.len(), 2);
        assert_eq!(contact.addresses.items[0].address_type, Some(AddressType::PoBox));
        assert_eq!(contact.phones.items[0].phone_type, Some(PhoneType::Mobile));
        assert_eq!(contact.is_customer, Some(true));
    }

    #[test]
    fn reference_by_name_omits_the_id() {
        let xml = quick_xml::se::to_string_with_root("Contact", &ContactRef::by_name("ABC Limited"))
            .unwrap();
        assert_eq!(xml, "<Contact><Name>ABC Limited</Name></Contact>");
    }
}
