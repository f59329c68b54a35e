use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use uuid::Uuid;

use super::{
    Resource,
    contact::ContactRef,
    invoice::InvoiceType,
    line_item::{LineAmountType, LineItems},
};
use crate::utils::{
    date_format::xero_datetime_format_option,
    serde_helpers::{empty_string_as_none, enum_or_none},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleUnit {
    Weekly,
    Monthly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DueDateType {
    #[serde(rename = "DAYSAFTERBILLDATE")]
    DaysAfterBillDate,
    #[serde(rename = "DAYSAFTERBILLMONTH")]
    DaysAfterBillMonth,
    #[serde(rename = "OFCURRENTMONTH")]
    OfCurrentMonth,
    #[serde(rename = "OFFOLLOWINGMONTH")]
    OfFollowingMonth,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub period: Option<u32>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub unit: Option<ScheduleUnit>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub due_date: Option<u32>,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub due_date_type: Option<DueDateType>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub start_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub next_scheduled_date: Option<PrimitiveDateTime>,
    #[serde(default, with = "xero_datetime_format_option")]
    pub end_date: Option<PrimitiveDateTime>,
}

/// Template from which Xero raises invoices on a schedule.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepeatingInvoice {
    #[serde(
        rename = "RepeatingInvoiceID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub repeating_invoice_id: Option<Uuid>,
    #[serde(rename = "Type", default, deserialize_with = "enum_or_none")]
    pub invoice_type: Option<InvoiceType>,
    #[serde(default)]
    pub contact: Option<ContactRef>,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub line_items: LineItems,
    #[serde(default, deserialize_with = "enum_or_none")]
    pub line_amount_types: Option<LineAmountType>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sub_total: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total_tax: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub total: Option<Decimal>,
}

impl Resource for RepeatingInvoice {
    const ELEMENT: &'static str = "RepeatingInvoice";
    const COLLECTION: &'static str = "RepeatingInvoices";
    const PATH: &'static str = "RepeatingInvoices";
}
