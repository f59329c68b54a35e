use std::{fmt::Display, str::FromStr};

use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, IntoDeserializer, value::StringDeserializer},
};

/// Deserializes an element's text through `FromStr`, treating an empty
/// element (`<Total />`) as `None`.
///
/// Xero writes empty elements for unset numbers, ids and flags, which the
/// typed deserializers would otherwise reject.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// The enum counterpart of [`empty_string_as_none`]: unit variants are read
/// from the element text by their serde name.
pub fn enum_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => {
            let text: StringDeserializer<serde::de::value::Error> =
                s.trim().to_string().into_deserializer();
            T::deserialize(text)
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde::Deserialize;

    use super::{empty_string_as_none, enum_or_none};

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Totals {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        total: Option<Decimal>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        is_reconciled: Option<bool>,
        #[serde(default, deserialize_with = "enum_or_none")]
        status: Option<Status>,
    }

    #[derive(Debug, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    enum Status {
        Draft,
        Authorised,
    }

    #[test]
    fn empty_elements_become_none() {
        let totals: Totals =
            quick_xml::de::from_str("<Totals><Total /><IsReconciled></IsReconciled></Totals>")
                .unwrap();
        assert_eq!(totals.total, None);
        assert_eq!(totals.is_reconciled, None);
    }

    #[test]
    fn populated_elements_are_parsed() {
        let totals: Totals = quick_xml::de::from_str(
            "<Totals><Total>104.50</Total><IsReconciled>true</IsReconciled></Totals>",
        )
        .unwrap();
        assert_eq!(totals.total, Some(dec!(104.50)));
        assert_eq!(totals.is_reconciled, Some(true));
        assert_eq!(totals.status, None);
    }

    #[test]
    fn enums_read_from_element_text() {
        let totals: Totals =
            quick_xml::de::from_str("<Totals><Status>AUTHORISED</Status></Totals>").unwrap();
        assert_eq!(totals.status, Some(Status::Authorised));

        let totals: Totals = quick_xml::de::from_str("<Totals><Status /></Totals>").unwrap();
        assert_eq!(totals.status, None);

        assert!(
            quick_xml::de::from_str::<Totals>("<Totals><Status>PAID</Status></Totals>").is_err()
        );
    }

    #[test]
    fn missing_elements_default_to_none() {
        let totals: Totals = quick_xml::de::from_str("<Totals />").unwrap();
        assert_eq!(totals.total, None);
    }
}
