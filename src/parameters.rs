use time::OffsetDateTime;

use crate::{
    entities::Resource,
    error::{Error, Result},
    utils::date_format::format_date_header,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Text(String),
    Timestamp(OffsetDateTime),
}

/// Filters and paging options for list requests.
///
/// Parameters are sent in the order they were added, with their keys exactly
/// as given. Which keys a resource accepts is declared by
/// [`Resource::QUERYABLE`]; anything else is rejected before a request is
/// made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParameters {
    modified_after: Option<OffsetDateTime>,
    params: Vec<(String, Value)>,
}

impl ListParameters {
    /// Create a new builder for `ListParameters`
    #[must_use]
    pub fn builder() -> Self {
        Self::default()
    }

    /// Only return records modified after this instant, sent as the
    /// `If-Modified-Since` header.
    #[must_use]
    pub fn with_modified_after(mut self, modified_after: OffsetDateTime) -> Self {
        self.modified_after = Some(modified_after);
        self
    }

    /// Set the where filter, e.g. `Status=="DRAFT"`
    #[must_use]
    pub fn with_where(self, filter: impl Into<String>) -> Self {
        self.with_param("Where", filter)
    }

    /// Set the order clause, e.g. `Date DESC`
    #[must_use]
    pub fn with_order(self, order: impl Into<String>) -> Self {
        self.with_param("order", order)
    }

    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        self.with_param("page", page.to_string())
    }

    #[must_use]
    pub fn with_offset(self, offset: u64) -> Self {
        self.with_param("offset", offset.to_string())
    }

    #[must_use]
    pub fn with_include_archived(self, include_archived: bool) -> Self {
        self.with_param("includeArchived", include_archived.to_string())
    }

    #[must_use]
    pub fn with_sort_order(self, sort_order: i32) -> Self {
        self.with_param("sortOrder", sort_order.to_string())
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_param("Name", name)
    }

    #[must_use]
    pub fn with_created_date_utc(mut self, created: OffsetDateTime) -> Self {
        self.params
            .push(("CreatedDateUTC".to_string(), Value::Timestamp(created)));
        self
    }

    /// Adds an arbitrary query parameter. The key must still be one the
    /// resource accepts.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), Value::Text(value.into())));
        self
    }

    #[must_use]
    pub fn modified_after(&self) -> Option<OffsetDateTime> {
        self.modified_after
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modified_after.is_none() && self.params.is_empty()
    }

    /// Checks every key against what `R` accepts.
    pub fn validate<R: Resource>(&self) -> Result<()> {
        if self.modified_after.is_some() && !R::SUPPORTS_MODIFIED_AFTER {
            return Err(Error::UnsupportedParameter {
                resource: R::ELEMENT,
                parameter: "If-Modified-Since".to_string(),
            });
        }

        match self
            .params
            .iter()
            .find(|(key, _)| !R::QUERYABLE.contains(&key.as_str()))
        {
            Some((key, _)) => Err(Error::UnsupportedParameter {
                resource: R::ELEMENT,
                parameter: key.clone(),
            }),
            None => Ok(()),
        }
    }

    /// The query string pairs, in insertion order.
    pub fn query_pairs(&self) -> Result<Vec<(String, String)>> {
        self.params
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::Text(text) => text.clone(),
                    Value::Timestamp(timestamp) => format_date_header(*timestamp)?,
                };
                Ok((key.clone(), value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::entities::{branding_theme::BrandingTheme, invoice::Invoice, tax_rate::TaxRate};

    fn pairs(parameters: &ListParameters) -> Vec<(String, String)> {
        parameters.query_pairs().unwrap()
    }

    #[test]
    fn pairs_follow_insertion_order() {
        let parameters = ListParameters::builder()
            .with_page(3)
            .with_where(r#"Type=="ACCREC""#)
            .with_order("Date DESC");

        assert_eq!(
            pairs(&parameters),
            vec![
                ("page".to_string(), "3".to_string()),
                ("Where".to_string(), r#"Type=="ACCREC""#.to_string()),
                ("order".to_string(), "Date DESC".to_string()),
            ]
        );
    }

    #[test]
    fn created_date_uses_the_header_format() {
        let parameters = ListParameters::builder()
            .with_name("Standard")
            .with_created_date_utc(datetime!(2014-04-06 03:35:20.5 +10:00));

        assert_eq!(
            pairs(&parameters)[1],
            ("CreatedDateUTC".to_string(), "2014-04-05T17:35:20".to_string())
        );
        assert!(parameters.validate::<BrandingTheme>().is_ok());
    }

    #[test]
    fn undeclared_keys_are_rejected() {
        let parameters = ListParameters::builder().with_where("Name!=null").with_page(1);
        let Err(Error::UnsupportedParameter {
            resource,
            parameter,
        }) = parameters.validate::<TaxRate>()
        else {
            panic!("page is not a tax rate filter");
        };
        assert_eq!(resource, "TaxRate");
        assert_eq!(parameter, "page");

        assert!(parameters.validate::<Invoice>().is_ok());
    }

    #[test]
    fn key_casing_matters() {
        let parameters = ListParameters::builder().with_param("where", "Total>0");
        assert!(parameters.validate::<Invoice>().is_err());
    }

    #[test]
    fn modified_after_needs_support_from_the_resource() {
        let parameters =
            ListParameters::builder().with_modified_after(datetime!(2014-04-05 17:35:20 UTC));

        assert!(parameters.validate::<Invoice>().is_ok());
        assert!(parameters.validate::<TaxRate>().is_err());
        assert!(pairs(&parameters).is_empty());
        assert!(!parameters.is_empty());
    }
}
