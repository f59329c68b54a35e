//! Wire encoding of request bodies and decoding of response bodies.

use std::{fmt, marker::PhantomData};

use quick_xml::{Reader, events::Event};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, IgnoredAny, MapAccess, Visitor},
    ser::SerializeStruct,
};
use time::PrimitiveDateTime;
use uuid::Uuid;

use crate::{
    entities::Resource,
    error::{ApiException, Error, Result},
    utils::date_format::parse_xero_datetime,
};

const RESPONSE_ROOT: &str = "Response";
const ERROR_ROOT: &str = "ApiException";

/// Converts between typed records and the API's document format.
pub trait Codec: fmt::Debug + Send + Sync {
    /// Sent as the `Accept` header.
    const MEDIA_TYPE: &'static str;

    /// A single record, rooted at [`Resource::ELEMENT`].
    fn encode<R: Resource + Serialize>(&self, resource: &R) -> Result<String>;

    /// A bulk write wrapper rooted at [`Resource::COLLECTION`] holding one
    /// child per record, in order.
    fn encode_all<R: Resource + Serialize>(&self, resources: &[R]) -> Result<String>;

    /// Strictly decodes a successful response body.
    fn decode<R: Resource>(&self, body: &str) -> Result<Envelope<R>>;

    /// Best effort decoding of an error body. `None` when the body is not an
    /// error document.
    fn decode_error(&self, body: &str) -> Option<ApiException>;
}

/// The XML codec used against the Xero API.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl Codec for XmlCodec {
    const MEDIA_TYPE: &'static str = "application/xml";

    fn encode<R: Resource + Serialize>(&self, resource: &R) -> Result<String> {
        quick_xml::se::to_string_with_root(R::ELEMENT, resource)
            .map_err(|e| Error::serialization(R::ELEMENT, e))
    }

    fn encode_all<R: Resource + Serialize>(&self, resources: &[R]) -> Result<String> {
        quick_xml::se::to_string_with_root(R::COLLECTION, &ArrayOf { items: resources })
            .map_err(|e| Error::serialization(R::ELEMENT, e))
    }

    fn decode<R: Resource>(&self, body: &str) -> Result<Envelope<R>> {
        expect_root(body, RESPONSE_ROOT).map_err(|e| Error::deserialization(R::ELEMENT, body, e))?;
        quick_xml::de::from_str(body).map_err(|e| Error::deserialization(R::ELEMENT, body, e))
    }

    fn decode_error(&self, body: &str) -> Option<ApiException> {
        expect_root(body, ERROR_ROOT).ok()?;
        match quick_xml::de::from_str(body) {
            Ok(exception) => Some(exception),
            Err(e) => {
                debug!(error = %e, "error body could not be decoded as an ApiException");
                None
            }
        }
    }
}

/// The `<Response>` wrapper around every successful result.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<R> {
    pub id: Option<Uuid>,
    pub status: Option<String>,
    pub provider_name: Option<String>,
    pub date_time_utc: Option<PrimitiveDateTime>,
    pub items: Vec<R>,
}

impl<R> Envelope<R> {
    #[must_use]
    pub fn into_items(self) -> Vec<R> {
        self.items
    }
}

impl<'de, R: Resource> Deserialize<'de> for Envelope<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(EnvelopeVisitor(PhantomData))
    }
}

struct EnvelopeVisitor<R>(PhantomData<R>);

impl<'de, R: Resource> Visitor<'de> for EnvelopeVisitor<R> {
    type Value = Envelope<R>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a <{RESPONSE_ROOT}> holding <{}>", R::COLLECTION)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut id = None;
        let mut status = None;
        let mut provider_name = None;
        let mut date_time_utc = None;
        let mut items: Option<Vec<R>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "Id" => {
                    id = non_empty(map.next_value()?)
                        .map(|s| Uuid::parse_str(&s).map_err(de::Error::custom))
                        .transpose()?;
                }
                "Status" => status = non_empty(map.next_value()?),
                "ProviderName" => provider_name = non_empty(map.next_value()?),
                "DateTimeUTC" => {
                    date_time_utc = non_empty(map.next_value()?)
                        .map(|s| parse_xero_datetime(&s).map_err(de::Error::custom))
                        .transpose()?;
                }
                key if key == R::COLLECTION => {
                    let Collection(batch) = map.next_value::<Collection<R>>()?;
                    items.get_or_insert_with(Vec::new).extend(batch);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(Envelope {
            id,
            status,
            provider_name,
            date_time_utc,
            items: items.ok_or_else(|| de::Error::missing_field(R::COLLECTION))?,
        })
    }
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The children of a collection element that are named [`Resource::ELEMENT`].
struct Collection<R>(Vec<R>);

impl<'de, R: Resource> Deserialize<'de> for Collection<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CollectionVisitor<R>(PhantomData<R>);

        impl<'de, R: Resource> Visitor<'de> for CollectionVisitor<R> {
            type Value = Collection<R>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a list of <{}>", R::ELEMENT)
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut items = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == R::ELEMENT {
                        items.push(map.next_value::<R>()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(Collection(items))
            }
        }

        deserializer.deserialize_map(CollectionVisitor(PhantomData))
    }
}

/// Bulk write wrapper: `<Invoices><Invoice/>…</Invoices>`.
struct ArrayOf<'a, R> {
    items: &'a [R],
}

impl<R: Resource + Serialize> Serialize for ArrayOf<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut wrapper = serializer.serialize_struct(R::COLLECTION, 1)?;
        wrapper.serialize_field(R::ELEMENT, self.items)?;
        wrapper.end()
    }
}

/// A body whose document element is not the one the caller expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedRoot {
    pub expected: &'static str,
    pub found: Option<String>,
}

impl fmt::Display for UnexpectedRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(found) => write!(f, "expected <{}> document, found <{found}>", self.expected),
            None => write!(f, "expected <{}> document, found no XML element", self.expected),
        }
    }
}

impl std::error::Error for UnexpectedRoot {}

fn expect_root(body: &str, expected: &'static str) -> std::result::Result<(), UnexpectedRoot> {
    match root_element(body) {
        Some(found) if found == expected => Ok(()),
        found => Err(UnexpectedRoot { expected, found }),
    }
}

/// Local name of the document element, skipping the prolog.
fn root_element(body: &str) -> Option<String> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(element) | Event::Empty(element)) => {
                return Some(String::from_utf8_lossy(element.local_name().as_ref()).into_owned());
            }
            Ok(Event::Text(_) | Event::CData(_) | Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::macros::date;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Widget {
        #[serde(rename = "WidgetID", skip_serializing_if = "Option::is_none")]
        widget_id: Option<Uuid>,
        name: String,
    }

    impl Resource for Widget {
        const ELEMENT: &'static str = "Widget";
        const COLLECTION: &'static str = "Widgets";
        const PATH: &'static str = "Widgets";
    }

    fn widget(name: &str) -> Widget {
        Widget {
            widget_id: None,
            name: name.to_string(),
        }
    }

    const RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Response xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Id>c7a5a4a1-a9c4-4e0c-a3d0-3f0bd0b4a4a2</Id>
  <Status>OK</Status>
  <ProviderName>Test Provider</ProviderName>
  <DateTimeUTC>2014-04-05T17:35:20.9399282Z</DateTimeUTC>
  <Widgets>
    <Widget>
      <WidgetID>243216c5-369e-4056-ac67-05388f86dc81</WidgetID>
      <Name>First</Name>
      <Colour>Red</Colour>
    </Widget>
    <Widget>
      <Name>Second</Name>
    </Widget>
  </Widgets>
</Response>"#;

    #[test]
    fn decodes_metadata_and_items_in_order() {
        let envelope: Envelope<Widget> = XmlCodec.decode(RESPONSE).unwrap();

        assert_eq!(
            envelope.id,
            Some(Uuid::parse_str("c7a5a4a1-a9c4-4e0c-a3d0-3f0bd0b4a4a2").unwrap())
        );
        assert_eq!(envelope.status.as_deref(), Some("OK"));
        assert_eq!(envelope.provider_name.as_deref(), Some("Test Provider"));
        assert_eq!(
            envelope.date_time_utc.map(PrimitiveDateTime::date),
            Some(date!(2014-04-05))
        );

        let names: Vec<_> = envelope.items.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert!(envelope.items[0].widget_id.is_some());
    }

    #[test]
    fn empty_collection_decodes_to_no_items() {
        let envelope: Envelope<Widget> = XmlCodec
            .decode("<Response><Status>OK</Status><Widgets /></Response>")
            .unwrap();
        assert!(envelope.into_items().is_empty());
    }

    #[test]
    fn missing_collection_is_a_decode_error() {
        let result: Result<Envelope<Widget>> =
            XmlCodec.decode("<Response><Status>OK</Status><Gadgets /></Response>");
        assert!(matches!(result, Err(Error::Deserialization { .. })));
    }

    #[test]
    fn error_documents_are_not_envelopes() {
        let body = "<ApiException><ErrorNumber>10</ErrorNumber></ApiException>";
        let Err(Error::Deserialization {
            entity,
            response_body,
            ..
        }) = XmlCodec.decode::<Widget>(body)
        else {
            panic!("an ApiException must not decode as a response");
        };
        assert_eq!(entity, "Widget");
        assert_eq!(response_body, body);
    }

    #[test]
    fn non_xml_is_a_decode_error() {
        assert!(XmlCodec.decode::<Widget>("Service Unavailable").is_err());
        assert!(XmlCodec.decode::<Widget>("").is_err());
    }

    #[test]
    fn single_record_is_rooted_at_its_element() {
        assert_eq!(
            XmlCodec.encode(&widget("Sprocket")).unwrap(),
            "<Widget><Name>Sprocket</Name></Widget>"
        );
    }

    #[test]
    fn bulk_wrapper_keeps_submission_order() {
        let xml = XmlCodec
            .encode_all(&[widget("a"), widget("b"), widget("c")])
            .unwrap();
        assert_eq!(
            xml,
            "<Widgets><Widget><Name>a</Name></Widget><Widget><Name>b</Name></Widget><Widget><Name>c</Name></Widget></Widgets>"
        );
    }

    #[test]
    fn empty_bulk_write_is_an_empty_wrapper() {
        let xml = XmlCodec.encode_all::<Widget>(&[]).unwrap();
        assert!(xml == "<Widgets/>" || xml == "<Widgets></Widgets>", "got {xml}");
    }

    #[test]
    fn error_bodies_decode_opportunistically() {
        let body = r#"<ApiException xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <ErrorNumber>10</ErrorNumber>
  <Type>ValidationException</Type>
  <Message>A validation exception occurred</Message>
  <Elements>
    <DataContractBase xsi:type="Invoice">
      <ValidationErrors>
        <ValidationError><Message>Email address must be valid.</Message></ValidationError>
      </ValidationErrors>
    </DataContractBase>
  </Elements>
</ApiException>"#;

        let exception = XmlCodec.decode_error(body).unwrap();
        assert_eq!(exception.error_number, Some(10));
        assert_eq!(exception.error_type.as_deref(), Some("ValidationException"));
        assert_eq!(
            exception.message.as_deref(),
            Some("A validation exception occurred")
        );
    }

    #[test]
    fn non_error_bodies_are_not_exceptions() {
        assert_eq!(XmlCodec.decode_error("<html><body>Bad Gateway</body></html>"), None);
        assert_eq!(XmlCodec.decode_error("oauth_problem=signature_invalid"), None);
        assert_eq!(XmlCodec.decode_error(RESPONSE), None);
    }

    #[test]
    fn root_element_skips_the_prolog() {
        assert_eq!(root_element(RESPONSE).as_deref(), Some("Response"));
        assert_eq!(root_element("<!-- note --><a:Fault xmlns:a=\"urn:x\"/>").as_deref(), Some("Fault"));
        assert_eq!(root_element("plain text"), None);
    }
}
