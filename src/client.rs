use std::{fmt, io::Read, marker::PhantomData, path::Path, sync::Arc};

use reqwest::{Method, StatusCode, header};
use time::OffsetDateTime;
use url::Url;
use uuid::Uuid;

use crate::{
    codec::{Codec, Envelope, XmlCodec},
    endpoints::{XeroEndpoint, default_base_url, normalize_base_url},
    entities::{
        Addressable, Creatable, Resource, Updatable, account::Account,
        bank_transaction::BankTransaction, bank_transfer::BankTransfer,
        branding_theme::BrandingTheme, contact::Contact, credit_note::CreditNote,
        currency::Currency, employee::Employee, expense_claim::ExpenseClaim, invoice::Invoice,
        item::Item, journal::Journal, manual_journal::ManualJournal,
        organisation::Organisation, payment::Payment, receipt::Receipt,
        repeating_invoice::RepeatingInvoice, single_result, tax_rate::TaxRate,
        tracking_category::TrackingCategory, user::User,
    },
    error::{Error, Result},
    oauth::{Credentials, RsaSha1Signer, Signer},
    parameters::ListParameters,
    utils::date_format::format_date_header,
};

/// Content type of `PUT`/`POST` bodies; the document travels in the `xml`
/// form field.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

const FORM_FIELD: &str = "xml";

/// This is the client that is used for interacting with the Xero API. It signs
/// every request with OAuth 1.0a and holds no mutable state, so clones can be
/// shared freely between tasks.
#[derive(Clone, Debug)]
pub struct Client<C: Codec = XmlCodec> {
    http: reqwest::Client,
    base_url: Url,
    signer: Arc<dyn Signer>,
    codec: C,
}

impl Client<XmlCodec> {
    /// Creates a client for a private application from its PEM-encoded RSA
    /// key.
    ///
    /// # Errors
    /// Returns [`Error::PrivateKey`] if the key can't be read or parsed.
    #[instrument(skip(pem))]
    pub fn new(pem: impl Read, credentials: Credentials) -> Result<Self> {
        let signer = RsaSha1Signer::from_reader(pem, credentials)?;
        Self::from_signer(Arc::new(signer))
    }

    /// Like [`Client::new`], reading the key from a file.
    ///
    /// # Errors
    /// Returns [`Error::PrivateKey`] if the file can't be read or the key
    /// can't be parsed.
    pub fn from_pem_file(path: impl AsRef<Path>, credentials: Credentials) -> Result<Self> {
        let signer = RsaSha1Signer::from_pem_file(path, credentials)?;
        Self::from_signer(Arc::new(signer))
    }

    /// Builds a client from `XERO_CONSUMER_KEY`, `XERO_CONSUMER_SECRET` and the
    /// key file at `XERO_PRIVATE_KEY_PATH`.
    ///
    /// # Errors
    /// Returns [`Error::MissingConfiguration`] naming the first variable that
    /// is not set, or [`Error::PrivateKey`] if the key file is unusable.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let path = std::env::var("XERO_PRIVATE_KEY_PATH")
            .map_err(|_| Error::MissingConfiguration("XERO_PRIVATE_KEY_PATH"))?;
        Self::from_pem_file(path, credentials)
    }

    /// Uses `signer` for every request instead of the built-in RSA-SHA1
    /// signer.
    ///
    /// # Errors
    /// Returns [`Error::InvalidEndpoint`] if the default base URL can't be
    /// parsed.
    pub fn from_signer(signer: Arc<dyn Signer>) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: default_base_url()?,
            signer,
            codec: XmlCodec,
        })
    }
}

impl<C: Codec> Client<C> {
    /// Points the client at another host, e.g. a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = signer;
        self
    }

    #[must_use]
    pub fn with_codec<D: Codec>(self, codec: D) -> Client<D> {
        Client {
            http: self.http,
            base_url: self.base_url,
            signer: self.signer,
            codec,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform a signed `GET` against `endpoint`.
    ///
    /// `query` is appended in order with keys untouched. `modified_after` is
    /// sent as `If-Modified-Since`.
    #[instrument(skip(self, query))]
    pub async fn get<R: Resource>(
        &self,
        endpoint: &XeroEndpoint,
        modified_after: Option<OffsetDateTime>,
        query: &[(String, String)],
    ) -> Result<Envelope<R>> {
        let url = endpoint.to_url(&self.base_url, query)?;
        self.execute(Method::GET, url, modified_after, None).await
    }

    /// Perform a signed `PUT` (create) carrying `document` as the form body.
    #[instrument(skip(self, document))]
    pub async fn put<R: Resource>(
        &self,
        endpoint: &XeroEndpoint,
        document: String,
    ) -> Result<Envelope<R>> {
        let url = endpoint.to_url(&self.base_url, &[])?;
        self.execute(Method::PUT, url, None, Some(document)).await
    }

    /// Perform a signed `POST` (update) carrying `document` as the form body.
    #[instrument(skip(self, document))]
    pub async fn post<R: Resource>(
        &self,
        endpoint: &XeroEndpoint,
        document: String,
    ) -> Result<Envelope<R>> {
        let url = endpoint.to_url(&self.base_url, &[])?;
        self.execute(Method::POST, url, None, Some(document)).await
    }

    async fn execute<R: Resource>(
        &self,
        method: Method,
        url: Url,
        modified_after: Option<OffsetDateTime>,
        document: Option<String>,
    ) -> Result<Envelope<R>> {
        let form: Vec<(String, String)> = document
            .map(|document| vec![(FORM_FIELD.to_string(), document)])
            .unwrap_or_default();

        let authorization = self.signer.authorization(&method, &url, &form)?;
        trace!(%method, %url, form_fields = form.len(), "making request");

        let mut request = self
            .http
            .request(method, url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::ACCEPT, C::MEDIA_TYPE);

        if let Some(modified_after) = modified_after {
            request = request.header(header::IF_MODIFIED_SINCE, format_date_header(modified_after)?);
        }

        if !form.is_empty() {
            let body = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&form)
                .finish();
            request = request
                .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Classifies a response: exactly `200` decodes as an envelope, anything
    /// else becomes [`Error::Api`].
    async fn handle_response<R: Resource>(
        &self,
        response: reqwest::Response,
    ) -> Result<Envelope<R>> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        debug!(%url, %status, bytes = body.len(), entity = R::ELEMENT, "received response");
        trace!("Response text:\n{}", body);

        if status != StatusCode::OK {
            let exception = self.codec.decode_error(&body);
            let error = Error::from_response(status, exception.as_ref(), &body);
            warn!(%url, %status, %error, "request was rejected");
            return Err(error);
        }

        self.codec.decode(&body).inspect_err(|e| {
            error!(
                %url,
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "failed to decode response"
            );
        })
    }

    /// Typed access to any resource.
    #[must_use]
    pub fn resource<R: Resource>(&self) -> ResourceApi<'_, R, C> {
        ResourceApi {
            client: self,
            resource: PhantomData,
        }
    }

    #[must_use]
    pub fn accounts(&self) -> ResourceApi<'_, Account, C> {
        self.resource()
    }

    #[must_use]
    pub fn bank_transactions(&self) -> ResourceApi<'_, BankTransaction, C> {
        self.resource()
    }

    #[must_use]
    pub fn bank_transfers(&self) -> ResourceApi<'_, BankTransfer, C> {
        self.resource()
    }

    #[must_use]
    pub fn branding_themes(&self) -> ResourceApi<'_, BrandingTheme, C> {
        self.resource()
    }

    #[must_use]
    pub fn contacts(&self) -> ResourceApi<'_, Contact, C> {
        self.resource()
    }

    #[must_use]
    pub fn credit_notes(&self) -> ResourceApi<'_, CreditNote, C> {
        self.resource()
    }

    #[must_use]
    pub fn currencies(&self) -> ResourceApi<'_, Currency, C> {
        self.resource()
    }

    #[must_use]
    pub fn employees(&self) -> ResourceApi<'_, Employee, C> {
        self.resource()
    }

    #[must_use]
    pub fn expense_claims(&self) -> ResourceApi<'_, ExpenseClaim, C> {
        self.resource()
    }

    #[must_use]
    pub fn invoices(&self) -> ResourceApi<'_, Invoice, C> {
        self.resource()
    }

    #[must_use]
    pub fn items(&self) -> ResourceApi<'_, Item, C> {
        self.resource()
    }

    #[must_use]
    pub fn journals(&self) -> ResourceApi<'_, Journal, C> {
        self.resource()
    }

    #[must_use]
    pub fn manual_journals(&self) -> ResourceApi<'_, ManualJournal, C> {
        self.resource()
    }

    #[must_use]
    pub fn payments(&self) -> ResourceApi<'_, Payment, C> {
        self.resource()
    }

    #[must_use]
    pub fn receipts(&self) -> ResourceApi<'_, Receipt, C> {
        self.resource()
    }

    #[must_use]
    pub fn repeating_invoices(&self) -> ResourceApi<'_, RepeatingInvoice, C> {
        self.resource()
    }

    #[must_use]
    pub fn tax_rates(&self) -> ResourceApi<'_, TaxRate, C> {
        self.resource()
    }

    #[must_use]
    pub fn tracking_categories(&self) -> ResourceApi<'_, TrackingCategory, C> {
        self.resource()
    }

    #[must_use]
    pub fn users(&self) -> ResourceApi<'_, User, C> {
        self.resource()
    }

    /// The organisation the credentials belong to.
    #[instrument(skip(self))]
    pub async fn organisation(&self) -> Result<Option<Organisation>> {
        let organisations = self.resource::<Organisation>().list_all().await?;
        single_result(organisations, Organisation::ELEMENT)
    }
}

/// Reads and writes one kind of [`Resource`].
///
/// Which operations are available follows from the marker traits the
/// resource implements: [`Addressable`] for `get`, [`Creatable`] for
/// `create`, [`Updatable`] for `update`.
pub struct ResourceApi<'a, R, C: Codec = XmlCodec> {
    client: &'a Client<C>,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource, C: Codec> fmt::Debug for ResourceApi<'_, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceApi")
            .field("resource", &R::ELEMENT)
            .field("base_url", &self.client.base_url.as_str())
            .finish()
    }
}

impl<R: Resource, C: Codec> ResourceApi<'_, R, C> {
    /// Every record, unfiltered.
    #[instrument(skip(self), fields(entity = R::ELEMENT))]
    pub async fn list_all(&self) -> Result<Vec<R>> {
        self.list(&ListParameters::default()).await
    }

    /// Records matching `parameters`.
    ///
    /// # Errors
    /// [`Error::UnsupportedParameter`] is returned before any request is made
    /// if a parameter is not accepted by the resource.
    #[instrument(skip(self), fields(entity = R::ELEMENT))]
    pub async fn list(&self, parameters: &ListParameters) -> Result<Vec<R>> {
        parameters.validate::<R>()?;
        let query = parameters.query_pairs()?;
        let envelope = self
            .client
            .get::<R>(
                &XeroEndpoint::collection(R::PATH),
                parameters.modified_after(),
                &query,
            )
            .await?;
        Ok(envelope.into_items())
    }
}

impl<R: Addressable, C: Codec> ResourceApi<'_, R, C> {
    /// Fetch a single record by id; `None` when the API returns none.
    #[instrument(skip(self), fields(entity = R::ELEMENT))]
    pub async fn get(&self, id: Uuid) -> Result<Option<R>> {
        let envelope = self
            .client
            .get::<R>(&XeroEndpoint::single(R::PATH, id), None, &[])
            .await?;
        single_result(envelope.into_items(), R::ELEMENT)
    }
}

impl<R: Creatable, C: Codec> ResourceApi<'_, R, C> {
    /// Create one record and return what the API stored.
    #[instrument(skip(self, resource), fields(entity = R::ELEMENT))]
    pub async fn create(&self, resource: &R) -> Result<Vec<R>> {
        let document = self.client.codec.encode(resource)?;
        let envelope = self
            .client
            .put::<R>(&XeroEndpoint::collection(R::PATH), document)
            .await?;
        Ok(envelope.into_items())
    }

    /// Create several records in one request, wrapped in the collection
    /// element in the order given.
    #[instrument(skip(self, resources), fields(entity = R::ELEMENT, count = resources.len()))]
    pub async fn create_many(&self, resources: &[R]) -> Result<Vec<R>> {
        let document = self.client.codec.encode_all(resources)?;
        let envelope = self
            .client
            .put::<R>(&XeroEndpoint::collection(R::PATH), document)
            .await?;
        Ok(envelope.into_items())
    }
}

impl<R: Updatable, C: Codec> ResourceApi<'_, R, C> {
    #[instrument(skip(self, resource), fields(entity = R::ELEMENT))]
    pub async fn update(&self, resource: &R) -> Result<Vec<R>> {
        let document = self.client.codec.encode(resource)?;
        let envelope = self
            .client
            .post::<R>(&XeroEndpoint::collection(R::PATH), document)
            .await?;
        Ok(envelope.into_items())
    }

    #[instrument(skip(self, resources), fields(entity = R::ELEMENT, count = resources.len()))]
    pub async fn update_many(&self, resources: &[R]) -> Result<Vec<R>> {
        let document = self.client.codec.encode_all(resources)?;
        let envelope = self
            .client
            .post::<R>(&XeroEndpoint::collection(R::PATH), document)
            .await?;
        Ok(envelope.into_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEM: &str = include_str!("../tests/fixtures/privatekey.pem");

    fn client() -> Client {
        Client::new(PEM.as_bytes(), Credentials::new("CONSUMERKEY", "SECRET")).unwrap()
    }

    #[test]
    fn defaults_to_the_production_api() {
        assert_eq!(client().base_url().as_str(), "https://api.xero.com/api.xro/2.0/");
    }

    #[test]
    fn base_url_override_is_normalized() {
        let client =
            client().with_base_url(Url::parse("http://127.0.0.1:8080/api.xro/2.0").unwrap());
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/api.xro/2.0/");
    }

    #[test]
    fn unreadable_keys_fail_construction() {
        let result = Client::new(&b"not a key"[..], Credentials::new("CONSUMERKEY", "SECRET"));
        assert!(matches!(result, Err(Error::PrivateKey(_))));
        assert!(!result.unwrap_err().is_recoverable());
    }

    #[test]
    fn missing_key_file_fails_construction() {
        let result = Client::from_pem_file(
            "/nonexistent/privatekey.pem",
            Credentials::new("CONSUMERKEY", "SECRET"),
        );
        assert!(matches!(result, Err(Error::PrivateKey(_))));
    }

    #[derive(Debug)]
    struct FixedSigner;

    impl Signer for FixedSigner {
        fn authorization(&self, _: &Method, _: &Url, _: &[(String, String)]) -> Result<String> {
            Ok("OAuth fixed".to_string())
        }
    }

    #[test]
    fn custom_signers_use_the_default_base_url() {
        let client = Client::from_signer(Arc::new(FixedSigner)).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.xero.com/api.xro/2.0/");
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Client>();
    }
}
