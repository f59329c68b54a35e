
use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use percent_encoding::percent_decode_str;
use reqwest::Method;
use rsa::{
    RsaPublicKey,
    pkcs1v15::{Signature, VerifyingKey},
    pkcs8::DecodePublicKey,
    signature::Verifier,
};
use sha1::Sha1;
use url::Url;
use wiremock::{
    Mock, MockServer, Request, ResponseTemplate,
    matchers::{method, path},
};

use test_utils::{api_path, create_test_client, do_setup, envelope};
use xero_xml::{
    ListParameters,
    contact::ContactRef,
    invoice::{Invoice, InvoiceType},
    oauth::{AUTHORIZE_URL, authorize_url, signature_base_string},
};

const PUBLIC_KEY: &str = include_str!("fixtures/publickey.pem");

/// Splits `OAuth k="v", …` into decoded pairs
fn oauth_fields(request: &Request) -> Result<Vec<(String, String)>> {
    let header = request
        .headers
        .get("Authorization")
        .context("request was not signed")?
        .to_str()?;
    let fields = header.strip_prefix("OAuth ").context("not an OAuth header")?;

    fields
        .split(", ")
        .map(|field| {
            let (key, value) = field.split_once('=').context("malformed field")?;
            let value = value.trim_matches('"');
            Ok((key.to_string(), percent_decode_str(value).decode_utf8()?.into_owned()))
        })
        .collect()
}

/// Rebuilds the base string from what reached the server and checks the
/// signature against the application's public key.
///
/// The recorded request URL carries no port, so the signed URL is rebuilt
/// from the server address.
fn verify(server: &MockServer, request: &Request) -> Result<()> {
    let mut signed_url = Url::parse(&server.uri())?.join(request.url.path())?;
    signed_url.set_query(request.url.query());

    let mut params = oauth_fields(request)?;
    let position = params
        .iter()
        .position(|(key, _)| key == "oauth_signature")
        .context("no signature")?;
    let (_, signature) = params.remove(position);

    params.extend(
        signed_url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned())),
    );
    params.extend(
        url::form_urlencoded::parse(&request.body).map(|(k, v)| (k.into_owned(), v.into_owned())),
    );

    let method = Method::from_bytes(request.method.as_str().as_bytes())?;
    let base = signature_base_string(&method, &signed_url, &params);

    let key = VerifyingKey::<Sha1>::new(RsaPublicKey::from_public_key_pem(PUBLIC_KEY)?);
    let signature = Signature::try_from(STANDARD.decode(signature)?.as_slice())?;
    key.verify(base.as_bytes(), &signature)?;
    Ok(())
}

#[tokio::test]
async fn signed_queries_verify_on_the_server() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("Invoices")))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope("<Invoices />")))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client
        .invoices()
        .list(
            &ListParameters::builder()
                .with_where(r#"Status=="DRAFT" AND Total>10"#)
                .with_page(2),
        )
        .await?;

    let requests = server.received_requests().await.context("recording disabled")?;
    verify(&server, &requests[0])
}

#[tokio::test]
async fn signed_form_bodies_verify_on_the_server() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("Invoices")))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope("<Invoices />")))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut invoice = Invoice::new(
        InvoiceType::AccountsPayable,
        ContactRef::by_name("Smith & Sons (\"Wholesale\")"),
    );
    invoice.reference = Some("PO 1/2 ~ 50%".to_string());
    client.invoices().create(&invoice).await?;

    let requests = server.received_requests().await.context("recording disabled")?;
    verify(&server, &requests[0])
}

#[tokio::test]
async fn every_request_gets_a_fresh_nonce() -> Result<()> {
    do_setup();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("Invoices")))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope("<Invoices />")))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.invoices().list_all().await?;
    client.invoices().list_all().await?;

    let requests = server.received_requests().await.context("recording disabled")?;
    let nonce = |request: &Request| -> Result<String> {
        oauth_fields(request)?
            .into_iter()
            .find(|(key, _)| key == "oauth_nonce")
            .map(|(_, value)| value)
            .context("no nonce")
    };
    assert_ne!(nonce(&requests[0])?, nonce(&requests[1])?);
    Ok(())
}

#[test]
fn authorize_url_points_at_xero() -> Result<()> {
    let url = authorize_url("REQUEST TOKEN")?;
    assert!(url.as_str().starts_with(AUTHORIZE_URL));
    assert_eq!(url.query(), Some("oauth_token=REQUEST+TOKEN"));
    Ok(())
}
