use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::associations::AssociationsClient;
use crate::error::{HubSpotError, Result};
use crate::objects::{ObjectsClient, ReadOnlyObjectsClient};
use crate::owners::OwnersClient;
use crate::pipelines::PipelinesClient;
use crate::properties::*;
use crate::query;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Overall per-request timeout of the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the transport built by [`HubSpotClient::with_config`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ---------------------------------------------------------------------------
// Request/response pipeline
// ---------------------------------------------------------------------------

/// Shared logic for building requests and decoding responses.
///
/// Immutable after construction; every resource client borrows it.
#[derive(Debug)]
pub(crate) struct BaseClient {
    base_url: Url,
    auth: HeaderValue,
    http: Client,
}

impl BaseClient {
    fn new(token: &str, base_url: &str, http: Client) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(HubSpotError::MissingToken);
        }
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| HubSpotError::InvalidHeader(e.to_string()))?;
        auth.set_sensitive(true);

        Ok(Self {
            base_url: Url::parse(base_url)?,
            auth,
            http,
        })
    }

    /// Join `endpoint` onto the base URL path with single separators.
    /// Query parameters already on the base URL are kept.
    fn url(&self, endpoint: &str) -> Url {
        let segments: Vec<&str> = self
            .base_url
            .path()
            .split('/')
            .chain(endpoint.split('/'))
            .filter(|s| !s.is_empty())
            .collect();

        let mut url = self.base_url.clone();
        url.set_path(&format!("/{}", segments.join("/")));
        url
    }

    fn request<B>(&self, method: Method, endpoint: &str, payload: Option<&B>) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let mut url = self.url(endpoint);
        let mut body = None;

        if let Some(payload) = payload {
            if method == Method::GET || method == Method::DELETE {
                let encoded = query::encode(payload)?;
                if !encoded.is_empty() {
                    let joined = match url.query() {
                        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
                        _ => encoded,
                    };
                    url.set_query(Some(&joined));
                }
            } else {
                let bytes = serde_json::to_vec(payload)
                    .map_err(|e| HubSpotError::Encode(e.to_string()))?;
                body = Some(bytes);
            }
        }

        debug!(method = %method, path = url.path(), "sending HubSpot request");

        let mut builder = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.auth.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(bytes) = body {
            builder = builder.body(bytes);
        }
        Ok(builder)
    }

    /// Send a request and handle status-code → error mapping.
    ///
    /// A 2xx response with an empty body decodes as JSON `null`, which is
    /// what `()` expects.
    fn send<B, T>(&self, method: Method, endpoint: &str, payload: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(method, endpoint, payload)?.send()?;
        let status = response.status().as_u16();
        let text = response.text()?;

        if !(200..300).contains(&status) {
            debug!(status, endpoint, "HubSpot request returned an error status");
            return Err(HubSpotError::Api { status, body: text });
        }

        debug!(status, endpoint, bytes = text.len(), "HubSpot request succeeded");
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    // ---- convenience wrappers for common HTTP verbs -----------------------

    pub(crate) fn get<Q, T>(&self, endpoint: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::GET, endpoint, Some(query))
    }

    pub(crate) fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, Some(body))
    }

    pub(crate) fn put<B, T>(&self, endpoint: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, endpoint, body)
    }

    pub(crate) fn patch<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, endpoint, Some(body))
    }

    pub(crate) fn delete(&self, endpoint: &str) -> Result<()> {
        self.send::<(), ()>(Method::DELETE, endpoint, None)
    }
}

// ---------------------------------------------------------------------------
// Public client
// ---------------------------------------------------------------------------

/// Main entry point for interacting with the HubSpot CRM API.
///
/// ```no_run
/// use hubspot_client::{HubSpotClient, ListQuery};
///
/// let client = HubSpotClient::new("pat-na1-...").unwrap();
/// let page = client.contacts().list(&ListQuery::default()).unwrap();
/// for contact in &page.results {
///     println!("{}: {:?}", contact.id, contact.properties.email);
/// }
/// ```
#[derive(Debug)]
pub struct HubSpotClient {
    base: BaseClient,
}

impl HubSpotClient {
    /// Create a client against the production API with a 30 second timeout.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with a custom base URL and timeout.
    pub fn with_config(token: &str, config: ClientConfig) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(HubSpotError::MissingToken);
        }
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base: BaseClient::new(token, &config.base_url, http)?,
        })
    }

    /// Create a client on top of a caller-supplied transport, for custom
    /// timeouts, proxies or TLS settings.
    pub fn from_http_client(token: &str, http: Client) -> Result<Self> {
        Self::from_http_client_with_base_url(token, http, DEFAULT_BASE_URL)
    }

    /// Like [`HubSpotClient::from_http_client`] but against another API root.
    pub fn from_http_client_with_base_url(token: &str, http: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            base: BaseClient::new(token, base_url, http)?,
        })
    }

    // -- sub-client accessors ------------------------------------------------

    pub fn contacts(&self) -> ObjectsClient<'_, ContactProperties> {
        ObjectsClient::new(&self.base, "contacts")
    }

    pub fn companies(&self) -> ObjectsClient<'_, CompanyProperties> {
        ObjectsClient::new(&self.base, "companies")
    }

    pub fn deals(&self) -> ObjectsClient<'_, DealProperties> {
        ObjectsClient::new(&self.base, "deals")
    }

    pub fn tickets(&self) -> ObjectsClient<'_, TicketProperties> {
        ObjectsClient::new(&self.base, "tickets")
    }

    pub fn emails(&self) -> ObjectsClient<'_, EmailProperties> {
        ObjectsClient::new(&self.base, "emails")
    }

    pub fn calls(&self) -> ObjectsClient<'_, CallProperties> {
        ObjectsClient::new(&self.base, "calls")
    }

    pub fn meetings(&self) -> ObjectsClient<'_, MeetingProperties> {
        ObjectsClient::new(&self.base, "meetings")
    }

    pub fn notes(&self) -> ObjectsClient<'_, NoteProperties> {
        ObjectsClient::new(&self.base, "notes")
    }

    pub fn tasks(&self) -> ObjectsClient<'_, TaskProperties> {
        ObjectsClient::new(&self.base, "tasks")
    }

    pub fn products(&self) -> ObjectsClient<'_, ProductProperties> {
        ObjectsClient::new(&self.base, "products")
    }

    pub fn line_items(&self) -> ObjectsClient<'_, LineItemProperties> {
        ObjectsClient::new(&self.base, "line_items")
    }

    /// Quotes are read-only through the public API.
    pub fn quotes(&self) -> ReadOnlyObjectsClient<'_, QuoteProperties> {
        ReadOnlyObjectsClient::new(&self.base, "quotes")
    }

    /// Feedback submissions are read-only through the public API.
    pub fn feedback_submissions(&self) -> ReadOnlyObjectsClient<'_, FeedbackSubmissionProperties> {
        ReadOnlyObjectsClient::new(&self.base, "feedback_submissions")
    }

    /// Client for any other object type, including custom objects
    /// (`p_{portal}_{name}` or their `2-xxxx` type ids).
    pub fn objects<'a, P>(&'a self, object_type: &'a str) -> ObjectsClient<'a, P> {
        ObjectsClient::new(&self.base, object_type)
    }

    pub fn associations(&self) -> AssociationsClient<'_> {
        AssociationsClient { base: &self.base }
    }

    pub fn pipelines(&self) -> PipelinesClient<'_> {
        PipelinesClient { base: &self.base }
    }

    pub fn owners(&self) -> OwnersClient<'_> {
        OwnersClient { base: &self.base }
    }
}
