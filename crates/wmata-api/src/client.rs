//! `WmataClient` - shared HTTP client and request dispatcher.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};
use crate::format::ResponseFormat;

/// Default base URL for the WMATA API.
const DEFAULT_BASE_URL: &str = "https://api.wmata.com/";

/// Header carrying the subscription key.
const API_KEY_HEADER: &str = "api_key";

/// Default request timeout for the built-in transport.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Error document returned by the API gateway on non-2xx responses.
#[derive(Debug, Deserialize)]
struct WmataErrorResponse {
    message: String,
}

/// WMATA API client.
///
/// Holds the subscription key and transport. Immutable once built;
/// clones share the underlying connection pool.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct WmataClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL that endpoint paths are joined onto.
    base_url: Url,
    /// Subscription key sent as the `api_key` header.
    api_key: String,
}

/// Builder for `WmataClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct WmataClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl WmataClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            timeout: None,
            http_client: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests or a proxy).
    ///
    /// A trailing `/` is added when missing so endpoint paths join below
    /// the last segment instead of replacing it.
    #[must_use]
    pub fn base_url(mut self, mut url: Url) -> Self {
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = Some(url);
        self
    }

    /// Sets the API subscription key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent of the built-in transport.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the request timeout of the built-in transport (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses an externally configured transport instead of the built-in one.
    ///
    /// `user_agent` and `timeout` are ignored when this is set.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or empty.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<WmataClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingArgument("api_key"))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .gzip(true)
                .build()?,
        };

        Ok(WmataClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl WmataClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> WmataClientBuilder {
        WmataClientBuilder::new()
    }

    /// Returns the base URL endpoint paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the path cannot be joined.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Resolves `path` and appends `segment` as one percent-encoded path
    /// segment, so `/`, `?` and `#` in it stay inside the segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the path cannot be joined or the base URL
    /// cannot carry path segments.
    pub fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<Url> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|()| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(segment);
        Ok(url)
    }

    /// Sends one GET request and decodes the body according to `format`.
    ///
    /// Attaches the `api_key` header and appends `query` (url-encoded) when
    /// it is non-empty. Issues exactly one request; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`Error::Request`] if the request cannot be sent or the body read.
    /// - [`Error::Status`] if the API answers with a non-2xx status.
    /// - [`Error::Json`] / [`Error::Xml`] if the body does not decode into `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        format: ResponseFormat,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut builder = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let request = builder.build()?;

        tracing::debug!(url = %request.url(), %format, "WMATA API request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(%status, body_len = body.len(), "Response body received");
        tracing::trace!(body_preview = &body[..body.floor_char_boundary(500)], "Response body preview");

        if !status.is_success() {
            let message = serde_json::from_str::<WmataErrorResponse>(&body)
                .map_or(body, |e| e.message);
            tracing::warn!(code = status.as_u16(), %message, "WMATA API returned an error status");
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        decode(format, &body)
    }

    /// Sends a request and converts the envelope matching `format` into `T`.
    ///
    /// `J` is the JSON body shape and `X` the XML one; both convert into the
    /// same public record so callers never see the format difference.
    pub(crate) async fn fetch<J, X, T>(
        &self,
        format: ResponseFormat,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T>
    where
        J: DeserializeOwned + Into<T>,
        X: DeserializeOwned + Into<T>,
    {
        match format {
            ResponseFormat::Json => self.send::<J>(format, url, query).await.map(Into::into),
            ResponseFormat::Xml => self.send::<X>(format, url, query).await.map(Into::into),
        }
    }
}

/// Decodes a response body with the decoder matching `format`.
///
/// # Errors
///
/// Returns [`Error::Json`] or [`Error::Xml`] when the body does not match `T`.
pub fn decode<T: DeserializeOwned>(format: ResponseFormat, body: &str) -> Result<T> {
    match format {
        ResponseFormat::Json => Ok(serde_json::from_str(body)?),
        ResponseFormat::Xml => Ok(quick_xml::de::from_str(body)?),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct StationName {
        #[serde(rename = "Name")]
        name: String,
    }

    fn client_for(server: &wiremock::MockServer) -> WmataClient {
        WmataClient::builder()
            .base_url(format!("{}/", server.uri()).parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        // Arrange & Act
        let result = WmataClient::builder().build();

        // Assert
        assert!(matches!(result, Err(Error::MissingArgument("api_key"))));
    }

    #[test]
    fn test_builder_rejects_empty_api_key() {
        // Arrange & Act
        let result = WmataClient::builder().api_key("").build();

        // Assert
        assert!(matches!(result, Err(Error::MissingArgument("api_key"))));
    }

    #[test]
    fn test_builder_defaults_base_url() {
        // Arrange & Act
        let client = WmataClient::builder().api_key("k").build().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_with_custom_base_url() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/").unwrap();

        // Act
        let client = WmataClient::builder()
            .base_url(custom_url.clone())
            .api_key("k")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_base_url_without_trailing_slash_keeps_last_segment() {
        // Arrange
        let proxy = Url::parse("https://proxy.example/wmata").unwrap();

        // Act
        let client = WmataClient::builder()
            .base_url(proxy)
            .api_key("k")
            .build()
            .unwrap();
        let url = client.endpoint("Rail.svc/json/jStations").unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "https://proxy.example/wmata/");
        assert_eq!(url.as_str(), "https://proxy.example/wmata/Rail.svc/json/jStations");
    }

    #[test]
    fn test_endpoint_joins_relative_path() {
        // Arrange
        let client = WmataClient::builder().api_key("k").build().unwrap();

        // Act
        let url = client.endpoint("Rail.svc/json/jLines").unwrap();

        // Assert
        assert_eq!(url.as_str(), "https://api.wmata.com/Rail.svc/json/jLines");
    }

    #[test]
    fn test_endpoint_with_segment_encodes_reserved_characters() {
        // Arrange
        let client = WmataClient::builder().api_key("k").build().unwrap();

        // Act
        let plain = client
            .endpoint_with_segment("StationPrediction.svc/json/GetPrediction", "A01,C01")
            .unwrap();
        let reserved = client
            .endpoint_with_segment("StationPrediction.svc/json/GetPrediction", "A01/B?c#d")
            .unwrap();

        // Assert
        assert_eq!(
            plain.as_str(),
            "https://api.wmata.com/StationPrediction.svc/json/GetPrediction/A01,C01"
        );
        assert_eq!(
            reserved.as_str(),
            "https://api.wmata.com/StationPrediction.svc/json/GetPrediction/A01%2FB%3Fc%23d"
        );
        assert_eq!(reserved.query(), None);
        assert_eq!(reserved.fragment(), None);
    }

    #[test]
    fn test_decode_json_and_xml() {
        // Arrange & Act
        let from_json: StationName =
            decode(ResponseFormat::Json, r#"{"Name":"Metro Center"}"#).unwrap();
        let from_xml: StationName = decode(
            ResponseFormat::Xml,
            r#"<StationName xmlns="http://www.wmata.com"><Name>Metro Center</Name></StationName>"#,
        )
        .unwrap();

        // Assert
        assert_eq!(from_json, from_xml);
    }

    #[test]
    fn test_decode_malformed_bodies() {
        // Arrange & Act
        let json = decode::<StationName>(ResponseFormat::Json, "{\"Name\":");
        let xml = decode::<StationName>(
            ResponseFormat::Xml,
            "<StationName><Other>1</Other></StationName>",
        );

        // Assert
        assert!(matches!(json, Err(Error::Json(_))));
        assert!(matches!(xml, Err(Error::Xml(_))));
    }

    #[tokio::test]
    async fn test_send_attaches_api_key_and_query() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/station"))
            .and(wiremock::matchers::header("api_key", "test-key"))
            .and(wiremock::matchers::query_param("StationCode", "A01"))
            .and(wiremock::matchers::query_param("Note", "a b&c"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_string(r#"{"Name":"Metro Center"}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let url = client.endpoint("station").unwrap();
        let query = [
            ("StationCode", String::from("A01")),
            ("Note", String::from("a b&c")),
        ];

        // Act
        let station: StationName = client
            .send(ResponseFormat::Json, url, &query)
            .await
            .unwrap();

        // Assert
        assert_eq!(station.name, "Metro Center");
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let pairs: Vec<(String, String)> = requests[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (String::from("StationCode"), String::from("A01")),
                (String::from("Note"), String::from("a b&c")),
            ]
        );
    }

    #[tokio::test]
    async fn test_send_without_query_omits_query_string() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_string(r#"{"Name":"Glenmont"}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let url = client.endpoint("station").unwrap();

        // Act
        let _: StationName = client.send(ResponseFormat::Json, url, &[]).await.unwrap();

        // Assert
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_send_decodes_xml() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_string("<StationName><Name>Shady Grove</Name></StationName>"),
            )
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let url = client.endpoint("station").unwrap();

        // Act
        let station: StationName = client.send(ResponseFormat::Xml, url, &[]).await.unwrap();

        // Assert
        assert_eq!(station.name, "Shady Grove");
    }

    #[tokio::test]
    async fn test_send_error_status_is_not_retried() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let error_body = r#"{ "statusCode": 401, "message": "Access denied due to invalid subscription key." }"#;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(401).set_body_string(error_body))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let url = client.endpoint("station").unwrap();

        // Act
        let result = client.send::<StationName>(ResponseFormat::Json, url, &[]).await;

        // Assert
        let err = result.unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(
            err,
            Error::Status { status: 401, ref message } if message.contains("invalid subscription key")
        ));
    }

    #[tokio::test]
    async fn test_send_non_json_error_body_is_kept_verbatim() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let url = client.endpoint("station").unwrap();

        // Act
        let err = client
            .send::<StationName>(ResponseFormat::Json, url, &[])
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(
            err,
            Error::Status { status: 503, ref message } if message == "Service Unavailable"
        ));
    }

    #[tokio::test]
    async fn test_send_decode_failure_is_surfaced() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let url = client.endpoint("station").unwrap();

        // Act
        let err = client
            .send::<StationName>(ResponseFormat::Json, url, &[])
            .await
            .unwrap_err();

        // Assert
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_send_connection_failure_is_request_error() {
        // Arrange: reserve a free port, then release it so nothing listens
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = WmataClient::builder()
            .base_url(format!("http://{addr}/").parse().unwrap())
            .api_key("test-key")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let url = client.endpoint("station").unwrap();

        // Act
        let err = client
            .send::<StationName>(ResponseFormat::Json, url, &[])
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, Error::Request(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_injected_transport_is_used() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::header("User-Agent", "injected/1.0"))
            .and(wiremock::matchers::header("api_key", "test-key"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_string(r#"{"Name":"Vienna"}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let transport = Client::builder().user_agent("injected/1.0").build().unwrap();
        let client = WmataClient::builder()
            .base_url(format!("{}/", mock_server.uri()).parse().unwrap())
            .api_key("test-key")
            .http_client(transport)
            .build()
            .unwrap();
        let url = client.endpoint("station").unwrap();

        // Act & Assert (mock expect(1) verifies the injected User-Agent)
        let _: StationName = client.send(ResponseFormat::Json, url, &[]).await.unwrap();
    }
}
