//! List-identifier resolution against the Tranco daily list API.
//!
//! [`ListIdResolver`] asks the `daily_list_id` endpoint which published list
//! snapshot corresponds to a (date, subdomain-policy) pair. The answer is an
//! opaque token passed through verbatim; nothing about its structure is
//! assumed beyond being embeddable in the download URL path.

mod error;

pub use error::ResolveError;

use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

/// Literal body the API returns when no list exists for the requested date.
const NULL_BODY: &str = "null";

/// Literal body the API uses to report an internal failure alongside a 200.
const SERVER_ERROR_BODY: &str = "500 Internal Server Error";

/// Resolves (date, subdomain-policy) pairs to published list identifiers.
///
/// The resolver queries `{base_url}/daily_list_id` and returns the response
/// body as the identifier. There are no retries; every failure is surfaced
/// to the caller immediately.
#[derive(Debug, Clone)]
pub struct ListIdResolver {
    client: Client,
    base_url: String,
}

impl ListIdResolver {
    /// Creates a resolver that queries `base_url` with the supplied client.
    ///
    /// The client is expected to carry the shared project User-Agent; both
    /// resolution and download traffic identify themselves the same way.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Looks up the identifier of the list published for `date`.
    ///
    /// The identifier is returned exactly as the endpoint sent it, with no
    /// whitespace trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the endpoint is unreachable, answers
    /// with a non-200 status, has no list for the date (`null` body),
    /// reports an internal error in the body, or the body cannot be read.
    #[instrument(skip(self), fields(date = %date, include_subdomains))]
    pub async fn resolve(
        &self,
        date: &str,
        include_subdomains: bool,
    ) -> Result<String, ResolveError> {
        let url = self.endpoint_url(date, include_subdomains)?;
        debug!(url = %url, "requesting list id");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "list id request failed");
            ResolveError::network(url.as_str(), e)
        })?;

        let status = response.status().as_u16();
        if status != 200 {
            warn!(url = %url, status, "list id endpoint returned non-200 status");
            return Err(ResolveError::http_status(url.as_str(), status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::body(url.as_str(), e))?;

        if body == NULL_BODY {
            warn!(date = %date, "no list published for date");
            return Err(ResolveError::no_list(date));
        }

        if body == SERVER_ERROR_BODY {
            warn!(date = %date, "list id endpoint reported an internal error");
            return Err(ResolveError::server_error(date));
        }

        debug!(id = %body, "resolved list id");
        Ok(body)
    }

    /// Builds the `daily_list_id` query URL.
    ///
    /// The subdomain flag renders as the literal strings "true"/"false".
    fn endpoint_url(&self, date: &str, include_subdomains: bool) -> Result<Url, ResolveError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|_| ResolveError::invalid_base_url(&self.base_url))?;
        url.set_path("daily_list_id");
        url.query_pairs_mut()
            .append_pair("date", date)
            .append_pair("subdomains", if include_subdomains { "true" } else { "false" });
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use crate::test_support::socket_guard::start_mock_server_or_skip;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn resolver_for(base_url: impl Into<String>) -> ListIdResolver {
        ListIdResolver::new(Client::new(), base_url)
    }

    #[test]
    fn test_endpoint_url_renders_query_parameters() {
        let resolver = resolver_for("https://tranco-list.eu");
        let url = resolver.endpoint_url("2024-05-01", true).unwrap();
        assert_eq!(
            url.as_str(),
            "https://tranco-list.eu/daily_list_id?date=2024-05-01&subdomains=true"
        );

        let url = resolver.endpoint_url("2024-05-01", false).unwrap();
        assert_eq!(
            url.as_str(),
            "https://tranco-list.eu/daily_list_id?date=2024-05-01&subdomains=false"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_malformed_base() {
        let resolver = resolver_for("not a base url");
        let result = resolver.endpoint_url("2024-05-01", false);
        assert!(matches!(result, Err(ResolveError::InvalidBaseUrl { .. })));
    }

    #[tokio::test]
    async fn test_resolve_returns_body_verbatim() {
        let Some(mock_server) = start_mock_server_or_skip().await else {
            return;
        };

        // Identifier with surrounding whitespace: passed through untrimmed.
        Mock::given(method("GET"))
            .and(path("/daily_list_id"))
            .and(query_param("date", "2024-05-01"))
            .and(query_param("subdomains", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_string("X5J4N \n"))
            .mount(&mock_server)
            .await;

        let resolver = resolver_for(mock_server.uri());
        let id = resolver.resolve("2024-05-01", false).await.unwrap();
        assert_eq!(id, "X5J4N \n");
    }

    #[tokio::test]
    async fn test_resolve_null_body_names_the_date() {
        let Some(mock_server) = start_mock_server_or_skip().await else {
            return;
        };

        Mock::given(method("GET"))
            .and(path("/daily_list_id"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&mock_server)
            .await;

        let resolver = resolver_for(mock_server.uri());
        let result = resolver.resolve("2024-02-30", false).await;
        match result {
            Err(ResolveError::NoList { date }) => assert_eq!(date, "2024-02-30"),
            other => panic!("Expected NoList, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_server_error_body_fails() {
        let Some(mock_server) = start_mock_server_or_skip().await else {
            return;
        };

        Mock::given(method("GET"))
            .and(path("/daily_list_id"))
            .respond_with(ResponseTemplate::new(200).set_body_string("500 Internal Server Error"))
            .mount(&mock_server)
            .await;

        let resolver = resolver_for(mock_server.uri());
        let result = resolver.resolve("2024-05-01", false).await;
        assert!(matches!(result, Err(ResolveError::ServerError { .. })));
    }

    #[tokio::test]
    async fn test_resolve_non_200_status_carries_the_code() {
        let Some(mock_server) = start_mock_server_or_skip().await else {
            return;
        };

        Mock::given(method("GET"))
            .and(path("/daily_list_id"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let resolver = resolver_for(mock_server.uri());
        let result = resolver.resolve("2024-05-01", true).await;
        match result {
            Err(ResolveError::HttpStatus { status, .. }) => assert_eq!(status, 500),
            other => panic!("Expected HttpStatus, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_subdomains_flag_reaches_the_wire() {
        let Some(mock_server) = start_mock_server_or_skip().await else {
            return;
        };

        Mock::given(method("GET"))
            .and(path("/daily_list_id"))
            .and(query_param("subdomains", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string("FQ123"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resolver = resolver_for(mock_server.uri());
        let id = resolver.resolve("2024-05-01", true).await.unwrap();
        assert_eq!(id, "FQ123");
    }
}
