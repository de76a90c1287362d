//! REST Countries API client
//!
//! One client is built at start-up and shared read-only by every request.
//! Each call performs a fresh GET; nothing is cached or retried.

use std::time::Duration;

use countries_core::country::{parse_countries, CountryRecord};

use crate::prelude::*;

/// REST Countries `all` endpoint, restricted to the fields the service returns
pub const DEFAULT_API_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,population,region,subregion,capital,currencies,languages,flags,cca3";

#[derive(Debug, Clone)]
pub struct CountriesClient {
    client: reqwest::Client,
    api_url: String,
}

impl CountriesClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("countries/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Build a client from the global options
    pub fn from_global(global: &crate::Global) -> Result<Self> {
        Self::new(global.api_url.clone(), Duration::from_secs(global.timeout))
    }

    /// Fetch and decode the full country list
    pub async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, Error> {
        log::debug!("Fetching countries from {}", self.api_url);

        let response = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| Error::UpstreamUnavailable {
                status: None,
                message: f!("Failed to fetch countries from {}: {}", self.api_url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamUnavailable {
                status: Some(status.as_u16()),
                message: f!("Countries API returned HTTP {}", status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::UpstreamUnavailable {
                status: None,
                message: f!("Failed to read countries response: {}", e),
            })?;

        let countries = parse_countries(&body)
            .map_err(|e| Error::Decode(f!("Failed to parse countries response: {}", e)))?;

        log::debug!("Fetched {} countries", countries.len());

        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_for, spawn_upstream, FIXTURE};
    use axum::{http::StatusCode, routing::get, Router};

    #[tokio::test]
    async fn test_fetch_countries_decodes_fixture() {
        let url = spawn_upstream(Router::new().route("/all", get(|| async { FIXTURE }))).await;

        let countries = client_for(&f!("{url}/all")).fetch_countries().await.unwrap();

        let names: Vec<&str> = countries.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Canada", "India", "Australia"]);
        assert_eq!(countries[1].population, 1_380_004_385);
        assert_eq!(countries[2].extra["capital"], serde_json::json!(["Canberra"]));
    }

    #[tokio::test]
    async fn test_fetch_countries_non_success_status() {
        let url = spawn_upstream(Router::new().route(
            "/all",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        ))
        .await;

        let err = client_for(&f!("{url}/all"))
            .fetch_countries()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UpstreamUnavailable {
                status: Some(503),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_fetch_countries_malformed_payload() {
        let url = spawn_upstream(
            Router::new().route("/all", get(|| async { r#"{"message": "not a list"}"# })),
        )
        .await;

        let err = client_for(&f!("{url}/all"))
            .fetch_countries()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_countries_unreachable_host() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&f!("http://{addr}/all"))
            .fetch_countries()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UpstreamUnavailable { status: None, .. }
        ));
    }
}
