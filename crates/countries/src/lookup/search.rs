use crate::prelude::{eprintln, *};
use crate::upstream::CountriesClient;
use countries_core::country::CountryRecord;
use countries_core::query::filter_by_common_name;

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Text to look for in the common name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Searching countries for {:?}", options.name);
    }

    let client = CountriesClient::from_global(&global)?;
    let countries = search_countries_data(&client, &options.name).await?;

    super::output_countries(&countries, options.json)
}

/// Fetches the country list and keeps the entries whose common name contains `name`
pub async fn search_countries_data(
    client: &CountriesClient,
    name: &str,
) -> Result<Vec<CountryRecord>, Error> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "Query parameter 'name' is required".to_string(),
        ));
    }

    let countries = client.fetch_countries().await?;
    Ok(filter_by_common_name(&countries, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_for, spawn_upstream, FIXTURE};
    use axum::{routing::get, Router};

    #[tokio::test]
    async fn test_search_countries_data_matches_common_name() {
        let url = spawn_upstream(Router::new().route("/all", get(|| async { FIXTURE }))).await;

        let countries = search_countries_data(&client_for(&f!("{url}/all")), "aUsT")
            .await
            .unwrap();

        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name.common, "Australia");
    }

    #[tokio::test]
    async fn test_search_countries_data_requires_name() {
        // Never reaches the network
        let client = client_for("http://127.0.0.1:9/all");

        let err = search_countries_data(&client, "  ").await.unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
