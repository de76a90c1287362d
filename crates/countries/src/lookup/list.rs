use crate::prelude::{eprintln, *};
use crate::upstream::CountriesClient;
use countries_core::country::CountryRecord;
use countries_core::query::{apply_query, QueryOptions, SortOrder};

#[derive(Debug, clap::Args, Clone, Default)]
pub struct ListOptions {
    /// Keep countries whose common or official name contains this text
    #[arg(long)]
    pub name_contains: Option<String>,

    /// Keep countries with at least this population
    #[arg(long, allow_negative_numbers = true)]
    pub min_population: Option<i64>,

    /// Keep countries in this region (case-insensitive)
    #[arg(long)]
    pub region: Option<String>,

    /// Sort by common name: ascend or descend
    #[arg(long, default_value = "ascend")]
    pub sort_order: Option<String>,

    /// Return at most this many countries
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    pub fn to_query(&self) -> Result<QueryOptions, Error> {
        Ok(QueryOptions {
            name_contains: self.name_contains.clone(),
            min_population: self.min_population,
            region: self.region.clone(),
            sort_order: Some(SortOrder::parse_optional(self.sort_order.as_deref())?),
            limit: self.limit,
        })
    }
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let query = options.to_query()?;

    if global.verbose {
        eprintln!("Fetching countries from {}", global.api_url);
        eprintln!("Query: {:?}", query);
    }

    let client = CountriesClient::from_global(&global)?;
    let countries = list_countries_data(&client, &query).await?;

    super::output_countries(&countries, options.json)
}

/// Fetches the country list and runs the filter, sort and limit pipeline on it
pub async fn list_countries_data(
    client: &CountriesClient,
    query: &QueryOptions,
) -> Result<Vec<CountryRecord>, Error> {
    let countries = client.fetch_countries().await?;
    Ok(apply_query(&countries, query))
}
