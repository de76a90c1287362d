use crate::prelude::{eprintln, *};
use crate::upstream::CountriesClient;
use countries_core::country::CountryRecord;
use countries_core::query::filter_by_population_below;

#[derive(Debug, clap::Args, Clone)]
pub struct BelowOptions {
    /// Population ceiling in millions (exclusive)
    #[arg(value_name = "MILLIONS", allow_negative_numbers = true)]
    pub millions: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: BelowOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Fetching countries with fewer than {} million inhabitants",
            options.millions
        );
    }

    let client = CountriesClient::from_global(&global)?;
    let countries = countries_below_data(&client, options.millions).await?;

    super::output_countries(&countries, options.json)
}

/// Fetches the country list and keeps the entries below `millions` million inhabitants
pub async fn countries_below_data(
    client: &CountriesClient,
    millions: i64,
) -> Result<Vec<CountryRecord>, Error> {
    let countries = client.fetch_countries().await?;
    Ok(filter_by_population_below(&countries, millions))
}
