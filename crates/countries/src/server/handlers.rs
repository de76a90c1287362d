use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use countries_core::country::CountryRecord;
use countries_core::query::{QueryOptions, SortOrder};
use serde::Deserialize;

use super::AppState;
use crate::lookup::{countries_below_data, list_countries_data, search_countries_data};
use crate::prelude::*;

type ApiResult = Result<Json<Vec<CountryRecord>>, Error>;

/// `GET /api/countries` query string
///
/// The legacy parameter names (`param1`, `number`, `param3`) are still
/// accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(alias = "param1")]
    pub name_contains: Option<String>,
    #[serde(alias = "number")]
    pub min_population: Option<i64>,
    #[serde(alias = "param3")]
    pub region: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<usize>,
}

impl ListParams {
    pub fn into_query(self) -> Result<QueryOptions, Error> {
        let sort_order = SortOrder::parse_optional(self.sort_order.as_deref())?;

        Ok(QueryOptions {
            name_contains: self.name_contains,
            min_population: self.min_population,
            region: self.region,
            sort_order: Some(sort_order),
            limit: self.limit,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PopulationParams {
    pub value: Option<i64>,
}

fn invalid_query(rejection: QueryRejection) -> Error {
    Error::InvalidArgument(rejection.body_text())
}

pub async fn list_countries(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult {
    let Query(params) = params.map_err(invalid_query)?;
    let query = params.into_query()?;

    log::info!("GET /api/countries {:?}", query);

    let countries = list_countries_data(&state.client, &query).await?;
    Ok(Json(countries))
}

pub async fn search_countries(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult {
    let Query(params) = params.map_err(invalid_query)?;
    let name = params
        .name
        .ok_or_else(|| Error::InvalidArgument("Query parameter 'name' is required".to_string()))?;

    log::info!("GET /api/countries/search name={:?}", name);

    let countries = search_countries_data(&state.client, &name).await?;
    Ok(Json(countries))
}

pub async fn population_less_than_million(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PopulationParams>, QueryRejection>,
) -> ApiResult {
    let Query(params) = params.map_err(invalid_query)?;
    let millions = params
        .value
        .ok_or_else(|| Error::InvalidArgument("Query parameter 'value' is required".to_string()))?;

    log::info!("GET /api/countries/populationLessThanMillion value={}", millions);

    let countries = countries_below_data(&state.client, millions).await?;
    Ok(Json(countries))
}
