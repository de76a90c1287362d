//! Filter, sort and limit over an in-memory list of countries
//!
//! Every function here borrows its input and returns a fresh `Vec`, so the
//! records decoded for a request are never mutated. Filters compose by
//! logical AND and may run in any order; sorting has to follow filtering and
//! the limit has to follow sorting.

use std::fmt;
use std::str::FromStr;

use crate::country::CountryRecord;

/// Error type for query operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid sortOrder provided: {0}. Valid values: ascend, descend")]
    InvalidSortOrder(String),
}

/// Direction used when sorting by common name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascend,
    Descend,
}

impl SortOrder {
    /// Parse an optional user-supplied direction
    ///
    /// Absent and blank values mean ascending; anything else must be a valid
    /// direction.
    pub fn parse_optional(value: Option<&str>) -> Result<Self, QueryError> {
        match value.map(str::trim) {
            None | Some("") => Ok(SortOrder::Ascend),
            Some(text) => text.parse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ascend") {
            Ok(SortOrder::Ascend)
        } else if s.eq_ignore_ascii_case("descend") {
            Ok(SortOrder::Descend)
        } else {
            Err(QueryError::InvalidSortOrder(s.to_string()))
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascend => write!(f, "ascend"),
            SortOrder::Descend => write!(f, "descend"),
        }
    }
}

/// Criteria for the full list pipeline
///
/// Each field left as `None` means the corresponding stage is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub name_contains: Option<String>,
    pub min_population: Option<i64>,
    pub region: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<usize>,
}

// Upper-case folding, so a dotted capital I never expands into an ASCII `i`
fn fold_case(text: &str) -> String {
    text.to_uppercase()
}

fn contains_ignore_case(haystack: &str, needle_folded: &str) -> bool {
    fold_case(haystack).contains(needle_folded)
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Keep countries whose common or official name contains `text`
///
/// Case-insensitive. A missing or blank `text` keeps every record.
pub fn filter_by_name(records: &[CountryRecord], text: Option<&str>) -> Vec<CountryRecord> {
    let Some(text) = non_blank(text) else {
        return records.to_vec();
    };
    let needle = fold_case(text);

    records
        .iter()
        .filter(|c| {
            contains_ignore_case(&c.name.common, &needle)
                || contains_ignore_case(&c.name.official, &needle)
        })
        .cloned()
        .collect()
}

/// Keep countries whose common name contains `text`, ignoring case
pub fn filter_by_common_name(records: &[CountryRecord], text: &str) -> Vec<CountryRecord> {
    let needle = fold_case(text);

    records
        .iter()
        .filter(|c| contains_ignore_case(&c.name.common, &needle))
        .cloned()
        .collect()
}

/// Keep countries with at least `threshold` inhabitants
///
/// A negative threshold is met by every country.
pub fn filter_by_min_population(
    records: &[CountryRecord],
    threshold: Option<i64>,
) -> Vec<CountryRecord> {
    match threshold.map(u64::try_from) {
        Some(Ok(threshold)) => records
            .iter()
            .filter(|c| c.population >= threshold)
            .cloned()
            .collect(),
        Some(Err(_)) | None => records.to_vec(),
    }
}

/// Keep countries whose region equals `region`, ignoring case
pub fn filter_by_region(records: &[CountryRecord], region: Option<&str>) -> Vec<CountryRecord> {
    let Some(region) = non_blank(region) else {
        return records.to_vec();
    };
    let region = fold_case(region);

    records
        .iter()
        .filter(|c| fold_case(&c.region) == region)
        .cloned()
        .collect()
}

/// Keep countries with fewer than `millions` million inhabitants
///
/// Zero or a negative ceiling keeps nothing.
pub fn filter_by_population_below(records: &[CountryRecord], millions: i64) -> Vec<CountryRecord> {
    let Ok(millions) = u64::try_from(millions) else {
        return Vec::new();
    };
    let ceiling = millions.saturating_mul(1_000_000);

    records
        .iter()
        .filter(|c| c.population < ceiling)
        .cloned()
        .collect()
}

/// Stable sort by common name using byte-wise comparison
pub fn sort_by_common_name(records: &[CountryRecord], order: SortOrder) -> Vec<CountryRecord> {
    let mut sorted = records.to_vec();

    match order {
        SortOrder::Ascend => sorted.sort_by(|a, b| a.name.common.cmp(&b.name.common)),
        SortOrder::Descend => sorted.sort_by(|a, b| b.name.common.cmp(&a.name.common)),
    }

    sorted
}

/// Return at most the first `n` records
pub fn limit(records: &[CountryRecord], n: usize) -> Vec<CountryRecord> {
    records.iter().take(n).cloned().collect()
}

/// Run the full pipeline: filters, then sort, then limit
pub fn apply_query(records: &[CountryRecord], options: &QueryOptions) -> Vec<CountryRecord> {
    let filtered = filter_by_name(records, options.name_contains.as_deref());
    let filtered = filter_by_min_population(&filtered, options.min_population);
    let filtered = filter_by_region(&filtered, options.region.as_deref());

    let sorted = sort_by_common_name(&filtered, options.sort_order.unwrap_or_default());

    match options.limit {
        Some(n) => limit(&sorted, n),
        None => sorted,
    }
}
