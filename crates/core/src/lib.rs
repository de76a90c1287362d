//! Core library for countries
//!
//! This crate implements the **Functional Core** of the countries service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`countries_core`** (this crate): record model and query pipeline, zero I/O
//! - **`countries`**: upstream fetch, HTTP server and CLI (the Imperative Shell)
//!
//! The shell fetches the REST Countries payload, hands the decoded records to
//! this crate and serializes whatever comes back. Nothing here knows where
//! the records came from or where they are going.
//!
//! # Module Organization
//!
//! - [`country`]: the `CountryRecord` model and payload decoding
//! - [`query`]: name/population/region filters, sort by common name, limit
//!
//! # Example Usage
//!
//! ```rust
//! use countries_core::country::CountryRecord;
//! use countries_core::query::{apply_query, QueryOptions, SortOrder};
//!
//! let records = vec![
//!     CountryRecord::new("Canada", "Canada", 37_590_000, "Americas"),
//!     CountryRecord::new("India", "Republic of India", 1_380_004_385, "Asia"),
//! ];
//!
//! let options = QueryOptions {
//!     sort_order: Some(SortOrder::Descend),
//!     limit: Some(1),
//!     ..Default::default()
//! };
//!
//! let output = apply_query(&records, &options);
//! assert_eq!(output[0].name.common, "India");
//! ```

pub mod country;
pub mod query;
