use std::time::Duration;

use axum::Router;

use crate::upstream::CountriesClient;

/// Canada, India and Australia in the REST Countries v3.1 shape
pub const FIXTURE: &str = r#"[
    {
        "name": { "common": "Canada", "official": "Canada" },
        "capital": ["Ottawa"],
        "cca3": "CAN",
        "currencies": { "CAD": { "name": "Canadian dollar", "symbol": "$" } },
        "flags": { "png": "https://path-to-canadian-flag.png", "svg": "https://path-to-canadian-flag.svg" },
        "languages": { "eng": "English", "fra": "French" },
        "population": 37590000,
        "region": "Americas",
        "subregion": "North America"
    },
    {
        "name": { "common": "India", "official": "Republic of India" },
        "capital": ["New Delhi"],
        "cca3": "IND",
        "currencies": { "INR": { "name": "Indian rupee", "symbol": "₹" } },
        "flags": { "png": "https://path-to-indian-flag.png", "svg": "https://path-to-indian-flag.svg" },
        "languages": { "eng": "English", "hin": "Hindi" },
        "population": 1380004385,
        "region": "Asia",
        "subregion": "Southern Asia"
    },
    {
        "name": { "common": "Australia", "official": "Commonwealth of Australia" },
        "capital": ["Canberra"],
        "cca3": "AUS",
        "currencies": { "AUD": { "name": "Australian dollar", "symbol": "$" } },
        "flags": { "png": "https://path-to-australian-flag.png", "svg": "https://path-to-australian-flag.svg" },
        "languages": { "eng": "English" },
        "population": 25200000,
        "region": "Oceania",
        "subregion": "Australia and New Zealand"
    }
]"#;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

pub fn client_for(url: &str) -> CountriesClient {
    CountriesClient::new(url, Duration::from_secs(5)).unwrap()
}
