use crate::{Config, FetchError, WeatherObservation, WeatherQuery};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherFetcher;

/// Issues exactly one request per call; no caching, no retry.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherObservation, FetchError>;
}

/// Construct the OpenWeather fetcher from config.
///
/// `api_key_override` (CLI flag or environment) wins over the key stored on disk.
pub fn fetcher_from_config(
    config: &Config,
    api_key_override: Option<&str>,
) -> anyhow::Result<OpenWeatherFetcher> {
    let api_key = match api_key_override.map(str::trim).filter(|k| !k.is_empty()) {
        Some(key) => key.to_owned(),
        None => config.api_key()?.to_owned(),
    };

    let fetcher = match config.endpoint() {
        Some(endpoint) => OpenWeatherFetcher::with_endpoint(api_key, endpoint.to_owned()),
        None => OpenWeatherFetcher::new(api_key),
    };

    Ok(fetcher)
}
