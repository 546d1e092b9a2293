use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{FetchError, WeatherObservation, WeatherQuery};

use super::WeatherFetcher;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherFetcher {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherFetcher {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_string())
    }

    /// Point the fetcher at a different current-weather endpoint (self-hosted proxy, test server).
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            http: Client::new(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Query string for one current-weather request. Always metric, always authenticated.
pub fn query_params(query: &WeatherQuery, api_key: &str) -> Vec<(&'static str, String)> {
    let mut params = match query {
        WeatherQuery::ByCoordinates(coords) => vec![
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
        ],
        WeatherQuery::ByName(city) => vec![("q", city.clone())],
    };
    params.push(("units", "metric".to_string()));
    params.push(("appid", api_key.to_string()));
    params
}

#[async_trait]
impl WeatherFetcher for OpenWeatherFetcher {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherObservation, FetchError> {
        let kind = query.kind();
        tracing::debug!(%kind, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&query_params(query, &self.api_key))
            .send()
            .await
            .map_err(FetchError::from)
            .inspect_err(|e| tracing::warn!(%kind, error = %e, "OpenWeather request failed"))?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%kind, "OpenWeather found no matching location");
            return Err(FetchError::NotFound);
        }

        if !status.is_success() {
            tracing::warn!(%kind, %status, "OpenWeather returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        let observation = parsed.into_observation()?;

        tracing::debug!(
            %kind,
            location = %observation.location_name,
            temperature_c = observation.temperature_c,
            "received current weather"
        );

        Ok(observation)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    fn into_observation(self) -> Result<WeatherObservation, FetchError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Decode("response contained no weather conditions".into()))?;

        Ok(WeatherObservation {
            location_name: self.name,
            country_code: self.sys.country,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.speed,
            condition_main: condition.main,
            condition_description: condition.description,
            observed_at: self.dt.and_then(unix_to_utc),
        })
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
