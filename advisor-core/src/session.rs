//! Request lifecycle for the single-screen advisor.
//!
//! [`SessionController`] is the only writer of [`SessionState`]. A fetch is
//! split into [`SessionController::begin`] and [`SessionController::complete`]
//! so a host can drive the network call itself; [`SessionController::submit`]
//! and [`SessionController::initialize`] do both halves in one call.

use crate::{
    ClothingAdvisory, FetchError, Geolocator, WeatherFetcher, WeatherObservation, WeatherQuery,
    advisory::suggest_clothing,
};

pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch weather data";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub city_input: String,
    pub observation: Option<WeatherObservation>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

impl SessionState {
    /// An error outranks a stale observation: after a coordinate failure both
    /// are present and the session is in `Failure`.
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error_message.is_some() {
            Phase::Failure
        } else if self.observation.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

/// Proof that the controller accepted a fetch and is now `Loading`.
#[derive(Debug)]
#[must_use = "an accepted fetch must be passed back to `complete`"]
pub struct PendingFetch {
    query: WeatherQuery,
}

impl PendingFetch {
    pub fn query(&self) -> &WeatherQuery {
        &self.query
    }
}

#[derive(Debug)]
pub struct SessionController<F> {
    fetcher: F,
    state: SessionState,
}

impl<F: WeatherFetcher> SessionController<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Clothing advice for the displayed observation, recomputed on every call.
    pub fn advisory(&self) -> Option<ClothingAdvisory> {
        self.state
            .observation
            .as_ref()
            .map(|obs| suggest_clothing(obs.temperature_c))
    }

    pub fn set_city_input(&mut self, input: impl Into<String>) {
        self.state.city_input = input.into();
    }

    /// Startup: ask the geolocation capability for a fix and fetch by coordinates.
    ///
    /// A denied or unavailable location leaves the session `Idle` without an error.
    pub async fn initialize<G>(&mut self, geolocator: &G) -> Phase
    where
        G: Geolocator + ?Sized,
    {
        match geolocator.current_position().await {
            Ok(coords) => self.run(WeatherQuery::ByCoordinates(coords)).await,
            Err(e) => tracing::debug!(error = %e, "location unavailable, waiting for a city"),
        }
        self.phase()
    }

    /// Fetch by the current city input. Blank input is a no-op.
    pub async fn submit(&mut self) -> Phase {
        match WeatherQuery::by_name(&self.state.city_input) {
            Some(query) => self.run(query).await,
            None => tracing::debug!("ignoring empty city submission"),
        }
        self.phase()
    }

    async fn run(&mut self, query: WeatherQuery) {
        if let Some(pending) = self.begin(query) {
            let result = self.fetcher.fetch(pending.query()).await;
            self.complete(pending, result);
        }
    }

    /// Enter `Loading` for `query`, clearing any previous error.
    ///
    /// Returns `None` while another fetch is outstanding; the new request is dropped.
    pub fn begin(&mut self, query: WeatherQuery) -> Option<PendingFetch> {
        if self.state.is_loading {
            tracing::debug!(kind = %query.kind(), "fetch already in flight, dropping request");
            return None;
        }
        self.state.is_loading = true;
        self.state.error_message = None;
        Some(PendingFetch { query })
    }

    /// Leave `Loading` with the outcome of the fetch started by `begin`.
    pub fn complete(
        &mut self,
        pending: PendingFetch,
        result: Result<WeatherObservation, FetchError>,
    ) {
        self.state.is_loading = false;

        match (pending.query, result) {
            (query, Ok(observation)) => {
                if let WeatherQuery::ByCoordinates(_) = query {
                    self.state.city_input = observation.location_name.clone();
                }
                self.state.observation = Some(observation);
            }
            (WeatherQuery::ByName(city), Err(e)) => {
                tracing::info!(%city, error = %e, "city lookup failed");
                self.state.error_message = Some(CITY_NOT_FOUND_MESSAGE.to_string());
                self.state.observation = None;
            }
            (WeatherQuery::ByCoordinates(coords), Err(e)) => {
                tracing::info!(
                    latitude = coords.latitude,
                    longitude = coords.longitude,
                    error = %e,
                    "weather lookup by location failed"
                );
                // The last observation stays on screen next to the error.
                self.state.error_message = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }
}
