//! Core library for the `advisor` weather and clothing CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather fetcher abstraction and its OpenWeather implementation
//! - Static clothing and icon lookups
//! - The session controller that owns the request lifecycle
//!
//! It is used by `advisor-cli`, but any other rendering surface can drive
//! a [`SessionController`] the same way.

pub mod advisory;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod geolocation;
pub mod model;
pub mod session;

pub use advisory::{ClothingAdvisory, DEFAULT_ICON, icon_for, suggest_clothing};
pub use config::{Config, OpenWeatherConfig};
pub use error::{FetchError, GeolocationError};
pub use fetcher::{OpenWeatherFetcher, WeatherFetcher, fetcher_from_config};
pub use geolocation::{FixedLocation, Geolocator};
pub use model::{Coordinates, QueryKind, WeatherObservation, WeatherQuery};
pub use session::{Phase, SessionController, SessionState};
