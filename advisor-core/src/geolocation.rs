//! The device-location capability consulted once at session start.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Coordinates, GeolocationError};

#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// A position known up front, e.g. from command-line flags or the configured home location.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedLocation(pub Option<Coordinates>);

impl FixedLocation {
    pub fn unavailable() -> Self {
        Self(None)
    }
}

#[async_trait]
impl Geolocator for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.0.ok_or(GeolocationError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_location_reports_its_coordinates() {
        let geo = FixedLocation(Some(Coordinates::new(48.85, 2.35)));
        assert_eq!(geo.current_position().await, Ok(Coordinates::new(48.85, 2.35)));
    }

    #[tokio::test]
    async fn empty_fixed_location_is_unavailable() {
        let geo = FixedLocation::unavailable();
        assert_eq!(geo.current_position().await, Err(GeolocationError::Unavailable));
    }
}
