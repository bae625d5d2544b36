//! Locating the user for attendance punches.
//!
//! A high-accuracy fix is tried first; any failure other than missing
//! support is retried once at low accuracy with a longer timeout.

mod browser;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError};

pub use browser::BrowserPositionSource;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres.
    pub accuracy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

pub const HIGH_ACCURACY: PositionRequest = PositionRequest {
    high_accuracy: true,
    timeout_ms: 5_000,
    maximum_age_ms: 0,
};

pub const LOW_ACCURACY: PositionRequest = PositionRequest {
    high_accuracy: false,
    timeout_ms: 10_000,
    maximum_age_ms: 0,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("Geolocation not supported")]
    Unsupported,
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Position unavailable")]
    Unavailable,
    #[error("Timed out while locating")]
    Timeout,
    #[error("Geolocation failed: {0}")]
    Other(String),
}

impl GeoError {
    /// Text for the toast shown when locating is abandoned.
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::Unsupported => "Geolocation not supported",
            _ => "Unable to retrieve location.",
        }
    }

    pub(crate) fn from_code(code: u16, message: Option<String>) -> Self {
        match code {
            1 => GeoError::PermissionDenied,
            2 => GeoError::Unavailable,
            3 => GeoError::Timeout,
            _ => GeoError::Other(message.unwrap_or_else(|| format!("code {}", code))),
        }
    }
}

#[async_trait(?Send)]
pub trait PositionSource {
    fn is_supported(&self) -> bool;

    async fn current_position(&self, request: PositionRequest) -> Result<Coordinates, GeoError>;
}

#[async_trait(?Send)]
pub trait AddressResolver {
    async fn resolve_address(&self, coords: &Coordinates) -> Result<String, ApiError>;
}

#[async_trait(?Send)]
impl AddressResolver for ApiClient {
    async fn resolve_address(&self, coords: &Coordinates) -> Result<String, ApiError> {
        self.reverse_geocode(coords.latitude, coords.longitude)
            .await
    }
}

/// Coordinates plus the place name shown to the user and sent with the punch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub coords: Coordinates,
    pub address: String,
}

pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{:.6}, {:.6}", latitude, longitude)
}

/// OpenStreetMap embed centred on the fix, roughly a city block across.
pub fn map_embed_url(coords: &Coordinates) -> String {
    const SPAN: f64 = 0.003;
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.6}%2C{:.6}%2C{:.6}%2C{:.6}&layer=mapnik&marker={:.6}%2C{:.6}",
        coords.longitude - SPAN,
        coords.latitude - SPAN,
        coords.longitude + SPAN,
        coords.latitude + SPAN,
        coords.latitude,
        coords.longitude
    )
}

pub async fn locate<S>(source: &S) -> Result<Coordinates, GeoError>
where
    S: PositionSource + ?Sized,
{
    if !source.is_supported() {
        return Err(GeoError::Unsupported);
    }
    match source.current_position(HIGH_ACCURACY).await {
        Ok(coords) => Ok(coords),
        Err(GeoError::Unsupported) => Err(GeoError::Unsupported),
        Err(err) => {
            log::warn!("high accuracy position failed ({}); retrying at low accuracy", err);
            source.current_position(LOW_ACCURACY).await
        }
    }
}

/// Place name for `coords`; falls back to the formatted coordinates.
pub async fn describe<R>(resolver: &R, coords: &Coordinates) -> String
where
    R: AddressResolver + ?Sized,
{
    match resolver.resolve_address(coords).await {
        Ok(address) if !address.trim().is_empty() => address,
        Ok(_) => format_coordinates(coords.latitude, coords.longitude),
        Err(err) => {
            log::warn!("reverse geocoding failed: {}", err);
            format_coordinates(coords.latitude, coords.longitude)
        }
    }
}

pub async fn acquire_fix<S, R>(source: &S, resolver: &R) -> Result<LocationFix, GeoError>
where
    S: PositionSource + ?Sized,
    R: AddressResolver + ?Sized,
{
    let coords = locate(source).await?;
    let address = describe(resolver, &coords).await;
    Ok(LocationFix { coords, address })
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays scripted answers and records what was asked.
    pub struct ScriptedSource {
        pub supported: bool,
        answers: RefCell<VecDeque<Result<Coordinates, GeoError>>>,
        pub requests: RefCell<Vec<PositionRequest>>,
    }

    impl ScriptedSource {
        pub fn new(answers: Vec<Result<Coordinates, GeoError>>) -> Self {
            Self {
                supported: true,
                answers: RefCell::new(answers.into()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn unsupported() -> Self {
            Self {
                supported: false,
                ..Self::new(Vec::new())
            }
        }
    }

    #[async_trait(?Send)]
    impl PositionSource for ScriptedSource {
        fn is_supported(&self) -> bool {
            self.supported
        }

        async fn current_position(
            &self,
            request: PositionRequest,
        ) -> Result<Coordinates, GeoError> {
            self.requests.borrow_mut().push(request);
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(GeoError::Unavailable))
        }
    }

    pub struct FixedResolver(pub Result<String, ApiError>);

    #[async_trait(?Send)]
    impl AddressResolver for FixedResolver {
        async fn resolve_address(&self, _coords: &Coordinates) -> Result<String, ApiError> {
            self.0.clone()
        }
    }

    pub fn coords() -> Coordinates {
        Coordinates {
            latitude: 12.971599,
            longitude: 77.594566,
            accuracy: 18.0,
        }
    }
}
