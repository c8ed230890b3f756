pub mod mapbox;

#[cfg(test)]
pub mod scripted;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::{
    entities::{Coordinates, RoutePath},
    error::{invalid_input_error, Error},
};

pub use mapbox::MapboxDirections;

/// Travel mode of a directions request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Walking,
    Cycling,
    Driving,
}

impl Profile {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Driving => "driving",
        }
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" => Ok(Self::Walking),
            "cycling" => Ok(Self::Cycling),
            "driving" => Ok(Self::Driving),
            _ => Err(invalid_input_error()),
        }
    }
}

/// A routing service.
///
/// Implementations send exactly one request per call and report any failure,
/// including an empty answer, as a route-unavailable error.
#[async_trait]
pub trait Directions {
    async fn route(&self, origin: Coordinates, destination: Coordinates)
        -> Result<RoutePath, Error>;
}

#[async_trait]
impl<D> Directions for Arc<D>
where
    D: Directions + Send + Sync + ?Sized,
{
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoutePath, Error> {
        (**self).route(origin, destination).await
    }
}
