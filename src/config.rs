use dotenv::dotenv;
use std::{env, net::SocketAddr, str::FromStr};

use crate::{
    entities::Coordinates,
    error::Error,
    external::Profile,
};

/// Scheme and host of the Directions API.
pub const DEFAULT_API_BASE: &str = "https://api.mapbox.com";
pub const DEFAULT_STYLE_URL: &str = "mapbox://styles/drissdrdoxi/cl8owuj4b001q14ph74dfszi9";
/// Main entrance of the zoo, where every walking route begins.
pub const DEFAULT_START: Coordinates = Coordinates::new(-6.894425, 33.955313);

#[derive(Clone, Debug)]
pub struct Config {
    pub access_token: String,
    pub api_base: String,
    pub style_url: String,
    pub profile: Profile,
    pub start: Coordinates,
    pub bind: SocketAddr,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    /// Only `MAPBOX_ACCESS_TOKEN` is required.
    pub fn from_env() -> Result<Self, Error> {
        dotenv().ok();

        let access_token = env::var("MAPBOX_ACCESS_TOKEN")?;

        Ok(Self::with_overrides(access_token, |key| env::var(key).ok()))
    }

    /// Builds a config from `var`, falling back to defaults for missing or
    /// unparseable values.
    pub fn with_overrides<F>(access_token: String, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str| var(key).and_then(|s| s.trim().parse::<f64>().ok());

        Config {
            access_token,
            api_base: var("MAPBOX_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into()),
            style_url: var("MAPBOX_STYLE_URL").unwrap_or_else(|| DEFAULT_STYLE_URL.into()),
            profile: var("DIRECTIONS_PROFILE")
                .and_then(|s| Profile::from_str(&s).ok())
                .unwrap_or_default(),
            start: Coordinates::new(
                parsed("ZOO_START_LNG").unwrap_or(DEFAULT_START.lng),
                parsed("ZOO_START_LAT").unwrap_or(DEFAULT_START.lat),
            ),
            bind: var("BIND")
                .and_then(|s| s.parse::<SocketAddr>().ok())
                .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000))),
        }
    }
}

#[test]
fn defaults_apply_when_unset() {
    let config = Config::with_overrides("pk.test".into(), |_| None);

    assert_eq!(config.api_base, "https://api.mapbox.com");
    assert_eq!(config.profile, Profile::Walking);
    assert_eq!(config.start, DEFAULT_START);
    assert_eq!(config.bind, SocketAddr::from(([127, 0, 0, 1], 3000)));
}

#[test]
fn overrides_are_parsed_and_bad_values_ignored() {
    let config = Config::with_overrides("pk.test".into(), |key| match key {
        "DIRECTIONS_PROFILE" => Some("cycling".into()),
        "ZOO_START_LNG" => Some("-6.9".into()),
        "ZOO_START_LAT" => Some("north".into()),
        "BIND" => Some("0.0.0.0:8080".into()),
        _ => None,
    });

    assert_eq!(config.profile, Profile::Cycling);
    assert_eq!(config.start, Coordinates::new(-6.9, DEFAULT_START.lat));
    assert_eq!(config.bind, SocketAddr::from(([0, 0, 0, 0], 8080)));
}
