//! Runtime configuration read from the environment (and `.env` via dotenvy)

use std::env;
use std::net::SocketAddr;

use crate::format::NumberLocale;
use crate::pricing::TariffPolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// In-memory storage is used when unset
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// Policy applied to bookings that do not name one
    pub tariff_policy: TariffPolicy,
    pub number_locale: NumberLocale,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_or(get("BIND_ADDR"), "BIND_ADDR", DEFAULT_BIND_ADDR, |raw| {
            raw.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError {
                    key: "DATABASE_MAX_CONNECTIONS",
                    message: format!("expected a positive integer, got '{raw}'"),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let tariff_policy = match get("TARIFF_POLICY") {
            Some(raw) => raw.parse::<TariffPolicy>().map_err(|e| ConfigError {
                key: "TARIFF_POLICY",
                message: e.to_string(),
            })?,
            None => TariffPolicy::default(),
        };

        let number_locale = match get("NUMBER_LOCALE") {
            Some(raw) => raw.parse::<NumberLocale>().map_err(|e| ConfigError {
                key: "NUMBER_LOCALE",
                message: e.to_string(),
            })?,
            None => NumberLocale::default(),
        };

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            max_connections,
            tariff_policy,
            number_locale,
        })
    }
}

fn parse_or<T, P>(
    raw: Option<String>,
    key: &'static str,
    default: &str,
    parse: P,
) -> Result<T, ConfigError>
where
    P: Fn(&str) -> Result<T, String>,
{
    let raw = raw.unwrap_or_else(|| default.to_string());
    parse(raw.trim()).map_err(|message| ConfigError { key, message })
}
