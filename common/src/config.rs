use crate::error::ConfigError;
use crate::logger::Logger;
use colored::Color;
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

fn logger() -> Logger {
    Logger::new("Config", Color::White)
}

/// Reads an environment variable, treating an empty value as unset.
pub fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads `key` from the environment, falling back to `default` when unset.
pub fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        logger().debug(format!("{key} not set, using default: {default}"));
        default.to_string()
    });
    parse_value(key, &raw)
}

pub fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a comma separated list of socket addresses.
pub fn parse_socket_addrs(key: &str, raw: &str) -> Result<Vec<SocketAddr>, ConfigError> {
    let addrs = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_value::<SocketAddr>(key, part))
        .collect::<Result<Vec<_>, _>>()?;

    if addrs.is_empty() {
        return Err(ConfigError::Invalid {
            key: key.to_string(),
            value: raw.to_string(),
            reason: "no addresses given".to_string(),
        });
    }
    Ok(addrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_reports_key_and_value() {
        let err = parse_value::<u16>("FOOD_PORT", "eighty").unwrap_err();
        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, "FOOD_PORT");
                assert_eq!(value, "eighty");
            }
        }
    }

    #[test]
    fn test_parse_socket_addrs_accepts_list() {
        let addrs = parse_socket_addrs("FOOD_SERVERS", "127.0.0.1:8080, 127.0.0.1:8081").unwrap();
        assert_eq!(addrs.len(), 2);
        assert_eq!(addrs[1].port(), 8081);
    }

    #[test]
    fn test_parse_socket_addrs_rejects_empty_and_garbage() {
        assert!(parse_socket_addrs("FOOD_SERVERS", " , ").is_err());
        assert!(parse_socket_addrs("FOOD_SERVERS", "localhost").is_err());
    }
}
