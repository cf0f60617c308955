use crate::app_config::{AppConfig, Environment};
use crate::geo::Coordinate;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or the viewer coordinate is
/// half-specified.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or the viewer coordinate is
/// half-specified.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, raw: &str| -> Result<f64, ConfigError> {
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("UTSAV_ENV", "development"));
    let api_base_url = or_default("UTSAV_API_BASE_URL", "http://localhost:8080/api");
    let api_token = lookup("UTSAV_API_TOKEN").ok();
    let request_timeout_secs = parse_u64("UTSAV_REQUEST_TIMEOUT_SECS", "30")?;
    let log_level = or_default("UTSAV_LOG_LEVEL", "info");

    // The viewer coordinate is all-or-nothing: one half without the other
    // is a misconfiguration, not a default.
    let viewer = match (lookup("UTSAV_LAT").ok(), lookup("UTSAV_LON").ok()) {
        (Some(lat), Some(lon)) => Some(Coordinate {
            lat: parse_f64("UTSAV_LAT", &lat)?,
            lon: parse_f64("UTSAV_LON", &lon)?,
        }),
        (Some(_), None) => return Err(ConfigError::MissingEnvVar("UTSAV_LON".to_string())),
        (None, Some(_)) => return Err(ConfigError::MissingEnvVar("UTSAV_LAT".to_string())),
        (None, None) => None,
    };

    Ok(AppConfig {
        env,
        api_base_url,
        api_token,
        request_timeout_secs,
        log_level,
        viewer,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn defaults_apply_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.api_base_url, "http://localhost:8080/api");
        assert!(cfg.api_token.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.viewer.is_none());
    }

    #[test]
    fn base_url_and_token_override() {
        let mut map = HashMap::new();
        map.insert("UTSAV_API_BASE_URL", "https://api.utsav.example/api");
        map.insert("UTSAV_API_TOKEN", "secret-token");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_base_url, "https://api.utsav.example/api");
        assert_eq!(cfg.api_token.as_deref(), Some("secret-token"));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("UTSAV_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "UTSAV_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(UTSAV_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn viewer_requires_both_coordinates() {
        let mut map = HashMap::new();
        map.insert("UTSAV_LAT", "19.0760");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "UTSAV_LON"),
            "expected MissingEnvVar(UTSAV_LON), got: {result:?}"
        );
    }

    #[test]
    fn viewer_parses_when_both_present() {
        let mut map = HashMap::new();
        map.insert("UTSAV_LAT", "19.0760");
        map.insert("UTSAV_LON", "72.8777");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let viewer = cfg.viewer.expect("viewer should be set");
        assert!((viewer.lat - 19.0760).abs() < 1e-9);
        assert!((viewer.lon - 72.8777).abs() < 1e-9);
    }

    #[test]
    fn invalid_latitude_is_rejected() {
        let mut map = HashMap::new();
        map.insert("UTSAV_LAT", "north");
        map.insert("UTSAV_LON", "72.8777");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "UTSAV_LAT"),
            "expected InvalidEnvVar(UTSAV_LAT), got: {result:?}"
        );
    }
}
