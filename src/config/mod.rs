//! Configuración del servidor leída desde variables de entorno (y `.env` si
//! existe).
//!
//! - `ATTENDANCE_BIND`: dirección host:port (por defecto `127.0.0.1:8080`)
//! - `ATTENDANCE_CLASSES_PER_DAY`: clases por día (por defecto 6, mínimo 1)
//! - `ATTENDANCE_CORS_ORIGIN`: origen permitido; sin valor se usa CORS permisivo

use std::env;

use crate::calculator::DEFAULT_CLASSES_PER_DAY;
use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind: String,
    pub classes_per_day: u32,
    pub cors_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind: DEFAULT_BIND.to_string(),
            classes_per_day: DEFAULT_CLASSES_PER_DAY,
            cors_origin: None,
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda inyectable, para
    /// poder probar sin tocar el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let bind = match non_empty("ATTENDANCE_BIND") {
            Some(b) => {
                let port_ok = b
                    .rsplit_once(':')
                    .map(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok())
                    .unwrap_or(false);
                if !port_ok {
                    return Err(ConfigError::InvalidBind(b));
                }
                b
            }
            None => DEFAULT_BIND.to_string(),
        };

        let classes_per_day = match non_empty("ATTENDANCE_CLASSES_PER_DAY") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidClassesPerDay(raw)),
            },
            None => DEFAULT_CLASSES_PER_DAY,
        };

        Ok(AppConfig {
            bind,
            classes_per_day,
            cors_origin: non_empty("ATTENDANCE_CORS_ORIGIN"),
        })
    }
}
