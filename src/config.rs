use serde::{Deserialize, Serialize};
use std::env;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::infrastructure::trending_index::DEFAULT_MIN_LIKES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub trending: TrendingConfig,
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    /// Zero is rejected when parsing
    pub min_likes: NonZeroU32,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            min_likes: DEFAULT_MIN_LIKES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub users: i64,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            trending: TrendingConfig {
                min_likes: parse_or(&lookup, "SOCIAL_MIN_LIKES_TRENDING", DEFAULT_MIN_LIKES)?,
            },
            logging: LoggingConfig {
                filter: lookup("SOCIAL_LOG_FILTER")
                    .or_else(|| lookup("RUST_LOG"))
                    .unwrap_or_else(|| "info".to_string()),
            },
            demo: DemoConfig {
                users: parse_or(&lookup, "SOCIAL_DEMO_USERS", 3)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::Configuration(format!("{} has invalid value {:?}", key, raw))
        }),
        None => Ok(default),
    }
}
