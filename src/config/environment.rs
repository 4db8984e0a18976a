// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, AI service credentials, lookup timeouts, and CORS origins from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use std::env;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Environment type for logging detail and startup checks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Generative AI service settings
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key, never logged
    pub api_key: String,
    /// Model used for text and vision generation
    pub model: String,
    /// REST root, overridable for tests and proxies
    pub base_url: String,
    /// Upper bound on a single generation call
    pub request_timeout: Duration,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl GeminiConfig {
    /// Settings for a key with every other value at its default
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: defaults::GEMINI_MODEL.to_owned(),
            base_url: defaults::GEMINI_API_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(defaults::AI_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Barcode provider settings
#[derive(Debug, Clone)]
pub struct BarcodeLookupConfig {
    /// Open Food Facts REST root
    pub open_food_facts_base_url: String,
    /// UPC Item DB REST root
    pub upc_item_db_base_url: String,
    /// Per-provider bound; expiry counts as not found
    pub timeout: Duration,
}

impl Default for BarcodeLookupConfig {
    fn default() -> Self {
        Self {
            open_food_facts_base_url: defaults::OPEN_FOOD_FACTS_BASE_URL.to_owned(),
            upc_item_db_base_url: defaults::UPC_ITEM_DB_BASE_URL.to_owned(),
            timeout: Duration::from_secs(defaults::BARCODE_LOOKUP_TIMEOUT_SECS),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Origins allowed to call the API; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS
                .iter()
                .map(|origin| (*origin).to_owned())
                .collect(),
        }
    }
}

impl CorsConfig {
    /// Whether any origin is accepted
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// AI service
    pub gemini: GeminiConfig,
    /// Barcode providers
    pub barcode: BarcodeLookupConfig,
    /// CORS allow-list
    pub cors: CorsConfig,
    /// Request body limit in bytes
    pub max_request_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            port: defaults::PORT,
            environment: Environment::default(),
            gemini: GeminiConfig::with_api_key(String::new()),
            barcode: BarcodeLookupConfig::default(),
            cors: CorsConfig::default(),
            max_request_body_bytes: defaults::MAX_REQUEST_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when `GEMINI_API_KEY` is unset and
    /// `ConfigInvalid` when a numeric variable does not parse or fails validation.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let api_key = env::var(env_vars::GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::ConfigMissing,
                    format!("{} environment variable not set", env_vars::GEMINI_API_KEY),
                )
            })?;

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            port: parse_env_or(env_vars::PORT, defaults::PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            gemini: GeminiConfig {
                api_key,
                model: env_var_or(env_vars::GEMINI_MODEL, defaults::GEMINI_MODEL),
                base_url: trim_base_url(&env_var_or(
                    env_vars::GEMINI_API_BASE_URL,
                    defaults::GEMINI_API_BASE_URL,
                )),
                request_timeout: Duration::from_secs(parse_env_or(
                    env_vars::AI_REQUEST_TIMEOUT_SECS,
                    defaults::AI_REQUEST_TIMEOUT_SECS,
                )?),
            },
            barcode: BarcodeLookupConfig {
                open_food_facts_base_url: trim_base_url(&env_var_or(
                    env_vars::OPEN_FOOD_FACTS_BASE_URL,
                    defaults::OPEN_FOOD_FACTS_BASE_URL,
                )),
                upc_item_db_base_url: trim_base_url(&env_var_or(
                    env_vars::UPC_ITEM_DB_BASE_URL,
                    defaults::UPC_ITEM_DB_BASE_URL,
                )),
                timeout: Duration::from_secs(parse_env_or(
                    env_vars::BARCODE_LOOKUP_TIMEOUT_SECS,
                    defaults::BARCODE_LOOKUP_TIMEOUT_SECS,
                )?),
            },
            cors: env::var(env_vars::CORS_ALLOWED_ORIGINS)
                .ok()
                .map(|raw| parse_origins(&raw))
                .filter(|origins| !origins.is_empty())
                .map_or_else(CorsConfig::default, |allowed_origins| CorsConfig {
                    allowed_origins,
                }),
            max_request_body_bytes: parse_env_or(
                env_vars::MAX_REQUEST_BODY_BYTES,
                defaults::MAX_REQUEST_BODY_BYTES,
            )?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero port, a zero timeout, or a zero body limit.
    pub fn validate(&self) -> AppResult<()> {
        if self.port == 0 {
            return Err(config_invalid(format!("{} must be non-zero", env_vars::PORT)));
        }
        if self.gemini.request_timeout.is_zero() {
            return Err(config_invalid(format!(
                "{} must be at least 1 second",
                env_vars::AI_REQUEST_TIMEOUT_SECS
            )));
        }
        if self.barcode.timeout.is_zero() {
            return Err(config_invalid(format!(
                "{} must be at least 1 second",
                env_vars::BARCODE_LOOKUP_TIMEOUT_SECS
            )));
        }
        if self.max_request_body_bytes == 0 {
            return Err(config_invalid(format!(
                "{} must be non-zero",
                env_vars::MAX_REQUEST_BODY_BYTES
            )));
        }
        if self.cors.allows_any() && self.environment.is_production() {
            warn!("CORS allows any origin in a production environment");
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "EcoLens API Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Gemini Model: {}\n\
             - Gemini API Key: {}\n\
             - AI Timeout: {}s\n\
             - Barcode Lookup Timeout: {}s\n\
             - CORS Origins: {}\n\
             - Max Body: {} bytes",
            self.host,
            self.port,
            self.environment,
            self.gemini.model,
            if self.gemini.api_key.is_empty() {
                "Missing"
            } else {
                "Configured"
            },
            self.gemini.request_timeout.as_secs(),
            self.barcode.timeout.as_secs(),
            self.cors.allowed_origins.len(),
            self.max_request_body_bytes,
        )
    }
}

fn config_invalid(message: String) -> AppError {
    AppError::new(ErrorCode::ConfigInvalid, message)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| config_invalid(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
