use crate::core::{AppError, Result, RoundingPolicy};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub invoicing: InvoicingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoicingConfig {
    /// Decimal places kept when totals are returned
    pub rounding_scale: u32,
}

impl InvoicingConfig {
    pub fn from_env() -> Result<Self> {
        Ok(InvoicingConfig {
            rounding_scale: env::var("INVOICE_ROUNDING_SCALE")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid INVOICE_ROUNDING_SCALE".to_string())
                })?,
        })
    }

    pub fn rounding_policy(&self) -> Result<RoundingPolicy> {
        RoundingPolicy::new(self.rounding_scale).map_err(AppError::Configuration)
    }
}

impl Default for InvoicingConfig {
    fn default() -> Self {
        Self {
            rounding_scale: RoundingPolicy::default().scale(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            invoicing: InvoicingConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        self.invoicing.rounding_policy()?;

        Ok(())
    }
}
