//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use backend_storage::shopping_cart_item::ReadConsistency;
use strum::{Display, EnumString};

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

/// Document store the shopping cart items are persisted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum StorageBackend {
    /// `DynamoDB` table
    #[strum(serialize = "dynamodb")]
    DynamoDb,
    /// Embedded in-memory store, contents are lost on restart
    #[strum(serialize = "memory")]
    InMemory,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the `DynamoDB` table name for shopping cart items
    ///
    /// # Panics
    ///
    /// Panics if the `SHOPPING_CART_TABLE_NAME` environment variable is not set
    /// outside of development
    #[must_use]
    pub fn shopping_cart_table_name(&self) -> String {
        match self {
            Self::Production | Self::Staging => env::var("SHOPPING_CART_TABLE_NAME")
                .expect("SHOPPING_CART_TABLE_NAME environment variable is not set"),
            Self::Development => env::var("SHOPPING_CART_TABLE_NAME")
                .unwrap_or_else(|_| "shopping-cart-items".to_string()),
        }
    }

    /// Read consistency for point reads and scans, from `READ_CONSISTENCY`
    ///
    /// # Panics
    ///
    /// Panics if `READ_CONSISTENCY` is set to something other than `strong` or `eventual`
    #[must_use]
    pub fn read_consistency(&self) -> ReadConsistency {
        env::var("READ_CONSISTENCY").map_or_else(
            |_| ReadConsistency::default(),
            |val| {
                val.trim()
                    .parse()
                    .unwrap_or_else(|_| panic!("Invalid read consistency: {val}"))
            },
        )
    }

    /// Document store backend, from `STORAGE_BACKEND`
    ///
    /// # Panics
    ///
    /// Panics if `STORAGE_BACKEND` is set to something other than `dynamodb` or `memory`
    #[must_use]
    pub fn storage_backend(&self) -> StorageBackend {
        env::var("STORAGE_BACKEND").map_or(StorageBackend::DynamoDb, |val| {
            val.trim()
                .parse()
                .unwrap_or_else(|_| panic!("Invalid storage backend: {val}"))
        })
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    ///
    /// `DYNAMODB_ENDPOINT_URL` takes precedence in every environment.
    #[must_use]
    pub fn override_aws_endpoint_url(&self) -> Option<String> {
        env::var("DYNAMODB_ENDPOINT_URL").ok().or_else(|| match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development => Some("http://localhost:4566".to_string()),
        })
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }
}
