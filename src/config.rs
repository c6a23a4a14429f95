use std::env;

use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;

use crate::error::ConfigError;

const SENDER_NAME: &str = "SENDER_NAME";
const SENDER_NAME_LEGACY: &str = "zulu";
const TOPIC_ARN: &str = "SNS_TOPIC_ARN";
const TOPIC_ARN_LEGACY: &str = "sns_topic_arn";

const DEFAULT_ENVIRONMENT: &str = "dev";
const DEFAULT_LOCAL_ENDPOINT: &str = "http://host.docker.internal:4566";

/// Settings read once at cold start and shared by every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interpolated into the message body. May be empty.
    pub sender_name: String,
    pub topic_arn: String,
    /// Value of `ENV`. `local` points the SDK at `local_endpoint`.
    pub environment: String,
    pub local_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sender_name = lookup(SENDER_NAME)
            .or_else(|| lookup(SENDER_NAME_LEGACY))
            .unwrap_or_else(|| {
                tracing::warn!(
                    var = SENDER_NAME,
                    "sender name is not set, messages will carry an empty sender"
                );
                String::new()
            });

        let topic_arn = lookup(TOPIC_ARN)
            .or_else(|| lookup(TOPIC_ARN_LEGACY))
            .filter(|arn| !arn.trim().is_empty())
            .ok_or(ConfigError::MissingVar(TOPIC_ARN))?;

        Ok(Config {
            sender_name,
            topic_arn,
            environment: lookup("ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            local_endpoint: lookup("LOCAL_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_LOCAL_ENDPOINT.to_string()),
        })
    }

    pub fn is_local(&self) -> bool {
        self.environment.eq("local")
    }
}

// If env `ENV` is set to be local, use config for local invocation.
// SDK retries are off: each invocation makes a single publish attempt.
pub async fn create_aws_config(config: &Config) -> aws_config::SdkConfig {
    let loader =
        aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

    if config.is_local() {
        // For `local` use
        // NOTE:
        // `LOCAL_ENDPOINT` should be reachable from inside the Lambda container.
        loader
            .endpoint_url(config.local_endpoint.clone())
            .load()
            .await
    } else {
        // For `production` use
        loader.load().await
    }
}
