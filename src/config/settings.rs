use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub otel: OtelConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    pub key: Option<String>,
}

/// Outbound email dispatch and branding
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Email-dispatch endpoint receiving the composed request
    #[serde(default = "default_email_endpoint")]
    pub endpoint: String,
    /// Value of the `origin` header sent with every dispatch
    #[serde(default = "default_email_origin")]
    pub origin: String,
    /// Sender address used for both `from` and `replyTo`
    #[serde(default = "default_sender_email")]
    pub sender_email: String,
    /// Sender display name
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    /// Prefix joined with each item's `productImage` metafield
    #[serde(default = "default_product_image_base_url")]
    pub product_image_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtelConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_otel_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_sampling_ratio")]
    pub sampling_ratio: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_email_endpoint() -> String {
    "https://mq7b29mtd5.execute-api.ap-southeast-2.amazonaws.com/production/api/sendEmail"
        .to_string()
}

fn default_email_origin() -> String {
    "https://askbella.com.au".to_string()
}

fn default_sender_email() -> String {
    "orders@askbella.com.au".to_string()
}

fn default_sender_name() -> String {
    "askbella".to_string()
}

fn default_product_image_base_url() -> String {
    "https://askbella-product-images.s3-ap-southeast-2.amazonaws.com/".to_string()
}

fn default_otel_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_service_name() -> String {
    "order-email-service".to_string()
}

fn default_sampling_ratio() -> f64 {
    1.0
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8082)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // APP_SERVER__PORT, APP_EMAIL__ENDPOINT, APP_EMAIL__SENDER_EMAIL, APP_API__KEY, etc.
            // Double underscore separates sections since field names contain `_`.
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: default_email_endpoint(),
            origin: default_email_origin(),
            sender_email: default_sender_email(),
            sender_name: default_sender_name(),
            product_image_base_url: default_product_image_base_url(),
        }
    }
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_otel_endpoint(),
            service_name: default_service_name(),
            sampling_ratio: default_sampling_ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8082);
    }

    #[test]
    fn test_email_defaults() {
        let email = EmailConfig::default();
        assert_eq!(email.sender_email, "orders@askbella.com.au");
        assert_eq!(email.sender_name, "askbella");
        assert!(email.product_image_base_url.ends_with('/'));
    }

    #[test]
    fn test_log_format_deserialize() {
        let log: LogConfig = serde_json::from_str(r#"{"format":"json"}"#).unwrap();
        assert_eq!(log.format, LogFormat::Json);

        let log: LogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(log.format, LogFormat::Pretty);
    }
}
