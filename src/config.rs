use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Implicit TLS from the first byte (port 465). STARTTLS otherwise.
    #[serde(default)]
    pub smtp_secure: bool,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_secure: false,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: None,
            to_address: None,
        }
    }
}

impl EmailConfig {
    /// Sender of relayed messages, the SMTP user unless overridden.
    pub fn sender(&self) -> &str {
        self.from_address
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(&self.smtp_username)
    }

    /// Inbox receiving relayed messages, the SMTP user unless overridden.
    pub fn recipient(&self) -> &str {
        self.to_address
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(&self.smtp_username)
    }

    pub fn has_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// Studio details shown on the contact section.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            contact_email: default_contact_email(),
            contact_phone: default_contact_phone(),
            location: default_location(),
        }
    }
}

fn default_site_name() -> String {
    "Valaidhalam".to_string()
}

fn default_contact_email() -> String {
    "valaidhalam03@gmail.com".to_string()
}

fn default_contact_phone() -> String {
    "+91 94877 39484".to_string()
}

fn default_location() -> String {
    "Tamil Nadu, India".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Plain SMTP_* environment variables (SMTP_HOST, SMTP_USER, ...)
    /// 2. Prefixed environment variables (VALAIDHALAM__EMAIL__SMTP_HOST, ...)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VALAIDHALAM")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("SMTP_HOST", "email.smtp_host"),
            ("SMTP_USER", "email.smtp_username"),
            ("SMTP_PASSWORD", "email.smtp_password"),
            ("SMTP_FROM", "email.from_address"),
            ("SMTP_TO", "email.to_address"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        if let Ok(port) = env::var("SMTP_PORT") {
            let port = port.parse::<u16>().map_err(|e| {
                ConfigError::Message(format!("SMTP_PORT must be a port number: {e}"))
            })?;
            builder = builder.set_override("email.smtp_port", i64::from(port))?;
        }

        if let Ok(secure) = env::var("SMTP_SECURE") {
            builder = builder.set_override("email.smtp_secure", secure == "true")?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.smtp_host.is_empty() {
            return Err("SMTP host must not be empty".to_string());
        }
        if self.email.smtp_port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }
        Ok(())
    }
}
