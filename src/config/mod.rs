use crate::core::{AppError, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// UAT environment; production merchants override via CONNECTIPS_URL
pub const DEFAULT_BASE_URL: &str = "https://uat.connectips.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// ConnectIPS merchant configuration
#[derive(Clone)]
pub struct ConnectIpsConfig {
    pub merchant_id: String,
    pub app_id: String,
    pub app_name: String,
    pub password: String,
    /// Filesystem path to the PEM-encoded RSA private key
    pub pem_path: PathBuf,
    pub base_url: String,
    /// Redirect targets for the hosted payment page; unused by the client itself
    pub success_url: Option<String>,
    pub failure_url: Option<String>,
    pub timeout_secs: u64,
}

impl ConnectIpsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a `CONNECTIPS_*` variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::configuration(format!("{} not set", key)))
        };

        let timeout_secs = match lookup("CONNECTIPS_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::configuration(format!("Invalid CONNECTIPS_TIMEOUT_SECS: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = ConnectIpsConfig {
            merchant_id: required("CONNECTIPS_MERCHANT_ID")?,
            app_id: required("CONNECTIPS_APP_ID")?,
            app_name: required("CONNECTIPS_APP_NAME")?,
            password: required("CONNECTIPS_PASSWORD")?,
            pem_path: PathBuf::from(required("CONNECTIPS_PEM_PATH")?),
            base_url: lookup("CONNECTIPS_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            success_url: lookup("CONNECTIPS_SUCCESS_URL"),
            failure_url: lookup("CONNECTIPS_FAILURE_URL"),
            timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("merchant_id", &self.merchant_id),
            ("app_id", &self.app_id),
            ("app_name", &self.app_name),
            ("password", &self.password),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!("{} cannot be empty", name)));
            }
        }

        if self.pem_path.as_os_str().is_empty() {
            return Err(AppError::configuration("pem_path cannot be empty"));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::configuration(format!(
                "base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::configuration(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for ConnectIpsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectIpsConfig")
            .field("merchant_id", &self.merchant_id)
            .field("app_id", &self.app_id)
            .field("app_name", &self.app_name)
            .field("password", &"<redacted>")
            .field("pem_path", &self.pem_path)
            .field("base_url", &self.base_url)
            .field("success_url", &self.success_url)
            .field("failure_url", &self.failure_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
