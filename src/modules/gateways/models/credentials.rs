use std::fmt;

use crate::config::ConnectIpsConfig;
use crate::modules::gateways::services::signer::MessageSigner;

/// Merchant identity used to sign and authenticate every gateway request
///
/// Built once when the client is constructed and never mutated afterwards,
/// so a single instance can be shared across concurrent calls.
pub struct GatewayCredentials {
    pub merchant_id: String,
    pub app_id: String,
    pub app_name: String,
    /// HTTP Basic password paired with `app_id`
    pub password: String,
    /// Holds the parsed RSA private key
    pub signer: MessageSigner,
    /// Gateway root, without a trailing slash
    pub base_url: String,
}

impl GatewayCredentials {
    pub fn new(
        merchant_id: impl Into<String>,
        app_id: impl Into<String>,
        app_name: impl Into<String>,
        password: impl Into<String>,
        signer: MessageSigner,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            merchant_id: merchant_id.into(),
            app_id: app_id.into(),
            app_name: app_name.into(),
            password: password.into(),
            signer,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Take identity and base URL from `config`, pairing them with an
    /// already-loaded signer
    pub fn from_config(config: &ConnectIpsConfig, signer: MessageSigner) -> Self {
        Self::new(
            config.merchant_id.as_str(),
            config.app_id.as_str(),
            config.app_name.as_str(),
            config.password.as_str(),
            signer,
            config.base_url.as_str(),
        )
    }

    /// Absolute URL for a gateway path such as `/connectipswebws/api/creditor/validatetxn`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("merchant_id", &self.merchant_id)
            .field("app_id", &self.app_id)
            .field("app_name", &self.app_name)
            .field("password", &"<redacted>")
            .field("signer", &self.signer)
            .field("base_url", &self.base_url)
            .finish()
    }
}
