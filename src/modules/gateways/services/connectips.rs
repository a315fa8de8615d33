use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use super::gateway_trait::PaymentGateway;
use super::key_loader;
use super::messages::{initiation_message, lookup_message};
use super::signer::MessageSigner;
use crate::config::ConnectIpsConfig;
use crate::core::timezone::format_txn_date;
use crate::core::{AppError, GatewayFailure, Result};
use crate::modules::gateways::models::{
    GatewayCredentials, GatewayResponse, InitiationFields, SignedInitiationPayload,
    TransactionRequest, DEFAULT_CURRENCY,
};

pub const VALIDATE_TXN_PATH: &str = "/connectipswebws/api/creditor/validatetxn";
pub const TXN_DETAIL_PATH: &str = "/connectipswebws/api/creditor/gettxndetail";

/// ConnectIPS gateway client
///
/// Builds signed initiation payloads and performs the two authenticated
/// lookup calls (validate and transaction detail). Every call is a single
/// request/response exchange with no retries.
pub struct ConnectIpsClient {
    client: Client,
    credentials: GatewayCredentials,
}

/// JSON body shared by the validate and detail endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    merchant_id: &'a str,
    app_id: &'a str,
    reference_id: &'a str,
    txn_amt: u64,
    token: String,
}

impl ConnectIpsClient {
    /// Create a client from configuration, loading the private key from
    /// `config.pem_path`. Fails fast if the key cannot be loaded.
    pub fn new(config: &ConnectIpsConfig) -> Result<Self> {
        config.validate()?;

        let private_key = key_loader::load(&config.pem_path)?;
        let credentials = GatewayCredentials::from_config(config, MessageSigner::new(private_key));

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("connectips-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            merchant_id = %credentials.merchant_id,
            app_id = %credentials.app_id,
            base_url = %credentials.base_url,
            "ConnectIPS client initialized"
        );

        Ok(Self::with_http_client(credentials, client))
    }

    /// Create a client from prepared credentials and an HTTP client
    pub fn with_http_client(credentials: GatewayCredentials, client: Client) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub fn credentials(&self) -> &GatewayCredentials {
        &self.credentials
    }

    /// Resolve defaults for `request` against `now`
    pub fn initiation_fields(
        &self,
        request: &TransactionRequest,
        now: DateTime<Utc>,
    ) -> InitiationFields {
        let creds = &self.credentials;
        InitiationFields {
            merchant_id: creds.merchant_id.clone(),
            app_id: creds.app_id.clone(),
            app_name: creds.app_name.clone(),
            txn_id: request.transaction_id.clone(),
            txn_date: request
                .transaction_date
                .clone()
                .unwrap_or_else(|| format_txn_date(now)),
            txn_currency: request
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            txn_amount: request.amount,
            reference_id: request.reference_id.clone(),
            remarks: request.remarks.clone(),
            particulars: request.particulars.clone(),
        }
    }

    /// The exact string signed for `validate_payment` and `get_transaction_details`
    pub fn lookup_message(&self, transaction_id: &str, amount: u64) -> String {
        lookup_message(
            &self.credentials.merchant_id,
            &self.credentials.app_id,
            transaction_id,
            amount,
        )
    }

    async fn post_lookup(
        &self,
        path: &'static str,
        transaction_id: &str,
        amount: u64,
    ) -> Result<GatewayResponse> {
        let creds = &self.credentials;

        let message = self.lookup_message(transaction_id, amount);
        let token = creds.signer.token_for_message(&message)?;
        debug!(endpoint = path, message_len = message.len(), "Signed lookup message");

        let request = LookupRequest {
            merchant_id: &creds.merchant_id,
            app_id: &creds.app_id,
            reference_id: transaction_id,
            txn_amt: amount,
            token,
        };

        info!(
            endpoint = path,
            reference_id = %transaction_id,
            amount,
            "Sending ConnectIPS request"
        );

        let response = self
            .client
            .post(creds.endpoint_url(path))
            .basic_auth(&creds.app_id, Some(&creds.password))
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("timeout ({})", e)
                } else if e.is_connect() {
                    format!("connection failed ({})", e)
                } else {
                    e.to_string()
                };
                AppError::gateway_call(path, GatewayFailure::Transport(reason), "")
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::gateway_call(
                path,
                GatewayFailure::Transport(format!("Failed to read response body: {}", e)),
                "",
            )
        })?;

        info!(endpoint = path, status = status.as_u16(), "ConnectIPS responded");

        if !status.is_success() {
            return Err(AppError::gateway_call(
                path,
                GatewayFailure::Status(status.as_u16()),
                body,
            ));
        }

        match GatewayResponse::from_body(&body) {
            Ok(parsed) => Ok(parsed),
            Err(reason) => Err(AppError::gateway_call(
                path,
                GatewayFailure::MalformedResponse(reason),
                body,
            )),
        }
    }
}

#[async_trait]
impl PaymentGateway for ConnectIpsClient {
    fn build_initiation_payload_at(
        &self,
        request: &TransactionRequest,
        now: DateTime<Utc>,
    ) -> Result<SignedInitiationPayload> {
        let fields = self.initiation_fields(request, now);
        let message = initiation_message(&fields);
        let token = self.credentials.signer.token_for_message(&message)?;

        debug!(
            txn_id = %fields.txn_id,
            message_len = message.len(),
            "Signed initiation message"
        );

        Ok(SignedInitiationPayload { fields, token })
    }

    async fn validate_payment(&self, transaction_id: &str, amount: u64) -> Result<GatewayResponse> {
        self.post_lookup(VALIDATE_TXN_PATH, transaction_id, amount)
            .await
    }

    async fn get_transaction_details(
        &self,
        transaction_id: &str,
        amount: u64,
    ) -> Result<GatewayResponse> {
        self.post_lookup(TXN_DETAIL_PATH, transaction_id, amount)
            .await
    }

    fn name(&self) -> &str {
        "connectips"
    }
}
