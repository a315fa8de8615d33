use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::Result;
use crate::modules::gateways::models::{
    GatewayResponse, SignedInitiationPayload, TransactionRequest,
};

/// Payment gateway trait for initiating and looking up transactions
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Build the signed payload for the hosted payment page, using `now`
    /// for the default transaction date. No network call.
    fn build_initiation_payload_at(
        &self,
        request: &TransactionRequest,
        now: DateTime<Utc>,
    ) -> Result<SignedInitiationPayload>;

    /// Build the signed payload for the hosted payment page. No network call.
    fn build_initiation_payload(
        &self,
        request: &TransactionRequest,
    ) -> Result<SignedInitiationPayload> {
        self.build_initiation_payload_at(request, Utc::now())
    }

    /// Ask the gateway whether a transaction was paid in full
    async fn validate_payment(&self, transaction_id: &str, amount: u64)
        -> Result<GatewayResponse>;

    /// Fetch the gateway's record of a transaction
    async fn get_transaction_details(
        &self,
        transaction_id: &str,
        amount: u64,
    ) -> Result<GatewayResponse>;

    /// Get gateway name
    fn name(&self) -> &str;
}
