pub mod credentials;
pub mod gateway_response;
pub mod transaction;

pub use credentials::GatewayCredentials;
pub use gateway_response::{GatewayResponse, TransactionStatus};
pub use transaction::{
    InitiationFields, SignedInitiationPayload, TransactionRequest, DEFAULT_CURRENCY,
};
