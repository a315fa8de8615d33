pub mod models;
pub mod services;

pub use models::{
    GatewayCredentials, GatewayResponse, InitiationFields, SignedInitiationPayload,
    TransactionRequest, TransactionStatus, DEFAULT_CURRENCY,
};
pub use services::{
    key_loader, ConnectIpsClient, MessageSigner, PaymentGateway, PrivateKeyHandle,
    TXN_DETAIL_PATH, VALIDATE_TXN_PATH,
};
