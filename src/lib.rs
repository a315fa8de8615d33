//! ConnectIPS payment gateway client
//!
//! Builds RSA-SHA256 signed initiation payloads for the hosted payment page
//! and performs the authenticated validate and transaction-detail calls.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use config::ConnectIpsConfig;
pub use crate::core::{AppError, GatewayFailure, Result};
pub use modules::gateways;
pub use modules::gateways::{
    ConnectIpsClient, GatewayResponse, MessageSigner, PaymentGateway, SignedInitiationPayload,
    TransactionRequest,
};
