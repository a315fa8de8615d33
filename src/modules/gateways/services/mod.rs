pub mod connectips;
pub mod gateway_trait;
pub mod key_loader;
pub mod messages;
pub mod signer;

pub use connectips::{ConnectIpsClient, TXN_DETAIL_PATH, VALIDATE_TXN_PATH};
pub use gateway_trait::PaymentGateway;
pub use key_loader::PrivateKeyHandle;
pub use messages::{initiation_message, lookup_message, TOKEN_PLACEHOLDER};
pub use signer::MessageSigner;
