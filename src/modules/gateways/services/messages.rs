//! Canonical message shapes signed for ConnectIPS.
//!
//! The gateway recomputes these strings on its side, so field order and the
//! literal `TOKEN=TOKEN` tail of the initiation message must not change. The
//! lookup message has no TOKEN field at all.

use super::signer::MessageSigner;
use crate::modules::gateways::models::InitiationFields;

/// Value of the trailing TOKEN field in the initiation message
pub const TOKEN_PLACEHOLDER: &str = "TOKEN";

/// `MERCHANTID=..,APPID=..,APPNAME=..,TXNID=..,TXNDATE=..,TXNCRNCY=..,TXNAMT=..,REFERENCEID=..,REMARKS=..,PARTICULARS=..,TOKEN=TOKEN`
pub fn initiation_message(fields: &InitiationFields) -> String {
    let amount = fields.txn_amount.to_string();
    MessageSigner::canonicalize(&[
        ("MERCHANTID", fields.merchant_id.as_str()),
        ("APPID", fields.app_id.as_str()),
        ("APPNAME", fields.app_name.as_str()),
        ("TXNID", fields.txn_id.as_str()),
        ("TXNDATE", fields.txn_date.as_str()),
        ("TXNCRNCY", fields.txn_currency.as_str()),
        ("TXNAMT", amount.as_str()),
        ("REFERENCEID", fields.reference_id.as_str()),
        ("REMARKS", fields.remarks.as_str()),
        ("PARTICULARS", fields.particulars.as_str()),
        ("TOKEN", TOKEN_PLACEHOLDER),
    ])
}

/// `MERCHANTID=..,APPID=..,REFERENCEID=..,TXNAMT=..`
pub fn lookup_message(merchant_id: &str, app_id: &str, reference_id: &str, amount: u64) -> String {
    let amount = amount.to_string();
    MessageSigner::canonicalize(&[
        ("MERCHANTID", merchant_id),
        ("APPID", app_id),
        ("REFERENCEID", reference_id),
        ("TXNAMT", amount.as_str()),
    ])
}
