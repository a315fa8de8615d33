// Integration tests for the signed initiation payload
//
// Covers the exact message template, default date and currency filling,
// verbatim value pass-through and token verification.

#[path = "../helpers/mod.rs"]
mod helpers;

use base64::prelude::*;
use chrono::{TimeZone, Utc};
use connectips::core::timezone::format_txn_date;
use connectips::gateways::services::initiation_message;
use connectips::{PaymentGateway, TransactionRequest};
use helpers::*;

#[test]
fn test_end_to_end_initiation_payload() {
    let client = test_client("https://uat.connectips.com");

    let payload = client.build_initiation_payload(&sample_request()).unwrap();

    assert_eq!(initiation_message(&payload.fields), INITIATION_MESSAGE);
    assert_eq!(payload.token, fixture_token("initiation_token.txt"));

    let f = &payload.fields;
    assert_eq!(f.merchant_id, "M1");
    assert_eq!(f.app_id, "A1");
    assert_eq!(f.app_name, "App");
    assert_eq!(f.txn_id, "TX1");
    assert_eq!(f.txn_date, "01-01-2024");
    assert_eq!(f.txn_currency, "NPR");
    assert_eq!(f.txn_amount, 100);
    assert_eq!(f.reference_id, "R1");
    assert_eq!(f.remarks, "ok");
    assert_eq!(f.particulars, "goods");
}

#[test]
fn test_token_verifies_against_public_key() {
    let client = test_client("https://uat.connectips.com");
    let payload = client.build_initiation_payload(&sample_request()).unwrap();

    let raw = BASE64_STANDARD.decode(&payload.token).unwrap();
    assert!(verifies(INITIATION_MESSAGE, &raw));
}

#[test]
fn test_default_date_uses_nepal_calendar_day() {
    let client = test_client("https://uat.connectips.com");
    let request = TransactionRequest::new("TX2", 2500, "R2", "ok", "goods");

    // 20:00 UTC on 14 March is already 15 March in Kathmandu
    let now = Utc.with_ymd_and_hms(2024, 3, 14, 20, 0, 0).unwrap();
    let payload = client.build_initiation_payload_at(&request, now).unwrap();

    assert_eq!(payload.fields.txn_date, "15-03-2024");
    assert!(initiation_message(&payload.fields).contains(",TXNDATE=15-03-2024,"));
}

#[test]
fn test_default_date_is_today() {
    let client = test_client("https://uat.connectips.com");
    let request = TransactionRequest::new("TX3", 10, "R3", "ok", "goods");

    let before = format_txn_date(Utc::now());
    let payload = client.build_initiation_payload(&request).unwrap();
    let after = format_txn_date(Utc::now());

    assert!(payload.fields.txn_date == before || payload.fields.txn_date == after);
}

#[test]
fn test_default_currency_is_npr() {
    let client = test_client("https://uat.connectips.com");
    let request = TransactionRequest::new("TX4", 10, "R4", "ok", "goods").with_date("02-02-2024");

    let payload = client.build_initiation_payload(&request).unwrap();

    assert_eq!(payload.fields.txn_currency, "NPR");
    assert!(initiation_message(&payload.fields).contains(",TXNCRNCY=NPR,"));
}

#[test]
fn test_caller_currency_is_kept() {
    let client = test_client("https://uat.connectips.com");
    let request = sample_request().with_currency("USD");

    let payload = client.build_initiation_payload(&request).unwrap();

    assert_eq!(payload.fields.txn_currency, "USD");
    assert_ne!(payload.token, fixture_token("initiation_token.txt"));
}

#[test]
fn test_values_pass_through_unescaped() {
    let client = test_client("https://uat.connectips.com");
    let request = TransactionRequest::new("TX5", 100, "R5", "paid, thanks", " two  spaces ")
        .with_date("01-01-2024");

    let payload = client.build_initiation_payload(&request).unwrap();
    let message = initiation_message(&payload.fields);

    assert_eq!(
        message,
        "MERCHANTID=M1,APPID=A1,APPNAME=App,TXNID=TX5,TXNDATE=01-01-2024,TXNCRNCY=NPR,TXNAMT=100,REFERENCEID=R5,REMARKS=paid, thanks,PARTICULARS= two  spaces ,TOKEN=TOKEN"
    );

    let raw = BASE64_STANDARD.decode(&payload.token).unwrap();
    assert!(verifies(&message, &raw));
}

#[test]
fn test_form_fields_carry_token_last() {
    let client = test_client("https://uat.connectips.com");
    let payload = client.build_initiation_payload(&sample_request()).unwrap();

    let fields = payload.form_fields();
    assert_eq!(fields.len(), 11);
    assert_eq!(fields[6], ("TXNAMT", "100".to_string()));
    assert_eq!(fields[10], ("TOKEN", payload.token.clone()));
}

#[test]
fn test_initiation_through_trait_object() {
    let gateway: Box<dyn PaymentGateway> = Box::new(test_client("https://uat.connectips.com"));

    let payload = gateway.build_initiation_payload(&sample_request()).unwrap();

    assert_eq!(gateway.name(), "connectips");
    assert_eq!(payload.token, fixture_token("initiation_token.txt"));
}
