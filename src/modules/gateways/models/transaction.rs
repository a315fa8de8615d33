use serde::{Deserialize, Serialize};

/// Currency used when the caller does not specify one
pub const DEFAULT_CURRENCY: &str = "NPR";

/// Parameters for a single payment initiation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Merchant-side unique transaction ID (TXNID)
    pub transaction_id: String,

    /// Whole-number amount, sent verbatim as TXNAMT
    pub amount: u64,

    pub reference_id: String,

    pub remarks: String,

    pub particulars: String,

    /// `DD-MM-YYYY`; today's date in Nepal when absent
    pub transaction_date: Option<String>,

    /// Falls back to `NPR` when absent
    pub currency: Option<String>,
}

impl TransactionRequest {
    pub fn new(
        transaction_id: impl Into<String>,
        amount: u64,
        reference_id: impl Into<String>,
        remarks: impl Into<String>,
        particulars: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount,
            reference_id: reference_id.into(),
            remarks: remarks.into(),
            particulars: particulars.into(),
            transaction_date: None,
            currency: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.transaction_date = Some(date.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// The ten business fields of an initiation payload, defaults already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiationFields {
    #[serde(rename = "MERCHANTID")]
    pub merchant_id: String,
    #[serde(rename = "APPID")]
    pub app_id: String,
    #[serde(rename = "APPNAME")]
    pub app_name: String,
    #[serde(rename = "TXNID")]
    pub txn_id: String,
    #[serde(rename = "TXNDATE")]
    pub txn_date: String,
    #[serde(rename = "TXNCRNCY")]
    pub txn_currency: String,
    #[serde(rename = "TXNAMT")]
    pub txn_amount: u64,
    #[serde(rename = "REFERENCEID")]
    pub reference_id: String,
    #[serde(rename = "REMARKS")]
    pub remarks: String,
    #[serde(rename = "PARTICULARS")]
    pub particulars: String,
}

/// Initiation fields plus the base64 TOKEN signature, ready to be posted
/// to the hosted payment page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedInitiationPayload {
    #[serde(flatten)]
    pub fields: InitiationFields,
    #[serde(rename = "TOKEN")]
    pub token: String,
}

impl SignedInitiationPayload {
    /// All eleven fields in wire order, for rendering hidden form inputs
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let f = &self.fields;
        vec![
            ("MERCHANTID", f.merchant_id.clone()),
            ("APPID", f.app_id.clone()),
            ("APPNAME", f.app_name.clone()),
            ("TXNID", f.txn_id.clone()),
            ("TXNDATE", f.txn_date.clone()),
            ("TXNCRNCY", f.txn_currency.clone()),
            ("TXNAMT", f.txn_amount.to_string()),
            ("REFERENCEID", f.reference_id.clone()),
            ("REMARKS", f.remarks.clone()),
            ("PARTICULARS", f.particulars.clone()),
            ("TOKEN", self.token.clone()),
        ]
    }
}
