use chrono::{DateTime, FixedOffset, Utc};

/// Nepal Standard Time is UTC+05:45
const NEPAL_OFFSET_SECS: i32 = 5 * 3600 + 45 * 60;

/// Date layout expected in the TXNDATE field
pub const TXN_DATE_FORMAT: &str = "%d-%m-%Y";

/// Convert UTC timestamp to Nepal Standard Time, the gateway's local time
pub fn utc_to_nepal(utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
    let nepal_offset = FixedOffset::east_opt(NEPAL_OFFSET_SECS).expect("Valid offset");
    utc_time.with_timezone(&nepal_offset)
}

/// Format the Nepal calendar date of `utc_time` as `DD-MM-YYYY`
pub fn format_txn_date(utc_time: DateTime<Utc>) -> String {
    utc_to_nepal(utc_time).format(TXN_DATE_FORMAT).to_string()
}
