//! Unit tests for the spending dashboard
//!
//! Tests cover:
//! - Currency and date formatting
//! - Snapshot decoding and view-state transitions
//! - Poll loop scheduling and cancellation
//! - HTTP client against a local stub server
//! - Rendering into a test terminal

mod api_test;
mod config_test;
mod input_test;

use crate::cli::api::decode_snapshot;
use crate::cli::state::SpendingSnapshot;

/// Body in the shape the finance API returns.
pub const SAMPLE_BODY: &str = r#"{
  "spendingOverTime": {"datasets": [{"data": [
    {"date": "2024-01-05", "amount": 1200.0},
    {"date": "2024-01-06", "amount": 350.5},
    {"date": "2024-02-01", "amount": 12345}
  ]}]},
  "monthlyTrend": {"datasets": [{"data": [
    {"month": "2024-01", "amount": 1550.5},
    {"month": "2024-02", "amount": 12345}
  ]}]},
  "categoryDistribution": {"datasets": [{"data": [
    {"category": "Food", "value": 1550.5},
    {"category": "Rent", "value": 12000},
    {"category": "Other", "value": 345}
  ]}]}
}"#;

pub fn sample_snapshot() -> SpendingSnapshot {
    decode_snapshot(SAMPLE_BODY.as_bytes()).unwrap()
}
