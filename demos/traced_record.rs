//! Demonstrates tracing integration: per-field trace events and `TracingSink`
//!
//! Run with: cargo run --example traced_record --features tracing

use sluice::prelude::*;
use sluice::sink::TracingSink;
use sluice::validator::{email_validator, fiscal_number_validator, name_validator};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let record = Record::from([
        ("customerName".to_string(), Value::from("Jo")),
        ("customerEmail".to_string(), Value::from("john@gmail.com")),
        ("fiscalNumber".to_string(), Value::from(1234567890_i64)),
    ]);

    RecordValidator::new(record)
        .with("customerName", name_validator())
        .with("customerEmail", email_validator())
        .with("fiscalNumber", fiscal_number_validator())
        .validate(&mut TracingSink);
}
