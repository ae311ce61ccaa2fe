//! Validates a hard-coded customer record and prints the outcome
//!
//! Run with: cargo run --example customer_record

use sluice::prelude::*;
use sluice::sink::render_errors;
use sluice::validator::{email_validator, fiscal_number_validator, name_validator};

/// Prints outcomes to stdout.
struct PrintSink;

impl ResultSink for PrintSink {
    fn on_failure(&mut self, errors: FieldErrors) {
        println!("Errors: {}", render_errors(&errors));
    }

    fn on_success(&mut self, record: ValidRecord) {
        let fields: Vec<String> = record
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        println!("Request: {}", fields.join(", "));
    }
}

fn customer(name: &str, email: &str, fiscal_number: Option<&str>) -> Record {
    let mut record = Record::from([
        ("customerName".to_string(), Value::from(name)),
        ("customerEmail".to_string(), Value::from(email)),
    ]);
    if let Some(number) = fiscal_number {
        record.insert("fiscalNumber".to_string(), Value::from(number));
    }
    record
}

fn main() {
    let requests = [
        customer("John Doe", "john@gmail.com", Some("1234567890")),
        customer("Jo", "not-an-email", Some("123")),
        customer("John Doe", "john@gmail.com", None),
    ];

    for request in requests {
        RecordValidator::new(request)
            .with("customerName", name_validator())
            .with("customerEmail", email_validator())
            .with("fiscalNumber", fiscal_number_validator())
            .validate(&mut PrintSink);
    }
}
