//! Test fixtures for building contacts and running scripted sessions.

use contact_book::{Config, ContactRecord, Session};

/// Create a record with the given phones, panicking on invalid input.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name).expect("fixture name is valid");
    for phone in phones {
        record.add_phone(*phone).expect("fixture phone is valid");
    }
    record
}

/// Phone values of a record, in stored order.
#[allow(dead_code)]
pub fn phone_values(record: &ContactRecord) -> Vec<String> {
    record.phones().iter().map(|p| p.to_string()).collect()
}

/// Feed `input` to a fresh session and return its stdout and final state.
#[allow(dead_code)]
pub async fn run_script(input: &str) -> (String, Session) {
    let config = Config {
        prompt: "> ".to_string(),
        ..Config::default()
    };
    let mut session = Session::new(&config);
    let mut output = Vec::new();
    session
        .run(input.as_bytes(), &mut output)
        .await
        .expect("in-memory session cannot fail");
    (
        String::from_utf8(output).expect("session output is utf-8"),
        session,
    )
}
