//! End-to-end journal tests: append, replay, and tamper detection.

use prooftrail_canonical::{sha256_hex, Timestamp, GENESIS};
use prooftrail_core::{
    build_event, seal_envelope, Actor, ChainFault, ChainLink, CustodyEnvelope, CustodyEvent,
    EventPayload, SignatureBlock,
};
use prooftrail_journal::{read_records, verify_log, JournalError, LogWriter, WriteOptions};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn make_event(step_index: u64, previous_hash: &str) -> CustodyEvent {
    build_event(EventPayload {
        session_id: "sess-1".to_string(),
        task_id: "task-1".to_string(),
        step_index,
        timestamp: Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
        agent_id: "agent-main".to_string(),
        model_name: "model-x".to_string(),
        tool_name: None,
        input_hash: sha256_hex(format!("in-{step_index}").as_bytes()),
        output_hash: sha256_hex(format!("out-{step_index}").as_bytes()),
        previous_hash: previous_hash.to_string(),
    })
    .unwrap()
}

fn write_two_event_log(path: &Path) -> (CustodyEvent, CustodyEvent) {
    let first = make_event(0, GENESIS);
    let second = make_event(1, &first.current_hash);

    let mut writer = LogWriter::open(path, WriteOptions::default()).unwrap();
    writer.append(&first).unwrap();
    writer.append(&second).unwrap();
    writer.finish().unwrap();

    (first, second)
}

#[test]
fn appended_chain_verifies() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl");
    write_two_event_log(&path);

    let report = verify_log::<CustodyEvent, _>(&path);
    assert!(report.ok);
    assert_eq!(report.first_corrupted_index, None);
}

#[test]
fn writer_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/events.jsonl");
    write_two_event_log(&path);
    assert!(verify_log::<CustodyEvent, _>(&path).ok);
}

#[test]
fn reopened_writer_appends_instead_of_truncating() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl");
    let (_, second) = write_two_event_log(&path);

    let third = make_event(2, &second.current_hash);
    let mut writer = LogWriter::open(&path, WriteOptions::default()).unwrap();
    writer.append(&third).unwrap();
    writer.finish().unwrap();

    let records: Vec<CustodyEvent> = read_records(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert!(verify_log::<CustodyEvent, _>(&path).ok);
}

#[test]
fn missing_store_is_a_distinct_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.jsonl");

    match read_records::<CustodyEvent, _>(&path) {
        Err(JournalError::NotFound { .. }) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }

    let report = verify_log::<CustodyEvent, _>(&path);
    assert!(!report.ok);
    assert_eq!(report.first_corrupted_index, Some(0));
    assert_eq!(report.fault, Some(ChainFault::StoreNotFound));
}

#[test]
fn empty_log_verifies() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl");
    fs::write(&path, "").unwrap();

    let report = verify_log::<CustodyEvent, _>(&path);
    assert!(report.ok);
    assert_eq!(report.first_corrupted_index, None);
}

#[test]
fn trailing_blank_lines_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl");
    write_two_event_log(&path);

    let mut contents = fs::read_to_string(&path).unwrap();
    contents.push('\n');
    fs::write(&path, contents).unwrap();

    assert!(verify_log::<CustodyEvent, _>(&path).ok);
}

#[test]
fn overwriting_a_stored_field_is_detected_at_its_index() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl");
    write_two_event_log(&path);

    // Tamper with event 1's outputHash in storage only.
    let contents = fs::read_to_string(&path).unwrap();
    let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();
    let mut value: Value = serde_json::from_str(&lines[1]).unwrap();
    value["outputHash"] = json!(sha256_hex(b"forged"));
    lines[1] = serde_json::to_string(&value).unwrap();
    fs::write(&path, lines.join("\n") + "\n").unwrap();

    let report = verify_log::<CustodyEvent, _>(&path);
    assert!(!report.ok);
    assert_eq!(report.first_corrupted_index, Some(1));
    assert!(matches!(report.fault, Some(ChainFault::DigestMismatch { .. })));
}

#[test]
fn rewriting_a_previous_link_is_detected_as_link_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl");
    write_two_event_log(&path);

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();
    let mut value: Value = serde_json::from_str(&lines[1]).unwrap();
    value["previousHash"] = json!(sha256_hex(b"spliced"));
    // Recompute nothing: the digest now also disagrees, but the link check
    // runs first and wins.
    lines[1] = serde_json::to_string(&value).unwrap();
    fs::write(&path, lines.join("\n") + "\n").unwrap();

    let report = verify_log::<CustodyEvent, _>(&path);
    assert_eq!(report.first_corrupted_index, Some(1));
    assert!(matches!(report.fault, Some(ChainFault::LinkMismatch { .. })));
}

#[test]
fn malformed_line_is_reported_at_its_index() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl");
    let (_, second) = write_two_event_log(&path);

    let third = make_event(2, &second.current_hash);
    let contents = fs::read_to_string(&path).unwrap();
    let tampered = format!("{contents}not json at all\n{}\n", serde_json::to_string(&third).unwrap());
    fs::write(&path, tampered).unwrap();

    let report = verify_log::<CustodyEvent, _>(&path);
    assert!(!report.ok);
    assert_eq!(report.first_corrupted_index, Some(2));
    assert!(matches!(report.fault, Some(ChainFault::MalformedRecord(_))));
}

#[test]
fn envelope_logs_verify_through_the_same_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stream.jsonl");

    let make = |seq: u64, prev: &str| CustodyEnvelope {
        schema_version: "1.0".to_string(),
        stream_id: "run_1".to_string(),
        seq,
        event_type: "skill.call".to_string(),
        ts: Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
        actor: Actor {
            agent_id: "agent-main".to_string(),
            tenant_id: None,
            key_id: "ed25519:agent-main:v1".to_string(),
        },
        context: None,
        body: serde_json::Map::new(),
        chain: ChainLink {
            prev_event_hash: prev.to_string(),
            event_hash: None,
        },
        signature: SignatureBlock {
            alg: "ed25519".to_string(),
            sig: None,
            signed_bytes: None,
        },
    };

    let first = seal_envelope(make(1, GENESIS)).unwrap();
    let second = seal_envelope(make(2, first.chain.event_hash.as_deref().unwrap())).unwrap();

    let mut writer = LogWriter::open(&path, WriteOptions::default()).unwrap();
    writer.append(&first).unwrap();
    writer.append(&second).unwrap();
    writer.finish().unwrap();

    assert!(verify_log::<CustodyEnvelope, _>(&path).ok);

    // Splice in a different body at seq 2.
    let contents = fs::read_to_string(&path).unwrap();
    let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();
    let mut value: Value = serde_json::from_str(&lines[1]).unwrap();
    value["body"] = json!({"input_hash": "sha256:forged"});
    lines[1] = serde_json::to_string(&value).unwrap();
    fs::write(&path, lines.join("\n") + "\n").unwrap();

    let report = verify_log::<CustodyEnvelope, _>(&path);
    assert_eq!(report.first_corrupted_index, Some(1));
    assert!(matches!(report.fault, Some(ChainFault::DigestMismatch { .. })));
}
