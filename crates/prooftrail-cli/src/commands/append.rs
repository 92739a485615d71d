//! Append command implementation.
//!
//! Builds a flat custody event continuing the chain already in the log: the
//! previous-link digest and next step index are derived by reading the log
//! tip, `GENESIS` for a fresh log.

use chrono::{SecondsFormat, Utc};
use prooftrail_canonical::{sha256_hex, Timestamp, GENESIS};
use prooftrail_core::{build_event, sign_event, CustodyEvent, EventPayload, Keypair};
use prooftrail_journal::{read_records, JournalError, LogWriter, WriteOptions};

pub struct AppendArgs {
    pub log: String,
    pub session: String,
    pub task: String,
    pub agent: String,
    pub model: String,
    pub tool: Option<String>,
    pub input: String,
    pub output: String,
    pub key: Option<String>,
}

pub fn run(args: AppendArgs) -> Result<(), Box<dyn std::error::Error>> {
    // A missing log starts a fresh chain; any other read error is fatal.
    let existing: Vec<CustodyEvent> = match read_records(&args.log) {
        Ok(records) => records,
        Err(JournalError::NotFound { .. }) => Vec::new(),
        Err(e) => return Err(format!("Failed to read log: {}", e).into()),
    };

    let previous_hash = existing
        .last()
        .map(|event| event.current_hash.clone())
        .unwrap_or_else(|| GENESIS.to_string());

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let payload = EventPayload {
        session_id: args.session,
        task_id: args.task,
        step_index: existing.len() as u64,
        timestamp: Timestamp::parse(now).map_err(|e| format!("Bad timestamp: {}", e))?,
        agent_id: args.agent,
        model_name: args.model,
        tool_name: args.tool,
        input_hash: sha256_hex(args.input.as_bytes()),
        output_hash: sha256_hex(args.output.as_bytes()),
        previous_hash,
    };

    let mut event = build_event(payload).map_err(|e| format!("Failed to build event: {}", e))?;

    if let Some(key_path) = args.key {
        let pem = std::fs::read_to_string(&key_path)
            .map_err(|e| format!("Failed to read key {}: {}", key_path, e))?;
        let keypair =
            Keypair::from_pkcs8_pem(&pem).map_err(|e| format!("Invalid private key: {}", e))?;
        sign_event(&mut event, &keypair).map_err(|e| format!("Signing failed: {}", e))?;
    }

    let mut writer = LogWriter::open(&args.log, WriteOptions::default())
        .map_err(|e| format!("Failed to open log: {}", e))?;
    writer.append(&event)?;
    writer.finish()?;

    println!("{}", event.current_hash);
    Ok(())
}
