//! List command implementation.

use prooftrail_journal::read_lines;
use serde_json::Value;

pub fn run(log: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let lines = read_lines(&log).map_err(|e| format!("Failed to read log: {}", e))?;

    if !json_output {
        println!("{:<6} {:<10} {}", "INDEX", "STEP/SEQ", "DIGEST");
    }

    for (index, line) in lines.iter().enumerate() {
        let value: Value =
            serde_json::from_str(line).map_err(|e| format!("Record {} is malformed: {}", index, e))?;

        if json_output {
            println!("{}", line);
            continue;
        }

        let position = value
            .get("stepIndex")
            .or_else(|| value.get("seq"))
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string());
        let digest = value
            .get("currentHash")
            .or_else(|| value.pointer("/chain/event_hash"))
            .and_then(Value::as_str)
            .unwrap_or("?");

        println!("{:<6} {:<10} {}", index, position, digest);
    }

    Ok(())
}
