//! Verify command implementation.

use crate::Profile;
use prooftrail_core::{CustodyEnvelope, CustodyEvent, VerificationReport};
use prooftrail_journal::verify_log;
use serde_json::json;

pub fn run(
    log: String,
    profile: Profile,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = match profile {
        Profile::Event => verify_log::<CustodyEvent, _>(&log),
        Profile::Envelope => verify_log::<CustodyEnvelope, _>(&log),
    };

    print_report(&log, &report, json_output);

    if strict && !report.ok {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(log: &str, report: &VerificationReport, json_output: bool) {
    if json_output {
        let value = json!({
            "log": log,
            "ok": report.ok,
            "first_corrupted_index": report.first_corrupted_index,
            "reason": report.fault.as_ref().map(|f| f.to_string()),
        });
        println!("{}", value);
    } else if report.ok {
        println!("{}: chain intact", log);
    } else {
        // first_corrupted_index and fault are always present on failure.
        let index = report.first_corrupted_index.unwrap_or(0);
        let reason = report
            .fault
            .as_ref()
            .map(|f| f.to_string())
            .unwrap_or_default();
        println!("{}: corrupted at record {}: {}", log, index, reason);
    }
}
