//! Stimulus Replay Tests

use std::io::Write;

use aluref_core::common::ModelError;
use aluref_core::sim::{Stimulus, Transaction, replay};
use aluref_core::{Comparator, Opcode, Verdict};
use pretty_assertions::assert_eq;

const RECORDED: &str = r#"[
    { "din": 10, "op": 6 },
    { "din": 5,  "op": 1, "observed": 15 },
    { "din": 3,  "op": 2, "observed": 12 },
    { "din": 15, "op": 3, "observed": 12 },
    { "din": 0,  "op": 9, "observed": 12 },
    { "reset": true, "observed": 1 }
]"#;

fn parse(json: &str) -> Stimulus {
    match Stimulus::from_json_str(json) {
        Ok(s) => s,
        Err(e) => panic!("stimulus: {e}"),
    }
}

#[test]
fn replay_recorded_stream() {
    let stimulus = parse(RECORDED);
    assert_eq!(stimulus.len(), 6);

    let mut sb = Comparator::new();
    let report = replay(&mut sb, &stimulus.transactions);

    assert_eq!(report.values, vec![10, 15, 12, 12, 12, 0]);
    assert_eq!(
        report.verdicts,
        vec![
            None,
            Some(Verdict::Match),
            Some(Verdict::Match),
            Some(Verdict::Match),
            Some(Verdict::Match),
            Some(Verdict::Mismatch),
        ]
    );
    assert!(!report.passed());
    assert_eq!(report.final_value(), Some(0));
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].index, 5);
    assert!(report.mismatches[0].reset);
    assert_eq!(report.stats.checks, 5);
    assert_eq!(report.stats.unrecognized_ops, 1);
}

#[test]
fn replay_continues_from_current_state() {
    let mut sb = Comparator::new();
    let _ = sb.step(100, Opcode::Load, false);
    let _ = sb.check(0, Opcode::Load, false, 1);

    let txs = [Transaction::new(1, Opcode::Add).observed(1)];
    let report = replay(&mut sb, &txs);

    assert!(report.passed());
    assert_eq!(report.values, vec![1]);
    // Mismatches from before the replay are not reported again.
    assert!(report.mismatches.is_empty());
    assert_eq!(report.stats.mismatches, 1);
}

#[test]
fn empty_replay() {
    let mut sb = Comparator::new();
    let report = replay(&mut sb, &[]);
    assert!(report.passed());
    assert_eq!(report.final_value(), None);
}

#[test]
fn stimulus_serializes_back_to_raw_encoding() {
    let stimulus: Stimulus = vec![
        Transaction::new(-1, Opcode::Load),
        Transaction::new(0, Opcode::ShiftRightLogical).observed(0x7FFF_FFFF),
        Transaction::reset(),
    ]
    .into();
    let json = match stimulus.to_json_string() {
        Ok(j) => j,
        Err(e) => panic!("serialize: {e}"),
    };
    assert_eq!(parse(&json), stimulus);
    assert!(json.starts_with(r#"[{"din":-1,"op":6,"reset":0}"#));
    assert!(json.ends_with(r#"{"din":0,"op":0,"reset":1}]"#));
}

#[test]
fn stimulus_from_file() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(f) => f,
        Err(e) => panic!("tempfile: {e}"),
    };
    assert!(file.write_all(RECORDED.as_bytes()).is_ok());
    match Stimulus::from_json_file(file.path()) {
        Ok(s) => assert_eq!(s, parse(RECORDED)),
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn integer_reset_from_host_recording() {
    let stimulus = parse(r#"[{ "din": 0, "op": 0, "reset": 1, "observed": 0 }]"#);
    assert_eq!(stimulus.transactions[0].reset, 1);

    let mut sb = Comparator::new();
    let _ = sb.step(77, Opcode::Load, false);
    let report = replay(&mut sb, &stimulus.transactions);

    assert!(report.passed());
    assert_eq!(report.values, vec![0]);
    assert_eq!(report.stats.resets, 1);
}

#[test]
fn any_nonzero_reset_is_asserted_and_kept_raw() {
    let stimulus = parse(
        r#"[
            { "din": 7, "op": 6, "observed": 7 },
            { "din": 5, "op": 1, "reset": 2, "observed": 0 },
            { "din": 5, "op": 1, "reset": false, "observed": 5 }
        ]"#,
    );
    assert_eq!(
        stimulus.transactions.iter().map(|tx| tx.reset).collect::<Vec<_>>(),
        vec![0, 2, 0]
    );

    let mut sb = Comparator::new();
    let report = replay(&mut sb, &stimulus.transactions);
    assert!(report.passed());
    assert_eq!(report.values, vec![7, 0, 5]);
    assert_eq!(report.stats.resets, 1);

    let json = match stimulus.to_json_string() {
        Ok(j) => j,
        Err(e) => panic!("serialize: {e}"),
    };
    assert!(json.contains(r#""reset":2"#));
    assert_eq!(parse(&json), stimulus);
}

#[test]
fn non_numeric_reset_is_parse_error() {
    assert!(matches!(
        Stimulus::from_json_str(r#"[{ "din": 0, "op": 0, "reset": "yes" }]"#),
        Err(ModelError::Parse { what: "stimulus", .. })
    ));
}

#[test]
fn malformed_stimulus_is_parse_error() {
    assert!(matches!(
        Stimulus::from_json_str(r#"{ "din": 1 }"#),
        Err(ModelError::Parse { what: "stimulus", .. })
    ));
}
