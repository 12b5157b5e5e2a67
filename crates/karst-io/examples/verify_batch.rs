//! Batch verification: forecast a terrain batch and check the answers.
//!
//! Demonstrates:
//!   1. Reading a terrain batch and its expected outcomes
//!   2. Forecasting every case
//!   3. Printing a per-case verdict summary
//!
//! Run with:
//!   cargo run --example verify_batch [batch_file outcome_file]
//!
//! With no arguments, a built-in sample batch is verified instead.

use std::env;
use std::fs::File;
use std::io::BufReader;

use karst_io::{read_expected, verify_batch, BatchReader, CaseOutcome};

// ─── Built-in sample ────────────────────────────────────────────

const SAMPLE_BATCH: &str = "\
3
3
3
**.
***
**.
4
13
*****..***...
*****.*****..
*****.*****..
.***..*****..
2
2
*.
.*
";

const SAMPLE_OUTCOMES: &str = "\
1 2
2 2
3 0
";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (terrains, expected) = match args.as_slice() {
        [batch_path, outcome_path] => {
            let batch = File::open(batch_path).unwrap();
            let outcomes = File::open(outcome_path).unwrap();
            (
                BatchReader::open(BufReader::new(batch))
                    .unwrap()
                    .read_all()
                    .unwrap(),
                read_expected(BufReader::new(outcomes)).unwrap(),
            )
        }
        _ => {
            println!("no files given, verifying the built-in sample\n");
            (
                BatchReader::open(SAMPLE_BATCH.as_bytes())
                    .unwrap()
                    .read_all()
                    .unwrap(),
                read_expected(SAMPLE_OUTCOMES.as_bytes()).unwrap(),
            )
        }
    };

    let report = verify_batch(&terrains, &expected).unwrap();

    for (idx, outcome) in report.outcomes.iter().enumerate() {
        match outcome {
            CaseOutcome::Match { step } => {
                println!("case {}: ok, collapse at step {step}", idx + 1);
            }
            CaseOutcome::Mismatch {
                expected,
                predicted,
            } => {
                println!(
                    "case {}: FAIL, expected step {expected} but forecast says {predicted}",
                    idx + 1
                );
            }
        }
    }

    println!("\n{}/{} cases passed", report.passed(), report.outcomes.len());
}
