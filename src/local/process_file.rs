use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::processing::classifier::FallState;
use crate::processing::pipeline::{FallPipeline, FallPipelineConfig};

/// Synthetic spacing between recorded ticks, matching the live cadence.
const TICK_SPACING_SECS: f64 = 0.01;

/// Runs the pipeline over a raw capture of the wire stream (one frame line
/// per row) and writes per-tick results to output.csv.
pub fn run(input_path: &str) -> Result<(), Box<dyn Error>> {
    if !Path::new(input_path).exists() {
        return Err(format!("Data file not found at path: {}", input_path).into());
    }

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut pipeline = FallPipeline::new(FallPipelineConfig::default());
    let mut writer = csv::Writer::from_path("output.csv")?;
    writer.write_record(["index", "svm", "state"])?;

    let mut state_counts = [0usize; 4];
    let mut skipped = 0usize;
    let mut now = 0.0;

    for line in reader.lines() {
        let line = line?;
        match pipeline.process_line(&line, now) {
            Some(outcome) => {
                state_counts[outcome.state.ordinal() as usize] += 1;
                writer.write_record([
                    pipeline.index.to_string(),
                    format!("{:.4}", outcome.svm),
                    outcome.state.label().to_string(),
                ])?;
            }
            None => skipped += 1,
        }
        now += TICK_SPACING_SECS;
    }
    writer.flush()?;

    println!("Processed {} ticks ({} skipped)", pipeline.index, skipped);
    for state in [
        FallState::NoFall,
        FallState::PreFall,
        FallState::Fall,
        FallState::PostFall,
    ] {
        println!(
            "{:10} {}",
            state.label(),
            state_counts[state.ordinal() as usize]
        );
    }

    Ok(())
}
