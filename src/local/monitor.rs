use colored::Colorize;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::processing::classifier::FallState;
use crate::processing::pipeline::{FallPipeline, FallPipelineConfig, TickOutcome};
use crate::stream::replay::ReplayLineStream;
use crate::stream::tcp::TcpLineStream;
use crate::stream::{LineStream, StreamError};
use crate::utils::clock::{Clock, WallClock};
use crate::utils::log::log_csv;
use crate::visualization::plotter::{create_shared_plotter, SharedPlotter};
use crate::visualization::window::spawn_visualization_window;

/// Per-state tick totals for one monitoring session.
#[derive(Debug, Default)]
pub struct MonitorReport {
    pub ticks: usize,
    pub classified: usize,
    pub state_counts: [usize; 4],
}

pub fn run(config: &Config) -> Result<MonitorReport, StreamError> {
    let mut stream: Box<dyn LineStream> = match &config.stream.replay_path {
        Some(path) => Box::new(ReplayLineStream::from_csv(path)?),
        None => Box::new(TcpLineStream::connect(
            &config.stream.addr,
            Duration::from_millis(config.stream.read_timeout_ms),
        )?),
    };

    let plotter = if config.visualization.enabled {
        let plotter = create_shared_plotter();
        spawn_visualization_window(plotter.clone(), config.visualization.clone());
        Some(plotter)
    } else {
        None
    };

    println!("Real-Time Fall Detection Started...\n");

    run_with(stream.as_mut(), &WallClock, config, plotter)
}

/// Monitor loop with the stream and clock injected.
///
/// One bounded read per tick; a timed-out read ends the tick with the window
/// unchanged. Replay exhaustion stops the loop cleanly, any other stream
/// error is fatal.
pub fn run_with(
    stream: &mut dyn LineStream,
    clock: &dyn Clock,
    config: &Config,
    plotter: Option<SharedPlotter>,
) -> Result<MonitorReport, StreamError> {
    let mut pipeline = FallPipeline::new(FallPipelineConfig {
        enable_debug_logging: config.monitor.enable_debug_logging,
    });
    let mut report = MonitorReport::default();

    loop {
        match stream.read_line() {
            Ok(Some(line)) => {
                report.ticks += 1;
                if let Some(outcome) = pipeline.process_line(&line, clock.now_secs()) {
                    report.classified += 1;
                    report.state_counts[outcome.state.ordinal() as usize] += 1;
                    emit(&pipeline, &outcome, config, plotter.as_ref());
                }
            }
            Ok(None) => {
                // Nothing within the read timeout; the chart does not advance.
                report.ticks += 1;
            }
            Err(StreamError::Exhausted) => return Ok(report),
            Err(e) => return Err(e),
        }

        if config.monitor.tick_interval_ms > 0 {
            thread::sleep(Duration::from_millis(config.monitor.tick_interval_ms));
        }
    }
}

/// Sink side of a tick: console readout, sample log, shared plotter.
fn emit(
    pipeline: &FallPipeline,
    outcome: &TickOutcome,
    config: &Config,
    plotter: Option<&SharedPlotter>,
) {
    let label = format!("{:10}", outcome.state.label());
    let label = match outcome.state {
        FallState::NoFall => label.green(),
        FallState::PreFall => label.yellow(),
        FallState::Fall => label.red(),
        FallState::PostFall => label.blue(),
    };
    println!("{} | SVM = {:.2}", label, outcome.svm);

    if config.monitor.verbose {
        log_csv(
            "samples.csv",
            &["index", "svm", "state"],
            &[
                &pipeline.index.to_string(),
                &format!("{:.4}", outcome.svm),
                outcome.state.label(),
            ],
        )
        .ok();
    }

    if let Some(plotter) = plotter {
        let window: Vec<(f64, u8)> = pipeline.window().snapshot().collect();
        plotter
            .lock()
            .unwrap()
            .update(window, outcome.svm, outcome.state);
    }
}
