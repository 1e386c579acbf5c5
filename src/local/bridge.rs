use rand::rngs::ThreadRng;
use rand::Rng;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use crate::config::Config;

// -----------------------------------------------------------------------------
// SENSOR BRIDGE
//
// Feeds the monitor over TCP, one 6-token frame line per SLEEP_TIME, either
// replayed from a CSV recording or simulated.
// -----------------------------------------------------------------------------

const SLEEP_TIME: u64 = 10;

const BASELINE_G: f64 = 0.98;
const NOISE_AMPLITUDE: f64 = 0.05;
const IMPACT_CHANCE: f64 = 0.002;
const IMPACT_PEAK_G: f64 = 2.8;
const IMPACT_DECAY: f64 = 0.85;

pub fn run(config: &Config, recording: Option<&str>) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.stream.addr)?;
    println!("Sensor bridge listening on {}", config.stream.addr);

    for stream in listener.incoming() {
        let stream = stream?;
        let recording = recording.map(str::to_string);

        thread::spawn(move || {
            let result = match recording {
                Some(path) => send_recorded_frames(stream, &path),
                None => send_simulated_frames(stream),
            };
            if let Err(e) = result {
                eprintln!("Bridge connection ended: {}", e);
            }
        });
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// SENDING DATA FROM A RECORDING
// -----------------------------------------------------------------------------

fn send_recorded_frames(mut stream: TcpStream, path: &str) -> Result<(), Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(File::open(path)?);

    for result in reader.records() {
        let record = result?;
        let frame = record.iter().collect::<Vec<_>>().join(" ");
        writeln!(stream, "{}", frame)?;
        thread::sleep(Duration::from_millis(SLEEP_TIME));
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// SIMULATED SIGNAL
// -----------------------------------------------------------------------------

fn send_simulated_frames(mut stream: TcpStream) -> Result<(), Box<dyn Error>> {
    let mut rng = rand::thread_rng();
    let mut impact = 0.0f64;

    loop {
        let frame = simulated_frame(&mut rng, &mut impact);
        writeln!(stream, "{}", frame)?;
        thread::sleep(Duration::from_millis(SLEEP_TIME));
    }
}

/// One simulated frame: quiet ~1 g baseline with occasional impact bursts
/// that decay back over a few ticks, so the whole state range shows up on
/// the chart.
fn simulated_frame(rng: &mut ThreadRng, impact: &mut f64) -> String {
    if *impact <= 0.0 && rng.gen_bool(IMPACT_CHANCE) {
        *impact = IMPACT_PEAK_G;
    }

    let az = if *impact > 0.0 {
        let value = *impact;
        *impact *= IMPACT_DECAY;
        if *impact < BASELINE_G {
            *impact = 0.0;
        }
        value
    } else {
        BASELINE_G + rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE)
    };

    let ax = rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
    let ay = rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
    let gx = rng.gen_range(-0.5..0.5);
    let gy = rng.gen_range(-0.5..0.5);
    let gz = rng.gen_range(-0.5..0.5);

    format!(
        "{:.4} {:.4} {:.4} {:.4} {:.4} {:.4}",
        ax, ay, az, gx, gy, gz
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::frame::parse_frame;

    #[test]
    fn simulated_frames_are_well_formed() {
        let mut rng = rand::thread_rng();
        let mut impact = 0.0;

        for _ in 0..1000 {
            let frame = simulated_frame(&mut rng, &mut impact);
            let reading = parse_frame(&frame).expect("bridge emitted a malformed frame");
            assert!(reading.svm() > 0.0);
        }
    }

    #[test]
    fn impact_decays_back_to_baseline() {
        let mut rng = rand::thread_rng();
        let mut impact = IMPACT_PEAK_G;

        let mut ticks = 0;
        while impact > 0.0 {
            simulated_frame(&mut rng, &mut impact);
            ticks += 1;
            assert!(ticks < 100, "impact never decayed");
        }
    }
}
