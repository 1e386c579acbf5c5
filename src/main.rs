use std::path::Path;

use fall_monitor::config::{load_config, Config};
use fall_monitor::local::{bridge, monitor, process_file};

const CONFIG_PATH: &str = "config.yaml";

fn load_or_default() -> Config {
    if Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "monitor" => match monitor::run(&load_or_default()) {
                Ok(report) => {
                    println!(
                        "\nStream ended after {} ticks ({} classified)",
                        report.ticks, report.classified
                    );
                }
                Err(e) => {
                    eprintln!("Fall monitor stopped: {}", e);
                    std::process::exit(1);
                }
            },
            "bridge" => {
                let recording = args.get(2).map(String::as_str);
                bridge::run(&load_or_default(), recording).unwrap();
            }
            "process-file" => match args.get(2) {
                Some(path) => process_file::run(path).unwrap(),
                None => println!("Usage: main process-file <recording>"),
            },
            _ => println!("Invalid argument, please use 'monitor', 'bridge' or 'process-file'"),
        }
    } else {
        println!("Please specify 'monitor', 'bridge' or 'process-file' as argument");
    }
}
