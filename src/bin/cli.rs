use camprobe::{list_devices, LatencyProbe, ProbeConfig, ProbeError};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: camprobe-cli <command> [args]");
        eprintln!("Commands: run, list-devices");
        std::process::exit(1);
    }

    let command = &args[1];
    match command.as_str() {
        "run" => cmd_run(&args),
        "list-devices" => cmd_list_devices(&args),
        _ => {
            eprintln!("Unknown command: {}", command);
            std::process::exit(1);
        }
    }
}

fn cmd_list_devices(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let devices = list_devices()?;
    if args.contains(&"--json".to_string()) {
        println!("{}", serde_json::to_string(&devices)?);
    } else {
        for d in devices {
            println!("{}: {}", d.id, d.name);
        }
    }
    Ok(())
}

fn cmd_run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    camprobe::init_logging();

    // Parse args: run [--config <path>] [--device <index>] [--threshold <x>]
    let mut config_path = None;
    let mut device = None;
    let mut threshold = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--device" => {
                i += 1;
                device = Some(args[i].parse::<u32>()?);
            }
            "--threshold" => {
                i += 1;
                threshold = Some(args[i].parse::<f64>()?);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => ProbeConfig::load_from_file(path)?,
        None => ProbeConfig::default(),
    };
    if let Some(index) = device {
        config.camera.device_index = index;
    }
    if let Some(value) = threshold {
        config.detector.black_threshold = value;
    }
    config.validate()?;

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))?;
    }

    let mut probe = match LatencyProbe::new(&config) {
        Ok(probe) => probe,
        Err(e @ ProbeError::InitializationError(_)) => {
            // Open failure is terminal but exits with status 0
            println!("\nError - could not open video device.\n");
            log::error!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stats = probe.run(&stop)?;
    log::info!(
        "{} transitions detected over {} frames",
        stats.transitions,
        stats.frames
    );
    Ok(())
}
