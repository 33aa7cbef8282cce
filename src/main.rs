//! cell-sim entry point — CLI wiring and config-driven engine construction.

use std::path::Path;
use std::process;

use cell_sim::config::ScenarioConfig;
use cell_sim::io::export::export_csv;
use cell_sim::sim::summary::RunSummary;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    print_trace: bool,
    out: Option<String>,
    #[cfg(feature = "tui")]
    plot: bool,
}

fn print_help() {
    eprintln!("cell-sim — discrete-time battery cell charge/discharge simulator");
    eprintln!();
    eprintln!("Usage: cell-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>   Load scenario from TOML config file");
    eprintln!("  --preset <name>     Use a built-in preset (baseline, deep_discharge, fast_charge)");
    eprintln!("  --print-trace       Print every trace sample, not just the summary");
    eprintln!("  --out <path>        Export the trace to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --plot              Open the trace playback TUI after the run");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        print_trace: false,
        out: None,
        #[cfg(feature = "tui")]
        plot: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--print-trace" => {
                cli.print_trace = true;
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --out requires a path argument");
                    process::exit(1);
                }
                cli.out = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--plot" => {
                cli.plot = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Build and run
    let mut engine = match scenario.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let trace = engine.run();

    // Print per-step samples if requested
    if cli.print_trace {
        for s in &trace {
            println!("{s}");
        }
        println!();
    }

    // Print summary report
    let summary = RunSummary::from_samples(
        &trace,
        scenario.battery.initial_soc_percent,
        engine.config().dt_hours,
        engine.params().capacity_ah,
    );
    println!("{summary}");

    // Export CSV if requested
    if let Some(ref path) = cli.out {
        if let Err(e) = export_csv(&trace, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Trace written to {path}");
    }

    // Open the playback TUI if requested
    #[cfg(feature = "tui")]
    if cli.plot {
        let name = cli.preset.as_deref().unwrap_or("baseline");
        cell_sim::tui::run(scenario, name);
    }
}
