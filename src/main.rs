use std::path::{Path, PathBuf};
use std::process;

use audio_silence_remover::{decode_wav, detect_silence, process_file, SilenceDetectionConfig};

const USAGE: &str = "\
Usage: audio-silence-remover [OPTIONS] <INPUT> [OUTPUT]

Removes silent passages from a WAV file. With --analyze, prints the
detected silence regions as JSON instead of writing a processed file.

Options:
      --min-silence <SECONDS>   Minimum silence duration to cut (default: 0.5)
      --threshold <AMPLITUDE>   Silence amplitude threshold (default: 0.01)
      --step <SAMPLES>          Scan stride in samples (default: 100)
      --analyze                 Print detected regions as JSON and exit
      --json                    Print the run's stats as JSON
  -h, --help                    Print this help";

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    config: SilenceDetectionConfig,
    analyze: bool,
    json: bool,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config = SilenceDetectionConfig::default();
    let mut analyze = false;
    let mut json = false;
    let mut positional: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if !arg.starts_with('-') {
            positional.push(arg);
            continue;
        }
        match arg.as_str() {
            "--min-silence" => {
                let value = args.next().ok_or("--min-silence requires a value")?;
                config.min_silence_duration = value
                    .parse()
                    .map_err(|_| format!("Invalid --min-silence value: {}", value))?;
            }
            "--threshold" => {
                let value = args.next().ok_or("--threshold requires a value")?;
                config.threshold = value
                    .parse()
                    .map_err(|_| format!("Invalid --threshold value: {}", value))?;
            }
            "--step" => {
                let value = args.next().ok_or("--step requires a value")?;
                config.step = value
                    .parse()
                    .map_err(|_| format!("Invalid --step value: {}", value))?;
            }
            "--analyze" => analyze = true,
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    let mut positional = positional.into_iter();
    let input = positional
        .next()
        .map(PathBuf::from)
        .ok_or("Missing input file")?;
    let output = positional.next().map(PathBuf::from);

    Ok(CliArgs {
        input,
        output,
        config,
        analyze,
        json,
    })
}

/// Derives an output path next to the input, e.g. `talk.wav` -> `talk_trimmed.wav`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}_trimmed.wav", stem))
}

fn run(args: CliArgs) -> Result<(), String> {
    if args.analyze {
        let buffer = decode_wav(&args.input)?;
        let regions = detect_silence(&buffer, &args.config);
        let json = serde_json::to_string_pretty(&regions)
            .map_err(|e| format!("Failed to serialize regions: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let stats = process_file(&args.input, &output, &args.config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&stats)
            .map_err(|e| format!("Failed to serialize stats: {}", e))?;
        println!("{}", json);
    } else {
        println!("Input duration:  {:.2} s", stats.old_duration);
        println!("Output duration: {:.2} s", stats.new_duration);
        println!("Time saved:      {:.2} s", stats.time_saved);
        println!("Processed in:    {:.3} s", stats.processing_time);
        println!("Wrote {}", output.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(message) = run(args) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}
