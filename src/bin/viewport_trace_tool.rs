use serde::{Deserialize, Serialize};
use signal_viewport::api::{DatasetRegistry, ViewportEngine, ViewportEngineConfig, WindowResult};
use signal_viewport::core::json_float;
use signal_viewport::interaction::ViewportEvent;
use signal_viewport::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

const USAGE: &str =
    "usage: viewport_trace_tool <replay|check> --datasets <path> --script <path> [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Replay,
    Check,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    datasets: PathBuf,
    script: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceScript {
    trace_name: String,
    #[serde(default)]
    config: Option<ViewportEngineConfig>,
    #[serde(default = "default_tolerance")]
    tolerance: f64,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceStep {
    event: ViewportEvent,
    #[serde(default)]
    expect: Option<TraceExpectation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct TraceExpectation {
    #[serde(default, with = "json_float::option")]
    min_time: Option<f64>,
    #[serde(default, with = "json_float::option")]
    max_time: Option<f64>,
    #[serde(default)]
    num_points: Option<usize>,
    #[serde(default)]
    error: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceCapture {
    trace_name: String,
    steps: Vec<CapturedStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CapturedStep {
    event: ViewportEvent,
    #[serde(default)]
    observed: Option<WindowResult>,
    #[serde(default)]
    error: Option<String>,
}

fn default_tolerance() -> f64 {
    1e-9
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let raw = fs::read_to_string(&args.datasets)
        .map_err(|err| format!("failed to read `{}`: {err}", args.datasets.display()))?;
    let registry = DatasetRegistry::from_json_str(&raw).map_err(|err| err.to_string())?;

    let raw = fs::read_to_string(&args.script)
        .map_err(|err| format!("failed to read `{}`: {err}", args.script.display()))?;
    let script: TraceScript =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let capture = replay(registry, &script)?;
    if args.command == CommandKind::Check {
        check(&script, &capture)?;
    }

    match &args.output {
        Some(path) => write_json(path, &capture),
        None => {
            let payload = serde_json::to_string_pretty(&capture)
                .map_err(|err| format!("failed to serialize json: {err}"))?;
            println!("{payload}");
            Ok(())
        }
    }
}

fn replay(registry: DatasetRegistry, script: &TraceScript) -> Result<TraceCapture, String> {
    let config = script.config.clone().unwrap_or_default();
    let mut engine = ViewportEngine::new(registry, config)
        .map_err(|err| format!("engine init failed: {err}"))?;

    let steps = script
        .steps
        .iter()
        .map(|step| match engine.apply(&step.event) {
            Ok(observed) => CapturedStep {
                event: step.event.clone(),
                observed: Some(observed),
                error: None,
            },
            Err(err) => CapturedStep {
                event: step.event.clone(),
                observed: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    Ok(TraceCapture {
        trace_name: script.trace_name.clone(),
        steps,
    })
}

fn check(script: &TraceScript, capture: &TraceCapture) -> Result<(), String> {
    let mut failures = Vec::new();

    for (index, (step, captured)) in script.steps.iter().zip(&capture.steps).enumerate() {
        let Some(expect) = &step.expect else {
            continue;
        };

        match (&captured.observed, &captured.error) {
            (_, Some(err)) if !expect.error => {
                failures.push(format!("step {index}: unexpected error: {err}"));
            }
            (Some(_), None) if expect.error => {
                failures.push(format!("step {index}: expected an error"));
            }
            (Some(observed), None) => {
                compare_time(
                    index,
                    "min_time",
                    expect.min_time,
                    observed.min_time,
                    script.tolerance,
                    &mut failures,
                );
                compare_time(
                    index,
                    "max_time",
                    expect.max_time,
                    observed.max_time,
                    script.tolerance,
                    &mut failures,
                );
                if let Some(expected) = expect.num_points {
                    if expected != observed.num_points {
                        failures.push(format!(
                            "step {index}: num_points expected {expected}, observed {}",
                            observed.num_points
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "trace `{}` failed:\n{}",
            script.trace_name,
            failures.join("\n")
        ))
    }
}

fn compare_time(
    index: usize,
    field: &str,
    expected: Option<f64>,
    observed: f64,
    tolerance: f64,
    failures: &mut Vec<String>,
) {
    if let Some(expected) = expected {
        let matches = if expected.is_finite() && observed.is_finite() {
            (expected - observed).abs() <= tolerance
        } else {
            expected == observed || (expected.is_nan() && observed.is_nan())
        };
        if !matches {
            failures.push(format!(
                "step {index}: {field} expected {expected}, observed {observed}"
            ));
        }
    }
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let command = match args.next().as_deref() {
        Some("replay") => CommandKind::Replay,
        Some("check") => CommandKind::Check,
        _ => return Err(USAGE.to_owned()),
    };

    let mut datasets = None::<PathBuf>;
    let mut script = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--datasets" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --datasets".to_owned())?;
                datasets = Some(PathBuf::from(value));
            }
            "--script" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --script".to_owned())?;
                script = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let datasets = datasets.ok_or_else(|| "missing --datasets".to_owned())?;
    let script = script.ok_or_else(|| "missing --script".to_owned())?;
    Ok(CliArgs {
        command,
        datasets,
        script,
        output,
    })
}
