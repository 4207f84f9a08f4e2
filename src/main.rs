use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stepwise::{
    axis::{tick_count, AxisTimeFormat},
    format_duration, humanize_duration,
    range::{default_time_range, range_presets, RangePreset, TimeRange},
    round_interval,
    time::{format_time, parse_time},
    try_parse_duration,
    window::{samples_for_width, QueryParams, DEFAULT_MIN_STEP_MS, PIXELS_PER_SAMPLE},
    QueryWindow, WindowRequest,
};

/// Chart width assumed when neither `--width` nor `--samples` is given.
const DEFAULT_WIDTH_PX: f64 = 1000.0;

#[derive(Parser)]
#[command(
    name = "stepwise",
    about = "Duration strings and metrics query steps for time-series dashboards",
    version = env!("CARGO_PKG_VERSION"),
)]
struct Args {
    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Log filter, e.g. `debug` or `stepwise=trace`
    #[arg(long = "log-level", global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a duration such as `1h30m` into milliseconds
    Parse { duration: String },

    /// Render milliseconds as a compact duration (e.g. `90m` → `1h30m`)
    Format {
        #[arg(allow_negative_numbers = true)]
        ms: i64,
    },

    /// Render milliseconds for display (e.g. `1d 2h 3m 4s`)
    Humanize {
        #[arg(allow_negative_numbers = true)]
        ms: i64,
    },

    /// Snap a raw interval in milliseconds to the nearest nice step
    Round {
        #[arg(allow_negative_numbers = true)]
        raw_ms: f64,
    },

    /// List the range picker presets and the default time range
    Ranges {
        /// Reference time for the default range (defaults to now)
        #[arg(short = 'e', long)]
        end: Option<String>,
    },

    /// Compute step-aligned query boundaries for a chart
    #[command(group(
        ArgGroup::new("resolution")
            .args(&["width", "samples"])
            .multiple(false),
    ))]
    Window {
        /// Visible range, e.g. `15m` or `7d`
        #[arg(short = 'r', long)]
        range: String,

        /// Chart width in pixels; one sample per 100px
        #[arg(short = 'w', long)]
        width: Option<f64>,

        /// Desired sample count
        #[arg(short = 'n', long)]
        samples: Option<f64>,

        /// End of the range: epoch milliseconds or a timestamp (defaults to now)
        #[arg(short = 'e', long)]
        end: Option<String>,

        /// Smallest step allowed
        #[arg(long = "min-step")]
        min_step: Option<String>,
    },
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    ms: i64,
}

#[derive(Serialize)]
struct FormatOutput {
    ms: i64,
    duration: String,
}

#[derive(Serialize)]
struct RoundOutput {
    raw_ms: f64,
    step_ms: i64,
    step: String,
}

#[derive(Serialize)]
struct WindowOutput {
    #[serde(flatten)]
    window: QueryWindow,
    start: String,
    end: String,
    step: String,
    points: i64,
    range_selector: String,
    axis: AxisTimeFormat,
    axis_format: &'static str,
    query: QueryParams,
}

#[derive(Serialize)]
struct RangesOutput {
    presets: Vec<RangePreset>,
    default: TimeRange,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match &args.command {
        Command::Parse { duration } => {
            debug!(input = %duration, "parsing duration");
            let ms = try_parse_duration(duration)
                .with_context(|| format!("Invalid duration '{duration}'"))?;
            if args.json {
                print_json(&ParseOutput { input: duration, ms })?;
            } else {
                println!("{ms}");
            }
        }
        Command::Format { ms } => emit_duration(args.json, *ms, format_duration(*ms))?,
        Command::Humanize { ms } => emit_duration(args.json, *ms, humanize_duration(*ms))?,
        Command::Round { raw_ms } => {
            let step_ms = round_interval(*raw_ms);
            debug!(raw_ms, step_ms, "rounded interval");
            if args.json {
                print_json(&RoundOutput {
                    raw_ms: *raw_ms,
                    step_ms,
                    step: format_duration(step_ms),
                })?;
            } else {
                println!("{step_ms}");
            }
        }
        Command::Ranges { end } => {
            let output = RangesOutput {
                presets: range_presets(),
                default: default_time_range(resolve_end(end.as_deref())?),
            };
            if args.json {
                print_json(&output)?;
            } else {
                for preset in &output.presets {
                    println!("{:>8}: {}ms", preset.label, preset.range_ms);
                }
                println!(
                    "{:>8}: {} .. {} ({} .. {})",
                    "Default",
                    output.default.raw_from,
                    output.default.raw_to,
                    format_time(output.default.from_ms)?,
                    format_time(output.default.to_ms)?,
                );
            }
        }
        Command::Window {
            range,
            width,
            samples,
            end,
            min_step,
        } => {
            let range_ms = try_parse_duration(range)
                .with_context(|| format!("Invalid range '{range}'"))?;
            let min_step_ms = match min_step {
                Some(text) => try_parse_duration(text)
                    .with_context(|| format!("Invalid minimum step '{text}'"))?,
                None => DEFAULT_MIN_STEP_MS,
            };
            let end_ms = resolve_end(end.as_deref())?;
            let width_px = width
                .or_else(|| samples.map(|n| n * PIXELS_PER_SAMPLE))
                .unwrap_or(DEFAULT_WIDTH_PX);
            let samples = samples.unwrap_or_else(|| samples_for_width(width_px));

            let request = WindowRequest {
                end_ms,
                range_ms,
                samples,
                min_step_ms,
            };
            debug!(?request, "computing query window");
            let window = QueryWindow::compute(&request)?;

            let axis = AxisTimeFormat::select(
                tick_count(Some(width_px)),
                window.start_ms,
                window.end_ms,
            );
            let output = WindowOutput {
                window,
                start: format_time(window.start_ms)?,
                end: format_time(window.end_ms)?,
                step: format_duration(window.step_ms),
                points: window.point_count(),
                range_selector: window.range_selector(),
                axis,
                axis_format: axis.pattern(),
                query: window.to_query_params(),
            };

            if args.json {
                print_json(&output)?;
            } else {
                println!("{:>8}: {} ({})", "Start", output.start, window.start_ms);
                println!("{:>8}: {} ({})", "End", output.end, window.end_ms);
                println!("{:>8}: {} ({}ms)", "Step", output.step, window.step_ms);
                println!("{:>8}: {}", "Points", output.points);
                println!("{:>8}: {}", "Selector", output.range_selector);
                println!("{:>8}: {}", "Axis", output.axis_format);
            }
        }
    }

    Ok(())
}

fn resolve_end(text: Option<&str>) -> Result<i64> {
    match text {
        Some(text) => parse_end(text),
        None => Ok(chrono::Utc::now().timestamp_millis()),
    }
}

/// Accepts epoch milliseconds or anything `parse_time` understands.
fn parse_end(text: &str) -> Result<i64> {
    if let Ok(ms) = text.parse::<i64>() {
        return Ok(ms);
    }
    parse_time(text).with_context(|| format!("Invalid end time '{text}'"))
}

fn emit_duration(json: bool, ms: i64, duration: String) -> Result<()> {
    if json {
        print_json(&FormatOutput { ms, duration })
    } else {
        println!("{duration}");
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}
