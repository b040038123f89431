use metric_plot::api::{DEFAULT_MEASURED_WIDTH, MetricPlot, PlotConfig};
use metric_plot::core::{DatasetSource, FileSource, RecordLayout};
use metric_plot::render::{NullRenderer, SvgRenderer};
use metric_plot::telemetry;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Render,
    Snapshot,
    Metrics,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: Option<PathBuf>,
    x_metric: Option<String>,
    measured_width: f64,
    hover: Option<usize>,
    layout: RecordLayout,
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct MetricsReport {
    records: usize,
    x_metric: String,
    y_metric: String,
    metrics: Vec<String>,
    options: Vec<String>,
}

fn main() {
    if let Err(err) = parse_args().and_then(run) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), String> {
    let _ = if args.verbose {
        telemetry::init_tracing("warn,metric_plot=debug")
    } else {
        telemetry::init_default_tracing()
    };
    let source = FileSource::new(&args.input);
    match args.command {
        CommandKind::Render => {
            let output = required_output(&args)?;
            let mut plot = MetricPlot::from_source(SvgRenderer::new(), &source, config(&args))
                .map_err(|err| err.to_string())?;
            apply_interaction(&mut plot, &args)?;
            plot.render().map_err(|err| err.to_string())?;
            plot.renderer()
                .write_to(output)
                .map_err(|err| err.to_string())?;
            println!("wrote {}", output.display());
            Ok(())
        }
        CommandKind::Snapshot => {
            let output = required_output(&args)?;
            let mut plot = MetricPlot::from_source(NullRenderer::default(), &source, config(&args))
                .map_err(|err| err.to_string())?;
            apply_interaction(&mut plot, &args)?;
            write_json(output, &plot.snapshot())
        }
        CommandKind::Metrics => {
            let config = config(&args);
            let dataset = source
                .load(config.layout)
                .map_err(|err| err.to_string())?;
            let metrics = dataset.numeric_metric_names();
            let plot = MetricPlot::new(NullRenderer::default(), dataset, config)
                .map_err(|err| err.to_string())?;
            let report = MetricsReport {
                records: plot.dataset().len(),
                x_metric: plot.state().x_metric().to_owned(),
                y_metric: plot.state().y_metric().to_owned(),
                metrics,
                options: plot.selector().options().to_vec(),
            };
            let payload = serde_json::to_string_pretty(&report)
                .map_err(|err| format!("failed to serialize json: {err}"))?;
            println!("{payload}");
            Ok(())
        }
    }
}

fn config(args: &CliArgs) -> PlotConfig {
    PlotConfig {
        measured_width: args.measured_width,
        layout: args.layout,
        ..PlotConfig::default()
    }
}

fn apply_interaction<R: metric_plot::render::Renderer>(
    plot: &mut MetricPlot<R>,
    args: &CliArgs,
) -> Result<(), String> {
    if let Some(metric) = &args.x_metric {
        plot.select_x_metric(metric)
            .map_err(|err| err.to_string())?;
    }
    if let Some(index) = args.hover {
        if !plot.pointer_enter_point(index) {
            return Err(format!("no point with index {index}"));
        }
    }
    Ok(())
}

fn required_output(args: &CliArgs) -> Result<&PathBuf, String> {
    args.output
        .as_ref()
        .ok_or_else(|| "missing required --output <path>".to_owned())
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, format!("{payload}\n"))
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("render") => CommandKind::Render,
        Some("snapshot") => CommandKind::Snapshot,
        Some("metrics") => CommandKind::Metrics,
        _ => {
            return Err(
                "usage: metric_plot_tool <render|snapshot|metrics> --input <path> [--output <path>] [--x-metric <name>] [--width <px>] [--hover <index>] [--flat] [--verbose]"
                    .to_owned(),
            );
        }
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut x_metric = None::<String>;
    let mut measured_width = DEFAULT_MEASURED_WIDTH;
    let mut hover = None::<usize>;
    let mut layout = RecordLayout::DailySummary;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--x-metric" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --x-metric".to_owned())?;
                x_metric = Some(value);
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                measured_width = value
                    .parse()
                    .map_err(|err| format!("invalid --width `{value}`: {err}"))?;
            }
            "--hover" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --hover".to_owned())?;
                hover = Some(
                    value
                        .parse()
                        .map_err(|err| format!("invalid --hover `{value}`: {err}"))?,
                );
            }
            "--flat" => layout = RecordLayout::Flat,
            "--verbose" => verbose = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin metric_plot_tool -- <render|snapshot|metrics> --input <path> [--output <path>] [--x-metric <name>] [--width <px>] [--hover <index>] [--flat] [--verbose]"
                );
                std::process::exit(0);
            }
            _ => return Err(format!("unknown argument `{arg}`")),
        }
    }

    let input = input.ok_or_else(|| "missing required --input <path>".to_owned())?;
    Ok(CliArgs {
        command,
        input,
        output,
        x_metric,
        measured_width,
        hover,
        layout,
        verbose,
    })
}
