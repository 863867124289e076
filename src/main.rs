use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradecalc::grade::{self, GradeRequirementCalculator, GradeScale, RawInputs, TargetMode};
use gradecalc::report::{self, Config, OutputFormat, ResultFormatter};
use std::path::PathBuf;
use tracing::{metadata::LevelFilter, Level};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gradecalc")]
#[command(about = "Work out the exam score needed to reach a final grade", long_about = None)]
struct Cli {
    /// Log rejected inputs and other diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ./gradecalc.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Required exam score for one target grade
    Calc {
        /// Current grade, e.g. "85"
        #[arg(short, long, allow_hyphen_values = true)]
        current: String,

        /// Desired final grade: a number ("90") or a letter ("A")
        #[arg(short, long, allow_hyphen_values = true)]
        desired: String,

        /// Exam weight as a fraction in (0, 1], e.g. "0.4" for 40%
        #[arg(short, long, allow_hyphen_values = true)]
        weight: String,

        /// How to read the desired grade
        #[arg(short, long, default_value = "auto")]
        mode: TargetMode,

        /// Print JSON regardless of the configured format
        #[arg(long)]
        json: bool,
    },

    /// Required exam score for every letter of the grade scale
    Sweep {
        #[arg(short, long, allow_hyphen_values = true)]
        current: String,

        #[arg(short, long, allow_hyphen_values = true)]
        weight: String,

        #[arg(long)]
        json: bool,
    },

    /// Print the letter grade scale
    Scale {
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::registry()
        .with(fmt)
        .with(LevelFilter::from_level(level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Calc {
            current,
            desired,
            weight,
            mode,
            json,
        } => {
            let inputs = RawInputs::new(current, desired, weight);
            let valid = calculate(&inputs, mode, output_format(&config, json), &config)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Sweep {
            current,
            weight,
            json,
        } => sweep(&current, &weight, output_format(&config, json), &config)?,
        Commands::Scale { json } => print_scale(output_format(&config, json))?,
    }

    Ok(())
}

fn output_format(config: &Config, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        config.display.format
    }
}

/// Print the result; returns whether the inputs were valid.
fn calculate(
    inputs: &RawInputs,
    mode: TargetMode,
    format: OutputFormat,
    config: &Config,
) -> Result<bool> {
    let calculator = GradeRequirementCalculator::for_mode(mode, &inputs.desired_grade);
    let result = calculator.compute(inputs);

    let formatter = ResultFormatter::new(&config.display);
    let rendered = formatter
        .render(&result, format)
        .context("Failed to render result")?;
    println!("{}", rendered);

    Ok(result.is_valid())
}

fn sweep(current: &str, weight: &str, format: OutputFormat, config: &Config) -> Result<()> {
    let formatter = ResultFormatter::new(&config.display);

    match grade::required_scores_for_scale(current, weight, GradeScale::standard()) {
        Ok(requirements) => {
            let rendered = formatter
                .render_sweep(&requirements, format)
                .context("Failed to render sweep")?;
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(reason = %e, "rejected sweep inputs");
            let rendered = formatter
                .render(&grade::CalculationResult::Invalid, format)
                .context("Failed to render result")?;
            println!("{}", rendered);
            std::process::exit(1);
        }
    }
}

fn print_scale(format: OutputFormat) -> Result<()> {
    let scale = GradeScale::standard();
    match format {
        OutputFormat::Text => println!("{}", report::format_scale_text(scale)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report::scale_to_json(scale))
                .context("Failed to serialize scale")?
        ),
    }
    Ok(())
}
