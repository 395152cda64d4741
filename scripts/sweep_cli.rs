// scripts/sweep_cli.rs
//! bsm-sweep: command-line front end for the Black-Scholes-Merton engine
//!
//! # Commands
//!
//! - `bsm-sweep price` - price one scenario and print its Greeks
//! - `bsm-sweep sweep --field spot` - sweep one field and emit the series
//!
//! Scenario values come from `--config <file.toml>` when given, then from
//! the individual flags, which override the file.

use anyhow::{Context, Result};
use bsm_greeks::analytics::bs_analytic;
use bsm_greeks::config::{AxisOverrides, SweepConfig};
use bsm_greeks::models::{years_from_days, OptionField, OptionParameters, OptionType, DAYS_PER_YEAR};
use bsm_greeks::output;
use bsm_greeks::sweep::{par_sweep, sweep, SweepResult};
use bsm_greeks::{Greeks, Metric, MetricSet};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bsm-sweep")]
#[command(author, version, about = "Black-Scholes-Merton prices, Greeks and parameter sweeps")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML run configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write CSV to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ScenarioArgs {
    /// Underlying asset price
    #[arg(long, global = true)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long, global = true)]
    strike: Option<f64>,

    /// Risk-free rate (0.03 = 3%)
    #[arg(long, global = true)]
    rate: Option<f64>,

    /// Calendar days until expiry
    #[arg(long, global = true)]
    days: Option<f64>,

    /// Volatility (0.3 = 30%)
    #[arg(long, global = true)]
    volatility: Option<f64>,

    /// Option type: call/c or put/p
    #[arg(short = 't', long = "type", global = true)]
    option_type: Option<OptionType>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single scenario
    Price,

    /// Sweep one field and report every metric along the axis
    Sweep {
        /// Field to vary: spot, strike, rate, time or volatility.
        /// Without it, the axis flags refine the config's [sweep] section
        #[arg(long)]
        field: Option<OptionField>,

        /// Explicit comma-separated axis values (years for time)
        #[arg(long, value_delimiter = ',', conflicts_with_all = ["start", "end"])]
        values: Option<Vec<f64>>,

        /// Range start
        #[arg(long, requires = "end")]
        start: Option<f64>,

        /// Range end
        #[arg(long, requires = "start")]
        end: Option<f64>,

        /// Number of range points
        #[arg(long)]
        points: Option<usize>,

        /// Evaluate points on the rayon thread pool
        #[arg(long)]
        parallel: bool,

        /// Comma-separated metrics to report
        #[arg(long, value_delimiter = ',')]
        metrics: Option<Vec<Metric>>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut config = match &cli.config {
        Some(path) => SweepConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SweepConfig::default(),
    };
    apply_scenario(&mut config.base, &cli.scenario);

    match cli.command {
        Commands::Price => {
            config.base.validate().context("invalid option parameters")?;
            run_price(&config.base, cli.format, cli.output.as_ref())
        }
        Commands::Sweep {
            field,
            values,
            start,
            end,
            points,
            parallel,
            metrics,
        } => {
            config.apply_axis_overrides(AxisOverrides {
                field,
                values,
                start,
                end,
                points,
            })?;
            config.parallel |= parallel;
            if let Some(metrics) = metrics {
                config.metrics = metrics;
            }
            run_sweep(&config, cli.format, cli.output.as_ref())
        }
    }
}

fn apply_scenario(base: &mut OptionParameters, args: &ScenarioArgs) {
    if let Some(spot) = args.spot {
        base.spot_price = spot;
    }
    if let Some(strike) = args.strike {
        base.strike_price = strike;
    }
    if let Some(rate) = args.rate {
        base.risk_free_rate = rate;
    }
    if let Some(days) = args.days {
        base.time_to_expiry = years_from_days(days);
    }
    if let Some(volatility) = args.volatility {
        base.volatility = volatility;
    }
    if let Some(option_type) = args.option_type {
        base.option_type = option_type;
    }
}

fn run_price(params: &OptionParameters, format: Format, out_path: Option<&PathBuf>) -> Result<()> {
    let greeks = bs_analytic::greeks(params)?;
    info!(option_type = %params.option_type, price = greeks.price, "priced scenario");

    match format {
        Format::Table => print_greeks_table(params, &greeks),
        Format::Json => {
            let body = serde_json::json!({ "parameters": params, "greeks": greeks });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Format::Csv => match out_path {
            Some(path) => {
                output::write_summary_to_csv(&path.to_string_lossy(), params, &greeks)?;
                info!("summary written to {}", path.display());
            }
            None => output::write_summary(std::io::stdout(), params, &greeks)?,
        },
    }
    Ok(())
}

fn run_sweep(config: &SweepConfig, format: Format, out_path: Option<&PathBuf>) -> Result<()> {
    let axis = config
        .axis()
        .context("no sweep field given: pass --field or set [sweep] in the config")?
        .context("invalid sweep axis")?;

    info!(
        field = %axis.field,
        points = axis.len(),
        parallel = config.parallel,
        "running sweep"
    );
    let result = if config.parallel {
        par_sweep(&config.base, &axis)?
    } else {
        sweep(&config.base, &axis)?
    };
    let metrics = config.metric_set();

    match format {
        Format::Table => print_sweep_table(&result, metrics),
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        Format::Csv => match out_path {
            Some(path) => {
                output::write_sweep_to_csv(&path.to_string_lossy(), &result, metrics)?;
                info!("{} rows written to {}", result.len(), path.display());
            }
            None => output::write_sweep(std::io::stdout(), &result, metrics)?,
        },
    }
    Ok(())
}

fn print_greeks_table(params: &OptionParameters, greeks: &Greeks) {
    println!(
        "{} S={} K={} r={} T={:.4}y ({:.0} days) sigma={}",
        params.option_type,
        params.spot_price,
        params.strike_price,
        params.risk_free_rate,
        params.time_to_expiry,
        params.days_to_expiry(),
        params.volatility
    );
    for metric in Metric::ALL {
        println!("  {:<12} {:>14.6}", metric.title(), greeks.get(metric));
    }
}

fn print_sweep_table(result: &SweepResult, metrics: MetricSet) {
    let columns = metrics.metrics();
    let field = result.field();
    // Time axes read better in days
    let in_days = field == OptionField::TimeToExpiry;

    print!("{:>14}", if in_days { "days" } else { field.name() });
    for metric in &columns {
        print!(" {:>14}", metric.name());
    }
    println!();

    for (x, greeks) in result.points() {
        let shown = if in_days { x * DAYS_PER_YEAR } else { x };
        print!("{:>14.6}", shown);
        for metric in &columns {
            print!(" {:>14.6}", greeks.get(*metric));
        }
        println!();
    }

    if result.axis().is_descending() && field.is_time_decay() {
        info!("time axis runs toward expiry; invert the x-axis when charting");
    }
}
