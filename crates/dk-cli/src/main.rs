//! DistKit CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dk_core::ParamEntry;
use dk_dist::{make, Distribution, Op};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "distkit")]
#[command(about = "DistKit - Runtime-polymorphic probability distributions")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a point operation (pdf, cdf, hazard, quantile, ...) on a grid
    Eval {
        /// Family name (case/separator-insensitive, e.g. `chi-squared`)
        #[arg(short, long)]
        family: String,

        /// Named parameter, `key=value`. Repeatable.
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Operation: pdf, ln_pdf, cdf, sf, hazard, chf, quantile,
        /// quantile_complement
        #[arg(long)]
        op: String,

        /// Evaluation point (probability for the quantile operations).
        /// Repeatable.
        #[arg(short, long = "at")]
        at: Vec<f64>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Describe a family: support, moments and the capability table
    Describe {
        /// Family name
        #[arg(short, long)]
        family: String,

        /// Named parameter, `key=value`. Repeatable.
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List every registered family by canonical name
    Families,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Eval { family, params, op, at, output } => {
            cmd_eval(&family, &params, &op, &at, output.as_ref())
        }
        Commands::Describe { family, params, output } => {
            cmd_describe(&family, &params, output.as_ref())
        }
        Commands::Families => {
            for name in dk_dist::families() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn parse_params(raw: &[String]) -> Result<Vec<ParamEntry>> {
    raw.iter()
        .map(|s| {
            let (key, value) = s
                .split_once('=')
                .with_context(|| format!("parameter `{s}` is not of the form key=value"))?;
            let value: f64 = value
                .parse()
                .with_context(|| format!("parameter `{key}` has non-numeric value `{value}`"))?;
            Ok(ParamEntry::new(key, value))
        })
        .collect()
}

fn build(family: &str, raw_params: &[String]) -> Result<Distribution> {
    let params = parse_params(raw_params)?;
    let dist = make(family, &params)?;
    tracing::info!(family = dist.family(), params = params.len(), "distribution constructed");
    Ok(dist)
}

fn cmd_eval(
    family: &str,
    raw_params: &[String],
    op: &str,
    at: &[f64],
    output: Option<&PathBuf>,
) -> Result<()> {
    if at.is_empty() {
        bail!("no evaluation points; pass at least one --at");
    }
    let dist = build(family, raw_params)?;
    let eval: fn(&Distribution, f64) -> f64 = match op {
        "pdf" => Distribution::pdf,
        "ln_pdf" => Distribution::ln_pdf,
        "cdf" => Distribution::cdf,
        "sf" => Distribution::sf,
        "hazard" => Distribution::hazard,
        "chf" => Distribution::chf,
        "quantile" => Distribution::quantile,
        "quantile_complement" => Distribution::quantile_complement,
        other => bail!("unknown point operation `{other}`"),
    };
    let values: Vec<serde_json::Value> = at
        .iter()
        .map(|&x| {
            serde_json::json!({
                "at": x,
                "value": finite_or_null(eval(&dist, x)),
            })
        })
        .collect();
    write_json(
        output,
        serde_json::json!({
            "family": dist.family(),
            "op": op,
            "results": values,
        }),
    )
}

fn cmd_describe(family: &str, raw_params: &[String], output: Option<&PathBuf>) -> Result<()> {
    let dist = build(family, raw_params)?;
    let (range_lo, range_hi) = dist.range();
    let (supp_lo, supp_hi) = dist.support();
    let supported: Vec<&str> =
        Op::ALL.iter().filter(|&&op| dist.supports(op)).map(|op| op.name()).collect();
    write_json(
        output,
        serde_json::json!({
            "family": dist.family(),
            "discrete": dist.is_discrete(),
            "range": [finite_or_null(range_lo), finite_or_null(range_hi)],
            "support": [finite_or_null(supp_lo), finite_or_null(supp_hi)],
            "mean": dist.mean(),
            "variance": dist.variance(),
            "std_dev": dist.std_dev(),
            "skewness": dist.skewness(),
            "kurtosis": dist.kurtosis(),
            "kurtosis_excess": dist.kurtosis_excess(),
            "mode": dist.mode(),
            "median": dist.median(),
            "entropy": dist.entropy(),
            "supported_ops": supported,
        }),
    )
}

/// JSON has no NaN/∞; sentinel results serialize as null.
fn finite_or_null(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
