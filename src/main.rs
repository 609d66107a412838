use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::Parser;
use weasel::config::{Config, LogLevel};
use weasel::samples::{self, Sample};
use weasel::types::{Context, Infer};
use weasel::{logger, run};

/// Type check and evaluate the bundled example programs.
#[derive(Debug, Parser)]
#[command(name = "weasel", version)]
struct Cli {
    /// Sample to run. Runs every sample when omitted.
    sample: Option<String>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Evaluate without type checking first.
    #[arg(long)]
    no_typecheck: bool,

    /// Maximum number of nested applications during evaluation.
    #[arg(long)]
    max_depth: Option<usize>,

    /// List the available samples and exit.
    #[arg(long)]
    list: bool,

    /// Print the unification solution after type checking.
    #[arg(long)]
    solution: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if cli.no_typecheck {
        config.typecheck = false;
    }
    if cli.max_depth.is_some() {
        config.eval.max_depth = cli.max_depth;
    }

    logger::init_with_level(config.log.level);

    if cli.list {
        for sample in samples::all() {
            println!("{:<16} {}", sample.name, sample.source);
        }
        return Ok(());
    }

    let selected = match &cli.sample {
        Some(name) => match samples::find(name) {
            Some(sample) => vec![sample],
            None => bail!("unknown sample '{}', try --list", name),
        },
        None => samples::all(),
    };

    for sample in &selected {
        report(sample, &config, cli.solution);
    }

    Ok(())
}

fn report(sample: &Sample, config: &Config, show_solution: bool) {
    println!("{}: {}", sample.name, sample.source);

    if show_solution && config.typecheck {
        let mut infer = Infer::new();
        if infer.infer(&Context::initial(), &sample.expr).is_ok() {
            for (unknown, ty) in infer.solution().iter() {
                println!("  u{} |-> {}", unknown, ty);
            }
        }
    }

    match run(&sample.expr, config) {
        Ok(outcome) => {
            if let Some(ty) = outcome.ty {
                println!("  : {}", ty);
            }
            println!("  = {}", outcome.value);
        }
        Err(err) => println!("  {}", err),
    }
}
