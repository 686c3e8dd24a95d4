use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use xornet::report::{architecture, plot};
use xornet::train::{accuracy, TracingObserver};
use xornet::{evaluate, train_loop, Dataset, NetworkParameters, RandomInitializer, Topology, TrainConfig};

/// Train a 2-2-1 sigmoid network on XOR with backpropagation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with learning_rate / epochs / report_interval
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Gradient descent step size
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Emit a loss record every N epochs
    #[arg(short, long)]
    report_interval: Option<usize>,

    /// Hidden layer width
    #[arg(long, default_value = "2")]
    hidden: usize,

    /// Seed for weight initialization (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write loss_plot.html and data_plot.html into this directory
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Print the history and predictions as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn resolve_config(args: &Args) -> Result<TrainConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let path = path.to_string_lossy();
            TrainConfig::load_json(&path).with_context(|| format!("loading config {path}"))?
        }
        None => TrainConfig::default(),
    };
    if let Some(epochs) = args.epochs {
        config.epochs = epochs;
    }
    if let Some(lr) = args.learning_rate {
        config.learning_rate = lr;
    }
    if let Some(interval) = args.report_interval {
        config.report_interval = interval;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let topology = Topology::with_hidden(args.hidden);
    topology.validate()?;
    let config = resolve_config(&args)?;
    let dataset = Dataset::new(Dataset::xor().examples().to_vec(), &topology)?;

    println!("{}", architecture::render(&topology));

    let mut initializer = match args.seed {
        Some(seed) => {
            info!(seed, "seeded initialization");
            RandomInitializer::seeded(seed)
        }
        None => RandomInitializer::from_entropy(),
    };
    let mut params = NetworkParameters::initialized(&topology, &mut initializer);

    let history = train_loop(&mut params, &dataset, &config, &mut TracingObserver);
    let predictions = evaluate(&params, &dataset);

    if args.json {
        let report = serde_json::json!({
            "config": config,
            "history": history,
            "parameters": params,
            "predictions": predictions,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\nTesting trained network:");
        for p in &predictions {
            println!("Input: {:?}, Target: {:.0}, Output: {:.4}", p.input, p.target, p.output);
        }
        println!("Accuracy: {:.0}%", accuracy(&predictions) * 100.0);
    }

    if let Some(dir) = &args.plot_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        plot::write_loss_curve(&history.records, dir.join("loss_plot.html"))?;
        plot::write_data_distribution(&dataset, dir.join("data_plot.html"))?;
    }

    Ok(())
}
