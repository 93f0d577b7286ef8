mod render;

use anyhow::{Context, Result};
use clap::Parser;
use smoothlife_core::{Automaton, ExecutionMode, SimulationConfig, Steppable};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `SmoothLife` demo driving the automaton from the terminal
#[derive(Parser, Debug)]
#[command(name = "smoothlife-demo")]
#[command(about = "Continuous cellular automaton rendered as ASCII", long_about = None)]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Number of random cells lit at start
    #[arg(short = 'n', long)]
    seed_count: Option<usize>,

    /// Fixed RNG seed for reproducible runs
    #[arg(short = 's', long)]
    rng_seed: Option<u64>,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 20)]
    frames: u64,

    /// Render every N generations (0 = only the final frame)
    #[arg(short, long, default_value_t = 1)]
    every: u64,

    /// Step on a single thread instead of the rayon pool
    #[arg(long)]
    sequential: bool,
}

impl Args {
    fn into_config(self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(count) = self.seed_count {
            config.seed_count = count;
        }
        if self.rng_seed.is_some() {
            config.rng_seed = self.rng_seed;
        }
        if self.sequential {
            config.mode = ExecutionMode::Sequential;
        }

        Ok(config)
    }
}

fn print_frame(automaton: &Automaton) {
    let stats = automaton.stats();
    println!(
        "generation {:>4} | mean {:.3} | min {:.3} | max {:.3} | lit {:>4} | {:.3}ms",
        stats.generation,
        stats.mean,
        stats.min,
        stats.max,
        stats.lit_cells,
        automaton.last_step_ms()
    );
    print!("{}", render::render(automaton.grid()));
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let frames = args.frames;
    let every = args.every;
    let config = args.into_config()?;

    let mut automaton = Automaton::from_config(&config).context("building automaton")?;
    info!(
        "Running {} generations on {}x{} grid",
        frames, config.width, config.height
    );

    print_frame(&automaton);
    automaton.run(frames, |a| {
        let generation = a.generation();
        if (every > 0 && generation % every == 0) || generation == frames {
            print_frame(a);
        }
    });

    Ok(())
}
