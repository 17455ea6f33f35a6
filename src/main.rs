use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use biome_seed_finder::adjacency::AdjacencyConstraint;
use biome_seed_finder::analyze::{adjacency_frequencies, analyze};
use biome_seed_finder::ascii::{biome_legend, export_report, render_chips};
use biome_seed_finder::export::{save_results, DEFAULT_RESULTS_FILE};
use biome_seed_finder::finder::{self, SearchReport, SearchRequest, SeedSource};
use biome_seed_finder::presets::presets;
use biome_seed_finder::seeds::parse_seed;
use biome_seed_finder::world::WorldSize;
use biome_seed_finder::logging;

#[derive(Parser, Debug)]
#[command(name = "seed_finder")]
#[command(about = "Find world seeds whose biome layouts put chosen biomes side by side")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for seeds matching every adjacency
    Find {
        /// Biome pair that must touch, e.g. desert-jungle (repeatable)
        #[arg(short, long = "constraint", required = true)]
        constraints: Vec<AdjacencyConstraint>,

        /// World size: small, medium or large
        #[arg(short, long, default_value = "medium")]
        size: WorldSize,

        /// Number of matching seeds to find
        #[arg(short = 'n', long, default_value = "5")]
        num_seeds: usize,

        /// Maximum seeds to try
        #[arg(short, long, default_value = "5000")]
        max_attempts: usize,

        /// Try consecutive seeds from this value instead of random ones
        #[arg(long)]
        start: Option<u64>,

        /// Seed for the random candidate stream (random if not specified)
        #[arg(long)]
        stream_seed: Option<u64>,

        /// Evaluate candidates on all cores
        #[arg(long)]
        parallel: bool,

        /// Save found seeds as JSON
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_RESULTS_FILE)]
        save: Option<PathBuf>,

        /// Write a plain text report
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show the layout and adjacencies of one seed
    Analyze {
        /// Seed number or text
        seed: String,

        #[arg(short, long, default_value = "medium")]
        size: WorldSize,
    },

    /// Run one of the built-in example searches
    Preset {
        /// Preset number (omit to list them)
        index: Option<usize>,
    },

    /// List biomes and their legend glyphs
    Biomes,

    /// Show how often each adjacency occurs across sequential seeds
    Frequency {
        #[arg(short, long, default_value = "medium")]
        size: WorldSize,

        #[arg(long, default_value = "10000")]
        samples: u64,
    },
}

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = execute(args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Find {
            constraints, size, num_seeds, max_attempts, start, stream_seed, parallel, save, report,
        } => {
            let source = match (start, stream_seed) {
                (Some(start), _) => SeedSource::range(start, max_attempts as u64),
                (None, Some(stream)) => SeedSource::random_from(stream),
                (None, None) => SeedSource::random(),
            };
            let request = SearchRequest::new(constraints, size)
                .num_seeds(num_seeds)
                .max_attempts(max_attempts)
                .seed_source(source);
            let summary = request.summary();

            let outcome = if parallel { finder::run_parallel(request)? } else { finder::run(request)? };
            print_report(&outcome);

            if let Some(path) = save {
                save_results(&outcome.results, &path)?;
                println!("Results saved to {}", path.display());
            }
            if let Some(path) = report {
                export_report(&outcome, &summary, &path)?;
                println!("Report written to {}", path.display());
            }
        }

        Command::Analyze { seed, size } => {
            let seed = parse_seed(&seed);
            let analysis = analyze(seed, size)?;

            println!("SEED ANALYSIS: {}", seed);
            println!("World Size: {}", size);
            if let Some(evil) = analysis.layout.evil() {
                println!("Evil Biome: {}", evil);
            }
            println!("\nBiome Layout:");
            println!("  {}", analysis.layout);
            println!("  {}", render_chips(&analysis.layout));
            println!("\nAdjacent Biome Pairs:");
            for (left, right) in analysis.layout.adjacent_pairs() {
                println!("  • {} ↔ {}", left, right);
            }
            let interesting = analysis.interesting();
            if !interesting.is_empty() {
                println!("\nNotable:");
                for pair in interesting {
                    println!("  ★ {}", pair);
                }
            }
        }

        Command::Preset { index } => {
            let all = presets();
            match index.and_then(|i| i.checked_sub(1)).and_then(|i| all.get(i).cloned()) {
                Some(preset) => {
                    println!("Searching for: {} (world size: {})", preset.name, preset.size);
                    let outcome = finder::run(preset.into_request())?;
                    print_report(&outcome);
                }
                None => {
                    for (i, preset) in all.iter().enumerate() {
                        println!("{}. {} (world size: {})", i + 1, preset.name, preset.size);
                    }
                }
            }
        }

        Command::Biomes => {
            print!("{}", biome_legend());
        }

        Command::Frequency { size, samples } => {
            println!("Adjacency frequency over seeds 0..{} ({} world):", samples, size);
            let freqs = adjacency_frequencies(0..samples, size)?;
            let mut rows: Vec<_> = freqs.into_iter().collect();
            rows.sort_by(|a, b| b.1.cmp(&a.1));
            for (pair, count) in rows {
                let pct = 100.0 * count as f64 / samples.max(1) as f64;
                println!("  {:<24} {:>6.2}%", pair.to_string(), pct);
            }
        }
    }

    Ok(())
}

fn print_report(report: &SearchReport) {
    if report.target_met() {
        println!("\nSuccess! Found {} seeds after {} attempts", report.results.len(), report.attempts);
    } else {
        println!(
            "\nFound {}/{} seeds after {} attempts. Try more attempts or a larger world size.",
            report.results.len(),
            report.target,
            report.attempts
        );
    }

    for (i, result) in report.results.iter().enumerate() {
        println!("\n  {}. Seed: {}", i + 1, result.seed);
        println!("     Layout: {}", result.layout);
        println!("     {}", render_chips(&result.layout));
    }
}
