//! Social seating CLI - Run the seating optimizer from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;

use social_seating::{EvolutionConfig, EvolutionEngine};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Search for a seating order that maximizes neighbour affinity.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to evolution configuration file");
        eprintln!("  generations  Override the configured generation budget");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let mut config = EvolutionConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    if let Some(generations) = args.get(2).and_then(|s| s.parse().ok()) {
        config.max_generations = generations;
    }

    println!("Social Seating Optimizer");
    println!("========================");
    println!("Individuals: {}", config.graph.size());
    println!("Population: {}", config.population_size);
    println!("Mutation rate: {}", config.mutation_rate);
    println!("Generations: {}", config.max_generations);
    println!("Elitism: {}", config.elitism);
    println!();

    let mut engine = EvolutionEngine::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    });
    println!("Seed: {}", engine.seed());
    println!();

    println!("Running evolution...");
    let result = engine.run_with_callback(|progress| {
        // Print progress every 10%
        let interval = (progress.total_generations / 10).max(1);
        if progress.generation % interval == 0 {
            println!(
                "  Generation {}/{}: best={:.3}, median={:.3}, eliminated={}",
                progress.generation,
                progress.total_generations,
                progress.generation_best,
                progress.median_fitness,
                progress.eliminated
            );
        }
    });

    println!();
    println!(
        "The optimal arrangement is: {}, with an etotal of: {}",
        result.best.arrangement, result.best.best_fitness
    );
    println!("  Found in generation: {}", result.best.generation);
    println!(
        "  Final average etotal: {:.3}",
        result.stats.final_avg_fitness
    );
    println!(
        "Time: {:.2}s ({} evaluations)",
        result.stats.elapsed_seconds, result.stats.total_evaluations
    );
}

fn print_example_config() {
    let config = EvolutionConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
