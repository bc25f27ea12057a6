//! Phrase Evolver CLI - Evolve a population of random strings into a target phrase.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;

use phrase_evolver::{EvolutionConfig, EvolutionEngine};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("phrase-evolver", String::as_str);

    let config = match parse_args(&args) {
        Command::Help => {
            print_usage(program);
            return;
        }
        Command::Example => {
            print_example_config();
            return;
        }
        Command::Default => EvolutionConfig::default(),
        Command::Load(path) => EvolutionConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
    };

    let mut engine = EvolutionEngine::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    });
    let config = engine.config().clone();

    println!("Phrase Evolver");
    println!("==============");
    println!(
        "Running with population {} and mutation rate {}",
        config.population_size, config.mutation_rate
    );
    println!("Target phrase: {}", config.target);
    if let Some(seed) = engine.random_seed() {
        println!("Random seed: {}", seed);
    }
    println!();

    let result = engine.run_with_callback(|report| {
        println!(
            "Generation {} with population {} completed with average fitness {:.4}, best phrase: {}",
            report.generation, report.population_size, report.average_fitness, report.best_phrase
        );
    });

    println!();
    println!("Stopped: {:?}", result.stats.stop_reason);
    println!("  Generations:      {}", result.stats.generations);
    println!("  Population:       {}", result.stats.population_size);
    println!("  Mutation rate:    {}", result.stats.mutation_rate);
    println!("  Average fitness:  {:.4}", result.stats.final_avg_fitness);
    if result.stats.reseeded_generations > 0 {
        println!("  Re-seeded:        {}", result.stats.reseeded_generations);
    }
    println!("  Final phrase:     {}", result.best_phrase);
    println!("  Time:             {:.2}s", result.stats.elapsed_seconds);
}

/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Example,
    Default,
    Load(PathBuf),
}

fn parse_args(args: &[String]) -> Command {
    match args.get(1).map(String::as_str) {
        Some("--help" | "-h") => Command::Help,
        Some("--example") => Command::Example,
        Some(path) => Command::Load(PathBuf::from(path)),
        None => Command::Default,
    }
}

fn print_usage(program: &str) {
    println!("Usage: {} [config.json | --example]", program);
    println!();
    println!("Evolve random strings until one matches the target phrase.");
    println!();
    println!("Arguments:");
    println!("  config.json  Path to evolution configuration file (default: built-in run)");
    println!("  --example    Print the built-in configuration as JSON");
}

fn print_example_config() {
    let config = EvolutionConfig::default();
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
