//! Main CLI application for the forward Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_forward::{
    config::{non_negative, CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_seeds, load_seed_from_file, save_output_to_file, Grid, Simulator},
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life_forward")]
#[command(about = "Forward Game of Life simulator with a permanently dead border")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print the final grid
    Simulate {
        /// Grid side length
        #[arg(allow_negative_numbers = true)]
        side: Option<i64>,

        /// Number of generations to advance
        #[arg(allow_negative_numbers = true)]
        steps: Option<i64>,

        /// Seed bit string of length side*side, row-major
        seed: Option<String>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Load the seed from a file instead of the command line
        #[arg(long, conflicts_with = "seed")]
        seed_file: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the result to a file as well as stdout (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every generation, not just the final one
        #[arg(long)]
        show_evolution: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Decode a seed and print the grid with statistics
    Inspect {
        /// Grid side length
        #[arg(allow_negative_numbers = true)]
        side: i64,

        /// Seed bit string of length side*side
        seed: String,
    },

    /// Check that a seed evolves to an expected bit string
    Verify {
        /// Grid side length
        #[arg(allow_negative_numbers = true)]
        side: i64,

        /// Number of generations to advance
        #[arg(allow_negative_numbers = true)]
        steps: i64,

        /// Seed bit string of length side*side
        seed: String,

        /// Expected serialized state after the run
        expected: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            side,
            steps,
            seed,
            config,
            seed_file,
            format,
            output,
            show_evolution,
            verbose,
        } => simulate_command(
            config,
            CliOverrides {
                side,
                steps,
                seed,
                seed_file,
                format,
                output_file: output,
            },
            show_evolution,
            verbose,
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Inspect { side, seed } => inspect_command(side, &seed),
        Commands::Verify {
            side,
            steps,
            seed,
            expected,
        } => verify_command(side, steps, &seed, &expected),
    }
}

fn simulate_command(
    config_path: PathBuf,
    cli_overrides: CliOverrides,
    show_evolution: bool,
    verbose: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    settings.merge_with_cli(&cli_overrides)?;
    settings
        .validate()
        .context("Configuration validation failed")?;

    let seed = match (&settings.input.seed, &settings.input.seed_file) {
        (Some(seed), _) => seed.clone(),
        (None, Some(path)) => load_seed_from_file(path)?,
        (None, None) => anyhow::bail!("No seed supplied"),
    };

    if verbose {
        println!("Configuration:");
        println!("  Side: {}", settings.simulation.side);
        println!("  Steps: {}", settings.simulation.steps);
        println!("  Seed length: {}", seed.len());
        println!();
    }

    let start_time = Instant::now();

    let grid = Grid::from_seed(&seed, settings.simulation.side)
        .context("Failed to initialize grid from seed")?;
    let simulator = Simulator::new(settings.simulation.steps);

    let final_grid = if show_evolution {
        let path = simulator.evolution(grid)?;
        print!("{}", GridFormatter::format_evolution(&path));
        match path.into_iter().last() {
            Some(last) => last,
            None => anyhow::bail!("Evolution produced no generations"),
        }
    } else {
        simulator.run(grid)?
    };

    let rendered = render_output(&final_grid, settings.output.format)?;
    print!("{rendered}");

    if let Some(ref output_file) = settings.output.output_file {
        save_output_to_file(&rendered, output_file)?;
        if verbose {
            println!(
                "{}",
                ColorOutput::info(&format!("Result saved to {}", output_file.display()))
            );
        }
    }

    if verbose {
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Simulated {} step(s) in {:.3}s",
                simulator.steps(),
                start_time.elapsed().as_secs_f64()
            ))
        );
    }

    Ok(())
}

fn render_output(grid: &Grid, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Bits => format!("{}\n", grid.serialize()),
        OutputFormat::Visual => GridFormatter::format_grid_compact(grid),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(grid).context("Failed to serialize grid")?;
            format!("{json}\n")
        }
    })
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let seeds_dir = directory.join("input/seeds");

    for dir in [&config_dir, &seeds_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_seeds(&seeds_dir).context("Failed to create example seeds")?;
    println!("Created example seeds in: {}", seeds_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration in {}", config_path.display());
    println!("2. Run: cargo run -- simulate 5 2 0000000100001000010000000");
    println!("3. Or use a seed file: cargo run -- simulate 5 2 --seed-file input/seeds/blinker.txt");

    Ok(())
}

fn inspect_command(side: i64, seed: &str) -> Result<()> {
    let side = non_negative("side", side)?;
    let grid = Grid::from_seed(seed, side).context("Failed to initialize grid from seed")?;

    println!("Grid ({}x{}):", grid.side, grid.side);
    println!("{}", GridFormatter::format_grid_with_coords(&grid));

    println!("Grid Statistics:");
    println!("  Living cells: {}", grid.living_count());
    if !grid.cells.is_empty() {
        println!(
            "  Density: {:.1}%",
            (grid.living_count() as f64 / grid.cells.len() as f64) * 100.0
        );
    }

    Ok(())
}

fn verify_command(side: i64, steps: i64, seed: &str, expected: &str) -> Result<()> {
    let side = non_negative("side", side)?;
    let steps = non_negative("steps", steps)?;

    let grid = Grid::from_seed(seed, side).context("Failed to initialize grid from seed")?;
    let actual = Simulator::new(steps).run(grid)?.serialize();

    if actual == expected {
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Verified: seed evolves to the expected state after {steps} step(s)"
            ))
        );
        Ok(())
    } else {
        println!(
            "{}",
            ColorOutput::error("Mismatch between expected and simulated state")
        );
        println!("  expected: {expected}");
        println!("  actual:   {actual}");
        anyhow::bail!("Verification failed after {steps} step(s)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_forward",
            "simulate",
            "5",
            "2",
            "0000000100001000010000000",
            "--format",
            "bits",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_seed_with_seed_file() {
        let cli = Cli::try_parse_from([
            "game_of_life_forward",
            "simulate",
            "5",
            "2",
            "0000000100001000010000000",
            "--seed-file",
            "input/seeds/blinker.txt",
        ]);

        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/seeds/blinker.txt").exists());
    }

    #[test]
    fn test_verify_command() {
        // Blinker returns to its seed after two steps
        let seed = "0000000100001000010000000";
        assert!(verify_command(5, 2, seed, seed).is_ok());
        assert!(verify_command(5, 1, seed, seed).is_err());
        assert!(verify_command(-5, 1, seed, seed).is_err());
    }

    #[test]
    fn test_render_output() {
        let grid = Grid::from_seed("010101010", 3).unwrap();

        let bits = render_output(&grid, OutputFormat::Bits).unwrap();
        assert_eq!(bits, "010101010\n");

        let visual = render_output(&grid, OutputFormat::Visual).unwrap();
        assert_eq!(visual.lines().count(), 3);

        let json = render_output(&grid, OutputFormat::Json).unwrap();
        assert!(json.contains("\"side\": 3"));
    }
}
