//! Terminal front end for the toroidal Game of Life universe

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use toroidal_life::{
    config::{CliOverrides, OutputFormat, Settings},
    universe::create_example_patterns,
    utils::{ColorOutput, GenerationReport, ProgressIndicator, UniverseFormatter},
    CanvasLayout, Universe,
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a universe and print frames
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Universe width (overrides config)
        #[arg(long)]
        width: Option<u32>,

        /// Universe height (overrides config)
        #[arg(long)]
        height: Option<u32>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Print a frame every N generations (overrides config)
        #[arg(short, long)]
        every: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the seeded initial state
    Show {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Label rows and columns
        #[arg(long)]
        coords: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            every,
            format,
            verbose,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                frame_interval: every,
                format,
            };
            run_command(&config, &overrides, verbose)
        }
        Commands::Show { config, coords } => show_command(&config, coords),
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: &Path, overrides: &CliOverrides, verbose: bool) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    if verbose {
        let (canvas_width, canvas_height) = CanvasLayout::new(settings.render.cell_size)
            .canvas_size(settings.universe.width, settings.universe.height)?;
        eprintln!("Configuration:");
        eprintln!("  Universe: {}x{}", settings.universe.width, settings.universe.height);
        eprintln!("  Seeding: {:?}", settings.seeding.strategy);
        eprintln!("  Generations: {}", settings.simulation.generations);
        eprintln!("  Frame interval: {}", settings.simulation.frame_interval);
        eprintln!("  Canvas: {}x{} px", canvas_width, canvas_height);
        eprintln!();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let start_time = Instant::now();
    let universe = run_simulation(&settings, &mut out, verbose)?;

    eprintln!(
        "{}",
        ColorOutput::success(&format!(
            "Reached generation {} in {:.3}s ({} living cells)",
            universe.generation(),
            start_time.elapsed().as_secs_f64(),
            universe.population()
        ))
    );

    Ok(())
}

/// Evolve the configured universe, writing frames or reports to `out`
fn run_simulation<W: Write>(
    settings: &Settings,
    out: &mut W,
    show_progress: bool,
) -> Result<Universe> {
    let mut universe = settings.build_universe()?;
    let generations = settings.simulation.generations;
    let interval = settings.simulation.frame_interval;
    let painted = ColorOutput::supports_color();
    let mut progress = show_progress.then(|| ProgressIndicator::new(generations));

    write_frame(&universe, settings, painted, out)?;

    while universe.generation() < generations {
        universe.tick();

        let is_last = universe.generation() == generations;
        if universe.generation() % interval == 0 || is_last {
            write_frame(&universe, settings, painted, out)?;
        }

        if let Some(progress) = progress.as_mut() {
            progress.update(universe.generation());
        }

        if universe.is_extinct() {
            if !is_last && universe.generation() % interval != 0 {
                write_frame(&universe, settings, painted, out)?;
            }
            eprintln!(
                "{}",
                ColorOutput::warning(&format!(
                    "Universe went extinct at generation {}",
                    universe.generation()
                ))
            );
            break;
        }
    }

    if let Some(progress) = progress {
        progress.finish();
    }

    Ok(universe)
}

/// Write one frame; text frames are drawn in palette colors when `painted`
fn write_frame<W: Write>(
    universe: &Universe,
    settings: &Settings,
    painted: bool,
    out: &mut W,
) -> Result<()> {
    match settings.output.format {
        OutputFormat::Text => {
            writeln!(out, "{}", UniverseFormatter::format_frame_header(universe))?;
            if painted {
                let palette = &settings.render.palette;
                write!(out, "{}", UniverseFormatter::format_painted(universe, palette))?;
            } else {
                write!(out, "{}", UniverseFormatter::format_compact(universe))?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", GenerationReport::from_universe(universe).to_json_line()?)?;
        }
    }
    Ok(())
}

fn show_command(config_path: &Path, coords: bool) -> Result<()> {
    let settings = load_settings(config_path)?;
    let universe = settings.build_universe()?;

    println!(
        "Universe ({}x{}), {} living cells:",
        universe.width(),
        universe.height(),
        universe.population()
    );
    if coords {
        println!("{}", UniverseFormatter::format_with_coords(&universe));
    } else {
        println!("{}", UniverseFormatter::format_compact(&universe));
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
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

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}
