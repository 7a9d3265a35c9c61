//! Configuration settings for the universe and its terminal front end

use crate::render::{CanvasLayout, Palette, MAX_CELL_SIZE};
use crate::universe::{
    load_pattern, BlankSeeder, DivisibilitySeeder, PatternSeeder, RandomSeeder, Seeder, Universe,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub universe: UniverseConfig,
    pub seeding: SeedingConfig,
    pub simulation: SimulationConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedingConfig {
    pub strategy: SeedStrategy,
    #[serde(default)]
    pub divisors: Vec<usize>,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub fill_rate: f64,
    #[serde(default)]
    pub pattern_file: Option<PathBuf>,
    #[serde(default)]
    pub offset_row: u32,
    #[serde(default)]
    pub offset_col: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
    Divisibility,
    Random,
    Pattern,
    Blank,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: u64,
    /// Print a frame every this many generations
    pub frame_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub cell_size: u32,
    pub palette: Palette,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            universe: UniverseConfig {
                width: 64,
                height: 32,
            },
            seeding: SeedingConfig {
                strategy: SeedStrategy::Divisibility,
                divisors: vec![2, 7],
                seed: 42,
                fill_rate: 0.5,
                pattern_file: None,
                offset_row: 0,
                offset_col: 0,
            },
            simulation: SimulationConfig {
                generations: 100,
                frame_interval: 10,
            },
            render: RenderConfig {
                cell_size: 6,
                palette: Palette::default(),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.universe.width == 0 || self.universe.height == 0 {
            anyhow::bail!(
                "Universe dimensions must be positive, got {}x{}",
                self.universe.width,
                self.universe.height
            );
        }

        if self.simulation.frame_interval == 0 {
            anyhow::bail!("Frame interval must be positive");
        }

        if self.render.cell_size == 0 || self.render.cell_size > MAX_CELL_SIZE {
            anyhow::bail!(
                "Cell size must be between 1 and {}, got {}",
                MAX_CELL_SIZE,
                self.render.cell_size
            );
        }

        CanvasLayout::new(self.render.cell_size)
            .canvas_size(self.universe.width, self.universe.height)
            .context("Universe is too large to draw at this cell size")?;

        match self.seeding.strategy {
            SeedStrategy::Divisibility => {
                if self.seeding.divisors.is_empty() {
                    anyhow::bail!("Divisibility seeding needs at least one divisor");
                }
            }
            SeedStrategy::Random => {
                if !(0.0..=1.0).contains(&self.seeding.fill_rate) {
                    anyhow::bail!(
                        "Fill rate must be between 0 and 1, got {}",
                        self.seeding.fill_rate
                    );
                }
            }
            SeedStrategy::Pattern => match &self.seeding.pattern_file {
                None => anyhow::bail!("Pattern seeding needs a pattern_file"),
                Some(path) if !path.exists() => {
                    anyhow::bail!("Pattern file does not exist: {}", path.display())
                }
                Some(_) => {}
            },
            SeedStrategy::Blank => {}
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.universe.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.universe.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(frame_interval) = cli_overrides.frame_interval {
            self.simulation.frame_interval = frame_interval;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }

    /// Build the seeding strategy described by `seeding`
    pub fn build_seeder(&self) -> Result<Arc<dyn Seeder>> {
        let seeding = &self.seeding;
        let seeder: Arc<dyn Seeder> = match seeding.strategy {
            SeedStrategy::Divisibility => {
                Arc::new(DivisibilitySeeder::new(seeding.divisors.clone()))
            }
            SeedStrategy::Random => Arc::new(RandomSeeder::new(seeding.seed, seeding.fill_rate)),
            SeedStrategy::Pattern => {
                let path = seeding
                    .pattern_file
                    .as_ref()
                    .context("Pattern seeding needs a pattern_file")?;
                let pattern = load_pattern(path)?;
                if pattern.width() > self.universe.width as usize
                    || pattern.height() > self.universe.height as usize
                {
                    anyhow::bail!(
                        "Pattern {}x{} does not fit in a {}x{} universe",
                        pattern.width(),
                        pattern.height(),
                        self.universe.width,
                        self.universe.height
                    );
                }
                Arc::new(PatternSeeder::new(
                    pattern,
                    seeding.offset_row,
                    seeding.offset_col,
                ))
            }
            SeedStrategy::Blank => Arc::new(BlankSeeder),
        };
        Ok(seeder)
    }

    /// Construct the universe these settings describe
    pub fn build_universe(&self) -> Result<Universe> {
        let seeder = self.build_seeder()?;
        let universe =
            Universe::with_shared_seeder(self.universe.width, self.universe.height, seeder)?;
        Ok(universe)
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub generations: Option<u64>,
    pub frame_interval: Option<u64>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::Cell;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());

        let universe = settings.build_universe().unwrap();
        assert_eq!(universe.width(), 64);
        assert_eq!(universe.height(), 32);
        assert_eq!(universe.cells(), Universe::new(64, 32).unwrap().cells());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.seeding.strategy = SeedStrategy::Random;
        settings.seeding.seed = 7;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.seeding.strategy, SeedStrategy::Random);
        assert_eq!(loaded.seeding.seed, 7);
        assert_eq!(loaded.render.palette, settings.render.palette);
    }

    #[test]
    fn test_minimal_yaml_uses_field_defaults() {
        let yaml = r#"
universe: { width: 8, height: 8 }
seeding: { strategy: blank }
simulation: { generations: 3, frame_interval: 1 }
render:
  cell_size: 4
  palette: { alive: '#fff', dead: '#000', grid: '#333' }
output: { format: json }
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.build_universe().unwrap().is_extinct());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.universe.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seeding.strategy = SeedStrategy::Random;
        settings.seeding.fill_rate = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seeding.strategy = SeedStrategy::Pattern;
        assert!(settings.validate().is_err());
        settings.seeding.pattern_file = Some(PathBuf::from("definitely/not/here.txt"));
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seeding.divisors.clear();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.render.cell_size = 5_000_000;
        assert!(settings.validate().is_err());
        settings.render.cell_size = MAX_CELL_SIZE;
        assert!(settings.validate().is_ok());

        let mut settings = Settings::default();
        settings.universe.width = u32::MAX / 2;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            width: Some(10),
            generations: Some(3),
            format: Some(OutputFormat::Json),
            ..Default::default()
        });

        assert_eq!(settings.universe.width, 10);
        assert_eq!(settings.universe.height, 32);
        assert_eq!(settings.simulation.generations, 3);
        assert_eq!(settings.simulation.frame_interval, 10);
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_pattern_seeding_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("blinker.txt");
        std::fs::write(&path, "111\n").unwrap();

        let mut settings = Settings::default();
        settings.universe.width = 5;
        settings.universe.height = 5;
        settings.seeding.strategy = SeedStrategy::Pattern;
        settings.seeding.pattern_file = Some(path);
        settings.seeding.offset_row = 2;
        settings.seeding.offset_col = 1;
        assert!(settings.validate().is_ok());

        let universe = settings.build_universe().unwrap();
        assert_eq!(universe.living_cells(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(universe.cell(2, 0).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_pattern_larger_than_universe() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("wide.txt");
        std::fs::write(&path, "111111\n").unwrap();

        let mut settings = Settings::default();
        settings.universe.width = 4;
        settings.seeding.strategy = SeedStrategy::Pattern;
        settings.seeding.pattern_file = Some(path);
        assert!(settings.build_universe().is_err());
    }
}
