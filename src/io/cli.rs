//! Command-line interface for generating and exporting cave maps

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use crate::generation::automaton::Automaton;
use crate::generation::noise::seed_noise_map;
use crate::io::configuration::{
    DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_PASSES, DEFAULT_SEED, DEFAULT_WIDTH,
    WALL_NEIGHBOUR_THRESHOLD,
};
use crate::io::error::{GenerationError, Result};
use crate::io::image::export_map_as_png;
use crate::io::progress::PassProgress;
use crate::io::text::write_map_as_text;
use crate::spatial::growth::{GrowthSide, grow};
use crate::spatial::map::TileMap;

#[derive(Parser)]
#[command(name = "cavegen")]
#[command(
    author,
    version,
    about = "Generate cave maps with cellular automaton smoothing"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Output PNG path for the generated map
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Map width in tiles
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Probability that a seeded cell is floor
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Number of smoothing passes
    #[arg(short, long, default_value_t = DEFAULT_PASSES)]
    pub passes: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Wall-neighbour count a cell must exceed to become wall
    #[arg(short = 't', long, default_value_t = WALL_NEIGHBOUR_THRESHOLD)]
    pub threshold: usize,

    /// Wall rows to add at the top after smoothing
    #[arg(long, default_value_t = 0, value_name = "ROWS")]
    pub extend_top: usize,

    /// Wall rows to add at the bottom after smoothing
    #[arg(long, default_value_t = 0, value_name = "ROWS")]
    pub extend_bottom: usize,

    /// Also write the map as text ('.' floor, 'x' wall)
    #[arg(short, long, value_name = "PATH")]
    pub ascii: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one generation run: seed, smooth, grow, export
pub struct MapProcessor {
    cli: Cli,
}

impl MapProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the map and write the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the requested dimensions or density are invalid
    /// or if any export fails.
    pub fn process(&self) -> Result<()> {
        let map = self.generate()?;
        self.export(&map)
    }

    fn generate(&self) -> Result<TileMap> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut map = seed_noise_map(&mut rng, self.cli.height, self.cli.width, self.cli.density)?;

        let automaton = Automaton::with_threshold(self.cli.threshold);
        let progress = if self.cli.should_show_progress() && self.cli.passes > 1 {
            PassProgress::new(self.cli.passes)
        } else {
            PassProgress::hidden()
        };

        // One pass per call so the bar can tick between passes
        for _ in 0..self.cli.passes {
            map = automaton.smooth(map, 1)?;
            progress.pass_done();
        }
        progress.finish();

        for _ in 0..self.cli.extend_top {
            map = grow(map, GrowthSide::Top)?;
        }
        for _ in 0..self.cli.extend_bottom {
            map = grow(map, GrowthSide::Bottom)?;
        }

        Ok(map)
    }

    fn export(&self, map: &TileMap) -> Result<()> {
        let output = self.cli.output.to_string_lossy();
        export_map_as_png(map, &output)?;

        if let Some(ascii_path) = &self.cli.ascii {
            let mut file =
                std::fs::File::create(ascii_path).map_err(|e| GenerationError::FileSystem {
                    path: ascii_path.clone(),
                    operation: "create text map",
                    source: e,
                })?;
            write_map_as_text(map, &mut file)?;
        }

        Ok(())
    }
}
