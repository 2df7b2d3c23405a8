//! Command-line interface for batch camouflage generation

use crate::algorithm::batch::{derive_seeds, entropy_seed, generate_batch};
use crate::algorithm::executor::{GenerationConfig, Synthesizer};
use crate::color::{Palette, PaletteName, parse_hex};
use crate::io::configuration::{
    DEFAULT_GRID_COLOR, DEFAULT_GRID_SIZE, DEFAULT_HEIGHT, DEFAULT_IMAGE_COUNT, DEFAULT_OUTPUT_DIR,
    DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::save_png;
use crate::io::progress::ProgressManager;
use crate::pattern::PatternKind;
use clap::Parser;
use image::Rgb;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "camogen")]
#[command(author, version, about = "Generate tileable camouflage pattern images")]
/// Command-line arguments for the camouflage generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Style of camouflage to generate: organic, jagged, m90 or brush
    #[arg(long = "type", value_name = "TYPE")]
    pub pattern: PatternKind,

    /// Colour palette preset: piedmont, clay or concrete
    #[arg(short, long, default_value_t = PaletteName::Piedmont)]
    pub preset: PaletteName,

    /// Comma-separated hex colours (overrides the preset)
    #[arg(short, long)]
    pub colors: Option<String>,

    /// Add an occlusion grid
    #[arg(short, long)]
    pub grid: bool,

    /// Add rain streaking
    #[arg(short, long)]
    pub rain: bool,

    /// Add digital noise texture to each colour layer
    #[arg(short, long)]
    pub modulation: bool,

    /// Grid and rain colour (hex)
    #[arg(long, value_parser = parse_hex)]
    pub grid_color: Option<Rgb<u8>>,

    /// How many images to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_IMAGE_COUNT)]
    pub limit: usize,

    /// Base seed for reproducible batches (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Spacing between occlusion grid lines in pixels
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Directory generated images are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Number of worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the palette and build the per-run generation parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit colour list contains malformed colours
    pub fn generation_config(&self) -> Result<GenerationConfig> {
        let palette = Palette::resolve(self.preset, self.colors.as_deref())?;
        Ok(GenerationConfig {
            pattern: self.pattern,
            palette,
            grid: self.grid,
            rain: self.rain,
            modulation: self.modulation,
            grid_color: self.grid_color.unwrap_or(Rgb(DEFAULT_GRID_COLOR)),
            width: self.width,
            height: self.height,
            grid_size: self.grid_size,
        })
    }
}

/// Orchestrates a batch run: synthesis in parallel, PNG export and progress display
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and save every image of the batch
    ///
    /// Returns the written paths in batch order. Nothing is written for an image
    /// until it is fully composited.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image count is zero
    /// - The configuration is invalid (colours, dimensions, grid size, threads)
    /// - Any image cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if self.cli.limit == 0 {
            return Err(invalid_parameter(
                "limit",
                &self.cli.limit,
                &"at least one image must be requested",
            ));
        }

        let synthesizer = Synthesizer::new(self.cli.generation_config()?)?;
        let base_seed = self.cli.seed.unwrap_or_else(entropy_seed);
        let seeds = derive_seeds(base_seed, self.cli.limit);
        let start_time = Instant::now();

        tracing::info!(
            pattern = %self.cli.pattern,
            images = seeds.len(),
            base_seed,
            "starting batch"
        );

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let written = Mutex::new(Vec::with_capacity(seeds.len()));
        let progress = self.progress_manager.as_ref();
        let output = &self.cli.output;

        generate_batch(
            &synthesizer,
            &seeds,
            self.cli.threads,
            |index, stage| {
                if let Some(pm) = progress {
                    pm.report_stage(index, stage);
                }
            },
            |index, image| {
                let path = save_png(&image, output)?;
                tracing::info!(index, path = %path.display(), "image saved");
                if let Some(pm) = progress {
                    pm.complete_image(&path);
                }
                if let Ok(mut paths) = written.lock() {
                    paths.push((index, path));
                }
                Ok(())
            },
        )?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let mut paths = written.into_inner().unwrap_or_default();
        paths.sort_by_key(|(index, _)| *index);

        tracing::info!(
            images = paths.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "batch complete"
        );

        Ok(paths.into_iter().map(|(_, path)| path).collect())
    }
}
