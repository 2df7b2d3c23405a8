use crate::{
    algorithm::modulation::ModulationField,
    algorithm::noise::{base_image, generate_noise_field},
    algorithm::outline::{apply_outline, outline_thickness},
    algorithm::overlay::{add_rain_streaks, apply_occlusion_grid},
    algorithm::progression::{layer_progress, modulation_scale, plan_layer},
    color::Palette,
    io::configuration::{
        DEFAULT_GRID_COLOR, DEFAULT_GRID_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, MODULATION_DENSITY,
    },
    io::error::{CamoError, Result, invalid_parameter},
    pattern::PatternKind,
    spatial::Mask,
};
use image::{Rgb, RgbImage};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;

/// Immutable parameters for one generation run
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Mask generator used for every layer
    pub pattern: PatternKind,
    /// Layer colours in compositing order
    pub palette: Palette,
    /// Draw the occlusion grid over the finished image
    pub grid: bool,
    /// Draw rain streaks over the finished image
    pub rain: bool,
    /// Texture each layer with digital modulation
    pub modulation: bool,
    /// Colour of grid lines and rain streaks
    pub grid_color: Rgb<u8>,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Spacing between grid lines in pixels
    pub grid_size: u32,
}

impl GenerationConfig {
    /// Configuration with default canvas, grid and toggles for the given style and palette
    pub const fn new(pattern: PatternKind, palette: Palette) -> Self {
        Self {
            pattern,
            palette,
            grid: false,
            rain: false,
            modulation: false,
            grid_color: Rgb(DEFAULT_GRID_COLOR),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }

    /// Check the configuration before any synthesis starts
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either canvas side is zero
    /// - The grid size is zero
    /// - The palette is empty
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CamoError::DegenerateDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.grid_size == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &"grid spacing must be at least one pixel",
            ));
        }
        if self.palette.is_empty() {
            return Err(invalid_parameter(
                "colors",
                &"[]",
                &"palette must contain at least one colour",
            ));
        }
        Ok(())
    }
}

/// Pipeline stage just completed, reported to observers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Base noise image built
    NoiseBase,
    /// Layer `index` of `total` composited and outlined
    Layer {
        /// Zero-based layer index
        index: usize,
        /// Number of layers in the palette
        total: usize,
    },
    /// Rain streaks drawn
    Rain,
    /// Occlusion grid drawn
    Grid,
    /// Image complete
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoiseBase => f.write_str("Generating base digital noise"),
            Self::Layer { index, total } => write!(f, "Layer {}/{total}", index + 1),
            Self::Rain => f.write_str("Applying streaking pattern"),
            Self::Grid => f.write_str("Applying occlusion grid"),
            Self::Done => f.write_str("Done"),
        }
    }
}

/// Write `color` (optionally modulated) into every pixel selected by `mask`
///
/// Masks whose size differs from the image leave it unchanged.
pub fn composite_layer(
    image: &mut RgbImage,
    mask: &Mask,
    color: Rgb<u8>,
    modulation: Option<&ModulationField>,
) {
    if mask.width() != image.width() as usize || mask.height() != image.height() as usize {
        return;
    }
    for ((x, y, pixel), inside) in image.enumerate_pixels_mut().zip(mask.iter()) {
        if inside {
            *pixel = modulation.map_or(color, |field| field.shade(color, x as usize, y as usize));
        }
    }
}

/// Compositing driver producing one camouflage image per call
///
/// Runs `NoiseBase -> Layer* -> Rain? -> Grid? -> Done`. Output depends only on the
/// configuration and the random source, so a seeded source reproduces images
/// byte for byte.
#[derive(Clone, Debug)]
pub struct Synthesizer {
    config: GenerationConfig,
}

impl Synthesizer {
    /// Create a synthesizer after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`GenerationConfig::validate`]
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this synthesizer was built with
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate one image from the given random source
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> RgbImage {
        self.synthesize_observed(rng, |_, _| {})
    }

    /// Generate one image from a seed
    pub fn synthesize_seeded(&self, seed: u64) -> RgbImage {
        let mut rng = StdRng::seed_from_u64(seed);
        self.synthesize(&mut rng)
    }

    /// Generate one image, reporting each completed stage with the image so far
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(pattern = %self.config.pattern, width = self.config.width, height = self.config.height)
    )]
    pub fn synthesize_observed<R, F>(&self, rng: &mut R, mut observer: F) -> RgbImage
    where
        R: Rng + ?Sized,
        F: FnMut(Stage, &RgbImage),
    {
        let config = &self.config;
        let width = config.width as usize;
        let height = config.height as usize;

        let noise = generate_noise_field(width, height, rng);
        let mut image = base_image(&noise);
        observer(Stage::NoiseBase, &image);

        let total = config.palette.len();
        for (index, &color) in config.palette.colors().iter().enumerate() {
            let spec = plan_layer(config.pattern, index, total, rng);
            let mask = spec.generate(width, height, &noise, rng);

            let modulation = if config.modulation {
                let scale = modulation_scale(rng);
                Some(ModulationField::generate(
                    width,
                    height,
                    MODULATION_DENSITY,
                    scale,
                    rng,
                ))
            } else {
                None
            };

            composite_layer(&mut image, &mask, color, modulation.as_ref());

            let outlined = if spec.is_outlined() {
                let thickness = outline_thickness(layer_progress(index, total));
                apply_outline(&mut image, &mask, thickness)
            } else {
                0
            };

            tracing::debug!(
                index,
                total,
                spec = ?spec,
                coverage = mask.coverage(),
                outlined,
                "layer composited"
            );
            observer(Stage::Layer { index, total }, &image);
        }

        if config.rain {
            let streaks = add_rain_streaks(&mut image, config.grid_color, rng);
            tracing::debug!(streaks, "rain applied");
            observer(Stage::Rain, &image);
        }

        if config.grid {
            apply_occlusion_grid(&mut image, config.grid_color, config.grid_size);
            observer(Stage::Grid, &image);
        }

        observer(Stage::Done, &image);
        image
    }
}
