//! Generation constants and runtime configuration defaults

// Canvas defaults
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 7200;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 7200;
/// Default spacing between occlusion grid lines in pixels
pub const DEFAULT_GRID_SIZE: u32 = 600;
/// Width of every occlusion grid line in pixels
pub const GRID_LINE_THICKNESS: u32 = 10;
/// Grid and rain colour used when none is supplied
pub const DEFAULT_GRID_COLOR: [u8; 3] = [20, 20, 20];
/// Number of images generated per run by default
pub const DEFAULT_IMAGE_COUNT: usize = 10;

// Base noise texture
/// Inclusive lower bound of the base noise block size
pub const BASE_NOISE_SCALE_MIN: usize = 100;
/// Exclusive upper bound of the base noise block size
pub const BASE_NOISE_SCALE_MAX: usize = 255;
/// Inclusive lower bound of base noise values
pub const BASE_NOISE_VALUE_MIN: u8 = 150;
/// Exclusive upper bound of base noise values
pub const BASE_NOISE_VALUE_MAX: u8 = 255;
/// Multiplier keeping the base image dark
pub const BASE_BRIGHTNESS_FACTOR: f64 = 0.2;
/// Offset added after darkening the base image
pub const BASE_BRIGHTNESS_OFFSET: u8 = 30;
/// Organic blobs only survive where the base noise exceeds this value
pub const ORGANIC_NOISE_GATE: u8 = 80;
/// Fewest low-resolution blob cells along each axis
pub const ORGANIC_MIN_CELLS: usize = 4;

// Digital modulation
/// Maximum absolute brightness shift applied by modulation
pub const MODULATION_DENSITY: i16 = 20;
/// Inclusive lower bound of the modulation block size
pub const MODULATION_SCALE_MIN: usize = 20;
/// Inclusive upper bound of the modulation block size
pub const MODULATION_SCALE_MAX: usize = 60;

// Mask generators
/// Number of Voronoi sites scattered per m90 layer
pub const M90_POINT_COUNT: usize = 150;
/// Padding around the tiled canvas used to bound Voronoi cells
pub const VORONOI_PADDING: f64 = 100.0;
/// Block size of the m90 guide noise
pub const M90_GUIDE_SCALE: usize = 100;
/// Number of samples along a brush stroke spine
pub const BRUSH_SPINE_STEPS: usize = 20;
/// Smallest half-width of a brush stroke at any spine sample
pub const BRUSH_MIN_HALF_WIDTH: f64 = 2.0;
/// Spine segments shorter than this have no usable normal and are skipped
pub const BRUSH_MIN_SEGMENT_LENGTH: f64 = 1e-6;

// Outlines
/// Outline thickness for the first layer
pub const OUTLINE_THICKNESS_BASE: f64 = 35.0;
/// Outline thickness reduction across the full layer progression
pub const OUTLINE_THICKNESS_FALLOFF: f64 = 15.0;
/// Thinnest outline ever drawn
pub const OUTLINE_THICKNESS_MIN: usize = 10;

// Rain streaks
/// Inclusive lower bound of the streak count
pub const RAIN_COUNT_MIN: usize = 100;
/// Exclusive upper bound of the streak count
pub const RAIN_COUNT_MAX: usize = 400;
/// Inclusive lower bound of streak length
pub const RAIN_LENGTH_MIN: i64 = 20;
/// Exclusive upper bound of streak length
pub const RAIN_LENGTH_MAX: i64 = 300;
/// Inclusive lower bound of streak thickness
pub const RAIN_THICKNESS_MIN: u32 = 3;
/// Exclusive upper bound of streak thickness
pub const RAIN_THICKNESS_MAX: u32 = 30;

// Output settings
/// Directory images are written to by default
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Prefix of every generated file name
pub const OUTPUT_PREFIX: &str = "camo_";
/// Number of hex digits of the content hash kept in file names
pub const HASH_PREFIX_LEN: usize = 8;
