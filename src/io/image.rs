//! PNG export with content-addressed file names

use crate::io::configuration::{HASH_PREFIX_LEN, OUTPUT_PREFIX};
use crate::io::error::{CamoError, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Lower-case hex SHA-256 digest of the raw pixel bytes
pub fn pixel_digest(image: &RgbImage) -> String {
    let digest = Sha256::digest(image.as_raw());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// File name derived from image content: `camo_<8 hex digits>.png`
///
/// Identical images map to the same name, so a batch never overwrites a
/// different image.
pub fn content_name(image: &RgbImage) -> String {
    let digest = pixel_digest(image);
    let prefix = digest.get(..HASH_PREFIX_LEN).unwrap_or(&digest);
    format!("{OUTPUT_PREFIX}{prefix}.png")
}

/// Write `image` as PNG into `directory` under its content name
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The file cannot be created
/// - PNG encoding fails
pub fn save_png(image: &RgbImage, directory: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(directory).map_err(|e| CamoError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let path = directory.join(content_name(image));
    let file = File::create(&path).map_err(|e| CamoError::FileSystem {
        path: path.clone(),
        operation: "create file",
        source: e,
    })?;

    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Default,
        FilterType::Adaptive,
    );
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CamoError::ImageExport {
            path: path.clone(),
            source: e,
        })?;

    Ok(path)
}
