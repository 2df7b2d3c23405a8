//! Built-in colour palettes and user-supplied colour lists

use crate::color::hex::parse_hex;
use crate::io::error::{CamoError, Result, invalid_parameter};
use image::Rgb;
use std::fmt;
use std::str::FromStr;

/// Named preset palettes shipped with the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteName {
    /// Forest and city shadows
    Piedmont,
    /// Red earth and river bank
    Clay,
    /// Urban and industrial greys
    Concrete,
}

impl PaletteName {
    /// All presets in display order
    pub const ALL: [Self; 3] = [Self::Piedmont, Self::Clay, Self::Concrete];

    /// Lower-case preset name as accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Piedmont => "piedmont",
            Self::Clay => "clay",
            Self::Concrete => "concrete",
        }
    }

    /// Ordered hex colours of the preset, darkest terrain first
    pub const fn hex_codes(self) -> &'static [&'static str] {
        match self {
            Self::Piedmont => &["#1C1C1C", "#263E31", "#8D9967"],
            Self::Clay => &["#6A3B28", "#4A5D44", "#8C7B65"],
            Self::Concrete => &["#59595B", "#353932", "#8E918F"],
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteName {
    type Err = CamoError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CamoError::UnknownPalette {
                name: s.to_string(),
            })
    }
}

/// Ordered, non-empty sequence of layer colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    /// Build a palette from already parsed colours
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty
    pub fn new(colors: Vec<Rgb<u8>>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "colors",
                &"[]",
                &"palette must contain at least one colour",
            ));
        }
        Ok(Self { colors })
    }

    /// Colours of a built-in preset
    ///
    /// # Errors
    ///
    /// Returns an error if a preset entry fails to parse, which indicates corrupt
    /// built-in data
    pub fn from_preset(preset: PaletteName) -> Result<Self> {
        let colors = preset
            .hex_codes()
            .iter()
            .map(|code| parse_hex(code))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Parse a comma-separated list such as `"#000000, #FFFFFF"`
    ///
    /// # Errors
    ///
    /// Returns [`CamoError::InvalidColorFormat`] for the first malformed entry
    /// (including empty entries)
    pub fn from_hex_list(list: &str) -> Result<Self> {
        let colors = list
            .split(',')
            .map(parse_hex)
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Select the explicit colour list when given, otherwise the preset
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit list contains malformed colours
    pub fn resolve(preset: PaletteName, colors: Option<&str>) -> Result<Self> {
        match colors {
            Some(list) => Self::from_hex_list(list),
            None => Self::from_preset(preset),
        }
    }

    /// Layer colours in compositing order
    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Number of layers this palette produces
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
