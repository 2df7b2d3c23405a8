//! Tests for palette presets and explicit colour lists

#[cfg(test)]
mod tests {

    use camogen::CamoError;
    use camogen::color::{Palette, PaletteName};
    use image::Rgb;

    // Tests preset lookup is case-insensitive and rejects unknown names
    #[test]
    fn test_palette_name_parsing() {
        assert!("clay".parse::<PaletteName>().is_ok_and(|p| p == PaletteName::Clay));
        assert!(
            "Concrete"
                .parse::<PaletteName>()
                .is_ok_and(|p| p == PaletteName::Concrete)
        );
        assert!(matches!(
            "woodland".parse::<PaletteName>(),
            Err(CamoError::UnknownPalette { .. })
        ));
    }

    // Tests that presets keep their listed compositing order
    #[test]
    fn test_preset_colors_in_order() {
        let palette = Palette::from_preset(PaletteName::Piedmont);
        assert!(palette.is_ok_and(|p| p.colors()
            == [
                Rgb([0x1C, 0x1C, 0x1C]),
                Rgb([0x26, 0x3E, 0x31]),
                Rgb([0x8D, 0x99, 0x67]),
            ]));

        for preset in PaletteName::ALL {
            assert!(Palette::from_preset(preset).is_ok_and(|p| p.len() == 3));
        }
    }

    // Tests the comma-separated colour list and its error cases
    #[test]
    fn test_from_hex_list() {
        let palette = Palette::from_hex_list("#000000,#FFFFFF");
        assert!(palette.is_ok_and(|p| p.colors() == [Rgb([0, 0, 0]), Rgb([255, 255, 255])]));

        assert!(matches!(
            Palette::from_hex_list("#000000,,#FFFFFF"),
            Err(CamoError::InvalidColorFormat { .. })
        ));
        assert!(matches!(
            Palette::from_hex_list("#000000,blue"),
            Err(CamoError::InvalidColorFormat { .. })
        ));
    }

    // Tests that an explicit colour list takes precedence over the preset
    #[test]
    fn test_resolve_prefers_explicit_colors() {
        let explicit = Palette::resolve(PaletteName::Clay, Some("#123456"));
        assert!(explicit.is_ok_and(|p| p.colors() == [Rgb([0x12, 0x34, 0x56])]));

        let preset = Palette::resolve(PaletteName::Clay, None);
        assert!(preset.is_ok_and(|p| p.colors().first() == Some(&Rgb([0x6A, 0x3B, 0x28]))));
    }

    // Tests that an empty palette cannot be built
    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(
            Palette::new(Vec::new()),
            Err(CamoError::InvalidParameter { .. })
        ));
    }
}
