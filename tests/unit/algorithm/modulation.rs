//! Tests for digital modulation of layer colours

#[cfg(test)]
mod tests {

    use camogen::algorithm::modulation::{
        ModulationField, apply_digital_modulation, shift_color,
    };
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests that channel shifts clip at both ends
    // Verified by adding in u8 with wrapping arithmetic
    #[test]
    fn test_shift_color_clips() {
        assert_eq!(shift_color(Rgb([250, 5, 128]), 20), Rgb([255, 25, 148]));
        assert_eq!(shift_color(Rgb([250, 5, 128]), -20), Rgb([230, 0, 108]));
        assert_eq!(shift_color(Rgb([1, 2, 3]), 0), Rgb([1, 2, 3]));
    }

    // Tests that zero density leaves every pixel unchanged
    #[test]
    fn test_zero_density_is_identity() {
        let mut rng = StdRng::seed_from_u64(51);
        let original = RgbImage::from_fn(64, 48, |x, y| Rgb([x as u8, y as u8, 200]));
        let mut layer = original.clone();
        apply_digital_modulation(&mut layer, 0, 8, &mut rng);
        assert_eq!(layer, original);
    }

    // Tests offset bounds and block structure
    #[test]
    fn test_field_offsets_are_blocky_and_bounded() {
        let mut rng = StdRng::seed_from_u64(52);
        let field = ModulationField::generate(100, 100, 20, 10, &mut rng);

        for y in 0..100 {
            for x in 0..100 {
                assert!((-20..=20).contains(&field.offset_at(x, y)));
            }
        }
        assert_eq!(field.offset_at(0, 0), field.offset_at(9, 9));
        assert_eq!(field.offset_at(40, 70), field.offset_at(49, 79));
    }

    // Tests that all channels of a pixel move together and stay in range
    #[test]
    fn test_apply_preserves_hue_and_clips() {
        let mut rng = StdRng::seed_from_u64(53);
        let mut layer = RgbImage::from_pixel(60, 60, Rgb([250, 250, 250]));
        apply_digital_modulation(&mut layer, 20, 6, &mut rng);

        for pixel in layer.pixels() {
            let [r, g, b] = pixel.0;
            assert!(r == g && g == b);
            assert!(r >= 230);
        }
        assert!(layer.pixels().any(|p| p.0 != [250, 250, 250]));
    }

    // Tests that shading reads the offset at the requested pixel
    #[test]
    fn test_shade_matches_offset() {
        let mut rng = StdRng::seed_from_u64(54);
        let field = ModulationField::generate(30, 30, 20, 5, &mut rng);
        let color = Rgb([100, 120, 140]);
        let offset = field.offset_at(12, 17);
        assert_eq!(field.shade(color, 12, 17), shift_color(color, offset));
    }
}
