//! Tests for per-layer generator parameter schedules

#[cfg(test)]
mod tests {

    use camogen::CamoError;
    use camogen::algorithm::progression::{
        brush_params, jagged_params, layer_progress, m90_params, modulation_scale,
        organic_params, plan_layer,
    };
    use camogen::pattern::{BrushParams, MaskSpec, PatternKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests progress as the fraction of layers before the current one
    #[test]
    fn test_layer_progress() {
        assert!(layer_progress(0, 3).abs() < f64::EPSILON);
        assert!((layer_progress(1, 4) - 0.25).abs() < f64::EPSILON);
        assert!(layer_progress(2, 0).abs() < f64::EPSILON);
    }

    // Tests organic thresholds and block sizes for the first layer
    #[test]
    fn test_organic_params_first_layer() {
        let mut rng = StdRng::seed_from_u64(71);
        for _ in 0..200 {
            let params = organic_params(0.0, &mut rng);
            assert!((80..=100).contains(&params.threshold));
            assert!((650..=750).contains(&params.scale));
        }
    }

    // Tests that organic thresholds rise with progress and stay clamped
    #[test]
    fn test_organic_params_later_layers() {
        let mut rng = StdRng::seed_from_u64(72);
        for _ in 0..200 {
            let params = organic_params(0.5, &mut rng);
            assert!((130..=150).contains(&params.threshold));
            assert!((550..=650).contains(&params.scale));

            let beyond = organic_params(2.0, &mut rng);
            assert_eq!(beyond.threshold, 250);
        }
    }

    // Tests jagged polygon counts and radii
    #[test]
    fn test_jagged_params() {
        let mut rng = StdRng::seed_from_u64(73);
        for _ in 0..200 {
            let first = jagged_params(0.0, &mut rng);
            assert!((130..=819).contains(&first.count));
            assert!((first.size_min - 200.0).abs() < f64::EPSILON);
            assert!((first.size_max - 500.0).abs() < f64::EPSILON);
        }
        let half = jagged_params(0.5, &mut rng);
        assert!((half.size_min - 175.0).abs() < f64::EPSILON);
        assert!((half.size_max - 400.0).abs() < f64::EPSILON);
    }

    // Tests m90 site count and threshold band
    #[test]
    fn test_m90_params() {
        let mut rng = StdRng::seed_from_u64(74);
        for _ in 0..200 {
            let params = m90_params(0.0, &mut rng);
            assert_eq!(params.count, 150);
            assert!((30..=70).contains(&params.threshold));
        }
    }

    // Tests brush stroke counts and lengths
    #[test]
    fn test_brush_params() {
        assert_eq!(
            brush_params(0.0),
            BrushParams {
                count: 80,
                length_min: 800,
                length_max: 3000,
            }
        );
        assert_eq!(
            brush_params(0.5),
            BrushParams {
                count: 50,
                length_min: 750,
                length_max: 2900,
            }
        );
        assert_eq!(brush_params(1.0).count, 20);
    }

    // Tests that the brush style starts with a base coat
    // Verified by planning brush strokes for every layer
    #[test]
    fn test_plan_layer_brush_base_coat() {
        let mut rng = StdRng::seed_from_u64(75);
        assert_eq!(plan_layer(PatternKind::Brush, 0, 2, &mut rng), MaskSpec::BaseCoat);
        assert_eq!(
            plan_layer(PatternKind::Brush, 1, 2, &mut rng),
            MaskSpec::Brush(brush_params(0.5))
        );
        assert!(!MaskSpec::BaseCoat.is_outlined());
        assert!(MaskSpec::Brush(brush_params(0.5)).is_outlined());
    }

    // Tests that each style plans its own mask kind
    #[test]
    fn test_plan_layer_dispatch() {
        let mut rng = StdRng::seed_from_u64(76);
        assert!(matches!(
            plan_layer(PatternKind::Organic, 0, 3, &mut rng),
            MaskSpec::Organic(_)
        ));
        assert!(matches!(
            plan_layer(PatternKind::Jagged, 0, 3, &mut rng),
            MaskSpec::Jagged(_)
        ));
        assert!(matches!(
            plan_layer(PatternKind::M90, 0, 3, &mut rng),
            MaskSpec::M90(_)
        ));
    }

    // Tests style names accepted on the command line
    #[test]
    fn test_pattern_kind_parsing() {
        for kind in PatternKind::ALL {
            assert!(kind.to_string().parse::<PatternKind>().is_ok_and(|k| k == kind));
        }
        assert!("M90".parse::<PatternKind>().is_ok_and(|k| k == PatternKind::M90));
        assert!(matches!(
            "woodland".parse::<PatternKind>(),
            Err(CamoError::InvalidPatternType { .. })
        ));
    }

    // Tests the modulation block size range
    #[test]
    fn test_modulation_scale() {
        let mut rng = StdRng::seed_from_u64(77);
        assert!((0..500).all(|_| (20..=60).contains(&modulation_scale(&mut rng))));
    }
}
