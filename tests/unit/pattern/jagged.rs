//! Tests for the jagged polygon generator

#[cfg(test)]
mod tests {

    use camogen::pattern::JaggedParams;
    use camogen::pattern::jagged::generate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests shape and non-emptiness for a handful of polygons
    #[test]
    fn test_generates_shapes() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = JaggedParams {
            count: 20,
            size_min: 20.0,
            size_max: 60.0,
        };
        let mask = generate(160, 120, &params, &mut rng);
        assert_eq!((mask.width(), mask.height()), (160, 120));
        assert!(mask.any());
    }

    // Tests that zero shapes leave the mask empty
    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(12);
        let params = JaggedParams {
            count: 0,
            size_min: 200.0,
            size_max: 500.0,
        };
        assert!(!generate(100, 100, &params, &mut rng).any());
    }

    // Tests that the same seed reproduces the same mask
    #[test]
    fn test_reproducible() {
        let params = JaggedParams {
            count: 30,
            size_min: 10.0,
            size_max: 40.0,
        };
        let a = generate(128, 128, &params, &mut StdRng::seed_from_u64(13));
        let b = generate(128, 128, &params, &mut StdRng::seed_from_u64(13));
        assert_eq!(a, b);
    }

    // Tests that many large shapes on a small canvas cover most of it,
    // including pixels along every edge reached only through wrapped copies
    #[test]
    fn test_large_shapes_reach_every_edge() {
        let mut rng = StdRng::seed_from_u64(14);
        let params = JaggedParams {
            count: 200,
            size_min: 40.0,
            size_max: 80.0,
        };
        let mask = generate(100, 100, &params, &mut rng);
        assert!(mask.coverage() > 0.9);
        assert!((0..100).any(|i| mask.get(0, i)) && (0..100).any(|i| mask.get(99, i)));
        assert!((0..100).any(|i| mask.get(i, 0)) && (0..100).any(|i| mask.get(i, 99)));
    }
}
