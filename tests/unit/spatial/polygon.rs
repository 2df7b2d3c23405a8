//! Tests for scanline polygon filling and tile wrapping

#[cfg(test)]
mod tests {

    use camogen::spatial::Mask;
    use camogen::spatial::polygon::{fill_polygon, fill_polygon_tiled, tile_offsets};
    use std::collections::HashSet;

    // Tests pixel-centre sampling of an axis-aligned square
    #[test]
    fn test_fill_square() {
        let mut mask = Mask::new(40, 40);
        assert!(fill_polygon(&mut mask, &[[10, 10], [20, 10], [20, 20], [10, 20]]));
        assert_eq!(mask.count(), 100);
        assert!(mask.get(10, 10) && mask.get(19, 19));
        assert!(!mask.get(20, 20) && !mask.get(9, 10));
    }

    // Tests that two polygons sharing an edge neither overlap nor leave a gap
    #[test]
    fn test_shared_edge_filled_once() {
        let mut left = Mask::new(30, 30);
        let mut right = Mask::new(30, 30);
        fill_polygon(&mut left, &[[0, 0], [13, 0], [17, 30], [0, 30]]);
        fill_polygon(&mut right, &[[13, 0], [30, 0], [30, 30], [17, 30]]);

        let mut overlap = left.clone();
        overlap.intersect(&right);
        assert!(!overlap.any());
        assert_eq!(left.count() + right.count(), 900);
    }

    // Tests a triangle against its expected area
    #[test]
    fn test_fill_triangle() {
        let mut mask = Mask::new(50, 50);
        fill_polygon(&mut mask, &[[0, 0], [40, 0], [0, 40]]);
        // Exact area is 800; pixel-centre sampling lands within one edge row of it
        assert!((760..=840).contains(&mask.count()));
        assert!(mask.get(1, 1) && !mask.get(30, 30));
    }

    // Tests that fewer than three vertices draw nothing
    #[test]
    fn test_degenerate_polygon_rejected() {
        let mut mask = Mask::new(10, 10);
        assert!(!fill_polygon(&mut mask, &[[0, 0], [9, 9]]));
        assert!(!fill_polygon_tiled(&mut mask, &[]));
        assert!(!mask.any());
    }

    // Tests the nine distinct tile offsets
    #[test]
    fn test_tile_offsets_are_distinct() {
        let offsets: HashSet<[i64; 2]> = tile_offsets(100, 60).into_iter().collect();
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&[0, 0]));
        assert!(offsets.contains(&[-100, 60]));
    }

    // Tests that a square crossing the right edge reappears on the left
    // Verified by filling only the zero offset
    #[test]
    fn test_tiled_fill_wraps_horizontally() {
        let mut mask = Mask::new(50, 50);
        fill_polygon_tiled(&mut mask, &[[45, 10], [55, 10], [55, 20], [45, 20]]);
        assert_eq!(mask.count(), 100);
        assert!(mask.get(49, 15));
        assert!(mask.get(0, 15) && mask.get(4, 15));
        assert!(!mask.get(5, 15));
    }

    // Tests wrapping across a corner into all four quadrants
    #[test]
    fn test_tiled_fill_wraps_corner() {
        let mut mask = Mask::new(50, 50);
        fill_polygon_tiled(&mut mask, &[[-3, -3], [3, -3], [3, 3], [-3, 3]]);
        assert_eq!(mask.count(), 36);
        assert!(mask.get(0, 0) && mask.get(49, 49) && mask.get(49, 0) && mask.get(0, 49));
    }
}
