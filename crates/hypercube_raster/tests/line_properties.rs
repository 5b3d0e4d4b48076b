//! Properties of the line rasterizer over a grid of endpoint pairs

use std::collections::HashSet;

use hypercube_raster::{draw_line, LinePath, PixelBuffer};

/// Endpoints covering every octant, axis-aligned lines and single points
fn endpoint_pairs() -> Vec<(i32, i32, i32, i32)> {
    let coords = [-7, -3, -1, 0, 2, 5, 9];
    let mut pairs = Vec::new();
    for &x1 in &coords {
        for &y1 in &coords {
            for &x2 in &coords {
                for &y2 in &coords {
                    pairs.push((x1, y1, x2, y2));
                }
            }
        }
    }
    pairs
}

#[test]
fn test_path_contains_both_endpoints() {
    for (x1, y1, x2, y2) in endpoint_pairs() {
        let path: Vec<_> = LinePath::new(x1, y1, x2, y2).collect();
        assert!(path.contains(&(x1, y1)), "missing start of {:?}", (x1, y1, x2, y2));
        assert!(path.contains(&(x2, y2)), "missing end of {:?}", (x1, y1, x2, y2));
    }
}

#[test]
fn test_path_length_is_dominant_delta_plus_one() {
    for (x1, y1, x2, y2) in endpoint_pairs() {
        let expected = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;
        let path: Vec<_> = LinePath::new(x1, y1, x2, y2).collect();
        assert_eq!(path.len(), expected, "{:?}", (x1, y1, x2, y2));

        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), expected, "repeated pixel in {:?}", (x1, y1, x2, y2));
    }
}

#[test]
fn test_path_is_eight_connected() {
    for (x1, y1, x2, y2) in endpoint_pairs() {
        let path: Vec<_> = LinePath::new(x1, y1, x2, y2).collect();
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let step_x = (b.0 - a.0).abs();
            let step_y = (b.1 - a.1).abs();
            assert!(
                step_x <= 1 && step_y <= 1 && (step_x, step_y) != (0, 0),
                "gap between {:?} and {:?} in {:?}",
                a,
                b,
                (x1, y1, x2, y2)
            );
        }
    }
}

#[test]
fn test_reversed_line_visits_same_pixels() {
    for (x1, y1, x2, y2) in endpoint_pairs() {
        let forward: HashSet<_> = LinePath::new(x1, y1, x2, y2).collect();
        let backward: HashSet<_> = LinePath::new(x2, y2, x1, y1).collect();
        assert_eq!(forward, backward, "{:?}", (x1, y1, x2, y2));
    }
}

#[test]
fn test_path_stays_close_to_ideal_line() {
    for (x1, y1, x2, y2) in endpoint_pairs() {
        let dx = (x2 - x1) as f64;
        let dy = (y2 - y1) as f64;
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            continue;
        }
        for (x, y) in LinePath::new(x1, y1, x2, y2) {
            // Distance from the pixel center to the ideal line
            let dist = ((x - x1) as f64 * dy - (y - y1) as f64 * dx).abs() / len;
            assert!(dist <= 0.75, "({}, {}) strays {} from {:?}", x, y, dist, (x1, y1, x2, y2));
        }
    }
}

#[test]
fn test_buffer_gets_exactly_the_path() {
    let mut buffer = PixelBuffer::new(32, 32);
    draw_line(&mut buffer, 30, 2, 4, 27, 0x07e0);

    let path: HashSet<_> = LinePath::new(30, 2, 4, 27).collect();
    assert_eq!(buffer.count_color(0x07e0), path.len());
    for (x, y) in path {
        assert_eq!(buffer.pixel(x, y), Some(0x07e0));
    }
}
