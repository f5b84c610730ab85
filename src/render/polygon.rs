//! Polygon outline rasterization.

use crate::algorithm::LineAlgorithm;
use crate::geometry::Point;

use super::line::rasterize_line;

/// Rasterize the closed outline through `vertices`.
///
/// Edge `i` runs from `vertices[i - 1]` to `vertices[i]`, with edge 0
/// closing the loop from the last vertex back to the first. Edge outputs are
/// concatenated in vertex order and shared corners appear once per edge.
#[must_use]
pub fn rasterize_polygon(vertices: &[Point], algorithm: LineAlgorithm) -> Vec<Point> {
    let Some(&last) = vertices.last() else {
        log::debug!("rasterize_polygon: no vertices, nothing to draw");
        return Vec::new();
    };

    std::iter::once(last)
        .chain(vertices.iter().copied())
        .zip(vertices.iter().copied())
        .flat_map(|(from, to)| rasterize_line(from, to, algorithm))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_triangle_edges_in_vertex_order() {
        let tri = pts(&[(0, 0), (3, 0), (0, 3)]);
        let out = rasterize_polygon(&tri, LineAlgorithm::Bresenham);
        assert_eq!(
            out,
            pts(&[
                // (0,3) -> (0,0)
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                // (0,0) -> (3,0)
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                // (3,0) -> (0,3)
                (0, 3),
                (1, 2),
                (2, 1),
                (3, 0),
            ])
        );
    }

    #[test]
    fn test_matches_concatenated_edges() {
        let quad = pts(&[(0, 0), (10, 2), (8, 9), (-3, 4)]);
        for alg in LineAlgorithm::ALL {
            let expected: Vec<Point> = (0..quad.len())
                .flat_map(|i| rasterize_line(quad[(i + quad.len() - 1) % quad.len()], quad[i], alg))
                .collect();
            assert_eq!(rasterize_polygon(&quad, alg), expected, "{alg}");
        }
    }

    #[test]
    fn test_single_vertex_is_one_pixel() {
        let out = rasterize_polygon(&[Point::new(4, 4)], LineAlgorithm::Dda);
        assert_eq!(out, vec![Point::new(4, 4)]);
    }

    #[test]
    fn test_empty_polygon() {
        assert!(rasterize_polygon(&[], LineAlgorithm::Naive).is_empty());
    }
}
