use crate::types::{Coordinate, Polygon};

/// `true` if `cur` adds nothing to the outline between `prev` and `next`.
///
/// A vertex is dropped when it sits on a vertical run (same x as both
/// neighbours with the neighbours on opposite sides in y), or when scaling
/// its offset from `prev` by `(next.x - prev.x) / (cur.x - prev.x)` lands on
/// `next`. The scaled y offset is truncated towards zero, so near-collinear
/// vertices can be dropped too. A non-finite scaled offset (vertical
/// `prev -> cur` edge) never matches.
fn is_redundant(prev: Coordinate, cur: Coordinate, next: Coordinate) -> bool {
    if cur.x == prev.x && cur.x == next.x && ((cur.y < prev.y) != (cur.y < next.y)) {
        return true;
    }

    let ratio = (next.x - prev.x) as f64 / (cur.x - prev.x) as f64;
    let scaled = ratio * (cur.y - prev.y) as f64;
    scaled.is_finite() && scaled.trunc() as i64 == next.y - prev.y
}

/// Single pass: remove every vertex that is redundant with respect to its
/// neighbours in `polygon`. Neighbours wrap around at both ends.
///
/// Polygons with fewer than three vertices are returned unchanged.
pub fn flatten(polygon: &Polygon) -> Polygon {
    let vertices = &polygon.vertices;
    let n = vertices.len();
    if n < 3 {
        return polygon.clone();
    }

    let kept = (0..n)
        .filter(|&i| {
            let prev = vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n];
            !is_redundant(prev, vertices[i], next)
        })
        .map(|i| vertices[i])
        .collect();

    Polygon::new(kept)
}

/// Remove collinear vertices until none are left.
///
/// Repeats [`flatten`] while it still removes vertices, so the result is a
/// fixed point: `simplify(&simplify(p)) == simplify(p)`. Order is preserved.
pub fn simplify(polygon: &Polygon) -> Polygon {
    let mut current = flatten(polygon);
    loop {
        let next = flatten(&current);
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(points: &[(i64, i64)]) -> Polygon {
        Polygon::new(points.iter().map(|&p| Coordinate::from(p)).collect())
    }

    #[test]
    fn test_flatten_mixed_polygon() {
        let p = polygon(&[(0, 0), (0, 5), (3, 5), (5, 5), (1, 1)]);
        let flat = flatten(&p);
        assert_eq!(flat, polygon(&[(0, 0), (0, 5), (5, 5)]));
        assert_eq!(simplify(&p), flat);
    }

    #[test]
    fn test_collinear_runs_removed() {
        let p = polygon(&[
            (0, 0), (1, 0), (2, 0), (3, 0),
            (3, 1), (3, 2),
            (2, 2), (1, 2), (0, 2),
            (0, 1),
        ]);
        assert_eq!(simplify(&p), polygon(&[(0, 0), (3, 0), (3, 2), (0, 2)]));
    }

    #[test]
    fn test_diagonal_run_removed() {
        let p = polygon(&[(0, 0), (2, 2), (4, 4), (0, 4)]);
        assert_eq!(simplify(&p), polygon(&[(0, 0), (4, 4), (0, 4)]));
    }

    #[test]
    fn test_vertical_reversal_kept() {
        // spike going down and back up on the same column
        let p = polygon(&[(0, 0), (4, 0), (4, 3), (4, 0)]);
        let flat = flatten(&p);
        assert!(flat.vertices.contains(&Coordinate::new(4, 3)));
    }

    #[test]
    fn test_duplicate_vertex_on_flat_edge_kept() {
        // 3 / 0 * 0 is NaN
        let at = Coordinate::new(0, 0);
        assert!(!is_redundant(at, at, Coordinate::new(3, 0)));
        assert!(!is_redundant(at, at, Coordinate::new(-2, 0)));
    }

    #[test]
    fn test_small_polygons_unchanged() {
        let single = polygon(&[(2, 2)]);
        let pair = polygon(&[(0, 0), (3, 0)]);
        assert_eq!(simplify(&single), single);
        assert_eq!(simplify(&pair), pair);
        assert!(simplify(&Polygon::default()).is_empty());
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let cases = [
            polygon(&[(0, 0), (0, 5), (3, 5), (5, 5), (1, 1)]),
            polygon(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (2, 6), (0, 3)]),
            polygon(&[(5, 5), (6, 7), (9, 8), (12, 9), (3, 14), (1, 9), (2, 8)]),
            polygon(&[(0, 0), (10, 1), (20, 3), (20, 20), (0, 20)]),
        ];
        for p in &cases {
            let once = simplify(p);
            assert_eq!(simplify(&once), once, "{p:?}");
            assert!(once.len() <= p.len());
        }
    }
}
