use std::collections::HashMap;

use crate::{Point, Polygon};

/// Answers "is this lattice point inside or on the polygon?", remembering every
/// answer. One classifier belongs to one solve; the polygon never changes under it.
#[derive(Debug)]
pub struct Classifier<'p> {
    polygon: &'p Polygon,
    cache: HashMap<(i64, i64), bool>,
}

impl<'p> Classifier<'p> {
    pub fn new(polygon: &'p Polygon) -> Self {
        Self {
            polygon,
            cache: HashMap::new(),
        }
    }

    pub fn is_inside_or_on(&mut self, point: Point) -> bool {
        let key = (point.x, point.y);
        if let Some(&inside) = self.cache.get(&key) {
            return inside;
        }

        let inside = self.is_on_boundary(point) || self.is_strictly_inside(point);
        tracing::trace!(%point, inside, "classified");
        self.cache.insert(key, inside);
        inside
    }

    /// Number of distinct points classified so far.
    pub fn cached_points(&self) -> usize {
        self.cache.len()
    }

    fn is_on_boundary(&self, point: Point) -> bool {
        self.polygon.edges().iter().any(|edge| {
            let b = edge.bounds;
            if edge.is_horizontal {
                point.y == edge.start.y && (b.min_x..=b.max_x).contains(&point.x)
            } else {
                point.x == edge.start.x && (b.min_y..=b.max_y).contains(&point.y)
            }
        })
    }

    /// Crossing-number test with a ray toward +x.
    ///
    /// `Polygon` only holds alternating axis-aligned edges, so every edge that
    /// straddles the ray's row is vertical and meets it at its own `x`. Comparing
    /// against that directly keeps the test exact across the whole `i64` range.
    fn is_strictly_inside(&self, point: Point) -> bool {
        self.polygon
            .edges()
            .iter()
            .filter(|edge| (edge.start.y > point.y) != (edge.end.y > point.y))
            .filter(|edge| point.x < edge.start.x)
            .count()
            % 2
            == 1
    }
}
