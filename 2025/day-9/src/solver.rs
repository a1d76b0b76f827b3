use std::cmp::Reverse;

use itertools::Itertools;
use tracing::debug;

use crate::{Classifier, Edge, Error, Point, Polygon};

/// Inclusive lattice rectangle, `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rectangle {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Counts lattice points, so a single row or column still has area.
    ///
    /// Each side fits in a `u128`; only a rectangle spanning the whole `i64`
    /// plane on both axes overflows the product.
    pub fn area(&self) -> Result<u128, Error> {
        let width = u128::from(self.left.abs_diff(self.right)) + 1;
        let height = u128::from(self.top.abs_diff(self.bottom)) + 1;
        width
            .checked_mul(height)
            .ok_or(Error::AreaOverflow { width, height })
    }

    fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.bottom),
        ]
    }
}

/// Two vertices used as opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub i: usize,
    pub j: usize,
    pub rect: Rectangle,
    pub area: u128,
}

/// Every vertex pair that spans a rectangle with both width and height, largest first.
/// Ties keep the order the pairs were generated in.
pub fn candidates(vertices: &[Point]) -> Result<Vec<Candidate>, Error> {
    let mut candidates = vertices
        .iter()
        .enumerate()
        .tuple_combinations()
        .filter(|((_, a), (_, b))| a.x != b.x && a.y != b.y)
        .map(|((i, &a), (j, &b))| {
            let rect = Rectangle::from_corners(a, b);
            Ok(Candidate {
                i,
                j,
                rect,
                area: rect.area()?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    candidates.sort_by_key(|candidate| Reverse(candidate.area));
    Ok(candidates)
}

/// Finds the largest rectangle with vertex corners that fits inside the polygon.
///
/// A rectangle is accepted when its four corners are inside or on the polygon and
/// no edge reaching into its interior has outside points next to it at the sampled
/// rows and columns. That sampling is a heuristic: a concavity that no edge cuts
/// strictly inside the rectangle (say, a rectangle spanning exactly the mouth of a
/// U) goes unnoticed.
#[derive(Debug)]
pub struct Solver<'p> {
    polygon: &'p Polygon,
    classifier: Classifier<'p>,
}

impl<'p> Solver<'p> {
    pub fn new(polygon: &'p Polygon) -> Self {
        Self {
            polygon,
            classifier: Classifier::new(polygon),
        }
    }

    pub fn classifier(&self) -> &Classifier<'p> {
        &self.classifier
    }

    pub fn is_rectangle_valid(&mut self, rect: &Rectangle) -> bool {
        if !rect
            .corners()
            .into_iter()
            .all(|corner| self.classifier.is_inside_or_on(corner))
        {
            return false;
        }

        self.polygon.edges().iter().all(|edge| {
            carve_samples(edge, rect)
                .into_iter()
                .all(|point| self.classifier.is_inside_or_on(point))
        })
    }

    pub fn largest_rectangle(&mut self) -> Result<u128, Error> {
        let polygon = self.polygon;
        let vertices = polygon.vertices();
        let candidates = candidates(vertices)?;
        debug!(
            count = candidates.len(),
            "checking rectangle candidates by descending area"
        );

        let mut best = 0;
        for candidate in &candidates {
            // Sorted descending, nothing further down can win.
            if candidate.area <= best {
                break;
            }

            if self.is_rectangle_valid(&candidate.rect) {
                debug!(
                    a = %vertices[candidate.i],
                    b = %vertices[candidate.j],
                    area = candidate.area,
                    "found valid rectangle"
                );
                best = candidate.area;
            }
        }

        debug!(
            classified = self.classifier.cached_points(),
            best, "search finished"
        );
        Ok(best)
    }
}

/// Points that must be inside for `edge` not to carve into `rect`. Empty when the
/// edge stays clear of the rectangle's interior.
fn carve_samples(edge: &Edge, rect: &Rectangle) -> Vec<Point> {
    let Rectangle {
        left,
        top,
        right,
        bottom,
    } = *rect;
    let b = edge.bounds;
    let mut samples = Vec::new();

    if edge.is_horizontal {
        let y = edge.start.y;
        if y <= top || y >= bottom || b.max_x <= left || b.min_x >= right {
            return samples;
        }

        let above = y - 1 > top;
        let below = y + 1 < bottom;
        samples.extend([Point::new(left, y), Point::new(right, y)]);
        if above {
            samples.extend([Point::new(left, y - 1), Point::new(right, y - 1)]);
        }
        if below {
            samples.extend([Point::new(left, y + 1), Point::new(right, y + 1)]);
        }

        let mid_x = midpoint(left.max(b.min_x), right.min(b.max_x));
        if left < mid_x && mid_x < right {
            if above {
                samples.push(Point::new(mid_x, y - 1));
            }
            if below {
                samples.push(Point::new(mid_x, y + 1));
            }
        }
    } else {
        let x = edge.start.x;
        if x <= left || x >= right || b.max_y <= top || b.min_y >= bottom {
            return samples;
        }

        let before = x - 1 > left;
        let after = x + 1 < right;
        samples.extend([Point::new(x, top), Point::new(x, bottom)]);
        if before {
            samples.extend([Point::new(x - 1, top), Point::new(x - 1, bottom)]);
        }
        if after {
            samples.extend([Point::new(x + 1, top), Point::new(x + 1, bottom)]);
        }

        let mid_y = midpoint(top.max(b.min_y), bottom.min(b.max_y));
        if top < mid_y && mid_y < bottom {
            if before {
                samples.push(Point::new(x - 1, mid_y));
            }
            if after {
                samples.push(Point::new(x + 1, mid_y));
            }
        }
    }

    samples
}

/// Floor of the mean, without overflowing near the ends of `i64`.
fn midpoint(lo: i64, hi: i64) -> i64 {
    // The mean of two i64s always fits back into one.
    (i128::from(lo) + i128::from(hi)).div_euclid(2) as i64
}
