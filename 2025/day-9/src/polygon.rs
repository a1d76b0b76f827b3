use crate::{MalformedPolygon, Point};

/// Axis-aligned bounding box of an edge, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
    pub is_horizontal: bool,
    pub bounds: Bounds,
}

impl Edge {
    fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            is_horizontal: start.y == end.y,
            bounds: Bounds {
                min_x: start.x.min(end.x),
                max_x: start.x.max(end.x),
                min_y: start.y.min(end.y),
                max_y: start.y.max(end.y),
            },
        }
    }

    fn orientation(&self) -> &'static str {
        if self.is_horizontal {
            "horizontal"
        } else {
            "vertical"
        }
    }
}

/// A closed rectilinear polygon. The last vertex always connects back to the first.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Edge>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, MalformedPolygon> {
        let n = vertices.len();
        if n < 4 {
            return Err(MalformedPolygon::TooFewVertices { count: n });
        }

        let edges = (0..n)
            .map(|index| {
                let from = vertices[index];
                let to = vertices[(index + 1) % n];
                if from == to {
                    return Err(MalformedPolygon::DegenerateEdge { index, at: from });
                }
                if from.x != to.x && from.y != to.y {
                    return Err(MalformedPolygon::SkewedEdge { index, from, to });
                }
                Ok(Edge::new(from, to))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Alternation around the whole cycle also rules out odd vertex counts.
        for index in 0..n {
            let next = (index + 1) % n;
            if edges[index].is_horizontal == edges[next].is_horizontal {
                return Err(MalformedPolygon::ParallelEdges {
                    index,
                    next,
                    orientation: edges[index].orientation(),
                });
            }
        }

        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
