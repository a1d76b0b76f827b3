use glam::I64Vec2;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Everything that can stop a solve. Each variant is terminal.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("line {line} is not a `x,y` coordinate pair: {reason}")]
    #[diagnostic(code(red_tiles::parse))]
    Parse {
        #[source_code]
        src: String,
        #[label("{reason}")]
        span: SourceSpan,
        line: usize,
        reason: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    MalformedPolygon(#[from] MalformedPolygon),

    #[error("a {width} by {height} rectangle has more tiles than fit in a u128")]
    #[diagnostic(code(red_tiles::area_overflow))]
    AreaOverflow { width: u128, height: u128 },

    #[error("could not read input")]
    #[diagnostic(code(red_tiles::io))]
    Io(#[from] std::io::Error),
}

/// The vertex list does not describe a closed axis-aligned polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum MalformedPolygon {
    #[error("a polygon needs at least 4 vertices, got {count}")]
    #[diagnostic(code(red_tiles::too_few_vertices))]
    TooFewVertices { count: usize },

    #[error("edge {index} from {from} to {to} is neither horizontal nor vertical")]
    #[diagnostic(code(red_tiles::skewed_edge))]
    SkewedEdge {
        index: usize,
        from: I64Vec2,
        to: I64Vec2,
    },

    #[error("edge {index} has zero length at {at}")]
    #[diagnostic(
        code(red_tiles::degenerate_edge),
        help("remove the repeated vertex")
    )]
    DegenerateEdge { index: usize, at: I64Vec2 },

    #[error("edges {index} and {next} are both {orientation}")]
    #[diagnostic(
        code(red_tiles::parallel_edges),
        help("horizontal and vertical edges must alternate")
    )]
    ParallelEdges {
        index: usize,
        next: usize,
        orientation: &'static str,
    },
}
