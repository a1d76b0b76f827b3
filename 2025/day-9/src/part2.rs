use miette::*;
use tracing::debug;

use crate::{parse_points, Polygon, Solver};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;
    debug!(count = points.len(), "parsed red tiles");

    let polygon = Polygon::new(points).map_err(crate::Error::from)?;
    debug!(count = polygon.edges().len(), "built edges");

    let biggest_area = Solver::new(&polygon).largest_rectangle()?;

    Ok(biggest_area.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Error, MalformedPolygon};

    #[test]
    fn it_works() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
        assert_eq!("24", process(input)?);
        Ok(())
    }

    #[test]
    fn square() -> Result<()> {
        assert_eq!("36", process("0,0\n0,5\n5,5\n5,0\n")?);
        Ok(())
    }

    #[test]
    fn l_shape() -> Result<()> {
        assert_eq!("15", process("0,0\n0,4\n2,4\n2,2\n4,2\n4,0\n")?);
        Ok(())
    }

    #[test]
    fn square_with_huge_sides() -> Result<()> {
        let input = "0,0\n0,5000000000\n5000000000,5000000000\n5000000000,0";
        assert_eq!("25000000010000000001", process(input)?);
        Ok(())
    }

    #[test]
    fn three_vertices_is_malformed() {
        let err = process("0,0\n1,1\n2,2").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedPolygon(MalformedPolygon::TooFewVertices {
                count: 3
            }))
        ));
    }

    #[test]
    fn diagonal_edge_is_malformed() {
        let err = process("0,0\n0,4\n4,4\n5,1").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedPolygon(MalformedPolygon::SkewedEdge { index: 2, .. }))
        ));
    }

    #[test]
    fn parse_errors_come_before_geometry() {
        // Too few vertices too, but the bad line wins.
        let err = process("0,0\nnope").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Parse { line: 2, .. })
        ));
    }
}
