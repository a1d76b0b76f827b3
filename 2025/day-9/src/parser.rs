use chumsky::prelude::*;

use crate::{Error, Point};

/// One `x,y` pair per line. Blank lines are skipped, so trailing newlines and
/// spacer lines in hand-written inputs parse fine. Any run of digits counts as a
/// number, leading zeros included.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("`{digits}` {e}")))
        });

    let point = coord
        .then_ignore(just(',').padded_by(text::inline_whitespace()))
        .then(coord)
        .map(|(x, y)| Point::new(x, y));

    point
        .or_not()
        .padded_by(text::inline_whitespace())
        .separated_by(text::newline())
        .collect::<Vec<Option<Point>>>()
        .map(|rows| rows.into_iter().flatten().collect())
}

/// Parses the vertex list in file order.
pub fn parse_points(input: &str) -> Result<Vec<Point>, Error> {
    parser().parse(input).into_result().map_err(|errors| {
        // Chumsky reports the furthest failure first; that's the one worth showing.
        let (start, end, reason) = errors
            .first()
            .map(|e| (e.span().start, e.span().end, e.to_string()))
            .unwrap_or((0, 0, String::from("unknown parse failure")));

        Error::Parse {
            src: input.to_string(),
            span: (start..end.max(start)).into(),
            line: input[..start].matches('\n').count() + 1,
            reason,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn parses_points_in_file_order() -> miette::Result<()> {
        let points = parse_points("7,1\n11,1\n11,7\n")?;
        assert_eq!(
            vec![Point::new(7, 1), Point::new(11, 1), Point::new(11, 7)],
            points
        );
        Ok(())
    }

    #[rstest]
    #[case::blank_lines("0,0\n\n0,5\n   \n5,5\n")]
    #[case::crlf("0,0\r\n0,5\r\n5,5\r\n")]
    #[case::no_trailing_newline("0,0\n0,5\n5,5")]
    #[case::padded(" 0,0\n0 , 5\t\n5,5 ")]
    #[case::leading_zeros("00,0\n0,05\n005,0005\n")]
    fn tolerates_layout(#[case] input: &str) -> miette::Result<()> {
        let points = parse_points(input)?;
        assert_eq!(
            vec![Point::new(0, 0), Point::new(0, 5), Point::new(5, 5)],
            points
        );
        Ok(())
    }

    #[test]
    fn accepts_negative_coordinates() -> miette::Result<()> {
        assert_eq!(vec![Point::new(-3, 4)], parse_points("-3,4")?);
        assert_eq!(vec![Point::new(-7, 0)], parse_points("-007,-0")?);
        Ok(())
    }

    #[test]
    fn empty_input_has_no_points() -> miette::Result<()> {
        assert!(parse_points("")?.is_empty());
        Ok(())
    }

    #[rstest]
    #[case::missing_comma("0,0\n1 2\n", 2)]
    #[case::letters("0,0\n0,5\nx,y\n", 3)]
    #[case::single_number("4\n", 1)]
    #[case::bare_minus("-,1\n", 1)]
    #[case::overflow("99999999999999999999,1\n", 1)]
    fn reports_bad_line(#[case] input: &str, #[case] expected_line: usize) {
        match parse_points(input) {
            Err(Error::Parse { line, .. }) => assert_eq!(expected_line, line),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
