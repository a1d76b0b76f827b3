use itertools::Itertools;
use miette::*;

use crate::{parse_points, Rectangle};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    // Any two tiles work as opposite corners here, even ones sharing a row.
    let max_area = points
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| Rectangle::from_corners(a, b).area())
        .try_fold(0, |best, area| area.map(|area| best.max(area)))?;

    Ok(max_area.to_string())
}
