use miette::*;

use aoc2025_red_tiles::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path).map_err(aoc2025_red_tiles::Error::from)?,
        None => include_str!("../../example.txt").to_string(),
    };
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
