use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::types::{Color, ColorCurve, CurveBucket, StatisticsDocument};

const HEADER: &str = "| Color | 1 | 2 | 3 | 4 | 5+ |";
const SEPARATOR: &str = "| :--- | :--- | :--- | :--- | :--- | :--- |";

/// Creature curve table. Every color gets a row, in W U B R G order,
/// whether or not the document mentions it.
pub fn write<W: Write>(doc: &StatisticsDocument, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "## Creature Curve (Creatures)")?;
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{SEPARATOR}")?;
    for color in Color::iter() {
        let curve = ColorCurve::read(doc, color);
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            color,
            curve.get(CurveBucket::One),
            curve.get(CurveBucket::Two),
            curve.get(CurveBucket::Three),
            curve.get(CurveBucket::Four),
            curve.five_plus()
        )?;
    }
    Ok(())
}
