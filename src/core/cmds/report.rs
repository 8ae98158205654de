use std::io::Write;
use std::path::Path;

use log::debug;

use crate::types::config::Config;
use crate::types::{AppResult, StatisticsDocument};

mod curve_table;

/// Presentation choices that do not come from the document.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub evasion_keywords: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            evasion_keywords: Config::default().evasion_keywords(),
        }
    }
}

/// Load the statistics at `input` and stream the report into `out`.
///
/// Nothing is written when the document cannot be loaded.
pub fn execute_report<W: Write>(
    input: &Path,
    options: &ReportOptions,
    out: &mut W,
) -> AppResult<()> {
    let doc = StatisticsDocument::load(input)?;
    debug!("Loaded statistics from {}", input.display());

    write_report(&doc, options, out)?;
    out.flush()?;
    Ok(())
}

/// Render the whole report to a string.
pub fn render(doc: &StatisticsDocument, options: &ReportOptions) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec<u8> cannot fail.
    let _ = write_report(doc, options, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the report line by line as each section is produced.
pub fn write_report<W: Write>(
    doc: &StatisticsDocument,
    options: &ReportOptions,
    out: &mut W,
) -> std::io::Result<()> {
    write_header(doc, out)?;
    write_rarity(doc, out)?;
    write_colors(doc, out)?;
    write_evasion(doc, &options.evasion_keywords, out)?;
    write_interaction(doc, out)?;
    write_mechanics(doc, out)?;
    curve_table::write(doc, out)
}

fn write_header<W: Write>(doc: &StatisticsDocument, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "# Enhanced Set Metrics Report")?;
    let title = doc.text(&["title"]).trim();
    if !title.is_empty() {
        writeln!(out, "Set: {title}")?;
    }
    writeln!(out, "Total Cards: {}", doc.count(&["stats", "totalCards"]))?;
    writeln!(out, "Average CMC: {}", doc.number(&["stats", "averageCMC"]))
}

fn write_rarity<W: Write>(doc: &StatisticsDocument, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "## Rarity Breakdown")?;
    for (rarity, count) in doc.entries(&["stats", "rarityBreakdown"]) {
        writeln!(out, "- {rarity}: {count}")?;
    }
    Ok(())
}

fn write_colors<W: Write>(doc: &StatisticsDocument, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "## Color Distribution")?;
    // Mono and two-color identities only
    for (label, count) in doc.entries(&["stats", "colorCombinations"]) {
        if label.chars().count() <= 2 {
            writeln!(out, "- {label}: {count}")?;
        }
    }
    Ok(())
}

fn write_evasion<W: Write>(
    doc: &StatisticsDocument,
    keywords: &[String],
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "## Evasion Distribution (Pillar Consistency)")?;
    for keyword in keywords {
        let count = doc.count(&["stats", "keywords", keyword.as_str()]);
        writeln!(out, "- {keyword}: {count}")?;
    }
    Ok(())
}

fn write_interaction<W: Write>(doc: &StatisticsDocument, out: &mut W) -> std::io::Result<()> {
    let ability = |name: &str| doc.count(&["stats", "cardsWithAbilities", name]);
    let energy = ability("energyCards");

    writeln!(out)?;
    writeln!(out, "## Interaction & Resources")?;
    writeln!(
        out,
        "- Removal Spells: {} (Target: ~25% of set)",
        ability("removal")
    )?;
    writeln!(out, "- Card Draw/Selection: {}", ability("cardDraw"))?;
    writeln!(out, "- Counterspells: {}", ability("counterspells"))?;
    writeln!(
        out,
        "- Energy Synergy: {} ({}% density)",
        energy,
        density(energy, doc.denominator())
    )?;
    writeln!(out, "- Token Creators: {}", ability("tokenCreators"))
}

fn write_mechanics<W: Write>(doc: &StatisticsDocument, out: &mut W) -> std::io::Result<()> {
    let names = doc.mechanic_names();
    if names.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "## Mechanics")?;
    for name in names {
        writeln!(out, "- {}", name.trim())?;
    }
    Ok(())
}

/// Share of `count` in `denominator` as a percentage with one decimal.
/// A zero denominator is treated as 1.
pub fn density(count: u64, denominator: u64) -> String {
    let percent = count as f64 / denominator.max(1) as f64 * 100.0;
    format!("{percent:.1}")
}
