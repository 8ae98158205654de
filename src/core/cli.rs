use clap::Parser;

/// Print a markdown summary of a card set's precomputed statistics
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Statistics document to read.
    /// Defaults to src/data/setInfo.json, or [input] from setreport.toml.
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Comma-separated keywords for the evasion section (e.g. "Flying,Menace").
    /// Replaces config evasion_keywords if provided.
    #[arg(long = "evasion-keywords", value_name = "CSV")]
    pub evasion_keywords: Option<String>,

    /// All relative paths will be interpreted relative to this directory.
    #[arg(long)]
    pub cwd: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level")]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color")]
    pub log_color: Option<String>,
}
