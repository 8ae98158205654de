use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use once_cell::sync::OnceCell;
use serde::Deserialize;

pub const DEFAULT_INPUT: &str = "src/data/setInfo.json";

/// Evasion keywords shown when nothing else is configured. "Digital" is
/// the set's own mechanic.
pub const DEFAULT_EVASION_KEYWORDS: [&str; 5] = ["Digital", "Flying", "Menace", "Trample", "Reach"];

const CONFIG_FILENAME: &str = "setreport.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    // Top-level fields
    pub input: Option<String>,
    pub evasion_keywords: Option<Vec<String>>,

    // Nested sections
    pub log: Option<LogConfig>,
}

impl Config {
    pub fn input(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT)
    }

    pub fn evasion_keywords(&self) -> Vec<String> {
        match &self.evasion_keywords {
            Some(list) => list.clone(),
            None => DEFAULT_EVASION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input: Option<String>,
    pub evasion_keywords: Option<String>, // csv
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        if let Some(path) = find_nearest_config_file()
            && let Some(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file()
        && let Some(file_cfg) = read_config_file(&path)
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
}

fn read_config_file(path: &Path) -> Option<Config> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("Ignoring unreadable config {}: {e}", path.display());
            return None;
        }
    };
    match toml::from_str::<Config>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            debug!("Ignoring invalid config {}: {e}", path.display());
            None
        }
    }
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if file.input.is_some() {
        cfg.input = file.input.clone();
    }
    if file.evasion_keywords.is_some() {
        cfg.evasion_keywords = file.evasion_keywords.clone(); // override semantics
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if let Some(input) = &overrides.input
        && !input.trim().is_empty()
    {
        cfg.input = Some(input.clone());
    }
    if let Some(keywords_csv) = &overrides.evasion_keywords {
        let list = parse_csv(keywords_csv);
        if !list.is_empty() {
            cfg.evasion_keywords = Some(list);
        }
    }

    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

/// Whether log output on stderr should be styled.
pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled_stderr(),
    }
}
