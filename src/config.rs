/*
 *  config.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Layered configuration: defaults, YAML, command line
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */
use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::display::color::Theme;
use crate::display::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration. Every field is optional so layers can be
/// merged; the accessors below supply the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    pub display: Option<DisplayConfig>,
    pub output: Option<OutputConfig>,
    /// Display record YAML; the built-in sample is used when unset
    pub data: Option<PathBuf>,
    /// Per-role colour overrides, `[r, g, b]`
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Write the half-block stream to stdout
    pub ansi: Option<bool>,
    /// PNG destination
    pub screenshot: Option<PathBuf>,
    /// Redraw every N seconds instead of rendering once
    pub refresh_secs: Option<u64>,
}

impl Config {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        let d = self.display.as_ref();
        (
            d.and_then(|d| d.width).unwrap_or(CANVAS_WIDTH),
            d.and_then(|d| d.height).unwrap_or(CANVAS_HEIGHT),
        )
    }

    pub fn ansi_enabled(&self) -> bool {
        self.output.as_ref().and_then(|o| o.ansi).unwrap_or(true)
    }

    pub fn screenshot(&self) -> Option<&Path> {
        self.output.as_ref().and_then(|o| o.screenshot.as_deref())
    }

    pub fn refresh_secs(&self) -> Option<u64> {
        self.output.as_ref().and_then(|o| o.refresh_secs)
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "weatherstar",
    version,
    about = "WeatherStar 4000 Local on the 8s, rendered to the terminal and PNG"
)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// Also write the frame as a PNG to FILE
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub screenshot: Option<PathBuf>,
    /// Skip the terminal output
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_ansi: bool,
    /// Display record YAML to render instead of the built-in sample
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    /// Redraw every SECS seconds until interrupted
    #[arg(long, value_name = "SECS")]
    pub refresh: Option<u64>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();
    let cfg = load_from(&cli)?;

    if cli.dump_config {
        // Pretty YAML of effective config
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Everything `load` does except parsing argv and the dump.
pub fn load_from(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/weatherstar/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/weatherstar/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/weatherstar.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["weatherstar.yaml", "config/weatherstar.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() { dst.log_level = src.log_level; }
    if src.data.is_some()      { dst.data = src.data; }
    if src.theme.is_some()     { dst.theme = src.theme; }
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
    match (&mut dst.output, src.output) {
        (None, Some(c)) => dst.output = Some(c),
        (Some(d), Some(s)) => merge_output(d, s),
        _ => {}
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.width.is_some()  { dst.width = src.width; }
    if src.height.is_some() { dst.height = src.height; }
}

fn merge_output(dst: &mut OutputConfig, src: OutputConfig) {
    if src.ansi.is_some()         { dst.ansi = src.ansi; }
    if src.screenshot.is_some()   { dst.screenshot = src.screenshot; }
    if src.refresh_secs.is_some() { dst.refresh_secs = src.refresh_secs; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }
    if cli.data.is_some()      { cfg.data = cli.data.clone(); }

    if cli.width.is_some() || cli.height.is_some() {
        let display = cfg.display.get_or_insert_with(DisplayConfig::default);
        if cli.width.is_some()  { display.width = cli.width; }
        if cli.height.is_some() { display.height = cli.height; }
    }

    if cli.no_ansi || cli.screenshot.is_some() || cli.refresh.is_some() {
        let output = cfg.output.get_or_insert_with(OutputConfig::default);
        if cli.no_ansi               { output.ansi = Some(false); }
        if cli.screenshot.is_some()  { output.screenshot = cli.screenshot.clone(); }
        if cli.refresh.is_some()     { output.refresh_secs = cli.refresh; }
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    let (w, h) = cfg.canvas_size();
    if w == 0 || h == 0 {
        return Err(ConfigError::Validation("display width/height must be > 0".into()));
    }
    if cfg.refresh_secs() == Some(0) {
        return Err(ConfigError::Validation("output refresh_secs must be > 0".into()));
    }
    if let Some(level) = cfg.log_level.as_deref() {
        if level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!("unknown log_level '{level}'")));
        }
    }
    Ok(())
}
