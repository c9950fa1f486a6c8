//! Startup configuration: an optional YAML file plus command-line overrides.

use crate::color::Color;
use crate::error::Error;
use crate::pen::PressureCurve;
use crate::raster::MAX_RADIUS as MAX_BRUSH_RADIUS;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Touch-driven freehand painting
#[derive(Parser, Debug, Default)]
#[command(name = "fingerpaint", version, about)]
pub struct CliArgs {
    /// YAML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial window width
    #[arg(long)]
    pub width: Option<usize>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<usize>,

    /// Brush radius in pixels (before pressure scaling)
    #[arg(short, long)]
    pub radius: Option<i32>,

    /// Brush color as #RRGGBB
    #[arg(long, value_parser = parse_color)]
    pub color: Option<Color>,

    /// Width of the right-edge band where strokes don't paint
    #[arg(long, value_name = "PX")]
    pub edge_band: Option<usize>,
}

fn parse_color(s: &str) -> Result<Color, Error> {
    s.parse()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub brush_radius: i32,
    pub brush_color: Color,
    /// Strokes that start within this many pixels of the right edge leave
    /// the canvas untouched; that strip is kept for gestures.
    pub edge_band: usize,
    /// Back held at least this long clears; a shorter tap undoes.
    pub long_press_secs: f32,
    pub pressure_smoothing: f32,
    pub no_pressure_scale: f32,
    pub min_brush_scale: f32,
    pub pressure_gamma: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Fingerpaint".to_string(),
            width: 1280,
            height: 800,
            brush_radius: 10,
            brush_color: Color::rgb(0xB6, 0xC2, 0xE8),
            edge_band: 100,
            long_press_secs: 0.3,
            pressure_smoothing: 0.3,
            no_pressure_scale: 0.35,
            min_brush_scale: 0.05,
            pressure_gamma: 0.3,
        }
    }
}

impl Config {
    /// Build from CLI args: file first (if given), then overrides.
    pub fn load(args: &CliArgs) -> Result<Self, Error> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => {
                log::info!("No config file given, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(args);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
        let config = Self::from_yaml(&content)
            .map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    fn apply_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.width = w;
        }
        if let Some(h) = args.height {
            self.height = h;
        }
        if let Some(r) = args.radius {
            self.brush_radius = r;
        }
        if let Some(c) = args.color {
            self.brush_color = c;
        }
        if let Some(band) = args.edge_band {
            self.edge_band = band;
        }
    }

    /// Reject values the session can't work with.
    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=MAX_BRUSH_RADIUS).contains(&self.brush_radius) {
            return Err(Error::InvalidConfig(format!(
                "brush_radius {} not in 1..={MAX_BRUSH_RADIUS}",
                self.brush_radius
            )));
        }
        if Duration::try_from_secs_f32(self.long_press_secs).is_err() {
            return Err(Error::InvalidConfig(format!(
                "long_press_secs {} is not a valid duration",
                self.long_press_secs
            )));
        }
        let unit_params = [
            ("pressure_smoothing", self.pressure_smoothing),
            ("no_pressure_scale", self.no_pressure_scale),
            ("min_brush_scale", self.min_brush_scale),
            ("pressure_gamma", self.pressure_gamma),
        ];
        for (name, value) in unit_params {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} {value} must be finite and >= 0")));
            }
        }
        Ok(())
    }

    /// Falls back to the default threshold for values `validate` rejects.
    pub fn long_press(&self) -> Duration {
        Duration::try_from_secs_f32(self.long_press_secs)
            .unwrap_or_else(|_| Duration::from_secs_f32(Config::default().long_press_secs))
    }

    pub fn pressure_curve(&self) -> PressureCurve {
        PressureCurve {
            smoothing: self.pressure_smoothing,
            no_pressure_scale: self.no_pressure_scale,
            min_scale: self.min_brush_scale,
            gamma: self.pressure_gamma,
        }
    }
}
