use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Observer and view settings. Angles are in degrees here; the app converts
/// to radians before anything downstream sees them.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    /// Simulated start time, "%Y-%m-%dT%H:%M:%S" UTC. None means "now".
    pub(crate) datetime: Option<String>,
    /// Only render stars brighter (numerically smaller) than this magnitude.
    pub(crate) threshold: f32,
    /// Only label stars brighter than this magnitude.
    pub(crate) label_threshold: f32,
    pub(crate) fps: u32,
    /// Simulation speed multiplier (1.0 = real time).
    pub(crate) speed: f64,
    pub(crate) unicode: bool,
    pub(crate) color: bool,
    pub(crate) grid: bool,
    pub(crate) constellations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            datetime: None,
            threshold: 5.0,
            label_threshold: 0.25,
            fps: 24,
            speed: 1.0,
            unicode: true,
            color: true,
            grid: false,
            constellations: true,
        }
    }
}

pub(crate) fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(p) => {
            let s = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_str(&s).with_context(|| format!("parsing {}", p.display()))
        }
        None => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_path() {
        let s = load_settings(None).unwrap();
        assert_eq!(s.fps, 24);
        assert!((s.threshold - 5.0).abs() < f32::EPSILON);
        assert!(s.datetime.is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"latitude": 42.36, "grid": true}"#).unwrap();
        assert!((s.latitude - 42.36).abs() < 1e-9);
        assert!(s.grid);
        assert_eq!(s.fps, 24);
    }
}
