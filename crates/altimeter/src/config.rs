use std::path::PathBuf;

use crate::altitude::DEFAULT_STEP;

/// Front-end configuration.
#[derive(Debug, Clone)]
pub struct AltimeterConfig {
    pub title: String,
    /// Logical side length of the square window.
    pub window_size: f64,
    /// Dial face image, sampled over the full instrument circle.
    pub texture_path: PathBuf,
    /// Feet per key press.
    pub step: f32,
}

impl Default for AltimeterConfig {
    fn default() -> Self {
        Self {
            title: "Altimeter".to_string(),
            window_size: 800.0,
            texture_path: PathBuf::from("texture.png"),
            step: DEFAULT_STEP,
        }
    }
}

impl AltimeterConfig {
    /// Default configuration with the texture path taken from the first CLI
    /// argument, when given.
    pub fn from_args() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::args_os().nth(1) {
            config.texture_path = PathBuf::from(path);
        }
        config
    }
}
