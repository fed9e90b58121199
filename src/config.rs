use super::*;

/// Which of the two pieces is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Two layers, only the foreground layer rotates, swapping flips layer roles
    Museum,
    /// One flat grid with fixed per-shape colors and no adjacent animations
    Illusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbors {
    Allow,
    /// Shapes whose centers are within 2/3 of a shape of an animating one are skipped
    Suppress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colors {
    /// Every shape is painted with the scene's current roles
    SwappableRoles,
    /// Every shape keeps the pair it was created with
    FixedPerShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub neighbors: Neighbors,
    pub colors: Colors,
}

impl Mode {
    pub fn policy(self) -> Policy {
        match self {
            Self::Museum => Policy {
                neighbors: Neighbors::Allow,
                colors: Colors::SwappableRoles,
            },
            Self::Illusion => Policy {
                neighbors: Neighbors::Suppress,
                colors: Colors::FixedPerShape,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("shape size must be positive, got {0}")]
    ShapeSize(f32),
    #[error("fps must be at least 1")]
    Fps,
    #[error("viewport must not be empty, got {width}x{height}")]
    Viewport { width: usize, height: usize },
    #[error("expected a color like \"#rrggbb\" or \"#rrggbbaa\", got {0:?}")]
    Color(String),
}

/// Parses `#rrggbb` or `#rrggbbaa`
pub fn parse_color(text: &str) -> Result<Rgba<f32>, ConfigError> {
    let invalid = || ConfigError::Color(text.to_owned());
    let hex = text.strip_prefix('#').ok_or_else(invalid)?;
    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|x| x as f32 / 255.0)
            .map_err(|_| invalid())
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
    Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}

fn hex_color<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Rgba<f32>, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_color(&text).map_err(serde::de::Error::custom)
}

/// Scene configuration, every field falls back to its default
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub shape_size: f32,
    /// Frames per second, also the number of frames a quarter turn takes
    pub fps: usize,
    #[serde(deserialize_with = "hex_color")]
    pub foreground_color: Rgba<f32>,
    #[serde(deserialize_with = "hex_color")]
    pub background_color: Rgba<f32>,
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            shape_size: 30.0,
            fps: 30,
            foreground_color: Rgba::WHITE,
            background_color: Rgba::BLACK,
            mode: Mode::Museum,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape_size.is_nan() || self.shape_size <= 0.0 {
            return Err(ConfigError::ShapeSize(self.shape_size));
        }
        if self.fps == 0 {
            return Err(ConfigError::Fps);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Viewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn policy(&self) -> Policy {
        self.mode.policy()
    }

    pub fn size(&self) -> vec2<usize> {
        vec2(self.width, self.height)
    }
}
