use super::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub quit: Vec<geng::Key>,
    /// Rebuilds the grid from scratch
    pub restart: Vec<geng::Key>,
    /// Swaps foreground and background when nothing is turning
    pub swap: Vec<geng::Key>,
}
