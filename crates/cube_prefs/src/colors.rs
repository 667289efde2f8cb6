use cube_core::Face;
use serde::{Deserialize, Serialize};

/// Sticker colors as RGB in the range 0.0 to 1.0.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColorPreferences {
    pub top: [f32; 3],
    pub bottom: [f32; 3],
    pub right: [f32; 3],
    pub left: [f32; 3],
    pub front: [f32; 3],
    pub back: [f32; 3],
    /// Color of the plastic between stickers.
    pub internal: [f32; 3],
}
impl Default for ColorPreferences {
    fn default() -> Self {
        Self {
            top: [1.0, 1.0, 1.0],
            bottom: [1.0, 1.0, 0.0],
            right: [1.0, 0.0, 0.0],
            left: [1.0, 0.5, 0.0],
            front: [0.0, 0.0, 1.0],
            back: [0.0, 1.0, 0.0],
            internal: [0.0, 0.0, 0.0],
        }
    }
}
impl ColorPreferences {
    /// Returns the color of the stickers that belong on `face` when solved.
    pub fn face_color(&self, face: Face) -> [f32; 3] {
        match face {
            Face::U => self.top,
            Face::D => self.bottom,
            Face::R => self.right,
            Face::L => self.left,
            Face::F => self.front,
            Face::B => self.back,
        }
    }
}
