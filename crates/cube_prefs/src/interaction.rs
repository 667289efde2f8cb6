use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Degrees of camera rotation per point of mouse drag.
    pub drag_sensitivity: f32,
    /// Camera distance change per point of scroll.
    pub zoom_sensitivity: f32,
    /// Degrees of camera rotation per arrow button press.
    pub arrow_step: f32,
    /// Whether the keyboard can turn faces.
    pub keyboard_moves: bool,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.5,
            zoom_sensitivity: 0.01,
            arrow_step: 10.0,
            keyboard_moves: true,
        }
    }
}
