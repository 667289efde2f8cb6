use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    /// Initial camera pitch, in degrees.
    pub pitch: f32,
    /// Initial camera yaw, in degrees.
    pub yaw: f32,
    /// Initial camera distance from the center of the cube.
    pub distance: f32,
    /// Closest allowed camera distance.
    pub min_distance: f32,
    /// Farthest allowed camera distance.
    pub max_distance: f32,

    /// Vertical field of view, in degrees.
    pub fov: f32,
    /// Near clipping plane.
    pub near_plane: f32,
    /// Far clipping plane.
    pub far_plane: f32,

    /// Size of each cubie relative to the grid spacing. Values less than 1
    /// leave a gap between cubies.
    pub cubie_size: f32,
    /// Width of the black border around each sticker, relative to the face.
    pub outline_width: f32,

    /// Background color as linear RGB.
    pub background_color: [f32; 3],
    /// Direction toward the light source (need not be normalized).
    pub light_direction: [f32; 3],
    /// Minimum brightness of a face facing away from the light.
    pub ambient_light: f32,
}
impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            pitch: 30.0,
            yaw: 45.0,
            distance: 15.0,
            min_distance: 5.0,
            max_distance: 25.0,

            fov: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,

            cubie_size: 0.95,
            outline_width: 0.06,

            background_color: [0.12, 0.12, 0.12],
            light_direction: [0.5, 0.5, 0.5],
            ambient_light: 0.7,
        }
    }
}
