use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};
use cube_core::{Cube, Cubie, Face, Move, Orientation};
use cube_prefs::{ColorPreferences, ViewPreferences};
use strum::IntoEnumIterator;

/// Distance between the centers of adjacent cubies.
const CUBIE_SPACING: f32 = 1.0;

/// Drawable state of one cubie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubieInstance {
    /// Transform from the unit cube (`-0.5..=0.5` on each axis) to world
    /// space.
    pub transform: Matrix4<f32>,
    /// Color of each side of the unit cube, indexed by [`Face`] in the
    /// cubie's own frame. Sides without a sticker use the internal color.
    pub face_colors: [[f32; 3]; 6],
}

/// Everything a renderer needs to draw one frame of the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// One instance per cubie.
    pub cubies: Vec<CubieInstance>,
    /// Background color.
    pub background_color: [f32; 3],
    /// Normalized direction toward the light.
    pub light_direction: [f32; 3],
    /// Brightness of a face perpendicular to the light.
    pub ambient_light: f32,
    /// Width of the border around each sticker, relative to the face.
    pub outline_width: f32,
}
impl Scene {
    /// Builds the scene for `cube`, with the layer of `twist` (if any) rotated
    /// part of the way through the move. `twist` progress should already be
    /// eased.
    pub fn new(
        cube: &Cube,
        twist: Option<(Move, f32)>,
        view: &ViewPreferences,
        colors: &ColorPreferences,
    ) -> Self {
        let layer_rotation = twist.map(|(mv, t)| (mv.face, layer_rotation(mv, t)));

        let cubies = cube
            .cubies()
            .iter()
            .map(|cubie| {
                let anim = match layer_rotation {
                    Some((face, rot)) if Cube::is_in_layer(face, cubie.pos()) => rot,
                    _ => Matrix4::identity(),
                };
                CubieInstance {
                    transform: anim * cubie_transform(cubie, view.cubie_size),
                    face_colors: face_colors(cubie, colors),
                }
            })
            .collect();

        let [x, y, z] = view.light_direction;
        let len = (x * x + y * y + z * z).sqrt();
        let light_direction = match len > f32::EPSILON {
            true => [x / len, y / len, z / len],
            false => [0.0, 0.0, 1.0],
        };

        Self {
            cubies,
            background_color: view.background_color,
            light_direction,
            ambient_light: view.ambient_light,
            outline_width: view.outline_width,
        }
    }
}

/// Returns the rotation of the turning layer after eased progress `t`.
pub fn layer_rotation(mv: Move, t: f32) -> Matrix4<f32> {
    let axis = mv.face.axis().unit().map(f32::from);
    Matrix4::from_axis_angle(Vector3::from(axis), Deg(mv.angle_degrees() * t))
}

fn cubie_transform(cubie: &Cubie, size: f32) -> Matrix4<f32> {
    let pos = Vector3::from(cubie.pos().map(|x| f32::from(x) * CUBIE_SPACING));
    Matrix4::from_translation(pos) * orientation_matrix(cubie.orientation()) * Matrix4::from_scale(size)
}

fn orientation_matrix(orientation: Orientation) -> Matrix4<f32> {
    let m = orientation.rows().map(|row| row.map(f32::from));
    // cgmath matrices are column-major.
    Matrix4::new(
        m[0][0], m[1][0], m[2][0], 0.0, //
        m[0][1], m[1][1], m[2][1], 0.0, //
        m[0][2], m[1][2], m[2][2], 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

fn face_colors(cubie: &Cubie, colors: &ColorPreferences) -> [[f32; 3]; 6] {
    let home_faces = cubie.home_faces();
    let mut ret = [colors.internal; 6];
    for face in Face::iter() {
        if home_faces.contains(&face) {
            ret[face as usize] = colors.face_color(face);
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use cgmath::{Transform, point3};
    use cube_core::Direction;

    use super::*;

    fn scene(cube: &Cube, twist: Option<(Move, f32)>) -> Scene {
        Scene::new(cube, twist, &ViewPreferences::default(), &ColorPreferences::default())
    }

    fn assert_matrices_close(a: Matrix4<f32>, b: Matrix4<f32>) {
        let a: &[f32; 16] = a.as_ref();
        let b: &[f32; 16] = b.as_ref();
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_solved_scene_positions() {
        let cube = Cube::new();
        let s = scene(&cube, None);
        assert_eq!(s.cubies.len(), 26);
        for (inst, cubie) in s.cubies.iter().zip(cube.cubies()) {
            let center = inst.transform.transform_point(point3(0.0, 0.0, 0.0));
            let expected = cubie.pos().map(f32::from);
            assert_eq!([center.x, center.y, center.z], expected);
        }
    }

    #[test]
    fn test_full_progress_matches_committed_state() {
        for mv in Move::iter() {
            let before = Cube::new();
            let mut after = before.clone();
            after.apply(mv);

            let animated = scene(&before, Some((mv, 1.0)));
            let committed = scene(&after, None);
            for (a, b) in animated.cubies.iter().zip(&committed.cubies) {
                assert_matrices_close(a.transform, b.transform);
                assert_eq!(a.face_colors, b.face_colors);
            }
        }
    }

    #[test]
    fn test_only_active_layer_moves() {
        let cube = Cube::new();
        let mv = Move::new(Face::R, Direction::Cw);
        let still = scene(&cube, None);
        let moving = scene(&cube, Some((mv, 0.5)));
        for ((a, b), cubie) in still.cubies.iter().zip(&moving.cubies).zip(cube.cubies()) {
            let in_layer = Cube::is_in_layer(Face::R, cubie.pos());
            assert_eq!(a.transform != b.transform, in_layer, "cubie at {:?}", cubie.pos());
        }
    }

    #[test]
    fn test_corner_colors() {
        let cube = Cube::new();
        let s = scene(&cube, None);
        let colors = ColorPreferences::default();
        let (i, _) = cube
            .cubies()
            .iter()
            .enumerate()
            .find(|(_, c)| c.home() == [1, 1, 1])
            .unwrap();
        let face_colors = s.cubies[i].face_colors;
        assert_eq!(face_colors[Face::R as usize], colors.right);
        assert_eq!(face_colors[Face::U as usize], colors.top);
        assert_eq!(face_colors[Face::F as usize], colors.front);
        assert_eq!(face_colors[Face::L as usize], colors.internal);
    }
}
