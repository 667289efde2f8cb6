use cube_core::{Direction, Face, Move};
use cube_prefs::Preferences;
use cube_view::{Camera, CubeSimulation, InputLocked};

/// Application state independent of the UI.
#[derive(Debug)]
pub(crate) struct App {
    pub prefs: Preferences,
    pub sim: CubeSimulation,
    pub camera: Camera,

    /// Most recent rejected action, shown in the status area until the next
    /// accepted one.
    pub last_rejection: Option<InputLocked>,
}
impl App {
    pub fn new(prefs: Preferences, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            log::info!("Using scramble seed {seed}");
        }
        Self {
            camera: Camera::new(&prefs.view),
            sim: CubeSimulation::new(seed),
            prefs,

            last_rejection: None,
        }
    }

    /// Steps the animation. Returns whether another frame is needed.
    pub fn step(&mut self) -> bool {
        self.sim.step(&self.prefs.animation)
    }

    pub fn do_move(&mut self, face: Face, direction: Direction) {
        let result = self.sim.do_move(Move::new(face, direction));
        self.record(result);
    }
    pub fn scramble(&mut self) {
        let result = self.sim.scramble(&self.prefs.scramble);
        self.record(result);
    }
    pub fn solve(&mut self) {
        let result = self.sim.solve();
        self.record(result);
    }
    pub fn undo(&mut self) {
        let result = self.sim.undo();
        self.record(result);
    }
    pub fn reset_cube(&mut self) {
        let result = self.sim.reset();
        self.record(result);
    }

    /// Rotates the camera by one arrow step in each direction given.
    pub fn nudge_camera(&mut self, pitch_steps: f32, yaw_steps: f32) {
        let step = self.prefs.interaction.arrow_step;
        self.camera.rotate_by(pitch_steps * step, yaw_steps * step);
    }

    fn record<T>(&mut self, result: Result<T, InputLocked>) {
        self.last_rejection = result.err();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn run_until_idle(app: &mut App) {
        let mut frames = 0;
        while app
            .sim
            .step_by(Duration::from_millis(16), &app.prefs.animation)
        {
            frames += 1;
            assert!(frames < 100_000, "animation never finished");
        }
    }

    #[test]
    fn test_rejection_is_recorded_and_cleared() {
        let mut app = App::new(Preferences::default(), Some(0));
        app.do_move(Face::U, Direction::Cw);
        assert_eq!(app.last_rejection, None);

        app.do_move(Face::R, Direction::Cw);
        assert_eq!(app.last_rejection, Some(InputLocked { action: "turn a face" }));

        run_until_idle(&mut app);
        app.undo();
        assert_eq!(app.last_rejection, None);
        run_until_idle(&mut app);
        assert!(app.sim.is_solved());
    }

    #[test]
    fn test_scramble_uses_prefs() {
        let mut prefs = Preferences::default();
        prefs.scramble.num_moves = 7;
        let mut app = App::new(prefs, Some(1));
        app.scramble();
        assert_eq!(app.sim.history().len(), 7);
        app.reset_cube();
        assert!(app.sim.is_solved());
    }

    #[test]
    fn test_nudge_camera() {
        let mut app = App::new(Preferences::default(), None);
        let (pitch, yaw) = (app.camera.pitch, app.camera.yaw);
        app.nudge_camera(1.0, -1.0);
        assert_eq!(app.camera.pitch, pitch + 10.0);
        assert_eq!(app.camera.yaw, yaw - 10.0);
    }
}
