//! User preferences.
//!
//! Defaults are embedded in the binary and layered under an optional user
//! YAML file. Preferences are read-only at runtime.

#![allow(missing_docs)] // too many things to document

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate strum;

use std::path::Path;

use cube_core::ScrambleParams;
use serde::{Deserialize, Serialize};

mod animation;
mod colors;
mod interaction;
pub mod paths;
mod view;

pub use animation::*;
pub use colors::*;
pub use interaction::*;
pub use view::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub view: ViewPreferences,
    pub interaction: InteractionPreferences,
    pub scramble: ScrambleParams,
    pub colors: ColorPreferences,
}
impl Preferences {
    /// Loads preferences from the user preferences file, falling back to the
    /// defaults if it is missing or invalid.
    pub fn load() -> Self {
        match paths::prefs_file() {
            Ok(path) => Self::load_from(Some(path)),
            Err(e) => {
                log::warn!("Error loading user preferences: {e}");
                Self::load_from(None)
            }
        }
    }

    /// Loads preferences from `user_file` layered over the defaults. A missing
    /// file is not an error. If loading fails, the defaults are returned.
    pub fn load_from(user_file: Option<&Path>) -> Self {
        let mut config = config::Config::builder();

        // Load default preferences.
        config = config.add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        // Load user preferences.
        if let Some(path) = user_file {
            log::debug!("Loading preferences from {}", path.display());
            config = config.add_source(
                config::File::from(path)
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }

        let mut prefs = config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            });
        prefs.sanitize();
        prefs
    }

    /// Clamps values that would break the simulation into their valid ranges.
    fn sanitize(&mut self) {
        let anim = &mut self.animation;
        anim.set_twist_duration(anim.twist_duration);

        let view = &mut self.view;
        if !(view.min_distance > 0.0 && view.min_distance <= view.max_distance) {
            log::warn!(
                "Invalid camera distance range {}..{}; using defaults",
                view.min_distance,
                view.max_distance,
            );
            view.min_distance = DEFAULT_PREFS.view.min_distance;
            view.max_distance = DEFAULT_PREFS.view.max_distance;
        }
        if !view.distance.is_finite() {
            log::warn!("Invalid camera distance {}; using default", view.distance);
            view.distance = DEFAULT_PREFS.view.distance;
        }
        view.distance = view.distance.clamp(view.min_distance, view.max_distance);

        if !(view.fov > 0.0 && view.fov < 180.0) {
            log::warn!("Invalid field of view {}; using default", view.fov);
            view.fov = DEFAULT_PREFS.view.fov;
        }
        if !(view.near_plane > 0.0 && view.near_plane < view.far_plane && view.far_plane.is_finite()) {
            log::warn!(
                "Invalid clipping planes {}..{}; using defaults",
                view.near_plane,
                view.far_plane,
            );
            view.near_plane = DEFAULT_PREFS.view.near_plane;
            view.far_plane = DEFAULT_PREFS.view.far_plane;
        }

        if view.cubie_size.is_nan() {
            view.cubie_size = DEFAULT_PREFS.view.cubie_size;
        }
        view.cubie_size = view.cubie_size.clamp(0.1, 1.0);
    }
}
