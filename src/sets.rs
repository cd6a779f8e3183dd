use bevy::prelude::*;

/// Top-level system ordering sets for the game loop.
///
/// `Input → Camera → Parallax → Ui` run chained in `Update`; `Physics` runs
/// in `FixedUpdate`, which Bevy steps zero or more times before `Update` each
/// frame, so the camera and parallax sets always observe settled positions.
/// Individual plugins place their systems into the appropriate set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Physics,
    Camera,
    Parallax,
    Ui,
}
