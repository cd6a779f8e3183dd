pub mod fixtures {
    use bevy::prelude::*;

    use crate::level::Level;
    use crate::player::animation::CharacterAnimations;
    use crate::registry::camera::CameraConfig;
    use crate::registry::level::{LevelConfig, SolidDef};
    use crate::registry::player::PlayerConfig;

    pub fn test_player_config() -> PlayerConfig {
        PlayerConfig {
            speed: 200.0,
            jump_velocity: 500.0,
            gravity: 980.0,
            width: 24.0,
            height: 40.0,
            start_x: -10.0,
            target_x: -7.0,
        }
    }

    pub fn test_camera_config() -> CameraConfig {
        CameraConfig {
            offset: Vec3::new(0.0, 2.0, 0.0),
            smooth_speed: 5.0,
            min_pos: Vec2::new(-1000.0, -500.0),
            max_pos: Vec2::new(1000.0, 500.0),
        }
    }

    /// One flat ground slab with its surface at y = 0, spanning x in
    /// [-1000, 1000].
    pub fn test_level_config() -> LevelConfig {
        LevelConfig {
            spawn_y: 48.0,
            solids: vec![SolidDef {
                center: Vec2::new(0.0, -16.0),
                size: Vec2::new(2000.0, 32.0),
                ground: true,
            }],
        }
    }

    /// Frame-less animation set: exercises the degraded no-visuals path.
    pub fn test_animations() -> CharacterAnimations {
        CharacterAnimations {
            idle: vec![],
            running: vec![],
            jumping: vec![],
        }
    }

    /// Create a minimal Bevy App with gameplay resources for system tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(test_player_config());
        app.insert_resource(test_camera_config());
        app.insert_resource(Level::from_config(&test_level_config()));
        app.insert_resource(test_animations());
        app
    }
}
