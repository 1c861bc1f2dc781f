//! Gameplay tuning. Every value has a built-in default; a JSON file may
//! override any subset of them. Keep runtime concerns (pacing, logging) out of
//! here.
//!
//! All speeds are in world units per frame, all timers in seconds.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldTuning,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub fireball: FireballTuning,
    pub items: ItemTuning,
    pub scoring: ScoreTable,
    pub camera: CameraTuning,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct WorldTuning {
    pub width: u32,
    pub height: u32,
    pub gravity: f32,
    pub tile_size: f32,
    pub time_limit: f32,
    pub level_end_x: f32,
    /// How far below the bottom edge the player may fall before losing a life.
    pub fall_margin: f32,
    pub starting_lives: u32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            gravity: 0.4,
            tile_size: 32.0,
            time_limit: 60.0,
            level_end_x: 1500.0,
            fall_margin: 100.0,
            starting_lives: 3,
        }
    }
}

impl WorldTuning {
    pub fn fall_limit(&self) -> f32 {
        self.height as f32 + self.fall_margin
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct PlayerTuning {
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub small_size: (f32, f32),
    pub big_size: (f32, f32),
    pub walk_accel: f32,
    pub walk_max_speed: f32,
    pub run_accel: f32,
    pub run_max_speed: f32,
    pub ground_friction: f32,
    pub air_friction: f32,
    /// Horizontal speeds below this snap to zero while coasting.
    pub stop_epsilon: f32,
    pub terminal_velocity: f32,
    pub walk_jump_speed: f32,
    pub run_jump_speed: f32,
    pub jump_buffer: f32,
    /// Releasing jump while rising faster than this halves the ascent.
    pub jump_cut_threshold: f32,
    pub jump_cut_factor: f32,
    pub head_bump_speed: f32,
    pub stomp_bounce: f32,
    pub stomp_margin: f32,
    pub block_bounce: f32,
    pub damage_invincibility: f32,
    pub star_invincibility: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            spawn_x: 100.0,
            spawn_y: 400.0,
            small_size: (24.0, 32.0),
            big_size: (32.0, 48.0),
            walk_accel: 0.1,
            walk_max_speed: 1.8,
            run_accel: 0.15,
            run_max_speed: 2.5,
            ground_friction: 0.85,
            air_friction: 0.95,
            stop_epsilon: 0.1,
            terminal_velocity: 12.0,
            walk_jump_speed: 9.0,
            run_jump_speed: 12.0,
            jump_buffer: 0.1,
            jump_cut_threshold: 2.0,
            jump_cut_factor: 0.5,
            head_bump_speed: 1.0,
            stomp_bounce: 8.0,
            stomp_margin: 5.0,
            block_bounce: 2.0,
            damage_invincibility: 2.0,
            star_invincibility: 10.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct EnemyTuning {
    pub size: f32,
    pub speed: f32,
    /// Maximum distance from the spawn x before the patrol turns back.
    pub leash: f32,
    /// Vertical slack when deciding whether the feet rest on a platform.
    pub rest_tolerance: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: 24.0,
            speed: 1.0,
            leash: 200.0,
            rest_tolerance: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct FireballTuning {
    pub size: f32,
    pub speed: f32,
    pub launch_speed: f32,
    pub bounce_speed: f32,
    pub lifetime: f32,
    pub max_alive: usize,
    pub min_x: f32,
    pub max_x: f32,
}

impl Default for FireballTuning {
    fn default() -> Self {
        Self {
            size: 8.0,
            speed: 6.0,
            launch_speed: 2.0,
            bounce_speed: 4.0,
            lifetime: 5.0,
            max_alive: 2,
            min_x: -100.0,
            max_x: 2000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct ItemTuning {
    pub coin_size: f32,
    pub power_up_size: f32,
    pub block_size: f32,
    pub mushroom_speed: f32,
    pub mushroom_pop_speed: f32,
    /// Mushrooms fall under a fraction of world gravity.
    pub mushroom_gravity_scale: f32,
    pub score_particle_life: f32,
    pub score_particle_rise: f32,
    pub spark_particle_life: f32,
    pub spark_particle_rise: f32,
}

impl Default for ItemTuning {
    fn default() -> Self {
        Self {
            coin_size: 16.0,
            power_up_size: 24.0,
            block_size: 32.0,
            mushroom_speed: 2.0,
            mushroom_pop_speed: 4.0,
            mushroom_gravity_scale: 0.5,
            score_particle_life: 1.5,
            score_particle_rise: 2.0,
            spark_particle_life: 0.5,
            spark_particle_rise: 4.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct ScoreTable {
    pub stomp: u32,
    pub fireball_kill: u32,
    pub coin: u32,
    pub coin_block: u32,
    pub power_up: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            stomp: 100,
            fireball_kill: 200,
            coin: 200,
            coin_block: 200,
            power_up: 1000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct CameraTuning {
    pub smoothing: f32,
    pub lead_fraction: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            lead_fraction: 1.0 / 3.0,
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<GameConfig, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &GameConfig) -> Result<(), String> {
    let world = &config.world;
    if world.width == 0 || world.height == 0 {
        return Err("Config validation failed: world width and height must be > 0".to_string());
    }
    if world.gravity <= 0.0 {
        return Err("Config validation failed: gravity must be > 0".to_string());
    }
    if world.time_limit <= 0.0 {
        return Err("Config validation failed: time_limit must be > 0".to_string());
    }
    if world.starting_lives == 0 {
        return Err("Config validation failed: starting_lives must be >= 1".to_string());
    }

    let player = &config.player;
    if player.walk_max_speed <= 0.0 || player.run_max_speed <= 0.0 {
        return Err("Config validation failed: player max speeds must be > 0".to_string());
    }
    if player.walk_max_speed > player.run_max_speed {
        return Err(
            "Config validation failed: walk_max_speed must not exceed run_max_speed".to_string(),
        );
    }
    if player.damage_invincibility < 0.0
        || player.star_invincibility < 0.0
        || player.jump_buffer < 0.0
    {
        return Err("Config validation failed: player timers must be >= 0".to_string());
    }
    for (w, h) in [player.small_size, player.big_size] {
        if w <= 0.0 || h <= 0.0 {
            return Err("Config validation failed: player sizes must be > 0".to_string());
        }
    }

    if config.enemy.size <= 0.0 || config.enemy.leash <= 0.0 {
        return Err("Config validation failed: enemy size and leash must be > 0".to_string());
    }
    if config.fireball.max_alive == 0 {
        return Err("Config validation failed: fireball max_alive must be >= 1".to_string());
    }
    if config.fireball.lifetime <= 0.0 || config.fireball.size <= 0.0 {
        return Err("Config validation failed: fireball lifetime and size must be > 0".to_string());
    }
    if !(0.0..=1.0).contains(&config.camera.smoothing) {
        return Err("Config validation failed: camera smoothing must be within 0..=1".to_string());
    }
    if config.camera.smoothing == 0.0 {
        log::warn!("Camera smoothing is 0; the camera will never move.");
    }
    if world.level_end_x >= config.fireball.max_x {
        log::warn!(
            "level_end_x ({}) lies beyond the fireball bounds ({}).",
            world.level_end_x,
            config.fireball.max_x
        );
    }
    Ok(())
}
