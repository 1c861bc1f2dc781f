//! Level construction.

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::entity::{Entity, PlatformKind};
use crate::items::{BlockContents, PowerUpKind};
use plat_core::geometry::Aabb;

/// Everything a level starts with. `statics` never changes after
/// construction; `actors` is the live entity list.
#[derive(Debug, Clone, Default)]
pub struct LevelLayout {
    pub statics: Vec<Entity>,
    pub actors: Arena<Entity>,
}

impl LevelLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static(mut self, entity: Entity) -> Self {
        self.statics.push(entity);
        self
    }

    pub fn with_actor(mut self, entity: Entity) -> Self {
        self.actors.insert(entity);
        self
    }

    /// Boxes the player, enemies and projectiles collide with, in the order
    /// collisions are resolved.
    pub fn solids(&self) -> Vec<Aabb> {
        self.statics
            .iter()
            .filter(|e| e.is_solid_platform())
            .map(|e| e.body)
            .collect()
    }
}

pub const GROUND_TILES: u32 = 60;
pub const BRICK_COUNT: u32 = 4;

/// World 1-1.
///
/// The ground row and the brick row each collide as one platform spanning
/// all of their tiles, so there are no seams to catch on. The renderer still
/// draws the individual tiles.
pub fn build_classic(config: &GameConfig) -> LevelLayout {
    let tile = config.world.tile_size;
    let ground_y = config.world.height as f32 - tile;

    let layout = LevelLayout::new()
        .with_static(Entity::platform(
            Aabb::new(0.0, ground_y, tile * GROUND_TILES as f32, tile),
            PlatformKind::Ground,
        ))
        .with_static(Entity::platform(
            Aabb::new(300.0, ground_y - 2.0 * tile, tile * BRICK_COUNT as f32, 16.0),
            PlatformKind::Brick,
        ))
        .with_static(Entity::platform(
            Aabb::new(600.0, ground_y - 3.0 * tile, 96.0, 20.0),
            PlatformKind::Ground,
        ))
        .with_static(Entity::pipe(Aabb::new(1400.0, ground_y - 2.0 * tile, 64.0, 64.0)));

    let enemy_y = ground_y - config.enemy.size;
    let coin_y = ground_y - 30.0;

    layout
        .with_actor(Entity::question_block(
            350.0,
            470.0,
            BlockContents::PowerUp(PowerUpKind::Mushroom),
            config,
        ))
        .with_actor(Entity::question_block(
            500.0,
            526.0,
            BlockContents::PowerUp(PowerUpKind::FireFlower),
            config,
        ))
        .with_actor(Entity::goomba(400.0, enemy_y, config))
        .with_actor(Entity::goomba(700.0, enemy_y, config))
        .with_actor(Entity::coin(250.0, coin_y, config))
        .with_actor(Entity::coin(280.0, coin_y, config))
        .with_actor(Entity::coin(1300.0, coin_y, config))
        .with_actor(Entity::coin(1330.0, coin_y, config))
}
