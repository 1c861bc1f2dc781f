//! The game state machine and its per-frame pipeline.
//!
//! `World::step` is the only way time moves forward. It takes the actions
//! held this frame plus the elapsed seconds and returns what happened. No
//! wall clock, randomness or device state is read, so the same input
//! sequence always produces the same world.

use crate::arena::Arena;
use crate::collision::resolve_player_platforms;
use crate::config::GameConfig;
use crate::entity::{Entity, EntityKind, EntityTag};
use crate::event::{EventQueue, GameEvent, LifeLossCause};
use crate::fireball::Fireball;
use crate::interaction;
use crate::items::{BlockContents, QuestionBlock};
use crate::level::{self, LevelLayout};
use crate::particle::Particle;
use crate::player::{DamageOutcome, Player};
use crate::render;
use plat_core::geometry::Aabb;
use plat_core::input::{Action, InputSnapshot};
use plat_render::{Camera2D, RenderSurface};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    TimeUp,
    OutOfLives,
}

impl GameOverReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::TimeUp => "time's up",
            Self::OutOfLives => "out of lives",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum GameState {
    Playing,
    GameOver(GameOverReason),
    LevelComplete,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What one call to `World::step` did.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl FrameReport {
    pub fn has(&self, label: &str) -> bool {
        self.events.iter().any(|e| e.label() == label)
    }
}

pub type LevelBuilder = fn(&GameConfig) -> LevelLayout;

pub struct World {
    config: GameConfig,
    builder: LevelBuilder,
    player: Player,
    statics: Vec<Entity>,
    solids: Vec<Aabb>,
    actors: Arena<Entity>,
    camera: Camera2D,
    score: u32,
    lives: u32,
    timer: f32,
    level_number: u32,
    state: GameState,
    previous_input: InputSnapshot,
    pending: EventQueue<GameEvent>,
    applied: Vec<GameEvent>,
    frame: u64,
}

impl World {
    /// World 1-1 with the given tuning.
    pub fn new(config: GameConfig) -> Self {
        Self::with_level(config, level::build_classic)
    }

    /// A world built from an arbitrary layout. Restart rebuilds from the
    /// same builder.
    pub fn with_level(config: GameConfig, builder: LevelBuilder) -> Self {
        let layout = builder(&config);
        let solids = layout.solids();
        let mut camera = Camera2D::new(config.world.width, config.world.height);
        camera.smoothing = config.camera.smoothing;
        camera.lead_fraction = config.camera.lead_fraction;

        log::info!(
            "Level built: {} static, {} actors, {} solid",
            layout.statics.len(),
            layout.actors.live_count(),
            solids.len()
        );

        Self {
            player: Player::new(config.player),
            statics: layout.statics,
            solids,
            actors: layout.actors,
            camera,
            score: 0,
            lives: config.world.starting_lives,
            timer: config.world.time_limit,
            level_number: 1,
            state: GameState::Playing,
            previous_input: InputSnapshot::new(),
            pending: EventQueue::new(),
            applied: Vec::new(),
            frame: 0,
            builder,
            config,
        }
    }

    pub fn step(&mut self, input: &InputSnapshot, dt: f32) -> FrameReport {
        self.frame += 1;

        if self.state == GameState::Playing {
            self.simulate(input, dt);
        }
        if self.state.is_terminal() && input.is_held(Action::Restart) {
            self.restart();
        }

        self.previous_input = input.clone();
        FrameReport {
            frame: self.frame,
            state: self.state,
            events: std::mem::take(&mut self.applied),
        }
    }

    /// Fresh level, score, lives and timer. The frame counter keeps running.
    pub fn restart(&mut self) {
        let frame = self.frame;
        let previous_input = std::mem::take(&mut self.previous_input);
        *self = World::with_level(self.config.clone(), self.builder);
        self.frame = frame;
        self.previous_input = previous_input;
        self.applied.push(GameEvent::Restarted);
        log::info!("Restarted at frame {}", frame);
    }

    fn simulate(&mut self, input: &InputSnapshot, dt: f32) {
        self.handle_input(input);
        self.tick_timer(dt);
        if self.state.is_terminal() {
            return;
        }
        self.integrate(dt);

        let contacts = resolve_player_platforms(&mut self.player, &self.solids);
        log::trace!("Player contacts: {:?}", contacts);

        interaction::run_rules(
            &mut self.player,
            &mut self.actors,
            &self.config,
            &mut self.pending,
        );
        self.apply_pending();
        self.actors.compact();

        self.check_bounds();
        self.camera.follow(self.player.x);
    }

    fn handle_input(&mut self, input: &InputSnapshot) {
        let left = input.is_held(Action::Left);
        let right = input.is_held(Action::Right);

        self.player.running = input.is_held(Action::Run);
        if left && !right {
            self.player.move_horizontal(-1.0);
        } else if right && !left {
            self.player.move_horizontal(1.0);
        } else {
            self.player.apply_friction();
        }

        if input.is_held(Action::Jump) {
            self.player.buffer_jump();
        }
        self.player.try_jump();
        if input.released_since(&self.previous_input, Action::Jump) {
            self.player.cut_jump();
        }

        if input.pressed_since(&self.previous_input, Action::Fire) && self.player.can_shoot() {
            self.shoot();
        }
    }

    fn shoot(&mut self) {
        let alive = self.count(EntityTag::Fireball);
        if alive >= self.config.fireball.max_alive {
            log::debug!("Fireball rejected: {} already in flight", alive);
            self.applied.push(GameEvent::FireballRejected);
            return;
        }
        let (body, fireball) = Fireball::launch(
            &self.player.bounds(),
            self.player.facing_right,
            &self.config.fireball,
        );
        self.actors.insert(Entity::fireball(body, fireball));
        self.applied.push(GameEvent::FireballLaunched);
    }

    fn tick_timer(&mut self, dt: f32) {
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = 0.0;
            self.finish(GameState::GameOver(GameOverReason::TimeUp));
        }
    }

    fn integrate(&mut self, dt: f32) {
        self.player.tick_timers(dt);
        self.player.integrate(self.config.world.gravity);

        for (_, entity) in self.actors.iter_mut() {
            if entity.tag().updates() {
                entity.update(&self.solids, &self.config, dt);
            }
        }

        let expired: Vec<usize> = self
            .actors
            .iter()
            .filter(|(_, e)| e.is_expired())
            .map(|(i, _)| i)
            .collect();
        for id in expired {
            self.actors.mark_removed(id);
        }
    }

    fn apply_pending(&mut self) {
        let pending: Vec<GameEvent> = self.pending.drain().collect();
        for event in pending {
            log::debug!("{}: {:?}", event.label(), event);
            self.applied.push(event.clone());
            self.apply(event);
        }
    }

    fn apply(&mut self, event: GameEvent) {
        let scoring = self.config.scoring;
        match event {
            GameEvent::EnemyStomped { x, y } => self.award(scoring.stomp, x, y),
            GameEvent::EnemyBurned { x, y } => self.award(scoring.fireball_kill, x, y),
            GameEvent::BlockHit { block, contents } => {
                let spark = Particle::hit_spark(&self.config.items);
                self.actors
                    .insert(Entity::particle(block.center_x(), block.y, spark));
                match contents {
                    BlockContents::Coin => {
                        self.award(scoring.coin_block, block.center_x(), block.y)
                    }
                    BlockContents::PowerUp(kind) => {
                        let y = block.y - self.config.items.power_up_size;
                        self.actors
                            .insert(Entity::power_up(block.x, y, kind, &self.config));
                    }
                }
            }
            GameEvent::PowerUpCollected { kind, x, y } => {
                self.award(scoring.power_up, x, y);
                let from = self.player.power();
                if let Some(to) = self.player.collect(kind) {
                    self.applied.push(GameEvent::PowerChanged { from, to });
                }
            }
            GameEvent::CoinCollected { x, y } => self.award(scoring.coin, x, y),
            GameEvent::PlayerDamaged => match self.player.hurt() {
                Some(DamageOutcome::Downgraded { from, to }) => {
                    self.applied.push(GameEvent::PowerChanged { from, to });
                }
                Some(DamageOutcome::LifeLost) => self.lose_life(LifeLossCause::Enemy),
                None => {}
            },
            other => log::warn!("Ignoring non-deferred event {:?}", other),
        }
    }

    fn award(&mut self, points: u32, x: f32, y: f32) {
        self.score = self.score.saturating_add(points);
        let popup = Particle::score(points, &self.config.items);
        self.actors.insert(Entity::particle(x, y, popup));
    }

    fn lose_life(&mut self, cause: LifeLossCause) {
        self.lives = self.lives.saturating_sub(1);
        self.applied.push(GameEvent::LifeLost {
            remaining: self.lives,
            cause,
        });
        if self.lives == 0 {
            self.finish(GameState::GameOver(GameOverReason::OutOfLives));
        } else {
            log::info!("Life lost ({:?}), {} remaining", cause, self.lives);
            self.player.respawn();
        }
    }

    fn check_bounds(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        if self.player.x >= self.config.world.level_end_x {
            self.finish(GameState::LevelComplete);
        } else if self.player.y > self.config.world.fall_limit() {
            self.lose_life(LifeLossCause::Fell);
        }
    }

    /// Enters a terminal state. Only the first transition out of `Playing`
    /// counts.
    fn finish(&mut self, state: GameState) {
        if self.state != GameState::Playing {
            return;
        }
        self.state = state;
        match state {
            GameState::GameOver(reason) => {
                log::info!("Game over: {} (score {})", reason.label(), self.score);
                self.applied.push(GameEvent::GameOver { reason });
            }
            GameState::LevelComplete => {
                log::info!("Level complete (score {})", self.score);
                self.applied.push(GameEvent::LevelComplete);
            }
            GameState::Playing => {}
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access for drivers and tests that need to stage a situation.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn statics(&self) -> &[Entity] {
        &self.statics
    }

    pub fn actors(&self) -> impl Iterator<Item = &Entity> {
        self.actors.iter().map(|(_, e)| e)
    }

    pub fn count(&self, tag: EntityTag) -> usize {
        self.actors().filter(|e| e.tag() == tag).count()
    }

    pub fn question_blocks(&self) -> impl Iterator<Item = &QuestionBlock> {
        self.actors().filter_map(|e| match &e.kind {
            EntityKind::QuestionBlock(block) => Some(block),
            _ => None,
        })
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Seconds left on the countdown, never negative.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Describe the current frame. Reads state only.
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        render::draw_world(self, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PlatformKind;
    use crate::items::PowerUpKind;
    use crate::particle::ParticleKind;
    use crate::player::PowerState;

    const DT: f32 = 1.0 / 60.0;

    fn idle() -> InputSnapshot {
        InputSnapshot::new()
    }

    fn hold(actions: &[Action]) -> InputSnapshot {
        InputSnapshot::from_actions(actions)
    }

    fn flat(_: &GameConfig) -> LevelLayout {
        LevelLayout::new().with_static(Entity::platform(
            Aabb::new(0.0, 568.0, 3000.0, 32.0),
            PlatformKind::Ground,
        ))
    }

    fn flat_with_goomba(config: &GameConfig) -> LevelLayout {
        flat(config).with_actor(Entity::goomba(400.0, 544.0, config))
    }

    fn flat_with_block(config: &GameConfig) -> LevelLayout {
        flat(config).with_actor(Entity::question_block(
            300.0,
            526.0,
            BlockContents::PowerUp(crate::items::PowerUpKind::Mushroom),
            config,
        ))
    }

    fn settle(world: &mut World) {
        for _ in 0..120 {
            world.step(&idle(), DT);
        }
    }

    #[test]
    fn fresh_world_starts_at_spawn() {
        let world = World::new(GameConfig::default());
        assert_eq!((world.player().x, world.player().y), (100.0, 400.0));
        assert_eq!(world.player().power(), PowerState::Small);
        assert_eq!(world.lives(), 3);
        assert_eq!(world.score(), 0);
        assert_eq!(world.timer(), 60.0);
        assert_eq!(world.state(), GameState::Playing);
        assert_eq!(world.count(EntityTag::Goomba), 2);
    }

    #[test]
    fn player_falls_and_lands_on_ground() {
        let mut world = World::with_level(GameConfig::default(), flat);
        settle(&mut world);
        assert!(world.player().grounded);
        assert_eq!(world.player().bounds().bottom(), 568.0);
    }

    #[test]
    fn walking_right_speeds_up_to_cap() {
        let mut world = World::with_level(GameConfig::default(), flat);
        let right = hold(&[Action::Right]);
        let mut last_x = world.player().x;
        for _ in 0..120 {
            world.step(&right, DT);
            let x = world.player().x;
            assert!(x > last_x, "x should keep increasing");
            assert!(world.player().vel_x <= 1.8 + 1e-5);
            last_x = x;
        }
        assert!((world.player().vel_x - 1.8).abs() < 1e-5);
    }

    #[test]
    fn jump_launches_from_ground_and_release_cuts_it() {
        let mut world = World::with_level(GameConfig::default(), flat);
        settle(&mut world);

        world.step(&hold(&[Action::Jump]), DT);
        // Launch at -9, then one frame of gravity.
        assert!((world.player().vel_y + 8.6).abs() < 1e-5);

        world.step(&idle(), DT);
        // -8.6 halved, then gravity.
        assert!((world.player().vel_y + 4.3 - 0.4).abs() < 1e-4);
    }

    #[test]
    fn stomping_a_goomba_scores_and_bounces() {
        let mut world = World::new(GameConfig::default());
        {
            let player = world.player_mut();
            player.x = 700.0;
            player.y = 510.0;
            player.vel_y = 3.0;
        }
        let report = world.step(&idle(), DT);

        assert!(report.has("enemy stomped"));
        assert_eq!(world.count(EntityTag::Goomba), 1);
        assert_eq!(world.score(), 100);
        assert_eq!(world.player().vel_y, -8.0);
        assert_eq!(world.count(EntityTag::Particle), 1);
    }

    #[test]
    fn damage_steps_down_power_ladder() {
        let mut world = World::with_level(GameConfig::default(), flat_with_goomba);
        {
            let player = world.player_mut();
            player.set_power(PowerState::Big);
            player.x = 400.0;
            player.y = 530.0;
            player.vel_y = -3.0;
        }
        let report = world.step(&idle(), DT);

        assert!(report.events.contains(&GameEvent::PowerChanged {
            from: PowerState::Big,
            to: PowerState::Small
        }));
        assert_eq!(world.player().power(), PowerState::Small);
        assert_eq!(world.player().invincibility, 2.0);
        assert_eq!(world.lives(), 3);
        assert_eq!(world.count(EntityTag::Goomba), 1);
    }

    #[test]
    fn small_player_hit_loses_life_and_respawns() {
        let mut world = World::with_level(GameConfig::default(), flat_with_goomba);
        {
            let player = world.player_mut();
            player.x = 400.0;
            player.y = 540.0;
            player.vel_y = -3.0;
        }
        let report = world.step(&idle(), DT);

        assert!(report.events.contains(&GameEvent::LifeLost {
            remaining: 2,
            cause: LifeLossCause::Enemy
        }));
        assert_eq!(world.lives(), 2);
        assert_eq!((world.player().x, world.player().y), (100.0, 400.0));
        assert!(world.player().is_invincible());
        assert_eq!(world.state(), GameState::Playing);
    }

    #[test]
    fn falling_out_of_the_world_costs_lives_until_game_over() {
        let mut world = World::with_level(GameConfig::default(), flat);
        for remaining in [2, 1] {
            world.player_mut().y = 800.0;
            let report = world.step(&idle(), DT);
            assert!(report.events.contains(&GameEvent::LifeLost {
                remaining,
                cause: LifeLossCause::Fell
            }));
            assert_eq!(world.state(), GameState::Playing);
        }
        world.player_mut().y = 800.0;
        let report = world.step(&idle(), DT);
        assert_eq!(world.lives(), 0);
        assert_eq!(
            report.state,
            GameState::GameOver(GameOverReason::OutOfLives)
        );
    }

    #[test]
    fn timer_running_out_ends_the_game() {
        let mut world = World::new(GameConfig::default());
        for _ in 0..239 {
            world.step(&idle(), 0.25);
        }
        assert_eq!(world.state(), GameState::Playing);

        let report = world.step(&idle(), 0.25);
        assert_eq!(world.state(), GameState::GameOver(GameOverReason::TimeUp));
        assert!(report.events.contains(&GameEvent::GameOver {
            reason: GameOverReason::TimeUp
        }));
        assert_eq!(world.timer(), 0.0);
    }

    #[test]
    fn level_complete_fires_exactly_once() {
        let mut world = World::new(GameConfig::default());
        {
            let player = world.player_mut();
            player.x = 1490.0;
            player.y = 536.0;
        }
        let right = hold(&[Action::Right]);
        let mut completions = 0;
        for _ in 0..200 {
            let report = world.step(&right, DT);
            completions += report
                .events
                .iter()
                .filter(|e| **e == GameEvent::LevelComplete)
                .count();
        }
        assert_eq!(completions, 1);
        assert_eq!(world.state(), GameState::LevelComplete);
    }

    #[test]
    fn terminal_state_freezes_the_simulation() {
        let mut world = World::with_level(GameConfig::default(), flat);
        world.step(&idle(), 61.0);
        let x = world.player().x;
        let y = world.player().y;
        for _ in 0..10 {
            let report = world.step(&hold(&[Action::Right]), DT);
            assert!(report.events.is_empty());
        }
        assert_eq!((world.player().x, world.player().y), (x, y));
    }

    #[test]
    fn timeout_frame_stops_before_enemy_contact() {
        let mut world = World::with_level(GameConfig::default(), flat_with_goomba);
        {
            let player = world.player_mut();
            player.x = 400.0;
            player.y = 540.0;
            player.vel_y = -3.0;
        }
        let report = world.step(&idle(), 60.0);

        assert_eq!(world.state(), GameState::GameOver(GameOverReason::TimeUp));
        assert_eq!(
            report.events,
            vec![GameEvent::GameOver {
                reason: GameOverReason::TimeUp
            }]
        );
        assert_eq!(world.lives(), 3);
        assert_eq!((world.player().x, world.player().y), (400.0, 540.0));
        assert_eq!(world.count(EntityTag::Goomba), 1);
    }

    fn flower_then_star(config: &GameConfig) -> LevelLayout {
        flat(config)
            .with_actor(Entity::power_up(100.0, 440.0, PowerUpKind::FireFlower, config))
            .with_actor(Entity::power_up(100.0, 510.0, PowerUpKind::Star, config))
    }

    fn step_until_pickup(world: &mut World) -> FrameReport {
        for _ in 0..120 {
            let report = world.step(&idle(), DT);
            if report.has("power-up collected") {
                return report;
            }
        }
        panic!("no power-up collected");
    }

    #[test]
    fn power_up_pickups_score_and_take_effect() {
        let mut world = World::with_level(GameConfig::default(), flower_then_star);

        let report = step_until_pickup(&mut world);
        assert_eq!(world.score(), 1000);
        assert_eq!(world.player().power(), PowerState::Fire);
        assert!(report.events.contains(&GameEvent::PowerChanged {
            from: PowerState::Small,
            to: PowerState::Fire
        }));
        let popups = world
            .actors()
            .filter(|e| match &e.kind {
                EntityKind::Particle(p) => p.kind == ParticleKind::Score("1000".to_string()),
                _ => false,
            })
            .count();
        assert_eq!(popups, 1);
        assert_eq!(world.count(EntityTag::PowerUp), 1);

        step_until_pickup(&mut world);
        assert_eq!(world.score(), 2000);
        assert_eq!(world.player().power(), PowerState::Fire);
        assert!((world.player().invincibility - 10.0).abs() < 1e-6);
        assert_eq!(world.count(EntityTag::PowerUp), 0);
        assert_eq!(world.lives(), 3);
    }

    #[test]
    fn restart_after_game_over_rebuilds_everything() {
        let mut world = World::new(GameConfig::default());
        {
            let player = world.player_mut();
            player.x = 245.0;
            player.y = 536.0;
        }
        world.step(&idle(), DT);
        assert_eq!(world.score(), 200);
        assert_eq!(world.count(EntityTag::Coin), 3);

        {
            let player = world.player_mut();
            player.x = 504.0;
            player.y = 536.0;
            player.vel_y = 0.0;
        }
        world.step(&idle(), DT);
        assert_eq!(world.question_blocks().filter(|b| b.used).count(), 1);

        world.step(&idle(), 61.0);
        assert!(world.state().is_terminal());

        let report = world.step(&hold(&[Action::Restart]), DT);
        assert!(report.events.contains(&GameEvent::Restarted));
        assert_eq!(world.state(), GameState::Playing);
        assert_eq!(world.score(), 0);
        assert_eq!(world.lives(), 3);
        assert_eq!(world.timer(), 60.0);
        assert_eq!(world.question_blocks().count(), 2);
        assert!(world.question_blocks().all(|b| !b.used));
        assert_eq!(world.count(EntityTag::Coin), 4);
        assert_eq!(world.count(EntityTag::PowerUp), 0);
        assert_eq!(world.player().power(), PowerState::Small);
    }

    #[test]
    fn restart_is_ignored_while_playing() {
        let mut world = World::new(GameConfig::default());
        world.step(&idle(), DT);
        let report = world.step(&hold(&[Action::Restart]), DT);
        assert!(!report.events.contains(&GameEvent::Restarted));
        assert!(world.timer() < 60.0);
    }

    #[test]
    fn block_spawns_power_up_only_once() {
        let mut world = World::with_level(GameConfig::default(), flat_with_block);
        for _ in 0..30 {
            {
                let player = world.player_mut();
                player.x = 304.0;
                player.y = 536.0;
                player.vel_y = 0.0;
            }
            world.step(&idle(), DT);
        }
        assert_eq!(world.question_blocks().filter(|b| b.used).count(), 1);
        assert_eq!(world.count(EntityTag::PowerUp), 1);
    }

    #[test]
    fn coin_block_awards_points_without_spawning() {
        fn coin_block(config: &GameConfig) -> LevelLayout {
            flat(config).with_actor(Entity::question_block(
                300.0,
                526.0,
                BlockContents::Coin,
                config,
            ))
        }
        let mut world = World::with_level(GameConfig::default(), coin_block);
        {
            let player = world.player_mut();
            player.x = 304.0;
            player.y = 536.0;
        }
        let report = world.step(&idle(), DT);
        assert!(report.has("block hit"));
        assert_eq!(world.score(), 200);
        assert_eq!(world.count(EntityTag::PowerUp), 0);
        // Score popup plus hit spark.
        assert_eq!(world.count(EntityTag::Particle), 2);
        assert_eq!(world.player().vel_y, 2.0);
    }

    #[test]
    fn fireball_cap_holds_until_one_expires() {
        let mut world = World::with_level(GameConfig::default(), flat);
        world.player_mut().set_power(PowerState::Fire);
        let fire = hold(&[Action::Fire]);

        let mut launched = 0;
        let mut rejected = 0;
        for input in [&fire, &idle(), &fire, &idle(), &fire] {
            let report = world.step(input, DT);
            for event in &report.events {
                match event {
                    GameEvent::FireballLaunched => launched += 1,
                    GameEvent::FireballRejected => rejected += 1,
                    _ => {}
                }
            }
        }
        assert_eq!(launched, 2);
        assert_eq!(rejected, 1);
        assert_eq!(world.count(EntityTag::Fireball), 2);

        // Holding fire never repeats.
        world.step(&fire, DT);
        assert_eq!(world.count(EntityTag::Fireball), 2);

        world.step(&idle(), 5.0);
        assert_eq!(world.count(EntityTag::Fireball), 0);

        let report = world.step(&fire, DT);
        assert!(report.events.contains(&GameEvent::FireballLaunched));
        assert_eq!(world.count(EntityTag::Fireball), 1);
    }

    #[test]
    fn small_player_cannot_shoot() {
        let mut world = World::with_level(GameConfig::default(), flat);
        let report = world.step(&hold(&[Action::Fire]), DT);
        assert!(report.events.is_empty());
        assert_eq!(world.count(EntityTag::Fireball), 0);
    }

    #[test]
    fn fireball_kills_goomba_for_points() {
        let mut world = World::with_level(GameConfig::default(), flat_with_goomba);
        {
            let player = world.player_mut();
            player.set_power(PowerState::Fire);
            player.x = 300.0;
            player.y = 520.0;
            player.invincibility = 10.0;
        }
        world.step(&hold(&[Action::Fire]), DT);
        let mut burned = false;
        for _ in 0..60 {
            let report = world.step(&idle(), DT);
            burned |= report.has("enemy burned");
        }
        assert!(burned);
        assert_eq!(world.count(EntityTag::Goomba), 0);
        assert_eq!(world.score(), 200);
    }

    #[test]
    fn camera_follows_player_right() {
        let mut world = World::with_level(GameConfig::default(), flat);
        world.player_mut().x = 1000.0;
        world.player_mut().y = 536.0;
        world.step(&idle(), DT);
        assert!(world.camera().position.x > 0.0);
    }
}
