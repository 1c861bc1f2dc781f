//! Entity-pair rules, run once per frame after platform resolution and in
//! this order: player/enemy, fireball/enemy, player/block, player/power-up,
//! player/coin.
//!
//! Rules may change the player's velocity directly and mark entities for
//! removal, but every other consequence goes through the event queue.

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::entity::{Entity, EntityKind, EntityTag};
use crate::event::{EventQueue, GameEvent};
use crate::player::Player;

pub fn run_rules(
    player: &mut Player,
    actors: &mut Arena<Entity>,
    config: &GameConfig,
    events: &mut EventQueue<GameEvent>,
) {
    player_vs_enemies(player, actors, config, events);
    fireballs_vs_enemies(actors, events);
    player_vs_blocks(player, actors, config, events);
    player_vs_power_ups(player, actors, events);
    player_vs_coins(player, actors, events);
}

fn ids_of(actors: &Arena<Entity>, tag: EntityTag) -> Vec<usize> {
    actors
        .iter()
        .filter(|(_, e)| e.tag() == tag)
        .map(|(i, _)| i)
        .collect()
}

fn player_vs_enemies(
    player: &mut Player,
    actors: &mut Arena<Entity>,
    config: &GameConfig,
    events: &mut EventQueue<GameEvent>,
) {
    if player.is_invincible() {
        return;
    }
    let mut damaged = false;
    for id in ids_of(actors, EntityTag::Goomba) {
        let Some(entity) = actors.get_mut(id) else {
            continue;
        };
        let EntityKind::Goomba(goomba) = &mut entity.kind else {
            continue;
        };
        let bounds = player.bounds();
        if !goomba.alive || !bounds.intersects(&entity.body) {
            continue;
        }

        let from_above = bounds.y < entity.body.center_y() - config.player.stomp_margin;
        if player.vel_y >= 0.0 && from_above {
            goomba.alive = false;
            let (x, y) = (entity.body.x, entity.body.y);
            actors.mark_removed(id);
            player.vel_y = -config.player.stomp_bounce;
            events.send(GameEvent::EnemyStomped { x, y });
        } else if !damaged {
            // At most one hit per frame.
            damaged = true;
            events.send(GameEvent::PlayerDamaged);
        }
    }
}

fn fireballs_vs_enemies(actors: &mut Arena<Entity>, events: &mut EventQueue<GameEvent>) {
    let enemies = ids_of(actors, EntityTag::Goomba);
    for fireball_id in ids_of(actors, EntityTag::Fireball) {
        let Some(fireball) = actors.get(fireball_id) else {
            continue;
        };
        let shot = fireball.body;

        for &enemy_id in &enemies {
            let Some(enemy) = actors.get_mut(enemy_id) else {
                continue;
            };
            if !shot.intersects(&enemy.body) {
                continue;
            }
            if let EntityKind::Goomba(goomba) = &mut enemy.kind {
                goomba.alive = false;
            }
            let (x, y) = (enemy.body.x, enemy.body.y);
            actors.mark_removed(enemy_id);
            if let Some(Entity {
                kind: EntityKind::Fireball(ball),
                ..
            }) = actors.get_mut(fireball_id)
            {
                ball.dead = true;
            }
            actors.mark_removed(fireball_id);
            events.send(GameEvent::EnemyBurned { x, y });
            break;
        }
    }
}

fn player_vs_blocks(
    player: &mut Player,
    actors: &mut Arena<Entity>,
    config: &GameConfig,
    events: &mut EventQueue<GameEvent>,
) {
    for id in ids_of(actors, EntityTag::QuestionBlock) {
        let Some(entity) = actors.get_mut(id) else {
            continue;
        };
        let EntityKind::QuestionBlock(block) = &mut entity.kind else {
            continue;
        };
        let bounds = player.bounds();
        if block.used || !bounds.intersects(&entity.body) {
            continue;
        }
        // Any contact while not falling counts, as long as the head is above
        // the block's underside.
        if player.vel_y <= 0.0 && bounds.y < entity.body.bottom() {
            if let Some(contents) = block.hit() {
                player.vel_y = config.player.block_bounce;
                events.send(GameEvent::BlockHit {
                    block: entity.body,
                    contents,
                });
            }
        }
    }
}

fn player_vs_power_ups(
    player: &Player,
    actors: &mut Arena<Entity>,
    events: &mut EventQueue<GameEvent>,
) {
    for id in ids_of(actors, EntityTag::PowerUp) {
        let Some(entity) = actors.get(id) else {
            continue;
        };
        let EntityKind::PowerUp(power_up) = &entity.kind else {
            continue;
        };
        if !player.bounds().intersects(&entity.body) {
            continue;
        }
        let event = GameEvent::PowerUpCollected {
            kind: power_up.kind,
            x: entity.body.x,
            y: entity.body.y,
        };
        actors.mark_removed(id);
        events.send(event);
    }
}

fn player_vs_coins(
    player: &Player,
    actors: &mut Arena<Entity>,
    events: &mut EventQueue<GameEvent>,
) {
    for id in ids_of(actors, EntityTag::Coin) {
        let Some(entity) = actors.get(id) else {
            continue;
        };
        if !player.bounds().intersects(&entity.body) {
            continue;
        }
        let (x, y) = (entity.body.x, entity.body.y);
        actors.mark_removed(id);
        events.send(GameEvent::CoinCollected { x, y });
    }
}
