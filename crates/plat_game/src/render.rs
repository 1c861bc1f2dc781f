//! Turns a world into draw commands. Nothing here feeds back into the
//! simulation.

use crate::entity::{Entity, EntityKind, EntityTag, PlatformKind};
use crate::hud::Hud;
use crate::items::{Coin, PowerUp, PowerUpKind, QuestionBlock};
use crate::particle::{Particle, ParticleKind};
use crate::player::{Player, PowerState};
use crate::world::World;
use glam::Vec2;
use plat_core::geometry::Aabb;
use plat_render::{Color, RenderSurface, Translated};

/// Sky, then the scrolled scene back to front, then the HUD on top.
pub fn draw_world(world: &World, surface: &mut dyn RenderSurface) {
    let tuning = world.config().world;
    let viewport = (tuning.width, tuning.height);
    surface.fill_rect(
        Aabb::new(0.0, 0.0, viewport.0 as f32, viewport.1 as f32),
        Color::LIGHT_BLUE,
    );

    {
        let mut scene = Translated::new(&mut *surface, world.camera().offset_x(), 0.0);
        for tag in EntityTag::DRAW_ORDER {
            let layer = world
                .statics()
                .iter()
                .chain(world.actors())
                .filter(|e| e.tag() == *tag);
            for entity in layer {
                draw_entity(entity, tuning.tile_size, &mut scene);
            }
        }
        draw_player(world.player(), &mut scene);
    }

    Hud::from_world(world).draw(surface, viewport);
}

pub fn draw_entity(entity: &Entity, tile_size: f32, surface: &mut dyn RenderSurface) {
    let body = entity.body;
    match &entity.kind {
        EntityKind::Platform { kind } => draw_platform(body, *kind, tile_size, surface),
        EntityKind::Pipe => draw_pipe(body, surface),
        EntityKind::Goomba(_) => draw_goomba(body, surface),
        EntityKind::Coin(coin) => draw_coin(body, coin, surface),
        EntityKind::PowerUp(power_up) => draw_power_up(body, power_up, surface),
        EntityKind::QuestionBlock(block) => draw_block(body, block, surface),
        EntityKind::Fireball(_) => {
            surface.fill_ellipse(body, Color::ORANGE);
            surface.fill_ellipse(inset(body, 1.0), Color::RED);
        }
        EntityKind::Particle(particle) => draw_particle(body, particle, surface),
    }
}

fn inset(rect: Aabb, by: f32) -> Aabb {
    Aabb::new(rect.x + by, rect.y + by, rect.w - 2.0 * by, rect.h - 2.0 * by)
}

/// Long platforms are drawn tile by tile.
fn tiles(body: Aabb, tile_size: f32) -> impl Iterator<Item = Aabb> {
    let step = if tile_size > 0.0 { tile_size } else { body.w };
    let count = (body.w / step).ceil().max(1.0) as u32;
    (0..count).map(move |i| {
        let x = body.x + i as f32 * step;
        Aabb::new(x, body.y, step.min(body.right() - x), body.h)
    })
}

fn draw_platform(body: Aabb, kind: PlatformKind, tile_size: f32, surface: &mut dyn RenderSurface) {
    match kind {
        PlatformKind::Ground => {
            for tile in tiles(body, tile_size) {
                surface.fill_rect(tile, Color::GREEN);
                surface.stroke_rect(tile, Color::DARK_GREEN);
            }
        }
        PlatformKind::Brick => {
            for tile in tiles(body, tile_size) {
                surface.fill_rect(tile, Color::ORANGE);
                surface.stroke_rect(tile, Color::DARK_ORANGE);
            }
            let mut x = body.x;
            while x < body.right() {
                surface.line(
                    Vec2::new(x, body.y),
                    Vec2::new(x, body.bottom()),
                    Color::DARK_ORANGE,
                );
                x += 16.0;
            }
        }
    }
}

fn draw_pipe(body: Aabb, surface: &mut dyn RenderSurface) {
    let rim = Aabb::new(body.x - 4.0, body.y, body.w + 8.0, 8.0);
    surface.fill_rect(body, Color::LIGHT_GREEN);
    surface.fill_rect(rim, Color::GREEN);
    surface.stroke_rect(body, Color::DARK_GREEN);
    surface.stroke_rect(rim, Color::DARK_GREEN);
    surface.line(
        Vec2::new(body.center_x(), body.y + 8.0),
        Vec2::new(body.center_x(), body.bottom()),
        Color::DARK_GREEN,
    );
}

fn draw_goomba(body: Aabb, surface: &mut dyn RenderSurface) {
    let Aabb { x, y, .. } = body;
    surface.fill_ellipse(body, Color::BROWN);
    surface.fill_ellipse(inset(body, 2.0), Color::BLACK);
    surface.fill_ellipse(Aabb::new(x + 6.0, y + 6.0, 4.0, 4.0), Color::BLACK);
    surface.fill_ellipse(Aabb::new(x + 14.0, y + 6.0, 4.0, 4.0), Color::BLACK);
    surface.line(
        Vec2::new(x + 8.0, y + 16.0),
        Vec2::new(x + 16.0, y + 16.0),
        Color::BLACK,
    );
}

fn draw_coin(body: Aabb, coin: &Coin, surface: &mut dyn RenderSurface) {
    let scale = coin.spin_scale();
    let left = body.x + body.w * (1.0 - scale) / 2.0;
    surface.fill_ellipse(Aabb::new(left, body.y, body.w * scale, body.h), Color::GOLD);
    surface.fill_ellipse(
        Aabb::new(left + 2.0, body.y + 2.0, (body.w - 4.0) * scale, body.h - 4.0),
        Color::ORANGE,
    );
}

fn draw_power_up(body: Aabb, power_up: &PowerUp, surface: &mut dyn RenderSurface) {
    let Aabb { x, y, w, h } = body;
    match power_up.kind {
        PowerUpKind::Mushroom => {
            surface.fill_ellipse(Aabb::new(x, y, w, h * 0.6), Color::RED);
            surface.fill_ellipse(Aabb::new(x + 4.0, y + 4.0, 4.0, 4.0), Color::WHITE);
            surface.fill_ellipse(Aabb::new(x + 14.0, y + 8.0, 4.0, 4.0), Color::WHITE);
            surface.fill_rect(
                Aabb::new(x + w / 3.0, y + h * 0.4, w / 3.0, h * 0.6),
                Color::BEIGE,
            );
        }
        PowerUpKind::FireFlower => {
            surface.fill_rect(
                Aabb::new(x + w / 2.0 - 2.0, y + h / 2.0, 4.0, h / 2.0),
                Color::GREEN,
            );
            for (dx, dy) in [(4.0, 4.0), (12.0, 4.0), (8.0, 0.0), (8.0, 8.0)] {
                surface.fill_ellipse(Aabb::new(x + dx, y + dy, 8.0, 8.0), Color::RED);
            }
            surface.fill_ellipse(Aabb::new(x + 8.0, y + 4.0, 8.0, 8.0), Color::YELLOW);
        }
        PowerUpKind::Star => {
            surface.fill_ellipse(body, Color::YELLOW);
            surface.fill_ellipse(inset(body, 6.0), Color::GOLD);
        }
    }
}

fn draw_block(body: Aabb, block: &QuestionBlock, surface: &mut dyn RenderSurface) {
    if block.used {
        surface.fill_rect(body, Color::DARK_GRAY);
        surface.stroke_rect(body, Color::GRAY);
        return;
    }
    let glow = block.glow();
    surface.fill_rect(body, Color::rgb(glow, 0.8 * glow, 0.0));
    surface.stroke_rect(body, Color::DARK_ORANGE);
    surface.text(
        Vec2::new(body.center_x() - 6.0, body.center_y() + 7.0),
        "?",
        20.0,
        Color::WHITE,
    );
}

fn draw_particle(body: Aabb, particle: &Particle, surface: &mut dyn RenderSurface) {
    let alpha = particle.alpha();
    let Aabb { x, y, .. } = body;
    match &particle.kind {
        ParticleKind::Score(text) => {
            surface.text(Vec2::new(x, y), text, 14.0, Color::WHITE.with_alpha(alpha));
        }
        ParticleKind::HitSpark => {
            let color = Color::YELLOW.with_alpha(alpha);
            for (dx, dy) in [(-2.0, -2.0), (-4.0, 0.0), (2.0, 0.0)] {
                surface.fill_ellipse(Aabb::new(x + dx, y + dy, 4.0, 4.0), color);
            }
        }
    }
}

pub fn draw_player(player: &Player, surface: &mut dyn RenderSurface) {
    if !player.is_visible() {
        return;
    }
    let Aabb { x, y, w, h } = player.bounds();
    let power = player.power();
    let shirt = if power == PowerState::Fire {
        Color::WHITE
    } else {
        Color::RED
    };

    surface.fill_rect(Aabb::new(x + 2.0, y + h / 2.0, w - 4.0, h / 2.0), shirt);
    surface.fill_rect(
        Aabb::new(x + 4.0, y + h / 2.0 + 2.0, w - 8.0, h / 2.0 - 4.0),
        Color::BLUE,
    );
    surface.fill_ellipse(Aabb::new(x, y, w, h / 2.0 + 4.0), Color::PEACH_PUFF);
    surface.fill_ellipse(Aabb::new(x + 2.0, y, w - 4.0, h / 4.0), Color::RED);

    let eye = if power == PowerState::Small { 3.0 } else { 4.0 };
    surface.fill_ellipse(Aabb::new(x + w / 4.0, y + h / 6.0, eye, eye), Color::BLACK);
    surface.fill_ellipse(
        Aabb::new(x + 3.0 * w / 4.0 - eye, y + h / 6.0, eye, eye),
        Color::BLACK,
    );
    surface.fill_rect(Aabb::new(x + w / 3.0, y + h / 3.0, w / 3.0, 3.0), Color::BROWN);
}
