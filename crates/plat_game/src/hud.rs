//! Heads-up display: the status strip along the top, the help line along the
//! bottom and the end-of-game banners.

use crate::world::{GameOverReason, GameState, World};
use glam::Vec2;
use plat_render::{Color, RenderSurface};
use serde::Serialize;

pub const HELP_TEXT: &str = "Jump into question blocks from below to hit them!";

const LABEL_SIZE: f32 = 16.0;
const HELP_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 48.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: String,
    pub world: String,
    pub time: String,
    pub lives: String,
    pub power: String,
    pub banner: Option<Banner>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerStyle {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub style: BannerStyle,
    pub title: String,
    /// Shown above the title, e.g. why the game ended.
    pub headline: Option<String>,
    pub prompt: String,
}

impl Hud {
    pub fn from_world(world: &World) -> Self {
        let player = world.player();
        Self {
            score: format!("{:06}", world.score()),
            world: format!("1-{}", world.level_number()),
            time: format!("{:03}", world.timer().ceil() as u32),
            lives: format!("LIVES: {}", world.lives()),
            power: format!("POWER: {}", player.power().label()),
            banner: banner_for(world.state()),
        }
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface, viewport: (u32, u32)) {
        let (w, h) = (viewport.0 as f32, viewport.1 as f32);

        surface.text(Vec2::new(20.0, 30.0), "MARIO", LABEL_SIZE, Color::WHITE);
        surface.text(Vec2::new(20.0, 50.0), &self.score, LABEL_SIZE, Color::WHITE);
        surface.text(Vec2::new(200.0, 30.0), "WORLD", LABEL_SIZE, Color::WHITE);
        surface.text(Vec2::new(200.0, 50.0), &self.world, LABEL_SIZE, Color::WHITE);
        surface.text(Vec2::new(300.0, 30.0), "TIME", LABEL_SIZE, Color::WHITE);
        surface.text(Vec2::new(300.0, 50.0), &self.time, LABEL_SIZE, Color::WHITE);
        surface.text(Vec2::new(400.0, 30.0), &self.lives, LABEL_SIZE, Color::WHITE);
        surface.text(Vec2::new(500.0, 30.0), &self.power, LABEL_SIZE, Color::WHITE);
        surface.text(Vec2::new(20.0, h - 20.0), HELP_TEXT, HELP_SIZE, Color::WHITE);

        let Some(banner) = &self.banner else {
            return;
        };
        let center = Vec2::new(w / 2.0, h / 2.0);
        if let Some(headline) = &banner.headline {
            surface.text(center + Vec2::new(-45.0, -60.0), headline, 20.0, Color::WHITE);
        }
        let (title_at, title_color, prompt_at, prompt_size) = match banner.style {
            BannerStyle::Victory => (
                Vec2::new(-180.0, -40.0),
                Color::GREEN,
                Vec2::new(-120.0, 0.0),
                24.0,
            ),
            BannerStyle::Defeat => (
                Vec2::new(-120.0, 0.0),
                Color::RED,
                Vec2::new(-70.0, 30.0),
                20.0,
            ),
        };
        surface.text(center + title_at, &banner.title, TITLE_SIZE, title_color);
        surface.text(center + prompt_at, &banner.prompt, prompt_size, Color::WHITE);
    }
}

fn banner_for(state: GameState) -> Option<Banner> {
    match state {
        GameState::Playing => None,
        GameState::LevelComplete => Some(Banner {
            style: BannerStyle::Victory,
            title: "CONGRATULATIONS!".to_string(),
            headline: None,
            prompt: "Level Complete! Press R to restart".to_string(),
        }),
        GameState::GameOver(reason) => Some(Banner {
            style: BannerStyle::Defeat,
            title: "GAME OVER".to_string(),
            headline: match reason {
                GameOverReason::TimeUp => Some("TIME'S UP!".to_string()),
                GameOverReason::OutOfLives => None,
            },
            prompt: "Press R to restart".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use plat_core::input::InputSnapshot;
    use plat_render::DrawList;

    #[test]
    fn fresh_hud_shows_padded_counters() {
        let world = World::new(GameConfig::default());
        let hud = Hud::from_world(&world);
        assert_eq!(hud.score, "000000");
        assert_eq!(hud.world, "1-1");
        assert_eq!(hud.time, "060");
        assert_eq!(hud.lives, "LIVES: 3");
        assert_eq!(hud.power, "POWER: SMALL");
        assert_eq!(hud.banner, None);
    }

    #[test]
    fn time_rounds_up() {
        let mut world = World::new(GameConfig::default());
        world.step(&InputSnapshot::new(), 0.5);
        assert_eq!(Hud::from_world(&world).time, "060");
        world.step(&InputSnapshot::new(), 0.6);
        assert_eq!(Hud::from_world(&world).time, "059");
    }

    #[test]
    fn time_up_banner_has_headline() {
        let mut world = World::new(GameConfig::default());
        world.step(&InputSnapshot::new(), 100.0);
        let hud = Hud::from_world(&world);
        let banner = hud.banner.clone().expect("game over banner");
        assert_eq!(banner.title, "GAME OVER");
        assert_eq!(banner.headline.as_deref(), Some("TIME'S UP!"));

        let mut list = DrawList::new();
        hud.draw(&mut list, (800, 600));
        let texts: Vec<_> = list.texts().collect();
        assert!(texts.contains(&"TIME'S UP!"));
        assert!(texts.contains(&"Press R to restart"));
        assert!(texts.contains(&"000"));
    }

    #[test]
    fn status_strip_draws_in_fixed_order() {
        let world = World::new(GameConfig::default());
        let mut list = DrawList::new();
        Hud::from_world(&world).draw(&mut list, (800, 600));
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(
            texts,
            vec![
                "MARIO",
                "000000",
                "WORLD",
                "1-1",
                "TIME",
                "060",
                "LIVES: 3",
                "POWER: SMALL",
                HELP_TEXT
            ]
        );
    }

    #[test]
    fn level_complete_banner() {
        let banner = banner_for(GameState::LevelComplete).expect("banner");
        assert_eq!(banner.title, "CONGRATULATIONS!");
        assert_eq!(banner.prompt, "Level Complete! Press R to restart");
    }
}
