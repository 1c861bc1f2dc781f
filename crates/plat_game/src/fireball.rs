use crate::config::FireballTuning;
use plat_core::geometry::Aabb;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fireball {
    pub vel_x: f32,
    pub vel_y: f32,
    pub life: f32,
    pub dead: bool,
}

impl Fireball {
    /// Launch from the shooter's leading edge at half its height, with a
    /// slight upward kick.
    pub fn launch(shooter: &Aabb, facing_right: bool, tuning: &FireballTuning) -> (Aabb, Self) {
        let x = if facing_right {
            shooter.right()
        } else {
            shooter.x - tuning.size
        };
        let y = shooter.y + shooter.h / 2.0;
        let direction = if facing_right { 1.0 } else { -1.0 };
        (
            Aabb::new(x, y, tuning.size, tuning.size),
            Self {
                vel_x: tuning.speed * direction,
                vel_y: -tuning.launch_speed,
                life: tuning.lifetime,
                dead: false,
            },
        )
    }

    pub fn update(
        &mut self,
        body: &mut Aabb,
        solids: &[Aabb],
        gravity: f32,
        dt: f32,
        tuning: &FireballTuning,
    ) {
        if self.dead {
            return;
        }

        body.x += self.vel_x;
        body.y += self.vel_y;
        self.vel_y += gravity;

        for platform in solids {
            if body.intersects(platform) && self.vel_y > 0.0 && body.y < platform.y {
                body.y = platform.y - body.h;
                self.vel_y = -tuning.bounce_speed;
            }
        }

        self.life -= dt;
        if self.life <= 0.0 || body.x < tuning.min_x || body.x > tuning.max_x {
            self.dead = true;
        }
    }
}
