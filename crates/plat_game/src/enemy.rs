use crate::config::EnemyTuning;
use plat_core::geometry::Aabb;
use serde::Serialize;

/// Walking enemy that paces back and forth around its spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Goomba {
    pub vel_x: f32,
    pub spawn_x: f32,
    pub alive: bool,
}

impl Goomba {
    /// Starts walking left.
    pub fn new(spawn_x: f32, tuning: &EnemyTuning) -> Self {
        Self {
            vel_x: -tuning.speed,
            spawn_x,
            alive: true,
        }
    }

    /// One patrol step. The three rules below run in this order every frame
    /// and each may flip the direction independently:
    ///
    /// 1. walking into a platform pushes the body back out and turns around;
    /// 2. feet not resting on any platform turns around;
    /// 3. straying further than the leash from the spawn x points the
    ///    velocity back toward it.
    pub fn patrol(&mut self, body: &mut Aabb, solids: &[Aabb], tuning: &EnemyTuning) {
        if !self.alive {
            return;
        }

        body.x += self.vel_x;

        let mut resting = false;
        for platform in solids {
            if body.intersects(platform) {
                if self.vel_x > 0.0 {
                    body.x = platform.x - body.w;
                } else {
                    body.x = platform.right();
                }
                self.vel_x = -self.vel_x;
            }

            if rests_on(body, platform, tuning.rest_tolerance) {
                resting = true;
                break;
            }
        }

        if !resting {
            self.vel_x = -self.vel_x;
        }

        if body.x < self.spawn_x - tuning.leash {
            self.vel_x = self.vel_x.abs();
        } else if body.x > self.spawn_x + tuning.leash {
            self.vel_x = -self.vel_x.abs();
        }
    }
}

fn rests_on(body: &Aabb, platform: &Aabb, tolerance: f32) -> bool {
    let feet = body.bottom();
    let center = body.center_x();
    feet >= platform.y - tolerance
        && feet <= platform.y + tolerance
        && center >= platform.x
        && center <= platform.right()
}
