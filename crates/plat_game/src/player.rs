use crate::config::PlayerTuning;
use crate::items::PowerUpKind;
use plat_core::geometry::Aabb;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerState {
    Small,
    Big,
    Fire,
}

impl PowerState {
    /// HUD wording.
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Big => "SUPER",
            Self::Fire => "FIRE",
        }
    }

    /// One step down the ladder, or `None` when already small.
    pub fn downgraded(self) -> Option<PowerState> {
        match self {
            Self::Fire => Some(Self::Big),
            Self::Big => Some(Self::Small),
            Self::Small => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Downgraded { from: PowerState, to: PowerState },
    LifeLost,
}

#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
    pub grounded: bool,
    pub facing_right: bool,
    pub running: bool,
    power: PowerState,
    pub invincibility: f32,
    pub jump_buffer: f32,
    pub tuning: PlayerTuning,
}

impl Player {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            x: tuning.spawn_x,
            y: tuning.spawn_y,
            vel_x: 0.0,
            vel_y: 0.0,
            grounded: false,
            facing_right: true,
            running: false,
            power: PowerState::Small,
            invincibility: 0.0,
            jump_buffer: 0.0,
            tuning,
        }
    }

    pub fn power(&self) -> PowerState {
        self.power
    }

    /// Size follows the power state and is never stored separately.
    pub fn size(&self) -> (f32, f32) {
        match self.power {
            PowerState::Small => self.tuning.small_size,
            PowerState::Big | PowerState::Fire => self.tuning.big_size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        let (w, h) = self.size();
        Aabb::new(self.x, self.y, w, h)
    }

    /// Switches power state keeping the feet where they are, so growing never
    /// sinks the player into the floor.
    pub fn set_power(&mut self, power: PowerState) {
        let old_bottom = self.bounds().bottom();
        self.power = power;
        self.y = old_bottom - self.size().1;
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0.0
    }

    /// While invincible the sprite blinks at 10 Hz.
    pub fn is_visible(&self) -> bool {
        if !self.is_invincible() {
            return true;
        }
        (self.invincibility * 10.0).floor() as i64 % 2 != 0
    }

    pub fn move_horizontal(&mut self, direction: f32) {
        self.facing_right = direction > 0.0;
        let (accel, max_speed) = if self.running {
            (self.tuning.run_accel, self.tuning.run_max_speed)
        } else {
            (self.tuning.walk_accel, self.tuning.walk_max_speed)
        };

        // Reversing brakes twice as hard.
        let skidding = self.vel_x != 0.0 && self.vel_x.signum() != direction.signum();
        let accel = if skidding { accel * 2.0 } else { accel };

        self.vel_x = (self.vel_x + accel * direction).clamp(-max_speed, max_speed);
    }

    pub fn apply_friction(&mut self) {
        let friction = if self.grounded {
            self.tuning.ground_friction
        } else {
            self.tuning.air_friction
        };
        self.vel_x *= friction;
        if self.vel_x.abs() < self.tuning.stop_epsilon {
            self.vel_x = 0.0;
        }
    }

    pub fn buffer_jump(&mut self) {
        self.jump_buffer = self.tuning.jump_buffer;
    }

    /// Launches if grounded with a buffered jump. Returns true on launch.
    pub fn try_jump(&mut self) -> bool {
        if !self.grounded || self.jump_buffer <= 0.0 {
            return false;
        }
        let speed = if self.running {
            self.tuning.run_jump_speed
        } else {
            self.tuning.walk_jump_speed
        };
        self.vel_y = -speed;
        self.jump_buffer = 0.0;
        self.grounded = false;
        true
    }

    /// Short hop: releasing jump early while still rising fast trims the
    /// ascent.
    pub fn cut_jump(&mut self) {
        if self.vel_y < -self.tuning.jump_cut_threshold {
            self.vel_y *= self.tuning.jump_cut_factor;
        }
    }

    pub fn tick_timers(&mut self, dt: f32) {
        self.invincibility = (self.invincibility - dt).max(0.0);
        self.jump_buffer = (self.jump_buffer - dt).max(0.0);
    }

    /// Gravity and motion for one frame. `grounded` is cleared here and
    /// re-established by platform resolution afterwards.
    pub fn integrate(&mut self, gravity: f32) {
        self.grounded = false;
        self.vel_y = (self.vel_y + gravity).min(self.tuning.terminal_velocity);
        self.x += self.vel_x;
        self.y += self.vel_y;
        if self.x < 0.0 {
            self.x = 0.0;
        }
    }

    /// Applies one hit. Does nothing while invincible.
    pub fn hurt(&mut self) -> Option<DamageOutcome> {
        if self.is_invincible() {
            return None;
        }
        self.invincibility = self.tuning.damage_invincibility;
        match self.power.downgraded() {
            Some(to) => {
                let from = self.power;
                self.set_power(to);
                Some(DamageOutcome::Downgraded { from, to })
            }
            None => Some(DamageOutcome::LifeLost),
        }
    }

    /// Returns the new power state if it changed.
    pub fn collect(&mut self, kind: PowerUpKind) -> Option<PowerState> {
        match kind {
            PowerUpKind::Mushroom if self.power == PowerState::Small => {
                self.set_power(PowerState::Big);
                Some(PowerState::Big)
            }
            PowerUpKind::Mushroom => None,
            PowerUpKind::FireFlower if self.power != PowerState::Fire => {
                self.set_power(PowerState::Fire);
                Some(PowerState::Fire)
            }
            PowerUpKind::FireFlower => None,
            PowerUpKind::Star => {
                self.invincibility = self.tuning.star_invincibility;
                None
            }
        }
    }

    /// Back to the spawn point after losing a life. Power state survives.
    pub fn respawn(&mut self) {
        self.x = self.tuning.spawn_x;
        self.y = self.tuning.spawn_y;
        self.vel_x = 0.0;
        self.vel_y = 0.0;
        self.grounded = false;
        self.jump_buffer = 0.0;
        self.invincibility = self.tuning.damage_invincibility;
    }

    pub fn can_shoot(&self) -> bool {
        self.power == PowerState::Fire
    }
}
