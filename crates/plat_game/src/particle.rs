use crate::config::ItemTuning;
use plat_core::geometry::Aabb;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ParticleKind {
    /// Floating score popup, e.g. "200".
    Score(String),
    HitSpark,
}

/// Short-lived rising visual. Never collides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub kind: ParticleKind,
    pub vel_y: f32,
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    pub fn score(points: u32, tuning: &ItemTuning) -> Self {
        Self {
            kind: ParticleKind::Score(points.to_string()),
            vel_y: -tuning.score_particle_rise,
            life: tuning.score_particle_life,
            max_life: tuning.score_particle_life,
        }
    }

    pub fn hit_spark(tuning: &ItemTuning) -> Self {
        Self {
            kind: ParticleKind::HitSpark,
            vel_y: -tuning.spark_particle_rise,
            life: tuning.spark_particle_life,
            max_life: tuning.spark_particle_life,
        }
    }

    pub fn update(&mut self, body: &mut Aabb, dt: f32) {
        body.y += self.vel_y;
        self.life -= dt;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Fades linearly from opaque to transparent over the lifetime.
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}
