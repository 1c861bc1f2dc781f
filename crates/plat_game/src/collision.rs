//! Player versus static platforms.
//!
//! Each overlapping platform is handled on its own, in list order, using the
//! axis of least penetration. Ties are broken top, then bottom, then left,
//! then right, and each side only counts when the player is moving into it.
//! An overlap that passes none of those gates is left alone this frame.

use crate::player::Player;
use plat_core::geometry::Aabb;

/// Which sides of the player touched something during the last resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactState {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Came down onto the platform's top.
    Landed,
    /// Rose into the platform's underside.
    HeadBump,
    /// Walked right into the platform's left face.
    BlockedRight,
    /// Walked left into the platform's right face.
    BlockedLeft,
}

/// Decide how `body`, moving with the given velocity, should be pushed out of
/// `platform`. `None` when they do not overlap or no side qualifies.
pub fn classify(body: &Aabb, vel_x: f32, vel_y: f32, platform: &Aabb) -> Option<Resolution> {
    if !body.intersects(platform) {
        return None;
    }
    let depths = body.overlap_depths(platform);
    let min = depths.min();

    if min == depths.from_top && vel_y >= 0.0 {
        Some(Resolution::Landed)
    } else if min == depths.from_bottom && vel_y < 0.0 {
        Some(Resolution::HeadBump)
    } else if min == depths.from_left && vel_x > 0.0 {
        Some(Resolution::BlockedRight)
    } else if min == depths.from_right && vel_x < 0.0 {
        Some(Resolution::BlockedLeft)
    } else {
        None
    }
}

/// Push the player out of every platform it overlaps. Later platforms see
/// the position left by earlier ones.
pub fn resolve_player_platforms(player: &mut Player, solids: &[Aabb]) -> ContactState {
    let mut contacts = ContactState::default();
    for platform in solids {
        let body = player.bounds();
        let Some(resolution) = classify(&body, player.vel_x, player.vel_y, platform) else {
            continue;
        };
        match resolution {
            Resolution::Landed => {
                player.y = platform.y - body.h;
                player.vel_y = 0.0;
                player.grounded = true;
                contacts.down = true;
            }
            Resolution::HeadBump => {
                player.y = platform.bottom();
                player.vel_y = player.tuning.head_bump_speed;
                contacts.up = true;
            }
            Resolution::BlockedRight => {
                player.x = platform.x - body.w;
                player.vel_x = 0.0;
                contacts.right = true;
            }
            Resolution::BlockedLeft => {
                player.x = platform.right();
                player.vel_x = 0.0;
                contacts.left = true;
            }
        }
    }
    contacts
}
