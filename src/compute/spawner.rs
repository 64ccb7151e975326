//! Obstacle generation.

use rand::Rng;

use crate::consts::*;
use crate::entities::{CactusVariant, Obstacle, ObstacleKind};

/// Open only when no live obstacle is still right of the gate line; this
/// keeps at most one obstacle in the approach zone at a time.
pub fn gate_open(obstacles: &[Obstacle]) -> bool {
    obstacles.iter().all(|o| o.rect().left() <= SPAWN_GATE_X)
}

pub fn random_cactus(rng: &mut impl Rng) -> ObstacleKind {
    let variant = match rng.gen_range(0..3) {
        0 => CactusVariant::Single,
        1 => CactusVariant::Double,
        _ => CactusVariant::Cluster,
    };
    ObstacleKind::Cactus {
        variant,
        size: CACTUS_SIZES[rng.gen_range(0..CACTUS_SIZES.len())],
    }
}

pub fn random_flyer(rng: &mut impl Rng) -> ObstacleKind {
    ObstacleKind::Flyer {
        altitude: FLYER_ALTITUDES[rng.gen_range(0..FLYER_ALTITUDES.len())],
        wing_frame: 0,
    }
}

/// Cacti only until the score passes `FLYER_SCORE`, then an even split.
pub fn choose_kind(score: f64, rng: &mut impl Rng) -> ObstacleKind {
    if score > FLYER_SCORE && rng.gen_bool(0.5) {
        random_flyer(rng)
    } else {
        random_cactus(rng)
    }
}

/// A new obstacle at the spawn edge, or `None` while the gate is closed.
/// The obstacle copies `velocity` at creation.
pub fn spawn(
    obstacles: &[Obstacle],
    score: f64,
    velocity: f32,
    rng: &mut impl Rng,
) -> Option<Obstacle> {
    if !gate_open(obstacles) {
        return None;
    }

    Some(Obstacle {
        x: OBSTACLE_SPAWN_X,
        velocity,
        kind: choose_kind(score, rng),
    })
}
