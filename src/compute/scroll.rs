//! Leftward scrolling of floor, clouds and obstacles.
//!
//! Floor and clouds are pools kept filled by a coverage rule rather than by
//! entities spawning their own successors.

use rand::Rng;

use crate::consts::*;
use crate::entities::{Clock, Cloud, FloorSegment, Obstacle, ObstacleKind};

/// Move every segment by its own velocity, drop those fully off the left
/// edge, then top the strip back up to the window width.
pub fn scroll_floor(floor: &[FloorSegment], velocity: f32, clock: Clock) -> Vec<FloorSegment> {
    if !clock.is_running() {
        return floor.to_vec();
    }

    let moved: Vec<FloorSegment> = floor
        .iter()
        .map(|s| FloorSegment {
            x: s.x - s.velocity,
            ..s.clone()
        })
        .filter(|s| s.rect().right() >= 0.0)
        .collect();

    cover_floor(moved, velocity)
}

/// Append segments until the rightmost one reaches the window's right edge.
/// Each successor overlaps its predecessor slightly so no seam shows.
pub fn cover_floor(mut floor: Vec<FloorSegment>, velocity: f32) -> Vec<FloorSegment> {
    if floor.is_empty() {
        floor.push(FloorSegment { x: 0.0, velocity });
    }

    while let Some(last) = floor.last() {
        let right = last.rect().right();
        if right >= WINDOW_WIDTH {
            break;
        }
        floor.push(FloorSegment {
            x: right - FLOOR_OVERLAP,
            velocity,
        });
    }

    floor
}

pub fn new_cloud(rng: &mut impl Rng) -> Cloud {
    Cloud {
        x: CLOUD_SPAWN_X,
        top: CLOUD_ALTITUDES[rng.gen_range(0..CLOUD_ALTITUDES.len())],
    }
}

/// Drift clouds at their fixed speed. A fresh cloud enters from the right
/// once the newest one has drifted past the respawn line.
pub fn scroll_clouds(clouds: &[Cloud], clock: Clock, rng: &mut impl Rng) -> Vec<Cloud> {
    if !clock.is_running() {
        return clouds.to_vec();
    }

    let mut moved: Vec<Cloud> = clouds
        .iter()
        .map(|c| Cloud {
            x: c.x - CLOUD_VELOCITY,
            ..c.clone()
        })
        .filter(|c| c.rect().right() >= 0.0)
        .collect();

    let newest_left = moved.iter().map(|c| c.x).fold(f32::NEG_INFINITY, f32::max);
    if moved.is_empty() || newest_left <= CLOUD_RESPAWN_X {
        moved.push(new_cloud(rng));
    }

    moved
}

/// Move obstacles, flap flyer wings, drop anything off-screen.
pub fn scroll_obstacles(obstacles: &[Obstacle], clock: Clock) -> Vec<Obstacle> {
    if !clock.is_running() {
        return obstacles.to_vec();
    }

    obstacles
        .iter()
        .map(|o| {
            let kind = match o.kind {
                ObstacleKind::Flyer { altitude, wing_frame } => ObstacleKind::Flyer {
                    altitude,
                    wing_frame: 1 - wing_frame.min(1),
                },
                ref cactus => cactus.clone(),
            };
            Obstacle {
                x: o.x - o.velocity,
                velocity: o.velocity,
                kind,
            }
        })
        .filter(|o| o.rect().right() >= 0.0)
        .collect()
}
