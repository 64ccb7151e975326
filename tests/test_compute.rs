use dino_run::compute::*;
use dino_run::consts::*;
use dino_run::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Fresh state with obstacle generation off so nothing kills the player.
fn make_state() -> GameState {
    let mut s = init_state(0, &mut seeded_rng());
    s.autospawn = false;
    s
}

fn idle() -> TickInput {
    TickInput::default()
}

fn jump() -> TickInput {
    TickInput {
        jump: true,
        ..TickInput::default()
    }
}

fn duck() -> TickInput {
    TickInput {
        duck: true,
        ..TickInput::default()
    }
}

fn run(state: &GameState, input: &TickInput, ticks: usize, rng: &mut StdRng) -> GameState {
    let mut s = state.clone();
    for _ in 0..ticks {
        s = tick(&s, input, rng);
    }
    s
}

fn cactus_at(x: f32, size: f32) -> Obstacle {
    Obstacle {
        x,
        velocity: INITIAL_VELOCITY,
        kind: ObstacleKind::Cactus {
            variant: CactusVariant::Single,
            size,
        },
    }
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_player_position() {
    let s = init_state(0, &mut seeded_rng());
    assert_eq!(s.player.x, 90.0);
    assert_eq!(s.player.y, 198.0);
    assert_eq!(s.player.velocity, 0.0);
    assert_eq!(s.player.state, PlayerState::Running);
}

#[test]
fn init_state_world() {
    let s = init_state(123, &mut seeded_rng());
    assert!(s.obstacles.is_empty());
    assert_eq!(s.floor.len(), 1);
    assert_eq!(s.floor[0].x, FLOOR_START_X);
    assert_eq!(s.clouds.len(), 1);
    assert_eq!(s.clouds[0].x, CLOUD_SPAWN_X);
    assert_eq!(s.score_ticks, 0);
    assert_eq!(s.velocity, INITIAL_VELOCITY);
    assert_eq!(s.high_score, 123);
    assert_eq!(s.status, GameStatus::Playing);
    assert!(s.autospawn);
}

#[test]
fn tick_increments_frame_and_clears_events() {
    let mut s = make_state();
    s.events.push(GameEvent::Reset);
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s2.frame, 1);
    assert!(s2.events.is_empty());
}

#[test]
fn tick_does_not_mutate_original() {
    let s = make_state();
    let _ = tick(&s, &jump(), &mut seeded_rng());
    assert_eq!(s.frame, 0);
    assert_eq!(s.player.velocity, 0.0);
    assert_eq!(s.floor[0].x, FLOOR_START_X);
}

// ── Kinematics ────────────────────────────────────────────────────────────────

#[test]
fn grounded_without_jump_keeps_zero_velocity() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    for _ in 0..120 {
        s = tick(&s, &idle(), &mut rng);
        assert_eq!(s.player.velocity, 0.0);
        assert_eq!(s.player.y, GROUND_LINE);
        assert_ne!(s.player.state, PlayerState::Jumping);
    }
    assert_eq!(s.player.state, PlayerState::Running);
}

#[test]
fn jump_from_ground_sets_upward_speed() {
    let s = make_state();
    let s2 = tick(&s, &jump(), &mut seeded_rng());
    assert_eq!(s2.player.velocity, -JUMP_SPEED);
    assert_eq!(s2.player.y, GROUND_LINE);
}

#[test]
fn jump_while_airborne_is_ignored() {
    let mut rng = seeded_rng();
    let s = tick(&make_state(), &jump(), &mut rng);
    // Still holding jump: gravity acts, no second launch
    let s2 = tick(&s, &jump(), &mut rng);
    assert_eq!(s2.player.velocity, -JUMP_SPEED + GRAVITY);
    let s3 = tick(&s2, &jump(), &mut rng);
    assert_eq!(s3.player.velocity, -JUMP_SPEED + 2.0 * GRAVITY);
}

/// Bottom edge `k` ticks after takeoff under semi-implicit Euler:
/// v_k = -v0 + g·k, y_k = y_0 + Σ (v_i + g/2).
fn closed_form_y(k: u32) -> f32 {
    let k = k as f32;
    GROUND_LINE + (-JUMP_SPEED + GRAVITY / 2.0) * k + GRAVITY * k * (k + 1.0) / 2.0
}

fn closed_form_landing_tick() -> u32 {
    (1..)
        .find(|&k| {
            let v = -JUMP_SPEED + GRAVITY * k as f32;
            v > 0.0 && closed_form_y(k) > FLOOR_TOP
        })
        .unwrap()
}

#[test]
fn jump_arc_matches_closed_form() {
    let mut rng = seeded_rng();
    let mut s = tick(&make_state(), &jump(), &mut rng);
    let landing = closed_form_landing_tick();
    assert_eq!(landing, 23);

    for k in 1..landing {
        s = tick(&s, &idle(), &mut rng);
        assert_eq!(s.player.y, closed_form_y(k), "tick {k}");
        assert_ne!(s.player.velocity, 0.0, "landed early at tick {k}");
    }

    s = tick(&s, &idle(), &mut rng);
    assert_eq!(s.player.velocity, 0.0);
    assert_eq!(s.player.y, GROUND_LINE);
}

#[test]
fn jump_peak_height() {
    let peak = (1..23).map(closed_form_y).fold(f32::INFINITY, f32::min);
    assert_eq!(peak, 66.0);
}

// ── Player state machine ──────────────────────────────────────────────────────

#[test]
fn run_cycle_advances_half_frame_per_tick() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let mut frames = Vec::new();
    for _ in 0..5 {
        s = tick(&s, &idle(), &mut rng);
        frames.push(s.player.frame);
    }
    assert_eq!(frames, vec![1.5, 2.0, 2.5, 1.0, 1.5]);
    assert_eq!(PlayerSprite::from_frame(2.5), PlayerSprite::Run2);
}

#[test]
fn duck_on_ground_alternates_duck_frames() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let mut sprites = Vec::new();
    for _ in 0..4 {
        s = tick(&s, &duck(), &mut rng);
        assert_eq!(s.player.state, PlayerState::Ducking);
        sprites.push(s.player.sprite());
    }
    assert_eq!(
        sprites,
        vec![
            PlayerSprite::Duck1,
            PlayerSprite::Duck2,
            PlayerSprite::Duck1,
            PlayerSprite::Duck2
        ]
    );
    assert_eq!(s.player.rect().h, PLAYER_DUCK_HEIGHT);
}

#[test]
fn airborne_state_is_jumping_and_pins_frame() {
    let mut rng = seeded_rng();
    let s = tick(&make_state(), &jump(), &mut rng);
    let s2 = tick(&s, &duck(), &mut rng);
    assert_eq!(s2.player.state, PlayerState::Jumping);
    assert_eq!(s2.player.sprite(), PlayerSprite::Jump);
}

#[test]
fn landing_tick_keeps_jump_pose_then_runs() {
    let mut rng = seeded_rng();
    let s = tick(&make_state(), &jump(), &mut rng);
    let landed = run(&s, &idle(), 23, &mut rng);
    assert_eq!(landed.player.velocity, 0.0);
    assert_eq!(landed.player.state, PlayerState::Jumping);

    let next = tick(&landed, &idle(), &mut rng);
    assert_eq!(next.player.state, PlayerState::Running);
}

#[test]
fn duck_and_jump_together_resolves_to_jump() {
    let mut rng = seeded_rng();
    let both = TickInput {
        jump: true,
        duck: true,
        ..TickInput::default()
    };
    let s = tick(&make_state(), &both, &mut rng);
    assert_eq!(s.player.velocity, -JUMP_SPEED);
    let s2 = tick(&s, &both, &mut rng);
    assert_eq!(s2.player.state, PlayerState::Jumping);
}

// ── Scrolling ─────────────────────────────────────────────────────────────────

#[test]
fn floor_keeps_covering_window() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    for _ in 0..400 {
        s = tick(&s, &idle(), &mut rng);
        let last = s.floor.last().unwrap();
        assert!(last.rect().right() >= WINDOW_WIDTH);
        assert!(s.floor.iter().all(|seg| seg.rect().right() >= 0.0));
        for pair in s.floor.windows(2) {
            assert!(pair[1].x <= pair[0].rect().right());
        }
    }
}

#[test]
fn cover_floor_appends_overlapping_successor() {
    let floor = scroll::cover_floor(
        vec![FloorSegment {
            x: -500.0,
            velocity: 9.0,
        }],
        9.0,
    );
    assert_eq!(floor.len(), 2);
    assert_eq!(floor[1].x, 700.0 - FLOOR_OVERLAP);
    assert_eq!(floor[1].velocity, 9.0);
}

#[test]
fn cloud_respawns_at_threshold() {
    let mut rng = seeded_rng();
    let s = run(&make_state(), &idle(), 249, &mut rng);
    assert_eq!(s.clouds.len(), 1);
    let s = tick(&s, &idle(), &mut rng);
    assert_eq!(s.clouds.len(), 2);
    assert_eq!(s.clouds[0].x, CLOUD_RESPAWN_X);
    assert_eq!(s.clouds[1].x, CLOUD_SPAWN_X);
    assert!(CLOUD_ALTITUDES.contains(&s.clouds[1].top));
}

#[test]
fn obstacles_move_by_own_velocity_and_leave_screen() {
    let mut s = make_state();
    s.obstacles.push(cactus_at(500.0, 32.0));
    s.obstacles.push(Obstacle {
        velocity: 10.0,
        ..cactus_at(-60.0, 64.0)
    });
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s2.obstacles.len(), 1);
    assert_eq!(s2.obstacles[0].x, 492.0);
}

#[test]
fn flyer_flaps_every_tick() {
    let mut s = make_state();
    s.obstacles.push(Obstacle {
        x: 600.0,
        velocity: INITIAL_VELOCITY,
        kind: ObstacleKind::Flyer {
            altitude: 115.0,
            wing_frame: 0,
        },
    });
    let mut rng = seeded_rng();
    let s1 = tick(&s, &idle(), &mut rng);
    let s2 = tick(&s1, &idle(), &mut rng);
    let wing = |st: &GameState| match st.obstacles[0].kind {
        ObstacleKind::Flyer { wing_frame, .. } => wing_frame,
        _ => panic!("expected flyer"),
    };
    assert_eq!(wing(&s1), 1);
    assert_eq!(wing(&s2), 0);
}

#[test]
fn frozen_clock_leaves_scenery_untouched() {
    let s = make_state();
    let floor = scroll::scroll_floor(&s.floor, s.velocity, Clock::Frozen);
    let clouds = scroll::scroll_clouds(&s.clouds, Clock::Frozen, &mut seeded_rng());
    assert_eq!(floor, s.floor);
    assert_eq!(clouds, s.clouds);
}

// ── Spawner ───────────────────────────────────────────────────────────────────

#[test]
fn first_tick_spawns_at_right_edge() {
    let mut s = make_state();
    s.autospawn = true;
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s2.obstacles.len(), 1);
    assert_eq!(s2.obstacles[0].x, OBSTACLE_SPAWN_X);
    assert_eq!(s2.obstacles[0].velocity, INITIAL_VELOCITY);
    assert!(s2.events.contains(&GameEvent::ObstacleSpawned));
}

#[test]
fn spawn_gate_closed_while_obstacle_is_near_edge() {
    let mut s = make_state();
    s.autospawn = true;
    s.obstacles.push(cactus_at(500.0, 32.0));
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s2.obstacles.len(), 1);
}

#[test]
fn spawn_gate_opens_once_obstacle_reaches_threshold() {
    let mut s = make_state();
    s.autospawn = true;
    // 58 → 50 after scrolling: behind the gate line, clear of the player
    s.obstacles.push(cactus_at(58.0, 32.0));
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s2.obstacles.len(), 2);
}

#[test]
fn gate_open_checks_every_obstacle() {
    assert!(spawner::gate_open(&[]));
    assert!(spawner::gate_open(&[cactus_at(100.0, 32.0), cactus_at(-20.0, 32.0)]));
    assert!(!spawner::gate_open(&[cactus_at(10.0, 32.0), cactus_at(101.0, 32.0)]));
}

#[test]
fn only_cacti_below_flyer_score() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let o = spawner::spawn(&[], FLYER_SCORE, 8.0, &mut rng).unwrap();
        match o.kind {
            ObstacleKind::Cactus { size, .. } => assert!(CACTUS_SIZES.contains(&size)),
            ObstacleKind::Flyer { .. } => panic!("flyer spawned at score {FLYER_SCORE}"),
        }
    }
}

#[test]
fn flyers_join_above_flyer_score() {
    let mut flyers = 0;
    let mut cacti = 0;
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        match spawner::spawn(&[], 600.0, 8.0, &mut rng).unwrap().kind {
            ObstacleKind::Flyer { altitude, .. } => {
                assert!(FLYER_ALTITUDES.contains(&altitude));
                flyers += 1;
            }
            ObstacleKind::Cactus { .. } => cacti += 1,
        }
    }
    assert!(flyers > 50 && cacti > 50, "flyers {flyers} cacti {cacti}");
}

#[test]
fn spawned_obstacle_copies_current_velocity() {
    let o = spawner::spawn(&[], 0.0, 9.5, &mut seeded_rng()).unwrap();
    assert_eq!(o.velocity, 9.5);
}

// ── Difficulty & scoring ──────────────────────────────────────────────────────

#[test]
fn score_accumulates_per_tick() {
    let s = run(&make_state(), &idle(), 10, &mut seeded_rng());
    assert_eq!(s.score_ticks, 10);
    assert!((s.score() - 2.0).abs() < 1e-9);
    assert_eq!(s.display_score(), 2);
}

#[test]
fn milestone_due_fires_once_per_hundred() {
    assert_eq!(scoring::milestone_due(99, 0), None);
    assert_eq!(scoring::milestone_due(100, 0), Some(100));
    assert_eq!(scoring::milestone_due(150, 100), None);
    assert_eq!(scoring::milestone_due(200, 100), Some(200));
}

#[test]
fn milestone_ramps_velocity_once_and_broadcasts() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.score_ticks = 499;
    // A high flyer: scrolls past without touching the player
    s.obstacles.push(Obstacle {
        x: 600.0,
        velocity: INITIAL_VELOCITY,
        kind: ObstacleKind::Flyer {
            altitude: 115.0,
            wing_frame: 0,
        },
    });

    let mut milestones = 0;
    for _ in 0..60 {
        s = tick(&s, &idle(), &mut rng);
        milestones += s
            .events
            .iter()
            .filter(|e| **e == GameEvent::Milestone(100))
            .count();
    }

    assert_eq!(milestones, 1);
    assert_eq!(s.obstacles.len(), 1);
    assert_eq!(s.velocity, INITIAL_VELOCITY + VELOCITY_STEP);
    assert!(s.floor.iter().all(|f| f.velocity == s.velocity));
    assert!(s.obstacles.iter().all(|o| o.velocity == s.velocity));
    assert_eq!(s.last_milestone, 100);
}

#[test]
fn flash_window_pauses_score() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.score_ticks = 500;

    // Opening tick: velocity bump, window opens, no score
    s = tick(&s, &idle(), &mut rng);
    assert!(s.flash.active);
    assert_eq!(s.score_ticks, 500);

    for _ in 0..FLASH_DURATION {
        s = tick(&s, &idle(), &mut rng);
        assert!(s.flash.active);
        assert_eq!(s.score_ticks, 500);
    }

    // Window closes and scoring resumes in the same tick
    s = tick(&s, &idle(), &mut rng);
    assert!(!s.flash.active);
    assert_eq!(s.score_ticks, 501);
    assert_eq!(s.velocity, INITIAL_VELOCITY + VELOCITY_STEP);
}

#[test]
fn flash_toggles_readout_every_interval() {
    let mut flash = ScoreFlash {
        active: true,
        counter: 0,
        visible: false,
    };
    let mut seen = Vec::new();
    for _ in 0..12 {
        flash = scoring::step_flash(&flash);
        seen.push(flash.visible);
    }
    let expected: Vec<bool> = (1..=12).map(|c| (5..10).contains(&c)).collect();
    assert_eq!(seen, expected);
}

#[test]
fn inactive_flash_is_unchanged() {
    let flash = ScoreFlash::default();
    assert_eq!(scoring::step_flash(&flash), flash);
}

#[test]
fn five_hundred_idle_ticks_reach_one_hundred() {
    let mut rng = seeded_rng();
    let s = run(&make_state(), &idle(), 500, &mut rng);
    assert_eq!(s.score(), 100.0);
    assert_eq!(s.last_milestone, 0);

    // The milestone pause holds the score for the flash window
    let s = run(&s, &idle(), 40, &mut rng);
    assert!(s.score() > 100.0 && s.score() < 101.0, "score {}", s.score());
    assert_eq!(s.last_milestone, 100);
    assert_eq!(s.velocity, INITIAL_VELOCITY + VELOCITY_STEP);
    assert_eq!(s.status, GameStatus::Playing);
}

// ── Collision & game over ─────────────────────────────────────────────────────

#[test]
fn overlap_latches_game_over() {
    let mut s = make_state();
    s.score_ticks = 211; // 42.2
    s.obstacles.push(cactus_at(100.0, 32.0));
    let s2 = tick(&s, &idle(), &mut seeded_rng());

    assert_eq!(s2.status, GameStatus::GameOver);
    assert_eq!(s2.player.state, PlayerState::Dead);
    assert_eq!(s2.player.sprite(), PlayerSprite::Dead);
    assert_eq!(s2.reset_control(), Some(reset_control_rect()));
    assert_eq!(s2.events, vec![GameEvent::GameOver { score: 42 }]);
}

#[test]
fn game_over_freezes_every_entity() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.obstacles.push(cactus_at(100.0, 32.0));
    let over = tick(&s, &idle(), &mut rng);
    let later = run(&over, &duck(), 30, &mut rng);

    assert_eq!(later.floor, over.floor);
    assert_eq!(later.clouds, over.clouds);
    assert_eq!(later.obstacles, over.obstacles);
    assert_eq!(later.player, over.player);
    assert_eq!(later.score_ticks, over.score_ticks);
    assert!(later.obstacles.len() == 1);
}

#[test]
fn jump_ignored_after_game_over() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.obstacles.push(cactus_at(100.0, 32.0));
    let over = tick(&s, &idle(), &mut rng);
    let s2 = tick(&over, &jump(), &mut rng);
    assert_eq!(s2.player.velocity, 0.0);
    assert_eq!(s2.player.y, over.player.y);
}

#[test]
fn multiple_overlaps_count_once() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.obstacles.push(cactus_at(100.0, 32.0));
    s.obstacles.push(cactus_at(110.0, 64.0));
    let s2 = tick(&s, &idle(), &mut rng);
    let s3 = tick(&s2, &idle(), &mut rng);
    let overs = s2
        .events
        .iter()
        .chain(s3.events.iter())
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(overs, 1);
}

#[test]
fn no_spawn_after_game_over() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.autospawn = true;
    s.obstacles.push(cactus_at(100.0, 32.0));
    let over = tick(&s, &idle(), &mut rng);
    // Move the obstacle out of the gate zone; still nothing spawns
    let mut frozen = over.clone();
    frozen.obstacles[0].x = -10.0;
    let s2 = tick(&frozen, &idle(), &mut rng);
    assert_eq!(s2.obstacles.len(), 1);
}

#[test]
fn cloud_never_collides() {
    let mut s = make_state();
    s.clouds = vec![Cloud { x: 90.0, top: 150.0 }];
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Playing);
}

// ── Reset ─────────────────────────────────────────────────────────────────────

fn crashed_late_game() -> GameState {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.score_ticks = 3673; // 734.6
    s.last_milestone = 700;
    s.velocity = 11.5;
    s.high_score = 900;
    for f in s.floor.iter_mut() {
        f.velocity = 11.5;
    }
    s.obstacles.push(Obstacle {
        velocity: 11.5,
        ..cactus_at(100.0, 64.0)
    });
    s.obstacles.push(Obstacle {
        velocity: 11.5,
        ..cactus_at(400.0, 32.0)
    });
    tick(&s, &idle(), &mut rng)
}

#[test]
fn reset_restores_initial_run() {
    let over = crashed_late_game();
    assert!(over.is_game_over());

    let s = reset_game(&over);
    assert!(s.obstacles.is_empty());
    assert_eq!(s.score_ticks, 0);
    assert_eq!(s.last_milestone, 0);
    assert_eq!(s.player, Player::spawn());
    assert_eq!(s.velocity, INITIAL_VELOCITY);
    assert!(s.floor.iter().all(|f| f.velocity == INITIAL_VELOCITY));
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.reset_control(), None);
    assert!(!s.flash.active);
    assert_eq!(s.high_score, 900);
    assert_eq!(s.clouds, over.clouds);
}

#[test]
fn jump_release_resets_after_game_over() {
    let over = crashed_late_game();
    let release = TickInput {
        jump_released: true,
        ..TickInput::default()
    };
    let s = tick(&over, &release, &mut seeded_rng());

    assert!(s.events.contains(&GameEvent::Reset));
    assert_eq!(s.status, GameStatus::Playing);
    assert!(s.obstacles.is_empty());
    assert_eq!(s.velocity, INITIAL_VELOCITY);
    assert_eq!(s.player.y, PLAYER_START_Y);
    // First tick of the new run already scored
    assert_eq!(s.score(), SCORE_PER_TICK);
}

#[test]
fn click_on_reset_control_resets() {
    let over = crashed_late_game();
    let click = TickInput {
        click: Some(RESET_CONTROL_CENTER),
        ..TickInput::default()
    };
    assert!(wants_reset(&over, &click));
    let s = tick(&over, &click, &mut seeded_rng());
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn click_outside_reset_control_is_ignored() {
    let over = crashed_late_game();
    let click = TickInput {
        click: Some((10.0, 10.0)),
        ..TickInput::default()
    };
    assert!(!wants_reset(&over, &click));
    let s = tick(&over, &click, &mut seeded_rng());
    assert_eq!(s.status, GameStatus::GameOver);
}

#[test]
fn release_while_playing_does_nothing() {
    let s = make_state();
    let release = TickInput {
        jump_released: true,
        click: Some(RESET_CONTROL_CENTER),
        ..TickInput::default()
    };
    assert!(!wants_reset(&s, &release));
    let s2 = tick(&s, &release, &mut seeded_rng());
    assert!(!s2.events.contains(&GameEvent::Reset));
}

#[test]
fn milestones_work_again_after_reset() {
    let mut rng = seeded_rng();
    let mut s = reset_game(&crashed_late_game());
    s.autospawn = false;
    s.score_ticks = 499;
    let s = run(&s, &idle(), 3, &mut rng);
    assert_eq!(s.last_milestone, 100);
    assert_eq!(s.velocity, INITIAL_VELOCITY + VELOCITY_STEP);
}
