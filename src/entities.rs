//! Game entity types: plain data plus geometry accessors, no simulation.
use crate::consts::*;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in logical units, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Build a box anchored by its bottom-left corner.
    pub fn from_bottom_left(x: f32, bottom: f32, w: f32, h: f32) -> Self {
        Rect { x, y: bottom - h, w, h }
    }

    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Rect { x: cx - w / 2.0, y: cy - h / 2.0, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open containment (left/top edges inside, right/bottom outside).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    /// Initial pose; never re-entered once the run starts.
    Static,
    Running,
    Jumping,
    Ducking,
    Dead,
}

/// The seven player images, indexed by the animation cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSprite {
    Static,
    Run1,
    Run2,
    Jump,
    Duck1,
    Duck2,
    Dead,
}

impl PlayerSprite {
    /// Truncate the (possibly fractional) cursor to a sprite. Negative
    /// cursors select the death sprite.
    pub fn from_frame(frame: f32) -> Self {
        if frame < 0.0 {
            return PlayerSprite::Dead;
        }
        match frame as u32 {
            0 => PlayerSprite::Static,
            1 => PlayerSprite::Run1,
            2 => PlayerSprite::Run2,
            3 => PlayerSprite::Jump,
            4 => PlayerSprite::Duck1,
            5 => PlayerSprite::Duck2,
            _ => PlayerSprite::Dead,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        match self {
            PlayerSprite::Duck1 | PlayerSprite::Duck2 => (PLAYER_DUCK_WIDTH, PLAYER_DUCK_HEIGHT),
            _ => (PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Left edge; never changes.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    pub velocity: f32,
    /// Velocity at the start of the previous integration step.
    pub last_velocity: f32,
    /// Animation cursor, fractional during the run cycle.
    pub frame: f32,
    pub state: PlayerState,
}

impl Player {
    pub fn spawn() -> Self {
        Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            velocity: 0.0,
            last_velocity: 0.0,
            frame: FRAME_RUN_FIRST,
            state: PlayerState::Running,
        }
    }

    pub fn sprite(&self) -> PlayerSprite {
        PlayerSprite::from_frame(self.frame)
    }

    pub fn rect(&self) -> Rect {
        let (w, h) = self.sprite().size();
        Rect::from_bottom_left(self.x, self.y, w, h)
    }

    pub fn is_alive(&self) -> bool {
        self.state != PlayerState::Dead
    }
}

// ── Scrolling entities ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct FloorSegment {
    pub x: f32,
    pub velocity: f32,
}

impl FloorSegment {
    pub fn rect(&self) -> Rect {
        Rect::from_bottom_left(self.x, FLOOR_BOTTOM, FLOOR_WIDTH, FLOOR_HEIGHT)
    }
}

/// Background decoration; scrolls at a constant speed and never collides.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub top: f32,
}

impl Cloud {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.top, CLOUD_WIDTH, CLOUD_HEIGHT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CactusVariant {
    Single,
    Double,
    Cluster,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObstacleKind {
    /// Ground obstacle; square, bottom on the ground line.
    Cactus { variant: CactusVariant, size: f32 },
    /// Flying obstacle; `wing_frame` alternates 0/1 every tick.
    Flyer { altitude: f32, wing_frame: u8 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub velocity: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        match self.kind {
            ObstacleKind::Cactus { size, .. } => {
                Rect::from_bottom_left(self.x, GROUND_LINE, size, size)
            }
            ObstacleKind::Flyer { altitude, .. } => {
                Rect::from_bottom_left(self.x, altitude, FLYER_WIDTH, FLYER_HEIGHT)
            }
        }
    }
}

// ── Score flash ───────────────────────────────────────────────────────────────

/// Blink cycle of the score readout after each milestone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreFlash {
    pub active: bool,
    pub counter: u32,
    /// Readout phase; carried over between windows.
    pub visible: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Simulation clock handed to every entity update. `Frozen` suspends all
/// motion and animation at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    Running,
    Frozen,
}

impl Clock {
    pub fn is_running(self) -> bool {
        self == Clock::Running
    }
}

/// Things that happened during the most recent tick.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// The score crossed this multiple of 100.
    Milestone(u32),
    /// The run ended with this truncated score.
    GameOver { score: u32 },
    Reset,
    ObstacleSpawned,
}

/// The entire game state. Cloneable so `tick` can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub floor: Vec<FloorSegment>,
    pub clouds: Vec<Cloud>,
    pub obstacles: Vec<Obstacle>,
    /// Ticks that have scored so far. Kept as an integer so truncation and
    /// milestones are exact.
    pub score_ticks: u64,
    /// Last milestone already acted upon.
    pub last_milestone: u32,
    /// Scroll speed of floor and obstacles. Written only by the scoring
    /// controller and by reset.
    pub velocity: f32,
    pub flash: ScoreFlash,
    pub status: GameStatus,
    /// Best score known to the driver; shown in the HUD when non-zero.
    pub high_score: u32,
    /// When false, no obstacles are generated.
    pub autospawn: bool,
    pub frame: u64,
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn clock(&self) -> Clock {
        match self.status {
            GameStatus::Playing => Clock::Running,
            GameStatus::GameOver => Clock::Frozen,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> f64 {
        self.score_ticks as f64 * SCORE_PER_TICK
    }

    /// Score truncated to an integer.
    pub fn display_score(&self) -> u32 {
        (self.score_ticks / TICKS_PER_POINT) as u32
    }

    /// Whether the score readout is drawn this tick.
    pub fn score_visible(&self) -> bool {
        !self.flash.active || self.flash.visible
    }

    pub fn reset_control(&self) -> Option<Rect> {
        self.is_game_over().then(reset_control_rect)
    }
}

/// Bounds of the reset control shown on the game-over screen.
pub fn reset_control_rect() -> Rect {
    let (cx, cy) = RESET_CONTROL_CENTER;
    Rect::from_center(cx, cy, RESET_CONTROL_WIDTH, RESET_CONTROL_HEIGHT)
}

/// Zero-pad a score to the fixed HUD width.
pub fn format_score(score: u32) -> String {
    format!("{:0width$}", score, width = SCORE_DIGITS)
}
