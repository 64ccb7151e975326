//! Terminal input → per-tick `TickInput`.
//!
//! Instead of acting on each key event individually, `KeyTracker` records
//! the frame of the last press/repeat event for every key. A key counts as
//! held while that frame is within `HOLD_WINDOW` of the current one.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): real `Release`
//!   events remove keys immediately.
//! * **Classic terminals**: only `Press` events, OS key-repeat shows as
//!   repeated presses. Keys expire after `HOLD_WINDOW` frames of silence,
//!   and that expiry doubles as the jump-key release.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::compute::TickInput;
use crate::consts::{CELL_HEIGHT, CELL_WIDTH, FIELD_COLS, FIELD_ROWS, FIELD_TOP_ROW};

/// 8 frames at 60 Hz ≈ 133 ms, shorter than any OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 8;

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Char(' '), KeyCode::Up];
const DUCK_KEYS: [KeyCode; 1] = [KeyCode::Down];

/// Map a terminal cell to the logical point at its centre. `None` outside
/// the play field.
pub fn cell_to_logical(column: u16, row: u16) -> Option<(f32, f32)> {
    if column >= FIELD_COLS || row < FIELD_TOP_ROW || row >= FIELD_TOP_ROW + FIELD_ROWS {
        return None;
    }
    let x = column as f32 * CELL_WIDTH + CELL_WIDTH / 2.0;
    let y = (row - FIELD_TOP_ROW) as f32 * CELL_HEIGHT + CELL_HEIGHT / 2.0;
    Some((x, y))
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    jump_was_held: bool,
    release_seen: bool,
    click: Option<(f32, f32)>,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &Event, frame: u64) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) => self.handle_key(*code, *kind, *modifiers, frame),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(point) = cell_to_logical(*column, *row) {
                    self.click = Some(point);
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode, kind: KeyEventKind, modifiers: KeyModifiers, frame: u64) {
        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(code, frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                if self.key_frame.remove(&code).is_some() && JUMP_KEYS.contains(&code) {
                    self.release_seen = true;
                }
            }
        }
    }

    fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Sample the input for `frame` and clear the one-shot parts (release,
    /// click). A release is reported once, whether it came from a real
    /// release event or from the hold window lapsing.
    pub fn take_input(&mut self, frame: u64) -> TickInput {
        let jump = self.any_held(&JUMP_KEYS, frame);
        let duck = self.any_held(&DUCK_KEYS, frame);
        let jump_released = self.release_seen || (self.jump_was_held && !jump);

        self.jump_was_held = jump;
        self.release_seen = false;
        self.key_frame
            .retain(|_, last| frame.saturating_sub(*last) <= HOLD_WINDOW);

        TickInput {
            jump,
            duck,
            jump_released,
            click: self.click.take(),
        }
    }
}
