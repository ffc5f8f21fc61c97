use crate::app::interaction::HitAreaRegistry;
use crate::calc::{reducer, Action, CalcState};
use crate::config::AppConfig;
use chrono::Local;
use ratatui::layout::Rect;

/// One evaluated expression, kept for the session-only tape panel.
#[derive(Debug, Clone)]
pub struct TapeEntry {
    pub timestamp: String,
    pub expression: String,
    pub result: String,
}

/// A button flash after a click, cleared a few ticks later.
#[derive(Debug, Clone, Copy)]
pub struct PressedButton {
    pub rect: Rect,
    pub expires_at: u64,
}

/// How many ticks a clicked button stays highlighted.
const PRESS_FLASH_TICKS: u64 = 3;

pub struct AppState {
    pub config: AppConfig,
    /// The single calculator snapshot, replaced wholesale on each action.
    pub calc: CalcState,
    pub tape: Vec<TapeEntry>,
    pub hit_areas: HitAreaRegistry,
    pub pressed: Option<PressedButton>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            calc: CalcState::default(),
            tape: Vec::new(),
            hit_areas: HitAreaRegistry::new(),
            pressed: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Apply one calculator action: compute the next snapshot and install
    /// it. An evaluation that actually fires is recorded on the tape.
    pub fn dispatch(&mut self, action: Action) {
        if action == Action::Evaluate {
            if let Some(expression) = self.pending_expression() {
                let next = reducer::transition(&self.calc, &action);
                if let Some(result) = next.current_operand.clone() {
                    self.record_tape_entry(expression, result);
                }
                self.calc = next;
                self.dirty = true;
                return;
            }
        }
        self.calc = reducer::transition(&self.calc, &action);
        self.dirty = true;
    }

    /// The fully formed expression about to be evaluated, if there is one.
    fn pending_expression(&self) -> Option<String> {
        let prev = self.calc.previous_operand.as_deref()?;
        let current = self.calc.current_operand.as_deref()?;
        let op = self.calc.operation?;
        Some(format!("{} {} {}", prev, op.symbol(), current))
    }

    fn record_tape_entry(&mut self, expression: String, result: String) {
        let entry = TapeEntry {
            timestamp: Local::now()
                .format(&self.config.ui.timestamp_format)
                .to_string(),
            expression,
            result,
        };
        self.tape.push(entry);
        let max = self.config.ui.max_tape_entries;
        if self.tape.len() > max {
            let excess = self.tape.len() - max;
            self.tape.drain(..excess);
        }
    }

    /// Flash the clicked button for a few ticks.
    pub fn press_button(&mut self, rect: Rect) {
        self.pressed = Some(PressedButton {
            rect,
            expires_at: self.tick_count + PRESS_FLASH_TICKS,
        });
        self.dirty = true;
    }

    /// Age out an expired button flash. Returns true if the highlight
    /// changed and a redraw is needed.
    pub fn expire_pressed(&mut self) -> bool {
        match self.pressed {
            Some(p) if self.tick_count >= p.expires_at => {
                self.pressed = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.pressed.is_some_and(|p| p.rect == rect)
    }
}
