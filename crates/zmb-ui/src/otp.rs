//! Fixed-length one-time-code input, one digit per cell.

use serde::Serialize;

pub const DEFAULT_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpInput {
    cells: Vec<Option<char>>,
    focus: usize,
}

impl Default for OtpInput {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl OtpInput {
    /// A blank input with `length` cells (at least one).
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            cells: vec![None; length.max(1)],
            focus: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(self.cells.len() - 1);
    }

    /// Type one character into the focused cell. Non-digits are rejected.
    pub fn input(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() {
            return false;
        }
        self.cells[self.focus] = Some(ch);
        if self.focus + 1 < self.cells.len() {
            self.focus += 1;
        }
        true
    }

    /// Clear the focused cell, or the previous one if it is already empty.
    pub fn backspace(&mut self) {
        if self.cells[self.focus].is_none() && self.focus > 0 {
            self.focus -= 1;
        }
        self.cells[self.focus] = None;
    }

    /// Fill cells from the focus onwards. Returns how many digits were taken.
    pub fn paste(&mut self, text: &str) -> usize {
        let mut taken = 0;
        for ch in text.chars().filter(char::is_ascii_digit) {
            self.input(ch);
            taken += 1;
            if self.focus + 1 == self.cells.len() && self.cells[self.focus].is_some() {
                break;
            }
        }
        taken
    }

    /// The code, once every cell is filled.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.cells.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.focus = 0;
    }
}
