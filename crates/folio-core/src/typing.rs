//! Hero subtitle typing effect.
//!
//! Types a word out one character at a time, holds it, deletes it, then
//! moves on to the next word. Each `tick` yields the text to show and how
//! long to wait before the next tick.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const DELETE_DELAY: Duration = Duration::from_millis(75);
/// Pause with the full word on screen
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
/// Pause on empty text before the next word
pub const NEXT_WORD_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingEffect {
    words: Vec<String>,
    word_index: usize,
    /// Characters currently shown
    shown: usize,
    phase: Phase,
}

/// One frame of the effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

impl TypingEffect {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            word_index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Advance by one character and return the new frame.
    pub fn tick(&mut self) -> TypingFrame {
        let Some(word) = self.words.get(self.word_index) else {
            return TypingFrame {
                text: String::new(),
                delay: NEXT_WORD_DELAY,
            };
        };
        let len = word.chars().count();

        let delay = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Deleting;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    NEXT_WORD_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        };

        let text = word.chars().take(self.shown).collect();

        if self.phase == Phase::Typing && self.shown == 0 {
            self.word_index = (self.word_index + 1) % self.words.len();
        }

        TypingFrame { text, delay }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.word_index).map(String::as_str)
    }
}
