//! Never Have I Ever: a fixed deck played one question at a time.
//!
//! Pure state, no I/O. Normal mode ends after the last question;
//! infinite mode cycles the deck by index forever.

use serde::{Deserialize, Serialize};

/// The question deck.
pub const QUESTIONS: &[&str] = &[
    "Never have I ever... lied about my age",
    "Never have I ever... eaten something that fell on the floor",
    "Never have I ever... pretended to be sick to skip work/school",
    "Never have I ever... danced in public",
    "Never have I ever... sung in the shower",
    "Never have I ever... stayed up all night",
    "Never have I ever... eaten dessert for breakfast",
    "Never have I ever... talked to myself",
    "Never have I ever... laughed so hard I cried",
    "Never have I ever... made a prank call",
    "Never have I ever... worn clothes inside out",
    "Never have I ever... eaten ice cream in winter",
    "Never have I ever... forgotten someone's name",
    "Never have I ever... danced in the rain",
    "Never have I ever... eaten pizza for breakfast",
    "Never have I ever... watched a movie twice in one day",
    "Never have I ever... slept in my clothes",
    "Never have I ever... eaten something spicy and regretted it",
    "Never have I ever... laughed at my own joke",
    "Never have I ever... taken a selfie",
];

/// One running game of Never Have I Ever.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NhieGame {
    current: usize,
    score: u32,
    infinite: bool,
    finished: bool,
}

impl NhieGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question currently on the table, or None once a normal-mode
    /// game has finished.
    pub fn current_question(&self) -> Option<&'static str> {
        if self.finished {
            return None;
        }
        QUESTIONS.get(self.current).copied()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record an answer ("I have" scores a point) and advance the deck.
    pub fn answer(&mut self, have_done_it: bool) {
        if self.finished {
            return;
        }
        if have_done_it {
            self.score += 1;
        }

        if self.infinite {
            self.current = (self.current + 1) % QUESTIONS.len();
        } else if self.current + 1 < QUESTIONS.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
    }

    /// Toggle infinite mode. Starts the game over.
    pub fn toggle_infinite(&mut self) {
        self.infinite = !self.infinite;
        self.reset();
    }

    /// Back to the first question with a clean score.
    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
        self.finished = false;
    }
}
