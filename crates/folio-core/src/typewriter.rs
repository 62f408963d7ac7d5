//! Typed hero title effect.
//!
//! Types a phrase one character at a time, pauses, erases it, then moves on
//! to the next phrase, forever. The shell calls [`Typewriter::tick`], shows
//! the returned text and sleeps for the returned delay.

use std::time::Duration;

/// Delay before the first tick so the page settles first
pub const START_DELAY: Duration = Duration::from_millis(1200);

const TYPE_SPEED: Duration = Duration::from_millis(80);
const DELETE_SPEED: Duration = Duration::from_millis(50);
const FULL_PHRASE_PAUSE: Duration = Duration::from_millis(2000);
const NEXT_PHRASE_PAUSE: Duration = Duration::from_millis(400);

/// One rendered step of the animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// How long to wait before the next tick
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    /// Empty phrases are dropped; with none left every tick is an empty frame.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().chars().collect::<Vec<_>>())
                .filter(|p| !p.is_empty())
                .collect(),
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Index of the phrase currently being typed or erased
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Advance one step.
    pub fn tick(&mut self) -> Frame {
        let Some(current) = self.phrases.get(self.phrase) else {
            return Frame {
                text: String::new(),
                delay: NEXT_PHRASE_PAUSE,
            };
        };
        let len = current.len();
        let mut pause = None;

        let text: String = if !self.deleting {
            self.chars = (self.chars + 1).min(len);
            let text = current[..self.chars].iter().collect();
            if self.chars == len {
                self.deleting = true;
                pause = Some(FULL_PHRASE_PAUSE);
            }
            text
        } else {
            self.chars = self.chars.saturating_sub(1);
            let text = current[..self.chars].iter().collect();
            if self.chars == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                pause = Some(NEXT_PHRASE_PAUSE);
            }
            text
        };

        let speed = if self.deleting { DELETE_SPEED } else { TYPE_SPEED };
        Frame {
            text,
            delay: pause.unwrap_or(speed),
        }
    }
}
