//! Looping "typing" placeholder shown while the gallery is empty
//!
//! Types a fixed string one character at a time, holds it, erases it and
//! starts again. Purely cosmetic: it never triggers a refetch.

use std::time::Duration;

pub const PLACEHOLDER_TEXT: &str = "Loading project details...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Erasing,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    chars: Vec<char>,
    typing_speed: Duration,
    erasing_speed: Duration,
    hold: Duration,
    /// Number of characters currently visible
    index: usize,
    phase: Phase,
    /// Time accumulated towards the next step
    pending: Duration,
}

impl Default for TypingEffect {
    fn default() -> Self {
        Self::new(
            PLACEHOLDER_TEXT,
            Duration::from_millis(100),
            Duration::from_millis(50),
            Duration::from_millis(1000),
        )
    }
}

impl TypingEffect {
    pub fn new(text: &str, typing_speed: Duration, erasing_speed: Duration, hold: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            typing_speed,
            erasing_speed,
            hold,
            index: 0,
            phase: Phase::Typing,
            pending: Duration::ZERO,
        }
    }

    /// The currently visible prefix
    pub fn visible(&self) -> String {
        self.chars[..self.index].iter().collect()
    }

    /// Consume elapsed time, stepping through as many transitions as it covers
    pub fn advance(&mut self, elapsed: Duration) {
        if self.chars.is_empty() {
            return;
        }

        self.pending += elapsed;
        loop {
            let step = self.step_duration();
            if self.pending < step {
                break;
            }
            self.pending -= step;
            self.step();
        }
    }

    fn step_duration(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.typing_speed,
            Phase::Holding => self.hold,
            Phase::Erasing => self.erasing_speed,
        }
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                self.index += 1;
                if self.index == self.chars.len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Erasing,
            Phase::Erasing => {
                self.index -= 1;
                if self.index == 0 {
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect() -> TypingEffect {
        TypingEffect::new(
            "abc",
            Duration::from_millis(100),
            Duration::from_millis(50),
            Duration::from_millis(1000),
        )
    }

    #[test]
    fn test_types_one_char_per_interval() {
        let mut typing = effect();
        assert_eq!(typing.visible(), "");

        typing.advance(Duration::from_millis(99));
        assert_eq!(typing.visible(), "");

        typing.advance(Duration::from_millis(1));
        assert_eq!(typing.visible(), "a");

        typing.advance(Duration::from_millis(200));
        assert_eq!(typing.visible(), "abc");
    }

    #[test]
    fn test_holds_then_erases_then_loops() {
        let mut typing = effect();
        typing.advance(Duration::from_millis(300));
        assert_eq!(typing.visible(), "abc");

        // Still holding just before the hold expires
        typing.advance(Duration::from_millis(999));
        assert_eq!(typing.visible(), "abc");

        typing.advance(Duration::from_millis(1));
        typing.advance(Duration::from_millis(50));
        assert_eq!(typing.visible(), "ab");

        typing.advance(Duration::from_millis(100));
        assert_eq!(typing.visible(), "");

        // Starts typing again
        typing.advance(Duration::from_millis(100));
        assert_eq!(typing.visible(), "a");
    }

    #[test]
    fn test_default_uses_placeholder_text() {
        let mut typing = TypingEffect::default();
        typing.advance(Duration::from_millis(100) * PLACEHOLDER_TEXT.len() as u32);
        assert_eq!(typing.visible(), PLACEHOLDER_TEXT);
    }
}
