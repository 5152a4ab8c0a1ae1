//! Hover animation for the site owner's name: while hovered, a few random
//! letters are highlighted and the selection changes on every tick.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::SliceRandom;

use super::Ticker;

/// How often the highlighted letters change.
pub const NAME_INTERVAL: Duration = Duration::from_millis(400);

const MAX_HIGHLIGHTED: usize = 3;

/// Highlight state for one name.
#[derive(Debug, Clone)]
pub struct NameHighlighter {
    name: String,
    letters: Vec<usize>,
    ticker: Ticker,
    highlighted: BTreeSet<usize>,
}

impl NameHighlighter {
    /// An idle highlighter for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_interval(name, NAME_INTERVAL)
    }

    /// An idle highlighter with a custom tick interval.
    pub fn with_interval(name: impl Into<String>, interval: Duration) -> Self {
        let name = name.into();
        let letters = name
            .chars()
            .enumerate()
            .filter(|(_, c)| *c != ' ')
            .map(|(i, _)| i)
            .collect();

        Self {
            name,
            letters,
            ticker: Ticker::new(interval),
            highlighted: BTreeSet::new(),
        }
    }

    /// Pointer entered: start ticking from `now`.
    pub fn start(&mut self, now: Instant) {
        self.ticker.start(now);
    }

    /// Pointer left or component torn down: stop and clear all highlights.
    pub fn stop(&mut self) {
        self.ticker.stop();
        self.highlighted.clear();
    }

    /// Pick a new set of 1-3 letters if a tick is due.
    ///
    /// Returns the new selection when it changed, `None` otherwise.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<&BTreeSet<usize>> {
        if !self.ticker.poll(now) {
            return None;
        }

        let count = rng.gen_range(1..=MAX_HIGHLIGHTED);
        self.highlighted = self
            .letters
            .choose_multiple(rng, count)
            .copied()
            .collect();
        Some(&self.highlighted)
    }

    /// Whether the animation is running.
    pub fn is_active(&self) -> bool {
        self.ticker.is_running()
    }

    /// Character indices currently highlighted.
    pub fn highlighted(&self) -> &BTreeSet<usize> {
        &self.highlighted
    }

    /// The name, paired per character with its highlight flag.
    pub fn letters(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.name
            .chars()
            .enumerate()
            .map(|(i, c)| (c, self.highlighted.contains(&i)))
    }
}
