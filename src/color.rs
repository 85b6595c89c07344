//! Meteor colors and per-actor score cards.
//!
//! Scores are kept in a fixed array indexed by color so that ranking is
//! deterministic: ties on score fall back to the declaration order of
//! [`MeteorColor`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color of a meteor and the score bucket it credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeteorColor {
    /// Red meteors.
    Red,
    /// Green meteors.
    Green,
    /// Blue meteors.
    Blue,
}

impl MeteorColor {
    /// Every color in declaration order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Number of distinct colors.
    pub const COUNT: usize = Self::ALL.len();

    const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl fmt::Display for MeteorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Accumulated score per color for one actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    points: [u32; MeteorColor::COUNT],
}

impl ScoreCard {
    /// Builds a card from explicit `(color, score)` pairs; unlisted colors
    /// start at zero.
    ///
    /// # Examples
    /// ```
    /// use forager::{MeteorColor, ScoreCard};
    /// let card = ScoreCard::from_pairs([(MeteorColor::Red, 2), (MeteorColor::Blue, 1)]);
    /// assert_eq!(card.get(MeteorColor::Red), 2);
    /// assert_eq!(card.get(MeteorColor::Green), 0);
    /// ```
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (MeteorColor, u32)>,
    {
        let mut card = Self::default();
        for (color, score) in pairs {
            card.set(color, score);
        }
        card
    }

    /// Score currently held for `color`.
    #[must_use]
    pub fn get(&self, color: MeteorColor) -> u32 {
        self.points.get(color.index()).copied().unwrap_or_default()
    }

    /// Overwrites the score for `color`.
    pub fn set(&mut self, color: MeteorColor, score: u32) {
        if let Some(slot) = self.points.get_mut(color.index()) {
            *slot = score;
        }
    }

    /// Credits `points` to `color`, saturating at `u32::MAX`.
    pub fn add(&mut self, color: MeteorColor, points: u32) {
        let total = self.get(color).saturating_add(points);
        self.set(color, total);
    }

    /// Colors ordered by ascending score, ties broken by declaration order.
    #[must_use]
    pub fn ranked(&self) -> [MeteorColor; MeteorColor::COUNT] {
        let mut colors = MeteorColor::ALL;
        // Stable sort keeps declaration order for equal scores.
        colors.sort_by_key(|c| self.get(*c));
        colors
    }

    /// The lowest-scoring color and its score.
    ///
    /// # Examples
    /// ```
    /// use forager::{MeteorColor, ScoreCard};
    /// let card = ScoreCard::from_pairs([(MeteorColor::Red, 4), (MeteorColor::Green, 1), (MeteorColor::Blue, 1)]);
    /// assert_eq!(card.lowest(), (MeteorColor::Green, 1));
    /// ```
    #[must_use]
    pub fn lowest(&self) -> (MeteorColor, u32) {
        let [first, ..] = self.ranked();
        (first, self.get(first))
    }

    /// Sum over all colors.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| u64::from(*p)).sum()
    }
}

impl fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for color in MeteorColor::ALL {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{color}={}", self.get(color))?;
        }
        Ok(())
    }
}
