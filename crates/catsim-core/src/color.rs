//! Coat colours and lenient interpretation of free-text colour input.
//!
//! Only five coat colours are recognised. Input that is close to one of them
//! (a typo, stray capitals, surrounding whitespace) is interpreted as that
//! colour; anything else degrades to "no colour" instead of failing.
//!
//! Closeness is the Ratcliff/Obershelp ratio `2 * M / T`, where `M` counts
//! the characters in matching blocks and `T` is the combined length of both
//! strings.
//!
//! ```
//! use catsim_core::color::{Color, ColorMatcher};
//!
//! let matcher = ColorMatcher::default();
//! assert_eq!(matcher.interpret("Tabby "), Some(Color::Tabby));
//! assert_eq!(matcher.interpret("tortoishell"), Some(Color::Tortoiseshell));
//! assert_eq!(matcher.interpret("purple"), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default similarity a candidate must reach to be accepted.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// A canonical coat colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Tabby,
    Black,
    Orange,
    Tortoiseshell,
    Tuxedo,
}

impl Color {
    /// Every canonical colour, in match priority order.
    pub const ALL: [Color; 5] = [
        Color::Tabby,
        Color::Black,
        Color::Orange,
        Color::Tortoiseshell,
        Color::Tuxedo,
    ];

    /// The canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tabby => "tabby",
            Self::Black => "black",
            Self::Orange => "orange",
            Self::Tortoiseshell => "tortoiseshell",
            Self::Tuxedo => "tuxedo",
        }
    }

    /// Interpret free-text input with the default cutoff.
    #[must_use]
    pub fn interpret(input: &str) -> Option<Self> {
        ColorMatcher::default().interpret(input)
    }

    /// Comma-separated list of the canonical names.
    #[must_use]
    pub fn valid_options() -> String {
        Self::ALL
            .iter()
            .map(Color::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fuzzy matcher from free text to a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatcher {
    /// Minimum similarity in `[0, 1]` for a match to be accepted.
    pub cutoff: f64,
}

impl Default for ColorMatcher {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl ColorMatcher {
    /// Creates a matcher with a custom cutoff.
    #[must_use]
    pub const fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    /// Returns the closest canonical colour, or `None` when nothing reaches
    /// the cutoff. Ties go to the colour listed first in [`Color::ALL`].
    pub fn interpret(&self, input: &str) -> Option<Color> {
        let normalized = input.trim().to_lowercase();
        let best = self.closest(&normalized);

        match best {
            Some(color) => {
                tracing::info!("Color '{}' interpreted as '{}'", input, color);
            }
            None => {
                tracing::warn!(
                    "Invalid color '{}'. Valid options are: {}",
                    input,
                    Color::valid_options()
                );
            }
        }

        best
    }

    fn closest(&self, normalized: &str) -> Option<Color> {
        let mut best: Option<(Color, f64)> = None;
        for color in Color::ALL {
            // The ratio is not symmetric; the candidate is scored first.
            let score = similarity(color.as_str(), normalized);
            if score < self.cutoff {
                continue;
            }
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((color, score));
            }
        }
        best.map(|(color, _)| color)
    }
}

/// Ratcliff/Obershelp similarity of two strings, in `[0, 1]`.
///
/// Two empty strings are identical and score 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_characters(&a[..i], &b[..j])
        + matching_characters(&a[i + len..], &b[j + len..])
}

/// Longest common contiguous block as `(start_in_a, start_in_b, len)`,
/// preferring the earliest block in `a`.
fn longest_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                row[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = row;
    }
    best
}
