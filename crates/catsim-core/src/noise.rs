//! The noises a cat can make and the audio capability that plays them.
//!
//! Rendering a noise as text is pure. Playing one is a side effect owned by
//! the caller: the cat only hands a sound file name to an [`AudioSink`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatError;

/// A registered cat noise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Noise {
    #[default]
    Meow,
    Purr,
    Hiss,
    Chirrup,
    Chatter,
}

impl Noise {
    /// Every registered noise, in registry order.
    pub const ALL: [Noise; 5] = [
        Noise::Meow,
        Noise::Purr,
        Noise::Hiss,
        Noise::Chirrup,
        Noise::Chatter,
    ];

    /// The registry key used to look the noise up.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Meow => "meow",
            Self::Purr => "purr",
            Self::Hiss => "hiss",
            Self::Chirrup => "chirrup",
            Self::Chatter => "chatter",
        }
    }

    /// Textual rendering of the sound.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Meow => "Meow!",
            Self::Purr => "Purrr",
            Self::Hiss => "Hiss..",
            Self::Chirrup => "Chirrup",
            Self::Chatter => "chattering",
        }
    }

    /// Sound file handed to an [`AudioSink`].
    #[must_use]
    pub const fn sound_file(&self) -> &'static str {
        match self {
            Self::Meow => "meow.mp3",
            Self::Purr => "purr.mp3",
            Self::Hiss => "hissing.mp3",
            Self::Chirrup => "chirrup.mp3",
            Self::Chatter => "chattering.mp3",
        }
    }

    fn valid_options() -> String {
        Self::ALL
            .iter()
            .map(Noise::key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Noise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Noise {
    type Err = CatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|noise| noise.key() == s)
            .ok_or_else(|| CatError::InvalidNoise {
                noise: s.to_string(),
                valid: Self::valid_options(),
            })
    }
}

/// Capability for audible playback.
///
/// Failures are the sink's business; the cat does not observe them.
pub trait AudioSink {
    /// Play the named sound file.
    fn play(&self, sound_file: &str);
}

/// Sink that records playback requests as tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAudioSink;

impl AudioSink for LoggingAudioSink {
    fn play(&self, sound_file: &str) {
        tracing::info!(sound_file, "playing cat noise");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_key() {
        for noise in Noise::ALL {
            assert_eq!(noise.key().parse::<Noise>().unwrap(), noise);
        }
    }

    #[test]
    fn chatter_is_registered() {
        let noise: Noise = "chatter".parse().unwrap();
        assert_eq!(noise.text(), "chattering");
        assert_eq!(noise.sound_file(), "chattering.mp3");
    }

    #[test]
    fn unknown_noise_names_valid_options() {
        let err = "bark".parse::<Noise>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'bark'"));
        assert!(msg.contains("meow, purr, hiss, chirrup, chatter"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert!("Meow".parse::<Noise>().is_err());
    }

    #[test]
    fn default_is_meow() {
        assert_eq!(Noise::default(), Noise::Meow);
        assert_eq!(Noise::default().text(), "Meow!");
    }

    #[test]
    fn texts() {
        assert_eq!(Noise::Purr.text(), "Purrr");
        assert_eq!(Noise::Hiss.text(), "Hiss..");
        assert_eq!(Noise::Chirrup.text(), "Chirrup");
        assert_eq!(Noise::Hiss.sound_file(), "hissing.mp3");
    }
}
