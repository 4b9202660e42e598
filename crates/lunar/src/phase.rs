//! Phase bands for a moon age.

use std::fmt;

/// Coarse lunar phase derived from the moon age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// Age 0, 1 or 29.
    New,
    /// Age 2..=13.
    Waxing,
    /// Age 14..=16.
    Full,
    /// Age 17..=28.
    Waning,
}

impl MoonPhase {
    /// Classifies a moon age.
    ///
    /// The bands are checked in order: new (≤ 1 or ≥ 29), full (14..=16),
    /// waxing (< 15), otherwise waning.
    pub fn from_age(age: u8) -> Self {
        match age {
            0..=1 | 29.. => MoonPhase::New,
            14..=16 => MoonPhase::Full,
            2..=13 => MoonPhase::Waxing,
            _ => MoonPhase::Waning,
        }
    }

    /// English label.
    pub fn label(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::Waxing => "Waxing Moon",
            MoonPhase::Full => "Full Moon",
            MoonPhase::Waning => "Waning Moon",
        }
    }

    /// Bengali label (amavasya, shukla paksha, purnima, krishna paksha).
    pub fn bengali(self) -> &'static str {
        match self {
            MoonPhase::New => "অমাবস্যা",
            MoonPhase::Waxing => "শুক্লপক্ষ",
            MoonPhase::Full => "পূর্ণিমা",
            MoonPhase::Waning => "কৃষ্ণপক্ষ",
        }
    }

    /// Moon glyph for the phase.
    pub fn glyph(self) -> &'static str {
        match self {
            MoonPhase::New => "🌑",
            MoonPhase::Waxing => "🌒",
            MoonPhase::Full => "🌕",
            MoonPhase::Waning => "🌘",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(MoonPhase::from_age(0), MoonPhase::New);
        assert_eq!(MoonPhase::from_age(1), MoonPhase::New);
        assert_eq!(MoonPhase::from_age(2), MoonPhase::Waxing);
        assert_eq!(MoonPhase::from_age(13), MoonPhase::Waxing);
        assert_eq!(MoonPhase::from_age(14), MoonPhase::Full);
        assert_eq!(MoonPhase::from_age(16), MoonPhase::Full);
        assert_eq!(MoonPhase::from_age(17), MoonPhase::Waning);
        assert_eq!(MoonPhase::from_age(28), MoonPhase::Waning);
        assert_eq!(MoonPhase::from_age(29), MoonPhase::New);
    }

    #[test]
    fn display_has_glyph_and_label() {
        assert_eq!(MoonPhase::Full.to_string(), "🌕 Full Moon");
        assert!(!MoonPhase::Waning.to_string().is_empty());
    }
}
