//! Problem difficulty levels

use std::fmt;
use std::str::FromStr;

/// Difficulty of a DSA problem, stored in front matter as an integer 0-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Basic,
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const MIN_LEVEL: i64 = 0;
    pub const MAX_LEVEL: i64 = 4;

    pub const ALL: [Difficulty; 5] = [
        Difficulty::Basic,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Map an integer level onto a difficulty, `None` outside 0..=4
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Difficulty::Basic),
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            4 => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Basic => 0,
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Display color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Basic => "#3285fa",
            Difficulty::Easy => "#7cb342",
            Difficulty::Medium => "#ffcc32",
            Difficulty::Hard => "#f44336",
            Difficulty::Expert => "#ab47bc",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Difficulty::Basic => "🔵",
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
            Difficulty::Expert => "🟣",
        }
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = String;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| {
            format!(
                "Invalid level: {}. Levels range from {} to {}",
                level,
                Self::MIN_LEVEL,
                Self::MAX_LEVEL
            )
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the numeric level or the label (case-insensitive)
impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<i64>() {
            return Self::try_from(level);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!(
                    "Invalid level: '{}'. Use 0-4 or one of: basic, easy, medium, hard, expert",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_level_bounds() {
        assert_eq!(Difficulty::from_level(0), Some(Difficulty::Basic));
        assert_eq!(Difficulty::from_level(4), Some(Difficulty::Expert));
        assert_eq!(Difficulty::from_level(5), None);
        assert_eq!(Difficulty::from_level(-1), None);
    }

    #[test]
    fn test_level_roundtrip_for_all() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(i64::from(d.level())), Some(d));
        }
    }

    #[test]
    fn test_display_metadata() {
        assert_eq!(Difficulty::Medium.label(), "Medium");
        assert_eq!(Difficulty::Medium.color(), "#ffcc32");
        assert_eq!(Difficulty::Medium.icon(), "🟡");
        assert_eq!(Difficulty::Expert.to_string(), "Expert");
    }

    #[test]
    fn test_from_str_accepts_number_and_label() {
        assert_eq!("3".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("BASIC".parse::<Difficulty>().unwrap(), Difficulty::Basic);
        assert!("7".parse::<Difficulty>().is_err());
        assert!("insane".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Difficulty::try_from(2), Ok(Difficulty::Medium));
        let err = Difficulty::try_from(5).unwrap_err();
        assert!(err.contains("0 to 4"));
    }

    #[test]
    fn test_ordering_follows_level() {
        assert!(Difficulty::Basic < Difficulty::Expert);
        assert!(Difficulty::Medium > Difficulty::Easy);
    }
}
