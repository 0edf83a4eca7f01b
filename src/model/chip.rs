use serde::Serialize;
use strum_macros::{EnumIter, EnumString};

/// The four once-per-season chips, keyed by the abbreviated code upstream uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum ChipKind {
    #[strum(to_string = "wildcard")]
    Wildcard,
    #[strum(serialize = "freehit", to_string = "free_hit")]
    FreeHit,
    #[strum(serialize = "bboost", to_string = "bench_boost")]
    BenchBoost,
    #[strum(serialize = "3xc", to_string = "triple_captain")]
    TripleCaptain,
}

impl ChipKind {
    /// Map an upstream chip code (`3xc`, `bboost`, ...) to its kind.
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().parse().ok()
    }

    pub fn label(self) -> &'static str {
        match self {
            ChipKind::Wildcard => "🃏 Wildcard",
            ChipKind::FreeHit => "🔄 Free Hit",
            ChipKind::BenchBoost => "🔋 Bench Boost",
            ChipKind::TripleCaptain => "👑 Triple Captain",
        }
    }
}

/// A chip a team has played, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipUsage {
    pub kind: ChipKind,
    pub gameweek: u32,
}

/// Whether a chip is still in hand for a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChipState {
    Used { gameweek: u32 },
    Available,
}

/// One line of the chip status board.
#[derive(Debug, Clone, Serialize)]
pub struct ChipStatusRow {
    pub entry: u32,
    pub entry_name: String,
    pub chips: Vec<ChipSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipSlot {
    pub kind: ChipKind,
    pub state: ChipState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ChipKind::from_code("3xc"), Some(ChipKind::TripleCaptain));
        assert_eq!(ChipKind::from_code("bboost"), Some(ChipKind::BenchBoost));
        assert_eq!(ChipKind::from_code("freehit"), Some(ChipKind::FreeHit));
        assert_eq!(ChipKind::from_code("wildcard"), Some(ChipKind::Wildcard));
        assert_eq!(ChipKind::from_code("WILDCARD"), Some(ChipKind::Wildcard));
        assert_eq!(ChipKind::from_code("manager"), None);
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(ChipKind::TripleCaptain.to_string(), "triple_captain");
        assert_eq!(ChipKind::FreeHit.to_string(), "free_hit");
    }
}
