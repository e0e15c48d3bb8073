//! Mood bands: the fixed partition of the tilt scale.
//!
//! Nine contiguous ranges cover the whole score range from -200 to 200.
//! Lookup scans the table in declared order and returns the first band
//! containing the score, so boundaries are exact.

use serde::Serialize;

use crate::score::TiltScore;

/// Identifies one of the nine mood bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BandKind {
    /// -200 to -151.
    AbsoluteCalm,
    /// -150 to -101.
    ColdBlood,
    /// -100 to -51.
    Balance,
    /// -50 to -1.
    Normal,
    /// Exactly 0.
    Neutral,
    /// 1 to 49.
    LightTilt,
    /// 50 to 99.
    Tilt,
    /// 100 to 149.
    Rage,
    /// 150 to 200.
    Apocalypse,
}

/// A labelled range of the tilt scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodBand {
    /// Which band this is.
    pub kind: BandKind,
    /// Lowest score in the band (inclusive).
    pub min: i32,
    /// Highest score in the band (inclusive).
    pub max: i32,
    /// Display label.
    pub label: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Color tag as `#rrggbb`.
    pub color: &'static str,
}

const fn band(
    kind: BandKind,
    min: i32,
    max: i32,
    label: &'static str,
    symbol: &'static str,
    color: &'static str,
) -> MoodBand {
    MoodBand {
        kind,
        min,
        max,
        label,
        symbol,
        color,
    }
}

/// The band table in scan order.
pub static BANDS: [MoodBand; 9] = [
    band(BandKind::AbsoluteCalm, -200, -151, "ABSOLUTE CALM", "☮", "#2980b9"),
    band(BandKind::ColdBlood, -150, -101, "COLD BLOOD", "❄", "#3498db"),
    band(BandKind::Balance, -100, -51, "BALANCE", "⚖", "#1abc9c"),
    band(BandKind::Normal, -50, -1, "NORMAL", "✓", "#2ecc71"),
    band(BandKind::Neutral, 0, 0, "NEUTRAL", "◎", "#f1c40f"),
    band(BandKind::LightTilt, 1, 49, "LIGHT TILT", "⚠", "#f39c12"),
    band(BandKind::Tilt, 50, 99, "TILT", "⚡", "#e67e22"),
    band(BandKind::Rage, 100, 149, "RAGE", "🔥", "#e74c3c"),
    band(BandKind::Apocalypse, 150, 200, "APOCALYPSE", "☠", "#8b0000"),
];

const NEUTRAL_INDEX: usize = 4;

impl MoodBand {
    /// All bands in scan order, from calmest to most tilted.
    pub fn all() -> &'static [MoodBand] {
        &BANDS
    }

    /// The band used when a score matches nothing.
    pub fn neutral() -> &'static MoodBand {
        &BANDS[NEUTRAL_INDEX]
    }

    /// Find the band containing `value`.
    pub fn for_value(value: i32) -> &'static MoodBand {
        BANDS
            .iter()
            .find(|b| b.contains(value))
            .unwrap_or_else(Self::neutral)
    }

    /// Find the band for a tilt score.
    pub fn for_score(score: &TiltScore) -> &'static MoodBand {
        Self::for_value(score.value())
    }

    /// Returns true if `value` lies within this band.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Rage and Apocalypse call for emphasis when displayed.
    pub fn is_extreme(&self) -> bool {
        matches!(self.kind, BandKind::Rage | BandKind::Apocalypse)
    }

    /// Label followed by the symbol, e.g. `"RAGE 🔥"`.
    pub fn full_display_name(&self) -> String {
        format!("{} {}", self.label, self.symbol)
    }

    /// The color tag as an RGB triple, if it is a well-formed `#rrggbb`.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for MoodBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_is_contiguous_and_covers_scale() {
        assert_eq!(BANDS[0].min, TiltScore::MIN);
        assert_eq!(BANDS[BANDS.len() - 1].max, TiltScore::MAX);
        for pair in BANDS.windows(2) {
            assert!(pair[0].min <= pair[0].max);
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(MoodBand::for_value(-200).kind, BandKind::AbsoluteCalm);
        assert_eq!(MoodBand::for_value(-151).kind, BandKind::AbsoluteCalm);
        assert_eq!(MoodBand::for_value(-150).kind, BandKind::ColdBlood);
        assert_eq!(MoodBand::for_value(-51).kind, BandKind::Balance);
        assert_eq!(MoodBand::for_value(-1).kind, BandKind::Normal);
        assert_eq!(MoodBand::for_value(0).kind, BandKind::Neutral);
        assert_eq!(MoodBand::for_value(1).kind, BandKind::LightTilt);
        assert_eq!(MoodBand::for_value(49).kind, BandKind::LightTilt);
        assert_eq!(MoodBand::for_value(50).kind, BandKind::Tilt);
        assert_eq!(MoodBand::for_value(100).kind, BandKind::Rage);
        assert_eq!(MoodBand::for_value(149).kind, BandKind::Rage);
        assert_eq!(MoodBand::for_value(150).kind, BandKind::Apocalypse);
        assert_eq!(MoodBand::for_value(200).kind, BandKind::Apocalypse);
    }

    #[test]
    fn out_of_range_falls_back_to_neutral() {
        assert_eq!(MoodBand::for_value(201).kind, BandKind::Neutral);
        assert_eq!(MoodBand::for_value(i32::MIN).kind, BandKind::Neutral);
    }

    #[test]
    fn extreme_bands() {
        let extreme: Vec<_> = BANDS
            .iter()
            .filter(|b| b.is_extreme())
            .map(|b| b.kind)
            .collect();
        assert_eq!(extreme, vec![BandKind::Rage, BandKind::Apocalypse]);
    }

    #[test]
    fn full_display_name() {
        assert_eq!(MoodBand::for_value(0).full_display_name(), "NEUTRAL ◎");
        assert_eq!(MoodBand::for_value(120).to_string(), "RAGE 🔥");
    }

    #[test]
    fn rgb_parses_every_color() {
        for band in MoodBand::all() {
            assert!(band.rgb().is_some(), "bad color for {:?}", band.kind);
        }
        assert_eq!(MoodBand::for_value(200).rgb(), Some((0x8b, 0, 0)));
    }

    #[test]
    fn serializes_kind_and_label() {
        let json = serde_json::to_value(MoodBand::for_value(7)).unwrap();
        assert_eq!(json["kind"], "LIGHT_TILT");
        assert_eq!(json["label"], "LIGHT TILT");
        assert_eq!(json["min"], 1);
    }

    proptest! {
        #[test]
        fn every_score_has_exactly_one_band(value in TiltScore::MIN..=TiltScore::MAX) {
            let matching = BANDS.iter().filter(|b| b.contains(value)).count();
            prop_assert_eq!(matching, 1);
            let band = MoodBand::for_value(value);
            prop_assert!((band.min..=band.max).contains(&value));
        }
    }
}
