//! Terminal rendering of the tilt scale.

use colored::{ColoredString, Colorize};

use tilt_core::{MoodBand, TiltSnapshot};

/// Width of the scale bar in cells.
pub const BAR_WIDTH: usize = 40;

/// Paint text in the band's color, falling back to plain text.
pub fn paint(text: &str, band: &MoodBand) -> ColoredString {
    let painted = match band.rgb() {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    };
    if band.is_extreme() {
        painted.bold()
    } else {
        painted
    }
}

/// The filled/empty bar for a snapshot, e.g. `[██████░░░░]`.
pub fn bar(snapshot: &TiltSnapshot, width: usize) -> String {
    let filled = ((snapshot.progress * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Full multi-line view of a snapshot: bar with score, then band.
pub fn scale(snapshot: &TiltSnapshot) -> String {
    let band = snapshot.band;
    let label = if snapshot.extreme {
        format!("!! {} !!", band.full_display_name())
    } else {
        band.full_display_name()
    };
    format!(
        "  {} {:>4}\n  {}",
        paint(&bar(snapshot, BAR_WIDTH), band),
        snapshot.score,
        paint(&label, band),
    )
}
