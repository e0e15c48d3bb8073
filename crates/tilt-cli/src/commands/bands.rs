use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tilt_core::MoodBand;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Range", "Band", "Color", "Extreme"]);

    for band in MoodBand::all() {
        let range = if band.min == band.max {
            band.min.to_string()
        } else {
            format!("{} .. {}", band.min, band.max)
        };
        let extreme = if band.is_extreme() { "yes" } else { "" };
        table.add_row(vec![
            range,
            band.full_display_name(),
            band.color.to_string(),
            extreme.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} bands covering {} to {}",
        MoodBand::all().len(),
        tilt_core::TiltScore::MIN.to_string().bold(),
        tilt_core::TiltScore::MAX.to_string().bold(),
    );

    Ok(())
}
