//! Terminal rendering and text export for layouts and search results
//!
//! Provides plain and 24-bit colored renderings of layouts and a text report
//! writer for finished searches.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::biomes::Biome;
use crate::finder::SearchReport;
use crate::layout::Layout;

/// Plain ` → ` separated layout, e.g. `Forest → Crimson → Snow`
pub fn render_layout(layout: &Layout) -> String {
    layout.to_string()
}

/// Compact glyph strip, one character per segment, e.g. `FRSJD`
pub fn render_glyphs(layout: &Layout) -> String {
    layout.segments().iter().map(|b| b.glyph()).collect()
}

/// Foreground color readable on top of the biome's chip color
pub fn biome_fg_color(biome: &Biome) -> (u8, u8, u8) {
    let (r, g, b) = biome.color();
    let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    if luminance > 128.0 {
        (20, 20, 20)
    } else {
        (240, 240, 240)
    }
}

/// Format a string with ANSI true color (24-bit) - foreground and background
pub fn ansi_colored(text: &str, fg: (u8, u8, u8), bg: (u8, u8, u8)) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        fg.0, fg.1, fg.2,
        bg.0, bg.1, bg.2,
        text
    )
}

/// One colored chip per segment
pub fn render_chips(layout: &Layout) -> String {
    layout
        .segments()
        .iter()
        .map(|b| ansi_colored(&format!(" {} ", b.name()), biome_fg_color(b), b.color()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Glyph legend for all biomes
pub fn biome_legend() -> String {
    let mut out = String::from("LEGEND:\n");
    for biome in Biome::all() {
        out.push_str(&format!("  {} = {}\n", biome.glyph(), biome.name()));
    }
    out
}

/// Write a finished search to a plain text report.
pub fn export_report(report: &SearchReport, request_summary: &str, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    write_report(&mut file, report, request_summary)
}

/// Write a search report to any writer
pub fn write_report<W: Write>(writer: &mut W, report: &SearchReport, request_summary: &str) -> io::Result<()> {
    writeln!(writer, "=== SEED SEARCH REPORT ===")?;
    writeln!(writer, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(writer, "Request: {}", request_summary)?;
    writeln!(writer, "Attempts: {}", report.attempts)?;
    writeln!(writer, "Found: {}/{}", report.results.len(), report.target)?;
    if report.cancelled {
        writeln!(writer, "Status: cancelled")?;
    } else if !report.target_met() {
        writeln!(writer, "Status: budget exhausted, try more attempts or a larger world")?;
    }
    writeln!(writer)?;

    for (i, result) in report.results.iter().enumerate() {
        writeln!(writer, "{}. Seed: {}", i + 1, result.seed)?;
        writeln!(writer, "   Layout: {}", render_layout(&result.layout))?;
        writeln!(writer, "   Glyphs: {}", render_glyphs(&result.layout))?;
        if let Some(evil) = result.layout.evil() {
            writeln!(writer, "   Evil: {}", evil)?;
        }
    }

    writeln!(writer)?;
    write!(writer, "{}", biome_legend())?;
    Ok(())
}
