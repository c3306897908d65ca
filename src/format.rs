use crate::console::paint;
use crate::consts::UPLOADS_PATH;
use crate::models::{HistoryRecord, Prediction};
use comfy_table::presets::NOTHING;
use comfy_table::{
    Attribute, Cell, CellAlignment, ColumnConstraint, ContentArrangement, Table, Width,
};
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// The backend reports scores either as fractions (0.93) or percentages (93).
pub fn normalize_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let pct = if (0.0..=1.0).contains(&value) {
        value * 100.0
    } else {
        value
    };
    pct.clamp(0.0, 100.0)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", normalize_percent(value))
}

pub fn format_optional_percent(value: Option<f64>) -> String {
    value.map(format_percent).unwrap_or_else(|| "-".to_string())
}

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }

    // Flask-style HTTP dates end in "GMT" rather than a numeric offset.
    let rfc2822 = raw.strip_suffix(" GMT").map(|s| format!("{} +0000", s));
    if let Ok(dt) = OffsetDateTime::parse(rfc2822.as_deref().unwrap_or(raw), &Rfc2822) {
        return Some(dt);
    }

    let naive_formats = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    ];
    naive_formats
        .iter()
        .find_map(|fmt| PrimitiveDateTime::parse(raw, *fmt).ok())
        .map(PrimitiveDateTime::assume_utc)
}

/// `2025-06-01T10:05:00Z` becomes `1 Juni 2025, 10:05`. Unknown formats are returned unchanged.
pub fn format_tanggal_indo(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{} {} {}, {:02}:{:02}",
            dt.day(),
            BULAN[usize::from(u8::from(dt.month())) - 1],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => raw.to_string(),
    }
}

pub fn image_url(asset_base_url: &str, filename: &str) -> String {
    format!(
        "{}/{}/{}",
        asset_base_url.trim_end_matches('/'),
        UPLOADS_PATH,
        filename
    )
}

pub fn prediction_lines(prediction: &Prediction) -> Vec<String> {
    let classification = prediction.classification();
    let badge = classification.badge();

    let mut lines = vec![
        format!(
            "Result: {}",
            paint(&classification.label(), badge.term_color())
        ),
        format!("Confidence: {}", format_optional_percent(prediction.accuracy)),
    ];
    if let Some(level) = prediction.dryness_level {
        lines.push(format!("Dryness level: {}", format_percent(level)));
    }
    if !prediction.filename.is_empty() {
        lines.push(format!("File: {}", prediction.filename));
    }
    lines.push(String::new());
    lines.extend(crate::console::wrap_text(classification.recommendation(), 60));
    lines
}

/// Builds the history table. `asset_base_url` adds an image URL column when given.
pub fn history_table(
    records: &[HistoryRecord],
    width: usize,
    asset_base_url: Option<&str>,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_width(width.min(u16::MAX as usize) as u16)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("ID")
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
        Cell::new("File").add_attribute(Attribute::Bold),
        Cell::new("Result").add_attribute(Attribute::Bold),
        Cell::new("Accuracy")
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
        Cell::new("Dryness")
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
        Cell::new("Date").add_attribute(Attribute::Bold),
    ];
    if asset_base_url.is_some() {
        header.push(Cell::new("Image").add_attribute(Attribute::Bold));
    }
    table.set_header(header);

    for record in records {
        let classification = record.classification();
        let mut row = vec![
            Cell::new(record.id).set_alignment(CellAlignment::Right),
            Cell::new(&record.filename),
            Cell::new(classification.label()).fg(classification.badge().table_color()),
            Cell::new(format_optional_percent(record.accuracy))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_optional_percent(record.dryness_level))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_tanggal_indo(&record.created_at)),
        ];
        if let Some(base) = asset_base_url {
            row.push(Cell::new(image_url(base, &record.filename)));
        }
        table.add_row(row);
    }

    if let Some(col) = table.column_mut(0) {
        col.set_constraint(ColumnConstraint::ContentWidth);
    }
    if let Some(col) = table.column_mut(1) {
        col.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(12)));
    }

    table
}
