//! PDF rendering of export rows.
//!
//! Produces an A4 portrait document with a title block, a table with a shaded header
//! row and ruled rows, and a total duration footer. The table continues on new pages
//! with the header repeated.

use chrono::Utc;
use printpdf::{
    path::{PaintMode, WindingOrder},
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    Rgb,
};

use crate::server::{error::internal::InternalError, model::time_sheet::DateRange};

use super::{format_duration, ExportRow};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const ROW_HEIGHT: f32 = 7.0;
const FONT_SIZE: f32 = 9.0;

/// Column titles, left offsets in mm and maximum characters.
const COLUMNS: [(&str, f32, usize); 7] = [
    ("ID", 0.0, 6),
    ("Date", 12.0, 10),
    ("Icon", 34.0, 12),
    ("Task", 62.0, 30),
    ("Duration", 122.0, 10),
    ("Start", 142.0, 10),
    ("End", 162.0, 10),
];

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Renders rows into PDF bytes.
///
/// # Arguments
/// - `rows` - Rows in display order
/// - `range` - Date range the rows were filtered by, printed under the title
///
/// # Returns
/// - `Ok(Vec<u8>)` - Serialized document
/// - `Err(InternalError::PdfRender)` - Font registration or serialization failed
pub fn render(rows: &[ExportRow], range: DateRange) -> Result<Vec<u8>, InternalError> {
    let (doc, page, layer) = PdfDocument::new(
        "Time-sheet export",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    layer.use_text("Time-sheet export", 16.0, Mm(MARGIN), Mm(y), &fonts.bold);
    y -= 7.0;
    layer.use_text(
        format!(
            "Generated on {} | Period: {}",
            Utc::now().format("%Y-%m-%d %H:%M UTC"),
            describe_range(range)
        ),
        FONT_SIZE,
        Mm(MARGIN),
        Mm(y),
        &fonts.regular,
    );
    y -= 12.0;

    y = draw_header(&layer, &fonts, y);

    let mut total: i64 = 0;
    for row in rows {
        if y < MARGIN + ROW_HEIGHT * 2.0 {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = draw_header(&layer, &fonts, PAGE_HEIGHT - MARGIN);
        }

        let cells = [
            row.time_sheet_id.to_string(),
            row.entry_date.format("%Y-%m-%d").to_string(),
            row.icon.clone().unwrap_or_default(),
            row.task_name.clone(),
            format_duration(row.duration as i64),
            row.start_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            row.end_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ];
        draw_cells(&layer, &fonts.regular, &cells, y);
        draw_rule(&layer, y - 2.0);

        total += row.duration as i64;
        y -= ROW_HEIGHT;
    }

    if rows.is_empty() {
        layer.use_text(
            "No time-sheet entries for this period.",
            FONT_SIZE,
            Mm(MARGIN),
            Mm(y),
            &fonts.regular,
        );
        y -= ROW_HEIGHT;
    }

    layer.use_text(
        format!(
            "Total duration: {} ({} entries)",
            format_duration(total),
            rows.len()
        ),
        10.0,
        Mm(MARGIN),
        Mm(y - 3.0),
        &fonts.bold,
    );

    doc.save_to_bytes().map_err(pdf_error)
}

/// Draws the shaded header row with its titles and returns the y of the first data row.
fn draw_header(layer: &PdfLayerReference, fonts: &Fonts, y: f32) -> f32 {
    let top = y + ROW_HEIGHT - 2.0;
    let bottom = y - 2.0;
    let shade = Polygon {
        rings: vec![vec![
            (Point::new(Mm(MARGIN), Mm(bottom)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(bottom)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(top)), false),
            (Point::new(Mm(MARGIN), Mm(top)), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    };

    layer.set_fill_color(Color::Rgb(Rgb::new(0.85, 0.88, 0.93, None)));
    layer.add_polygon(shade);
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

    let titles = COLUMNS.map(|(title, _, _)| title.to_string());
    draw_cells(layer, &fonts.bold, &titles, y);

    y - ROW_HEIGHT
}

fn draw_cells(layer: &PdfLayerReference, font: &IndirectFontRef, cells: &[String; 7], y: f32) {
    for ((_, offset, max_chars), text) in COLUMNS.iter().zip(cells) {
        layer.use_text(
            truncate(text, *max_chars),
            FONT_SIZE,
            Mm(MARGIN + offset),
            Mm(y),
            font,
        );
    }
}

fn draw_rule(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.75, 0.75, 0.75, None)));
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y)), false),
        ],
        is_closed: false,
    });
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

fn describe_range(range: DateRange) -> String {
    match (range.start, range.end) {
        (Some(start), Some(end)) => format!("{} to {}", start, end),
        (Some(start), None) => format!("from {}", start),
        (None, Some(end)) => format!("until {}", end),
        (None, None) => "all time".to_string(),
    }
}

fn pdf_error<E: std::fmt::Debug>(err: E) -> InternalError {
    InternalError::PdfRender {
        reason: format!("{err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(id: i32) -> ExportRow {
        ExportRow {
            time_sheet_id: id,
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            icon: Some("mdi-briefcase".to_string()),
            user_id: 1,
            task_id: 2,
            task_name: "Write report".to_string(),
            duration: 3600,
            start_date: None,
            end_date: None,
        }
    }

    /// Tests rendering enough rows to spill onto a second page.
    ///
    /// Expected: Ok with a non-empty document starting with the PDF magic bytes
    #[test]
    fn renders_multi_page_document() {
        let rows: Vec<ExportRow> = (1..=80).map(row).collect();

        let bytes = render(&rows, DateRange::default()).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn renders_empty_document() {
        let bytes = render(&[], DateRange::default()).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn truncates_long_cells() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 5), "ab...");
    }
}
