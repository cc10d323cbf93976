//! CSV rendering of export rows.

use super::ExportRow;

pub const HEADER: &str = "ID,Date,Icon,UserID,TaskID,TaskName,Duration,StartDate,EndDate";

/// Renders rows as CSV with a header line.
///
/// Commas in icons and task names become `;` and line breaks become spaces since
/// fields are not quoted. Missing icons and dates are written as empty fields.
pub fn render(rows: &[ExportRow]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for row in rows {
        let fields = [
            row.time_sheet_id.to_string(),
            row.entry_date.format("%Y-%m-%d").to_string(),
            row.icon.as_deref().map(clean_field).unwrap_or_default(),
            row.user_id.to_string(),
            row.task_id.to_string(),
            clean_field(&row.task_name),
            row.duration.to_string(),
            format_date(row.start_date),
            format_date(row.end_date),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

fn clean_field(value: &str) -> String {
    value
        .replace(',', ";")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(task_name: &str) -> ExportRow {
        ExportRow {
            time_sheet_id: 3,
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            icon: None,
            user_id: 1,
            task_id: 9,
            task_name: task_name.to_string(),
            duration: 1800,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4),
            end_date: None,
        }
    }

    /// Tests rendering a row with a comma in the task name and missing fields.
    ///
    /// Expected: Comma replaced by `;`, missing icon and end date left empty
    #[test]
    fn renders_rows_after_header() {
        let csv = render(&[row("Review, part 1")]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "3,2024-03-05,,1,9,Review; part 1,1800,2024-03-04,");
        assert_eq!(lines.len(), 2);
    }

    /// Tests rendering free-text fields containing separators.
    ///
    /// Expected: Commas and line breaks in the icon and task name do not add columns
    /// or lines
    #[test]
    fn keeps_columns_aligned_for_free_text() {
        let mut row = row("Plan\r\nsprint");
        row.icon = Some("mdi,briefcase\n".to_string());

        let csv = render(&[row]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "3,2024-03-05,mdi;briefcase ,1,9,Plan sprint,1800,2024-03-04,");
        assert_eq!(lines[1].split(',').count(), HEADER.split(',').count());
    }

    #[test]
    fn renders_header_only_without_rows() {
        assert_eq!(render(&[]), format!("{}\n", HEADER));
    }
}
