//! Exports of a user's time-sheets.
//!
//! Both formats flatten time-sheets into one row per attached task, so a time-sheet
//! without tasks does not appear in an export.

pub mod csv;
pub mod pdf;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::server::{
    data::time_sheet_task::TimeSheetTaskRepository,
    error::AppError,
    model::time_sheet::{DateRange, TimeSheet, TimeSheetEntry},
};

use super::TimeSheetService;

/// One exported (time-sheet, task) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub time_sheet_id: i32,
    pub entry_date: NaiveDate,
    pub icon: Option<String>,
    pub user_id: i32,
    pub task_id: i32,
    pub task_name: String,
    /// Seconds.
    pub duration: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExportRow {
    fn new(time_sheet: &TimeSheet, entry: TimeSheetEntry) -> Self {
        Self {
            time_sheet_id: time_sheet.id,
            entry_date: time_sheet.entry_date,
            icon: time_sheet.icon.clone(),
            user_id: time_sheet.user_id,
            task_id: entry.task.id,
            task_name: entry.task.name,
            duration: entry.duration,
            start_date: time_sheet.start_date,
            end_date: time_sheet.end_date,
        }
    }
}

/// Formats seconds as `HH:MM:SS`, hours are not wrapped at 24.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);

    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Pairs every entry with its time-sheet, keeping the time-sheet order and the entry
/// order within each time-sheet. Entries of time-sheets not in the list are dropped.
fn flatten(time_sheets: &[TimeSheet], entries: Vec<TimeSheetEntry>) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(entries.len());

    let mut by_time_sheet: HashMap<i32, Vec<TimeSheetEntry>> = HashMap::new();
    for entry in entries {
        by_time_sheet
            .entry(entry.time_sheet_id)
            .or_default()
            .push(entry);
    }

    for time_sheet in time_sheets {
        if let Some(own) = by_time_sheet.remove(&time_sheet.id) {
            rows.extend(own.into_iter().map(|entry| ExportRow::new(time_sheet, entry)));
        }
    }

    rows
}

impl<'a> TimeSheetService<'a> {
    /// Flattens a user's time-sheets within the range into export rows.
    ///
    /// # Returns
    /// - `Ok(Vec<ExportRow>)` - Rows ordered by entry date, time-sheet ID then task ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn export_rows(
        &self,
        user_id: i32,
        range: DateRange,
    ) -> Result<Vec<ExportRow>, AppError> {
        let time_sheets = self.list_for_user(user_id, range).await?;
        let ids: Vec<i32> = time_sheets.iter().map(|ts| ts.id).collect();

        let entries = TimeSheetTaskRepository::new(self.db)
            .get_by_time_sheet_ids_with_tasks(&ids)
            .await?;

        Ok(flatten(&time_sheets, entries))
    }

    /// Renders a user's time-sheets within the range as CSV.
    pub async fn export_csv(&self, user_id: i32, range: DateRange) -> Result<String, AppError> {
        let rows = self.export_rows(user_id, range).await?;

        tracing::debug!("Exporting {} rows as CSV for user {}", rows.len(), user_id);

        Ok(csv::render(&rows))
    }

    /// Renders a user's time-sheets within the range as a PDF document.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - PDF bytes
    /// - `Err(AppError::InternalErr(PdfRender))` - Document could not be produced
    pub async fn export_pdf(&self, user_id: i32, range: DateRange) -> Result<Vec<u8>, AppError> {
        let rows = self.export_rows(user_id, range).await?;

        tracing::debug!("Exporting {} rows as PDF for user {}", rows.len(), user_id);

        Ok(pdf::render(&rows, range)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::task::Task;

    fn sheet(id: i32, day: u32) -> TimeSheet {
        TimeSheet {
            id,
            entry_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            title: None,
            icon: None,
            start_date: None,
            end_date: None,
            start_time: None,
            end_time: None,
            user_id: 1,
        }
    }

    fn entry(time_sheet_id: i32, task_id: i32) -> TimeSheetEntry {
        TimeSheetEntry {
            time_sheet_id,
            task: Task {
                id: task_id,
                name: format!("task{}", task_id),
                repetition: None,
            },
            duration: 60,
            completed: false,
        }
    }

    /// Tests pairing entries with their time-sheets.
    ///
    /// Expected: Rows follow the time-sheet order, entries of unknown time-sheets and
    /// time-sheets without entries produce no rows
    #[test]
    fn flattens_entries_in_time_sheet_order() {
        let sheets = [sheet(7, 1), sheet(2, 2), sheet(5, 3)];
        let entries = vec![entry(2, 1), entry(2, 4), entry(7, 3), entry(9, 1)];

        let rows = flatten(&sheets, entries);

        let pairs: Vec<(i32, i32)> = rows
            .iter()
            .map(|r| (r.time_sheet_id, r.task_id))
            .collect();
        assert_eq!(pairs, vec![(7, 3), (2, 1), (2, 4)]);
        assert_eq!(rows[0].entry_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn formats_duration_as_clock() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(3725), "01:02:05");
        assert_eq!(format_duration(90_000), "25:00:00");
    }
}
