//! In-memory aggregation of time-sheets and their task entries.
//!
//! Everything here is pure so the service only has to load rows and pick labels.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::server::model::{
    statistics::{CategoryStats, PeriodStats, TaskStats, UserStatsSummary},
    time_sheet::{TimeSheet, TimeSheetEntry},
    user::User,
};

/// Category of tasks without a repetition.
pub const NO_CATEGORY: &str = "NONE";

/// Icon attached to every task row of the category breakdown.
pub const TASK_ICON: &str = "mdi-checkbox-marked-circle-outline";

/// Granularity of a period breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// `yyyy-MM-dd`
    Day,
    /// ISO week, `yyyy-Www`
    Week,
    /// `yyyy-MM`
    Month,
}

impl Bucket {
    pub fn key(&self, date: NaiveDate) -> String {
        match self {
            Self::Day => date.format("%Y-%m-%d").to_string(),
            Self::Week => date.format("%G-W%V").to_string(),
            Self::Month => date.format("%Y-%m").to_string(),
        }
    }
}

/// Percentage of `part` in `total`, zero when `total` is zero.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part * 100.0 / total
    }
}

/// Totals over every task entry of the provided time-sheets.
pub fn summarize(user: &User, time_sheets: &[TimeSheet], entries: &[TimeSheetEntry]) -> UserStatsSummary {
    let total_tasks = entries.len() as u64;
    let completed_tasks = entries.iter().filter(|e| e.completed).count() as u64;

    UserStatsSummary {
        user_id: user.id,
        user_name: user.pseudo.clone(),
        total_time_sheets: time_sheets.len() as u64,
        total_tasks,
        completed_tasks,
        total_time: total_time(entries),
        completion_rate: percentage(completed_tasks as f64, total_tasks as f64),
    }
}

/// Zeroed summary for a user without time-sheets.
pub fn empty_summary(user: &User) -> UserStatsSummary {
    summarize(user, &[], &[])
}

/// Groups entries by task repetition.
///
/// Within a category each task appears once with its summed time; a task counts as
/// completed when all of its entries are. Category counts are over these distinct
/// tasks. Tasks and categories are sorted by time descending then by name.
pub fn categorize(entries: &[TimeSheetEntry]) -> Vec<CategoryStats> {
    let grand_total = total_time(entries) as f64;

    let mut by_category: BTreeMap<String, Vec<&TimeSheetEntry>> = BTreeMap::new();
    for entry in entries {
        let category = entry
            .task
            .repetition
            .clone()
            .unwrap_or_else(|| NO_CATEGORY.to_string());
        by_category.entry(category).or_default().push(entry);
    }

    let mut categories: Vec<CategoryStats> = by_category
        .into_iter()
        .map(|(category, entries)| {
            let total_time = entries.iter().map(|e| e.duration as i64).sum();

            let mut by_task: HashMap<i32, TaskStats> = HashMap::new();
            for entry in entries {
                let stats = by_task.entry(entry.task.id).or_insert_with(|| TaskStats {
                    task_id: entry.task.id,
                    task_name: entry.task.name.clone(),
                    icon: TASK_ICON.to_string(),
                    total_time: 0,
                    completed: true,
                    percentage_of_total: 0.0,
                });
                stats.total_time += entry.duration as i64;
                stats.completed &= entry.completed;
            }

            let mut tasks: Vec<TaskStats> = by_task
                .into_values()
                .map(|mut stats| {
                    stats.percentage_of_total = percentage(stats.total_time as f64, grand_total);
                    stats
                })
                .collect();
            tasks.sort_by(|a, b| {
                b.total_time
                    .cmp(&a.total_time)
                    .then_with(|| a.task_name.cmp(&b.task_name))
            });

            let total_tasks = tasks.len() as u64;
            let completed_tasks = tasks.iter().filter(|t| t.completed).count() as u64;

            CategoryStats {
                category,
                total_tasks,
                completed_tasks,
                total_time,
                completion_rate: percentage(completed_tasks as f64, total_tasks as f64),
                tasks,
            }
        })
        .collect();

    categories.sort_by(|a, b| {
        b.total_time
            .cmp(&a.total_time)
            .then_with(|| a.category.cmp(&b.category))
    });

    categories
}

/// Buckets entry durations by the entry date of their time-sheet.
///
/// # Arguments
/// - `label` - Period name reported in the result
/// - `bucket` - Granularity of the distribution keys
/// - `time_sheets` - Time-sheets the entries belong to
/// - `entries` - Entries to aggregate, entries of unknown time-sheets are ignored
pub fn period_stats(
    label: &str,
    bucket: Bucket,
    time_sheets: &[TimeSheet],
    entries: &[TimeSheetEntry],
) -> PeriodStats {
    let dates: HashMap<i32, NaiveDate> = time_sheets
        .iter()
        .map(|ts| (ts.id, ts.entry_date))
        .collect();

    let mut time_distribution = BTreeMap::new();
    let mut total_tasks = 0;
    let mut completed_tasks = 0;
    for entry in entries {
        let Some(date) = dates.get(&entry.time_sheet_id) else {
            continue;
        };

        *time_distribution.entry(bucket.key(*date)).or_insert(0) += entry.duration as i64;
        total_tasks += 1;
        if entry.completed {
            completed_tasks += 1;
        }
    }

    PeriodStats {
        period: label.to_string(),
        total_time: time_distribution.values().sum(),
        time_distribution,
        total_tasks,
        completed_tasks,
    }
}

/// Zeroed period view.
pub fn empty_period(label: &str) -> PeriodStats {
    PeriodStats {
        period: label.to_string(),
        time_distribution: BTreeMap::new(),
        total_time: 0,
        total_tasks: 0,
        completed_tasks: 0,
    }
}

fn total_time(entries: &[TimeSheetEntry]) -> i64 {
    entries.iter().map(|e| e.duration as i64).sum()
}
