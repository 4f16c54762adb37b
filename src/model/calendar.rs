use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::task::Task;

/// Time-of-day assigned when a task without a due date is dropped on a day.
const DEFAULT_DROP_TIME: (u32, u32) = (9, 0);

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// First day of the following month.
pub fn next_month(month: NaiveDate) -> NaiveDate {
    let (y, m) = if month.month() == 12 {
        (month.year() + 1, 1)
    } else {
        (month.year(), month.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(month)
}

/// First day of the preceding month.
pub fn prev_month(month: NaiveDate) -> NaiveDate {
    let (y, m) = if month.month() == 1 {
        (month.year() - 1, 12)
    } else {
        (month.year(), month.month() - 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(month)
}

/// The contiguous run of day cells covering the display grid for a month.
///
/// Starts on the Sunday on or before the 1st and ends on the Saturday on or
/// after the last day, so the length is always a multiple of 7.
pub fn month_grid(month: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(month);
    let last = next_month(first) - Duration::days(1);

    let grid_start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let grid_end = last + Duration::days((6 - last.weekday().num_days_from_sunday()) as i64);

    let mut days = Vec::with_capacity(42);
    let mut day = grid_start;
    while day <= grid_end {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

/// Tasks whose due date falls on this calendar day. Date component only;
/// time-of-day is ignored for matching.
pub fn tasks_due_on<'a>(tasks: &'a [Task], day: NaiveDate) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.due.map_or(false, |due| due.date() == day))
        .collect()
}

/// Resolve a drop of a task onto a day cell.
///
/// Returns `None` when the task already sits on that day (a no-op drop).
/// Otherwise the new due keeps the task's original time-of-day, or 09:00
/// when it had none.
pub fn drop_target(due: Option<NaiveDateTime>, day: NaiveDate) -> Option<NaiveDateTime> {
    if due.is_some_and(|d| d.date() == day) {
        return None;
    }
    let time = due.map(|d| d.time()).unwrap_or_else(|| {
        let (h, m) = DEFAULT_DROP_TIME;
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
    });
    Some(day.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::ProjectId;
    use crate::model::task::{Priority, Status, TaskDraft};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_for_month_starting_midweek_pads_both_ends() {
        // May 2024 starts on a Wednesday and ends on a Friday.
        let days = month_grid(date(2024, 5, 1));

        assert_eq!(days.len() % 7, 0);
        assert_eq!(days[0].weekday(), Weekday::Sun);
        assert_eq!(days[0], date(2024, 4, 28)); // 3 leading April days
        assert_eq!(*days.last().unwrap(), date(2024, 6, 1)); // 1 trailing June day
        assert_eq!(days.len(), 35);
    }

    #[test]
    fn grid_for_sunday_start_month_has_no_leading_padding() {
        // September 2024 starts on a Sunday.
        let days = month_grid(date(2024, 9, 1));
        assert_eq!(days[0], date(2024, 9, 1));
        assert_eq!(days.len(), 35);
    }

    #[test]
    fn month_navigation_wraps_at_year_boundaries() {
        assert_eq!(next_month(date(2024, 12, 1)), date(2025, 1, 1));
        assert_eq!(prev_month(date(2024, 1, 1)), date(2023, 12, 1));
        assert_eq!(first_of_month(date(2024, 7, 19)), date(2024, 7, 1));
    }

    #[test]
    fn due_matching_ignores_time_of_day() {
        let morning = Task::from_draft(TaskDraft {
            title: "early".to_string(),
            description: String::new(),
            priority: Priority::Low,
            status: Status::Pending,
            project: ProjectId(1),
            due: Some(date(2024, 1, 10).and_hms_opt(8, 0, 0).unwrap()),
        });
        let evening = {
            let mut t = morning.clone();
            t.due = Some(date(2024, 1, 10).and_hms_opt(22, 30, 0).unwrap());
            t
        };
        let undated = {
            let mut t = morning.clone();
            t.due = None;
            t
        };

        let tasks = vec![morning, evening, undated];
        assert_eq!(tasks_due_on(&tasks, date(2024, 1, 10)).len(), 2);
        assert!(tasks_due_on(&tasks, date(2024, 1, 11)).is_empty());
    }

    #[test]
    fn drop_preserves_time_of_day() {
        let due = Some(date(2024, 1, 10).and_hms_opt(14, 30, 0).unwrap());
        let moved = drop_target(due, date(2024, 1, 15));
        assert_eq!(moved, Some(date(2024, 1, 15).and_hms_opt(14, 30, 0).unwrap()));
    }

    #[test]
    fn drop_on_same_day_is_a_noop() {
        let due = Some(date(2024, 1, 10).and_hms_opt(14, 30, 0).unwrap());
        assert_eq!(drop_target(due, date(2024, 1, 10)), None);
    }

    #[test]
    fn drop_without_prior_due_defaults_to_nine_am() {
        let moved = drop_target(None, date(2024, 2, 3));
        assert_eq!(moved, Some(date(2024, 2, 3).and_hms_opt(9, 0, 0).unwrap()));
    }
}
