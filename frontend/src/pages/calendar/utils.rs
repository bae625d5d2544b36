use crate::api::{CalendarEvent, EventDraft, EventPriority, Reminder, User};
use crate::utils::time::{parse_date, parse_timestamp};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

/// First day of the month on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn prev(&self) -> Self {
        match self.month {
            1 => Self { year: self.year - 1, month: 12 },
            m => Self { year: self.year, month: m - 1 },
        }
    }

    pub fn next(&self) -> Self {
        match self.month {
            12 => Self { year: self.year + 1, month: 1 },
            m => Self { year: self.year, month: m + 1 },
        }
    }

    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Sunday-first weeks covering the whole month.
    pub fn weeks(&self) -> Vec<[NaiveDate; 7]> {
        let first = self.first_day();
        let mut day = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
        let mut weeks = Vec::new();
        loop {
            let week: [NaiveDate; 7] = std::array::from_fn(|i| day + Duration::days(i as i64));
            day += Duration::days(7);
            weeks.push(week);
            if day.month() != self.month || day.year() != self.year {
                break;
            }
        }
        weeks
    }
}

/// Local calendar day of a stored timestamp; bare dates are taken as-is.
fn local_day(value: &str) -> Option<NaiveDate> {
    if value.trim().len() == 10 {
        return parse_date(value);
    }
    parse_timestamp(value).map(|ts| ts.with_timezone(&Local).date_naive())
}

/// Events whose span touches `date`, earliest first.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    let mut found: Vec<CalendarEvent> = events
        .iter()
        .filter(|event| {
            let Some(start) = local_day(&event.start_time) else {
                return false;
            };
            let end = event
                .end_time
                .as_deref()
                .and_then(local_day)
                .filter(|end| *end >= start)
                .unwrap_or(start);
            start <= date && date <= end
        })
        .cloned()
        .collect();
    found.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    found
}

/// Creator or admin may change an event.
pub fn can_manage(event: &CalendarEvent, user: Option<&User>) -> bool {
    match user {
        Some(user) => user.is_admin() || event.created_by.as_deref() == Some(user.id.as_str()),
        None => false,
    }
}

/// Raw values of the event modal: one day with start and end times.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventFormValues {
    pub title: String,
    pub description: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub priority: EventPriority,
    pub reminders: Vec<Reminder>,
}

fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

fn to_utc_string(local: NaiveDateTime) -> String {
    Local
        .from_local_datetime(&local)
        .earliest()
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(|| local.and_utc())
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl EventFormValues {
    pub fn from_event(event: &CalendarEvent) -> Self {
        let local = |value: &str| parse_timestamp(value).map(|ts| ts.with_timezone(&Local));
        let start = local(&event.start_time);
        let end = event.end_time.as_deref().and_then(local);
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            date: start.map(|ts| ts.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            start: start.map(|ts| ts.format("%H:%M").to_string()).unwrap_or_default(),
            end: end.map(|ts| ts.format("%H:%M").to_string()).unwrap_or_default(),
            priority: event.priority,
            reminders: event.reminders.clone(),
        }
    }

    pub fn toggle_reminder(&mut self, reminder: Reminder) {
        if let Some(pos) = self.reminders.iter().position(|r| *r == reminder) {
            self.reminders.remove(pos);
        } else {
            self.reminders.push(reminder);
        }
    }

    pub fn to_draft(&self) -> Result<EventDraft, String> {
        let title = self.title.trim();
        if title.is_empty() || self.date.trim().is_empty() || self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err("Please fill in all required fields".into());
        }
        let (Some(date), Some(start), Some(end)) =
            (parse_date(&self.date), parse_clock(&self.start), parse_clock(&self.end))
        else {
            return Err("Please fill in all required fields".into());
        };
        if end <= start {
            return Err("End time must be after start time".into());
        }
        Ok(EventDraft {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            start_time: to_utc_string(date.and_time(start)),
            end_time: to_utc_string(date.and_time(end)),
            priority: self.priority,
            reminders: self.reminders.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, start: &str, end: Option<&str>) -> CalendarEvent {
        CalendarEvent {
            id: id.into(),
            title: id.into(),
            start_time: start.into(),
            end_time: end.map(str::to_string),
            ..CalendarEvent::default()
        }
    }

    fn form(start: &str, end: &str) -> EventFormValues {
        EventFormValues {
            title: "Standup".into(),
            date: "2025-03-05".into(),
            start: start.into(),
            end: end.into(),
            ..EventFormValues::default()
        }
    }

    #[test]
    fn cursor_wraps_years() {
        let jan = MonthCursor { year: 2025, month: 1 };
        assert_eq!(jan.prev(), MonthCursor { year: 2024, month: 12 });
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(jan.title(), "January 2025");
    }

    #[test]
    fn grid_starts_on_sunday_and_covers_month() {
        // March 2025 starts on a Saturday and ends on a Monday.
        let weeks = MonthCursor { year: 2025, month: 3 }.weeks();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][0], date(2025, 2, 23));
        assert_eq!(weeks[0][6], date(2025, 3, 1));
        assert_eq!(weeks[5][1], date(2025, 3, 31));

        let feb = MonthCursor { year: 2026, month: 2 }.weeks();
        assert_eq!(feb.len(), 4);
    }

    #[test]
    fn events_land_on_every_day_they_span() {
        let events = vec![
            event("late", "2025-03-05T15:00:00Z", None),
            event("early", "2025-03-05T09:00:00Z", Some("2025-03-05T10:00:00Z")),
            event("trip", "2025-03-06", Some("2025-03-08")),
        ];
        let ids = |d| events_on(&events, d).into_iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids(date(2025, 3, 7)), vec!["trip"]);
        assert_eq!(ids(date(2025, 3, 8)), vec!["trip"]);
        assert!(ids(date(2025, 3, 9)).is_empty());
    }

    #[test]
    fn only_creator_or_admin_manage() {
        let mut ev = event("e", "2025-03-05", None);
        ev.created_by = Some("u-1".into());
        let owner = User { id: "u-1".into(), ..User::default() };
        let other = User { id: "u-2".into(), ..User::default() };
        let admin = User { id: "u-3".into(), role: Role::Admin, ..User::default() };
        assert!(can_manage(&ev, Some(&owner)));
        assert!(!can_manage(&ev, Some(&other)));
        assert!(can_manage(&ev, Some(&admin)));
        assert!(!can_manage(&ev, None));
    }

    #[test]
    fn form_rejects_missing_fields_and_backwards_times() {
        let mut missing = form("09:00", "10:00");
        missing.title = "  ".into();
        assert_eq!(missing.to_draft().unwrap_err(), "Please fill in all required fields");
        assert_eq!(form("10:00", "10:00").to_draft().unwrap_err(), "End time must be after start time");
        assert_eq!(form("11:00", "10:00").to_draft().unwrap_err(), "End time must be after start time");

        let draft = form("09:00", "09:30").to_draft().unwrap();
        let start = parse_timestamp(&draft.start_time).unwrap();
        let end = parse_timestamp(&draft.end_time).unwrap();
        assert_eq!((end - start).num_minutes(), 30);
        assert!(draft.start_time.ends_with('Z'));
    }

    #[test]
    fn reminders_toggle() {
        let mut values = EventFormValues::default();
        values.toggle_reminder(Reminder::SameDay);
        values.toggle_reminder(Reminder::OneDayBefore);
        values.toggle_reminder(Reminder::SameDay);
        assert_eq!(values.reminders, vec![Reminder::OneDayBefore]);
    }
}
