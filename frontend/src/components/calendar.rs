//! Month/week/day grid renderer.
//!
//! Consumes the event list and forwards two gestures back to the
//! view-model: slot selection (start, end) and event selection. Both are
//! enabled only while admin mode is on.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveTime, Timelike, Utc};
use shared::models::CalendarEvent;
use yew::prelude::*;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Month,
    Week,
    Day,
}

impl CalendarView {
    const ALL: [CalendarView; 3] = [Self::Month, Self::Week, Self::Day];

    fn label(self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Day => "Day",
        }
    }
}

/// 6x7 day grid for the month containing `focus`, anchored to the Sunday
/// on or before the 1st. Leading/trailing cells belong to the adjacent
/// months.
fn month_grid(focus: NaiveDate) -> Vec<Vec<NaiveDate>> {
    let first = focus.with_day(1).unwrap_or(focus);
    let offset = first.weekday().num_days_from_sunday() as u64;
    let mut day = first - Days::new(offset);

    let mut weeks = Vec::with_capacity(6);
    for _ in 0..6 {
        let mut week = Vec::with_capacity(7);
        for _ in 0..7 {
            week.push(day);
            day = day.succ_opt().unwrap_or(day);
        }
        weeks.push(week);
    }
    weeks
}

/// The Sunday-to-Saturday week containing `focus`.
fn week_days(focus: NaiveDate) -> Vec<NaiveDate> {
    let offset = focus.weekday().num_days_from_sunday() as u64;
    let sunday = focus - Days::new(offset);
    (0..7).map(|i| sunday + Days::new(i)).collect()
}

fn shift_focus(view: CalendarView, focus: NaiveDate, delta: i32) -> NaiveDate {
    let back = delta < 0;
    let n = delta.unsigned_abs();
    match view {
        CalendarView::Month => {
            if back {
                focus - Months::new(n)
            } else {
                focus + Months::new(n)
            }
        }
        CalendarView::Week => {
            if back {
                focus - Days::new(7 * n as u64)
            } else {
                focus + Days::new(7 * n as u64)
            }
        }
        CalendarView::Day => {
            if back {
                focus - Days::new(n as u64)
            } else {
                focus + Days::new(n as u64)
            }
        }
    }
}

/// Whole-day slot emitted by month cells.
fn day_slot(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

/// One-hour slot emitted by week/day cells.
fn hour_slot(day: NaiveDate, hour: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc() + Duration::hours(i64::from(hour));
    (start, start + Duration::hours(1))
}

fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.start.date_naive() == day)
        .cloned()
        .collect()
}

fn events_in_hour(events: &[CalendarEvent], day: NaiveDate, hour: u32) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.start.date_naive() == day && event.start.hour() == hour)
        .cloned()
        .collect()
}

fn period_title(view: CalendarView, focus: NaiveDate) -> String {
    match view {
        CalendarView::Month => focus.format("%B %Y").to_string(),
        CalendarView::Week => {
            let sunday = week_days(focus)[0];
            format!("Week of {}", sunday.format("%B %-d, %Y"))
        }
        CalendarView::Day => focus.format("%A, %B %-d, %Y").to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub events: Vec<CalendarEvent>,
    pub selectable: bool,
    pub on_select_slot: Callback<(DateTime<Utc>, DateTime<Utc>)>,
    pub on_select_event: Callback<CalendarEvent>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let view = use_state(|| CalendarView::Month);
    let focus = use_state(|| Utc::now().date_naive());

    let on_prev = {
        let view = view.clone();
        let focus = focus.clone();
        Callback::from(move |_| focus.set(shift_focus(*view, *focus, -1)))
    };
    let on_next = {
        let view = view.clone();
        let focus = focus.clone();
        Callback::from(move |_| focus.set(shift_focus(*view, *focus, 1)))
    };
    let on_today = {
        let focus = focus.clone();
        Callback::from(move |_| focus.set(Utc::now().date_naive()))
    };

    let view_buttons = CalendarView::ALL.into_iter().map(|candidate| {
        let onclick = {
            let view = view.clone();
            Callback::from(move |_| view.set(candidate))
        };
        let class = if *view == candidate {
            "view-button view-button-active"
        } else {
            "view-button"
        };
        html! {
            <button {class} {onclick}>{ candidate.label() }</button>
        }
    });

    let grid = match *view {
        CalendarView::Month => render_month(props, *focus),
        CalendarView::Week => render_hour_grid(props, week_days(*focus)),
        CalendarView::Day => render_hour_grid(props, vec![*focus]),
    };

    html! {
        <div class="calendar">
            <div class="calendar-toolbar">
                <div class="calendar-nav">
                    <button onclick={on_prev}>{ "<" }</button>
                    <button onclick={on_today}>{ "Today" }</button>
                    <button onclick={on_next}>{ ">" }</button>
                </div>
                <span class="calendar-title">{ period_title(*view, *focus) }</span>
                <div class="calendar-views">
                    { for view_buttons }
                </div>
            </div>
            { grid }
        </div>
    }
}

fn event_chip(props: &CalendarProps, event: CalendarEvent) -> Html {
    let selectable = props.selectable;
    let on_select_event = props.on_select_event.clone();
    let title = event.title.clone();
    let onclick = Callback::from(move |e: MouseEvent| {
        // A chip click must not also select the surrounding slot.
        e.stop_propagation();
        if selectable {
            on_select_event.emit(event.clone());
        }
    });
    html! {
        <div class="calendar-event" {onclick}>{ title }</div>
    }
}

fn slot_cell(props: &CalendarProps, slot: (DateTime<Utc>, DateTime<Utc>), class: String, body: Html) -> Html {
    let selectable = props.selectable;
    let on_select_slot = props.on_select_slot.clone();
    let onclick = Callback::from(move |_: MouseEvent| {
        if selectable {
            on_select_slot.emit(slot);
        }
    });
    html! {
        <div {class} {onclick}>
            { body }
        </div>
    }
}

fn render_month(props: &CalendarProps, focus: NaiveDate) -> Html {
    let weeks = month_grid(focus);
    html! {
        <div class="calendar-month">
            <div class="calendar-weekday-row">
                { for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="calendar-weekday">{ *label }</div>
                }) }
            </div>
            { for weeks.iter().map(|week| html! {
                <div class="calendar-week-row">
                    { for week.iter().map(|day| {
                        let in_month = day.month() == focus.month();
                        let class = if in_month {
                            "calendar-day".to_string()
                        } else {
                            "calendar-day calendar-day-outside".to_string()
                        };
                        let chips = events_on(&props.events, *day)
                            .into_iter()
                            .map(|event| event_chip(props, event));
                        let body = html! {
                            <>
                                <span class="calendar-day-number">{ day.day() }</span>
                                { for chips }
                            </>
                        };
                        slot_cell(props, day_slot(*day), class, body)
                    }) }
                </div>
            }) }
        </div>
    }
}

fn render_hour_grid(props: &CalendarProps, days: Vec<NaiveDate>) -> Html {
    html! {
        <div class="calendar-grid">
            <div class="calendar-grid-header">
                <div class="calendar-hour-label"></div>
                { for days.iter().map(|day| html! {
                    <div class="calendar-grid-day">{ day.format("%a %-d").to_string() }</div>
                }) }
            </div>
            { for (0..24).map(|hour| html! {
                <div class="calendar-hour-row">
                    <div class="calendar-hour-label">{ format!("{hour:02}:00") }</div>
                    { for days.iter().map(|day| {
                        let chips = events_in_hour(&props.events, *day, hour)
                            .into_iter()
                            .map(|event| event_chip(props, event));
                        let body = html! { <>{ for chips }</> };
                        slot_cell(props, hour_slot(*day, hour), "calendar-hour-cell".to_string(), body)
                    }) }
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn month_grid_is_six_full_weeks_starting_sunday() {
        let focus = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let weeks = month_grid(focus);

        assert_eq!(weeks.len(), 6);
        for week in &weeks {
            assert_eq!(week.len(), 7);
            assert_eq!(week[0].weekday(), Weekday::Sun);
        }

        // Every day of January 2024 appears exactly once.
        let days: Vec<NaiveDate> = weeks.iter().flatten().copied().collect();
        for day in 1..=31 {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            assert_eq!(days.iter().filter(|d| **d == date).count(), 1);
        }
    }

    #[test]
    fn week_days_contains_focus_and_starts_sunday() {
        let focus = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let days = week_days(focus);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert!(days.contains(&focus));
    }

    #[test]
    fn shift_focus_moves_by_view_period() {
        let focus = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        assert_eq!(
            shift_focus(CalendarView::Month, focus, 1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            shift_focus(CalendarView::Week, focus, -1),
            NaiveDate::from_ymd_opt(2024, 1, 24).unwrap()
        );
        assert_eq!(
            shift_focus(CalendarView::Day, focus, 1),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn day_slot_spans_midnight_to_midnight() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, end) = day_slot(day);
        assert_eq!(start, "2024-03-10T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
        assert_eq!(end, "2024-03-11T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn hour_slot_spans_one_hour() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, end) = hour_slot(day, 9);
        assert_eq!(start, "2024-03-10T09:00:00Z".parse::<DateTime<Utc>>().unwrap());
        assert_eq!(end, "2024-03-10T10:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn events_are_bucketed_by_start_day_and_hour() {
        let event = CalendarEvent {
            id: 1,
            title: "X".to_string(),
            start: "2024-01-01T09:30:00Z".parse().unwrap(),
            end: "2024-01-01T10:00:00Z".parse().unwrap(),
        };
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let other = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        assert_eq!(events_on(&[event.clone()], day).len(), 1);
        assert!(events_on(&[event.clone()], other).is_empty());
        assert_eq!(events_in_hour(&[event.clone()], day, 9).len(), 1);
        assert!(events_in_hour(&[event], day, 10).is_empty());
    }
}
