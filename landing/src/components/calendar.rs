//! Calendar selection primitive.
//!
//! Renders one month as a week grid of day buttons. Nothing is selected on
//! first render; the selection mode is exposed as `data-mode` for whatever
//! script takes over the widget in the browser.

use leptos::prelude::*;

use super::with_class;
use crate::types::{CalendarMode, CalendarMonth};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[component]
pub fn Calendar(
    /// Month to display
    month: CalendarMonth,
    /// Selection mode
    #[prop(optional)]
    mode: CalendarMode,
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let multiselect = if mode == CalendarMode::Single { "false" } else { "true" };

    view! {
        <div class=with_class("calendar", &class) data-mode=mode.as_str() data-month=month.to_string()>
            <div class="calendar-caption">{month.caption()}</div>
            <table class="calendar-grid" role="grid" aria-multiselectable=multiselect>
                <thead>
                    <tr>
                        {WEEKDAYS
                            .iter()
                            .map(|day| view! { <th scope="col" class="calendar-weekday">{*day}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {month
                        .weeks()
                        .into_iter()
                        .map(|week| view! { <CalendarWeek week=week /> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn CalendarWeek(week: [Option<u32>; 7]) -> impl IntoView {
    view! {
        <tr class="calendar-week">
            {week
                .into_iter()
                .map(|cell| match cell {
                    Some(day) => view! {
                        <td class="calendar-cell">
                            <button type="button" class="calendar-day" data-day=day.to_string()>
                                {day}
                            </button>
                        </td>
                    }
                    .into_any(),
                    None => view! { <td class="calendar-cell calendar-outside"></td> }.into_any(),
                })
                .collect_view()}
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(month: CalendarMonth, mode: CalendarMode) -> String {
        view! { <Calendar month=month mode=mode class="rounded-md border" /> }.to_html()
    }

    #[test]
    fn passes_mode_and_class_through() {
        let html = render(CalendarMonth::new(2024, 9).unwrap(), CalendarMode::Single);

        assert!(html.contains(r#"class="calendar rounded-md border""#));
        assert!(html.contains(r#"data-mode="single""#));
        assert!(html.contains(r#"aria-multiselectable="false""#));
        assert!(html.contains("September 2024"));
    }

    #[test]
    fn renders_one_button_per_day() {
        let html = render(CalendarMonth::new(2024, 2).unwrap(), CalendarMode::Range);

        assert_eq!(html.matches(r#"class="calendar-day""#).count(), 29);
        assert!(html.contains(r#"data-day="29""#));
        assert!(!html.contains(r#"data-day="30""#));
        assert!(html.contains(r#"data-mode="range""#));
        assert_eq!(html.matches(r#"class="calendar-weekday""#).count(), 7);
    }

    #[test]
    fn pads_weeks_with_outside_cells() {
        // March 2024: five leading blanks (starts on a Friday), six rows.
        let html = render(CalendarMonth::new(2024, 3).unwrap(), CalendarMode::Single);

        assert_eq!(html.matches(r#"class="calendar-week""#).count(), 6);
        let cells = html.matches(r#"class="calendar-cell"#).count();
        assert_eq!(cells, 6 * 7);
    }
}
