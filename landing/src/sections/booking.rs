use leptos::prelude::*;

use crate::components::Calendar;
use crate::types::{CalendarMode, CalendarMonth};

/// "Book a Consultation" section with a single-date calendar.
#[component]
pub fn Booking(month: CalendarMonth) -> impl IntoView {
    view! {
        <section class="container booking">
            <div class="booking-inner">
                <h2 class="section-title">"Book a Consultation"</h2>
                <p class="booking-lead">
                    "Schedule a call with our team to learn how Spile can help scale your infrastructure."
                </p>
                <div class="booking-panel">
                    <Calendar month=month mode=CalendarMode::Single class="rounded-md border" />
                </div>
            </div>
        </section>
    }
}
