//! Root document component - the complete HTML page.

use leptos::prelude::*;

use crate::sections::{Booking, CodePreview, Footer, Hero, Team};
use crate::styles::LANDING_CSS;
use crate::types::{FOUNDERS, PageOptions, SAMPLE_CODE};

/// Document `<title>`.
pub const PAGE_TITLE: &str = "Spile | Distributed Computing, Simplified";

/// The whole landing page, `<html>` element included.
#[component]
pub fn LandingPage(
    /// Render input (calendar month)
    options: PageOptions,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{PAGE_TITLE}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <div class="page">
                    <Hero />
                    <CodePreview code=SAMPLE_CODE />
                    <Team founders=&FOUNDERS />
                    <Booking month=options.calendar_month />
                    <Footer />
                </div>
            </body>
        </html>
    }
}
