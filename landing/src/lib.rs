//! # spile-landing
//!
//! The Spile marketing landing page, written as Leptos components and
//! rendered server-side into a single static HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use spile_landing::{render_landing, types::{CalendarMonth, PageOptions}};
//!
//! let options = PageOptions {
//!     calendar_month: CalendarMonth::new(2024, 9).unwrap(),
//! };
//! let html = render_landing(&options);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - static page content (founders, sample code) and calendar month math
//! - [`components`] - UI primitives (card, calendar, icon, badge)
//! - [`sections`] - page sections built from the primitives
//! - [`page`] - the root `LandingPage` document component
//! - [`styles`] - inline stylesheet
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait. No reactive runtime or
//! hydration is involved; the page is plain static HTML.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod error;
pub mod page;
pub mod sections;
pub mod styles;
pub mod types;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use error::LandingError;
pub use page::{LandingPage, PAGE_TITLE};
use types::PageOptions;

/// Render the complete landing page.
///
/// The output depends only on `options`; calling this twice with the same
/// options yields byte-identical HTML.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_landing(options: &PageOptions) -> String {
    let page = view! { <LandingPage options=*options /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", page.to_html())
}
