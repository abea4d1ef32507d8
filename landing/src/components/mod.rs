//! UI primitives the page sections are composed from.
//!
//! These are small, stateless Leptos components with a narrow
//! configuration surface (an extra class, a mode, a size). They carry no
//! page content of their own.
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use spile_landing::components::{Card, CardContent, CardHeader, CardTitle};
//!
//! view! {
//!     <Card class="founder-card">
//!         <CardHeader>
//!             <CardTitle>"Sarah Chen"</CardTitle>
//!         </CardHeader>
//!         <CardContent>"..."</CardContent>
//!     </Card>
//! }
//! ```

mod badge;
mod calendar;
mod card;
mod icons;

pub use badge::{Badge, BadgeVariant};
pub use calendar::Calendar;
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use icons::{Icon, IconName};

/// Join a primitive's base class with caller-supplied classes.
pub(crate) fn with_class(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}
