use leptos::prelude::*;

use super::with_class;

/// Visual style of a [`Badge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Filled with the accent color
    #[default]
    Default,
    /// Muted fill
    Secondary,
    /// Border only
    Outline,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "badge",
            Self::Secondary => "badge badge-secondary",
            Self::Outline => "badge badge-outline",
        }
    }
}

/// Small inline label.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <span class=with_class(variant.class(), &class)>{children()}</span> }
}
