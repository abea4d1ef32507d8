//! SVG icon components using Lucide Icons.
//!
//! Icons are rendered inline as outline SVGs on a 24x24 grid, stroked with
//! `currentColor` so links can recolor them on hover.
//! Glyphs come from the [Lucide](https://lucide.dev/) set.

use leptos::prelude::*;

/// Icons available to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    /// Twitter bird
    Twitter,
    /// GitHub octocat
    Github,
    /// LinkedIn "in"
    Linkedin,
}

impl IconName {
    /// Value of the `data-icon` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
        }
    }

    /// SVG path data, one entry per `<path>` element.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Twitter => &[ICON_TWITTER],
            Self::Github => &[ICON_GITHUB, ICON_GITHUB_TAIL],
            Self::Linkedin => &[ICON_LINKEDIN, ICON_LINKEDIN_BAR, ICON_LINKEDIN_DOT],
        }
    }
}

/// Renders an inline SVG icon.
///
/// # Props
///
/// * `name` - Which glyph to draw
/// * `size` - Width and height in pixels (default: 24)
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon name=IconName::Github size=20 /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph to render
    name: IconName,
    /// Icon size in pixels
    #[prop(default = 24)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name.as_str()
            class=class
        >
            {name.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

// =============================================================================
// Lucide Icons (outline, 24x24) - https://lucide.dev/
// =============================================================================

const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";

const ICON_GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4";
const ICON_GITHUB_TAIL: &str = "M9 18c-4.51 2-5-2-7-2";

const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z";
const ICON_LINKEDIN_BAR: &str = "M2 9h4v12H2z";
const ICON_LINKEDIN_DOT: &str = "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0";
