//! CSS for the landing page.
//!
//! The page ships as a single self-contained HTML file, so the stylesheet
//! is inlined into `<head>`.
//!
//! # Customization
//!
//! ```rust
//! use spile_landing::styles::LANDING_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! ```

/// Complete stylesheet - light page, dark code and footer bands.
pub const LANDING_CSS: &str = r#"
:root {
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-600: #4b5563;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --blue-500: #3b82f6;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --radius: 8px;
    --font-sans: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
    --font-mono: "JetBrains Mono", ui-monospace, "SF Mono", monospace;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
}

a { color: inherit; text-decoration: none; }

.page {
    min-height: 100vh;
    background: linear-gradient(to bottom, var(--gray-50), #ffffff);
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 64px 16px;
}

/* Hero */
.hero { text-align: center; }
.hero-title {
    font-size: 60px;
    font-weight: 700;
    line-height: 1.1;
    margin: 0 0 24px;
}
.hero-accent { color: var(--blue-600); }
.hero-description {
    font-size: 20px;
    color: var(--gray-600);
    max-width: 672px;
    margin: 0 auto 32px;
}
.hero-actions {
    display: flex;
    justify-content: center;
    gap: 16px;
}

.btn {
    padding: 12px 32px;
    border-radius: var(--radius);
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    transition: background-color 0.15s ease;
}
.btn-primary {
    background: var(--blue-600);
    color: #ffffff;
    border: none;
}
.btn-primary:hover { background: var(--blue-700); }
.btn-secondary {
    background: transparent;
    border: 1px solid var(--gray-300);
}
.btn-secondary:hover { background: var(--gray-50); }

/* Code preview */
.code-band {
    background: var(--gray-900);
    margin: 48px 0;
}
.code-window {
    background: var(--gray-800);
    border-radius: var(--radius);
    padding: 24px;
    overflow-x: auto;
}
.code-block {
    margin: 0;
    color: var(--gray-100);
    font-family: var(--font-mono);
    font-size: 14px;
}

/* Team */
.section-title {
    font-size: 36px;
    font-weight: 700;
    text-align: center;
    margin: 0 0 48px;
}
.team-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}
@media (min-width: 768px) {
    .team-grid, .footer-grid { grid-template-columns: repeat(3, 1fr); }
}

.card {
    background: #ffffff;
    border: 1px solid var(--gray-100);
    border-radius: var(--radius);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.overflow-hidden { overflow: hidden; }
.card-header { padding: 24px 24px 0; }
.card-title { margin: 0 0 6px; font-size: 20px; font-weight: 600; }
.card-description { margin: 0; color: var(--gray-600); font-size: 14px; }
.card-content { padding: 16px 24px 24px; }

.founder-portrait {
    width: 100%;
    height: 256px;
    object-fit: cover;
    display: block;
}
.founder-bio { color: var(--gray-600); margin: 0 0 16px; }

.social-links { display: flex; gap: 16px; }
.social-link { color: var(--gray-600); transition: color 0.15s ease; }
.social-twitter:hover { color: var(--blue-500); }
.social-github:hover { color: var(--gray-900); }
.social-linkedin:hover { color: var(--blue-700); }

.badge {
    display: inline-flex;
    padding: 2px 10px;
    border-radius: 9999px;
    font-size: 12px;
    font-weight: 600;
    background: var(--blue-600);
    color: #ffffff;
}
.badge-secondary { background: var(--gray-100); color: var(--gray-900); }
.badge-outline { background: transparent; color: var(--gray-900); border: 1px solid var(--gray-300); }

/* Booking */
.booking { background: var(--gray-50); }
.booking-inner { max-width: 672px; margin: 0 auto; }
.booking .section-title { margin-bottom: 32px; }
.booking-lead { text-align: center; color: var(--gray-600); margin: 0 0 32px; }
.booking-panel {
    background: #ffffff;
    padding: 24px;
    border-radius: var(--radius);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.calendar { display: inline-block; padding: 12px; }
.rounded-md { border-radius: 6px; }
.border { border: 1px solid var(--gray-300); }
.calendar-caption { text-align: center; font-weight: 500; margin-bottom: 8px; }
.calendar-grid { border-collapse: collapse; }
.calendar-weekday { width: 36px; font-size: 13px; font-weight: 400; color: var(--gray-600); }
.calendar-cell { width: 36px; height: 36px; padding: 0; text-align: center; }
.calendar-day {
    width: 36px;
    height: 36px;
    border: none;
    border-radius: 6px;
    background: transparent;
    font: inherit;
    cursor: pointer;
}
.calendar-day:hover { background: var(--gray-100); }
.calendar-day[aria-selected="true"] { background: var(--gray-900); color: #ffffff; }

/* Footer */
.footer {
    background: var(--gray-900);
    color: var(--gray-300);
}
.footer .container { padding: 48px 16px; }
.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}
.footer-heading { font-size: 20px; font-weight: 700; margin: 0 0 16px; }
.footer-text { color: var(--gray-400); margin: 0 0 4px; }
.footer-social { display: flex; gap: 16px; }
.footer-social a:hover { color: #ffffff; }
.footer-bottom {
    border-top: 1px solid var(--gray-800);
    margin-top: 32px;
    padding-top: 32px;
    text-align: center;
}
.footer-bottom p { margin: 0; }
"#;
