use leptos::prelude::*;

/// Headline banner with the two call-to-action buttons.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="container hero">
            <h1 class="hero-title">
                "Distributed Computing,"
                <span class="hero-accent">" Simplified"</span>
            </h1>
            <p class="hero-description">
                "Spile makes distributed systems development as easy as writing local code. "
                "Scale your applications effortlessly with our next-generation framework."
            </p>
            <div class="hero-actions">
                <button type="button" class="btn btn-primary">"Get Started"</button>
                <button type="button" class="btn btn-secondary">"Read Docs"</button>
            </div>
        </header>
    }
}
