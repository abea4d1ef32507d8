use leptos::prelude::*;

/// Dark band showing a code snippet. The text is emitted as-is (HTML-escaped
/// by the renderer, nothing else).
#[component]
pub fn CodePreview(code: &'static str) -> impl IntoView {
    view! {
        <section class="code-band">
            <div class="container">
                <div class="code-window">
                    <pre class="code-block">{code}</pre>
                </div>
            </div>
        </section>
    }
}
