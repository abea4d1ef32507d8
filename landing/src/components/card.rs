//! Card composition primitive: a bordered container with header, title,
//! description and content slots.

use leptos::prelude::*;

use super::with_class;

#[component]
pub fn Card(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=with_class("card", &class)>{children()}</div> }
}

#[component]
pub fn CardHeader(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=with_class("card-header", &class)>{children()}</div> }
}

#[component]
pub fn CardTitle(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <h3 class=with_class("card-title", &class)>{children()}</h3> }
}

#[component]
pub fn CardDescription(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <p class=with_class("card-description", &class)>{children()}</p> }
}

#[component]
pub fn CardContent(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=with_class("card-content", &class)>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_slots_inside_card() {
        let html = view! {
            <Card class="overflow-hidden">
                <CardHeader>
                    <CardTitle>"Title"</CardTitle>
                    <CardDescription>"Subtitle"</CardDescription>
                </CardHeader>
                <CardContent>"Body"</CardContent>
            </Card>
        }
        .to_html();

        assert!(html.contains(r#"<div class="card overflow-hidden">"#));
        assert!(html.contains(r#"<h3 class="card-title">Title</h3>"#));
        assert!(html.contains(r#"<p class="card-description">Subtitle</p>"#));
        assert!(html.contains(r#"<div class="card-content">Body</div>"#));

        let header = html.find("card-header").unwrap();
        let content = html.find("card-content").unwrap();
        assert!(header < content);
    }
}
