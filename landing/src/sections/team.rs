//! "Meet Our Team" grid - one card per founder, in list order.

use leptos::prelude::*;

use crate::components::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, Icon, IconName,
};
use crate::types::FounderProfile;

const SOCIAL_ICON_SIZE: u32 = 20;

#[component]
pub fn Team(founders: &'static [FounderProfile]) -> impl IntoView {
    view! {
        <section class="container team">
            <h2 class="section-title">"Meet Our Team"</h2>
            <div class="team-grid">
                {founders
                    .iter()
                    .map(|founder| view! { <FounderCard founder=*founder /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FounderCard(founder: FounderProfile) -> impl IntoView {
    view! {
        <Card class="founder-card overflow-hidden">
            <img src=founder.image_url alt=founder.name class="founder-portrait" />
            <CardHeader>
                <CardTitle>{founder.name}</CardTitle>
                <CardDescription>{founder.role}</CardDescription>
            </CardHeader>
            <CardContent>
                <p class="founder-bio">{founder.bio}</p>
                <div class="social-links">
                    <a href=founder.twitter_url class="social-link social-twitter" aria-label="Twitter">
                        <Icon name=IconName::Twitter size=SOCIAL_ICON_SIZE />
                    </a>
                    <a href=founder.github_url class="social-link social-github" aria-label="GitHub">
                        <Icon name=IconName::Github size=SOCIAL_ICON_SIZE />
                    </a>
                    <a href=founder.linkedin_url class="social-link social-linkedin" aria-label="LinkedIn">
                        <Icon name=IconName::Linkedin size=SOCIAL_ICON_SIZE />
                    </a>
                </div>
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    const TEST_FOUNDER: FounderProfile = FounderProfile {
        name: "Ada Lovelace",
        role: "Analyst",
        bio: "Wrote the first program.",
        image_url: "/img/ada.png",
        twitter_url: "https://twitter.com/ada",
        github_url: "https://github.com/ada",
        linkedin_url: "https://linkedin.com/in/ada",
    };

    #[test]
    fn card_links_point_at_profile_urls() {
        let html = view! { <FounderCard founder=TEST_FOUNDER /> }.to_html();

        assert_eq!(html.matches("<a ").count(), 3);
        assert!(html.contains(r#"href="https://twitter.com/ada""#));
        assert!(html.contains(r#"href="https://github.com/ada""#));
        assert!(html.contains(r#"href="https://linkedin.com/in/ada""#));

        let twitter = html.find("twitter.com/ada").unwrap();
        let github = html.find("github.com/ada").unwrap();
        let linkedin = html.find("linkedin.com/in/ada").unwrap();
        assert!(twitter < github && github < linkedin);
    }

    #[test]
    fn card_shows_portrait_and_text() {
        let html = view! { <FounderCard founder=TEST_FOUNDER /> }.to_html();

        assert!(html.contains(r#"src="/img/ada.png""#));
        assert!(html.contains(r#"alt="Ada Lovelace""#));
        assert!(html.contains("Analyst"));
        assert!(html.contains("Wrote the first program."));
        assert_eq!(html.matches(r#"width="20""#).count(), 3);
    }

    #[test]
    fn grid_has_one_card_per_founder() {
        static TWO: [FounderProfile; 2] = [TEST_FOUNDER, TEST_FOUNDER];
        let html = view! { <Team founders=&TWO /> }.to_html();

        assert_eq!(html.matches(r#"class="card founder-card"#).count(), 2);
        assert!(html.contains("Meet Our Team"));
    }
}
