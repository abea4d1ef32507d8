use leptos::prelude::*;

use crate::components::{Icon, IconName};

/// Address listed under "Contact".
pub const CONTACT_EMAIL: &str = "hello@spile.tech";
/// Bottom line of the footer.
pub const COPYRIGHT: &str = "© 2024 Spile. All rights reserved.";

/// Dark footer: about blurb, contact details, social links, copyright.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-heading">"Spile"</h3>
                        <p class="footer-text">
                            "Making distributed systems development accessible to everyone."
                        </p>
                    </div>
                    <div>
                        <h3 class="footer-heading">"Contact"</h3>
                        <p class="footer-text">{CONTACT_EMAIL}</p>
                        <p class="footer-text">"San Francisco, CA"</p>
                    </div>
                    <div>
                        <h3 class="footer-heading">"Follow Us"</h3>
                        <div class="footer-social">
                            <a href="#" aria-label="Twitter"><Icon name=IconName::Twitter size=20 /></a>
                            <a href="#" aria-label="GitHub"><Icon name=IconName::Github size=20 /></a>
                            <a href="#" aria-label="LinkedIn"><Icon name=IconName::Linkedin size=20 /></a>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}
