//! Site footer.

use chrono::Datelike as _;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <section>
                    <h3 class="footer__brand">"Pulse Portal"</h3>
                    <p>"Bringing medical camps to the communities that need them most."</p>
                </section>
                <section>
                    <h4>"Quick Links"</h4>
                    <ul>
                        <li><a href="/">"Home"</a></li>
                        <li><a href="/available-camps">"Available Camps"</a></li>
                        <li><a href="/login">"Join Us"</a></li>
                    </ul>
                </section>
                <section>
                    <h4>"Contact Us"</h4>
                    <p>"Email: " <a href="mailto:support@pulseportal.org">"support@pulseportal.org"</a></p>
                    <p>"Phone: +880 1234 567890"</p>
                    <p>"Address: 123 Health Avenue, Dhaka, Bangladesh"</p>
                </section>
                <section>
                    <h4>"Follow Us"</h4>
                    <ul class="footer__social">
                        <li><a href="https://facebook.com" target="_blank" rel="noopener">"Facebook"</a></li>
                        <li><a href="https://twitter.com" target="_blank" rel="noopener">"Twitter"</a></li>
                        <li><a href="https://instagram.com" target="_blank" rel="noopener">"Instagram"</a></li>
                        <li><a href="https://linkedin.com" target="_blank" rel="noopener">"LinkedIn"</a></li>
                    </ul>
                </section>
            </div>
            <p class="footer__copyright">{format!("© {year} Pulse Portal. All rights reserved.")}</p>
        </footer>
    }
}
