//! Shared footer - contact block, payment methods, quick links.

use leptos::prelude::*;

const FOOTER_LOGO_URL: &str = "https://www.kanexfire.com/images/home/Footer_Logo.png";
const PAYMENT_LOGOS_URL: &str = "https://www.kanexfire.com/images/payment_logos.jpg";

const OFFICE_ADDRESS: &str = "Office No.502, 5th Floor, A wing, Damji Shamji Corporate Square, \
Ghatkopar - Andheri Link Road, Laxmi Nagar, Ghatkopar (E), Mumbai - 400075";

const QUICK_LINKS: [&str; 10] = [
    "Home",
    "Career",
    "Contact",
    "Resources",
    "Blog",
    "About",
    "Infrastructure",
    "Clients",
    "Testimonials",
    "Return and Refund Policy",
];

/// Fixed footer mounted at the bottom of every page.
///
/// Everything is literal except `year`, which the caller sets to the
/// current calendar year at render time.
#[component]
pub fn SiteFooter(year: i32) -> impl IntoView {
    let copyright = format!("© {year} Kanex Fire Solutions Limited. All rights reserved.");

    view! {
        <footer class="footer">
            <div class="footer-columns">
                <div class="footer-col">
                    <img class="footer-logo" src=FOOTER_LOGO_URL alt="Kanex Fire" />
                    <div class="footer-line">{OFFICE_ADDRESS}</div>
                    <div class="footer-line">"+91 22 2500 1288"</div>
                    <div class="footer-line">"marketing@kanexfire.com"</div>
                </div>
                <div class="footer-col">
                    <div class="footer-heading">"PAYMENT METHODS ACCEPTED"</div>
                    <img class="payment-methods" src=PAYMENT_LOGOS_URL alt="Payment Methods" />
                </div>
                <div class="footer-col">
                    <div class="footer-heading">"QUICK LINKS"</div>
                    <div class="quick-links">
                        {QUICK_LINKS
                            .iter()
                            .map(|link| view! { <a href="#">{*link}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
            <div class="footer-copyright">{copyright}</div>
        </footer>
    }
}
