use leptos::prelude::*;
use prep_router::View;

#[component]
pub fn Footer(on_navigate: Callback<(View, Option<String>)>) -> impl IntoView {
    let link = move |label: &'static str, target: View| {
        view! {
            <button on:click=move |_| on_navigate.run((target, None))>{label}</button>
        }
    };

    view! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-links">
                    {link("About Us", View::AboutDetail)}
                    {link("How It Works", View::ProcessDetail)}
                    {link("Test Series", View::TestSeriesDetail)}
                    {link("Pricing", View::PricingDetail)}
                    {link("Student Login", View::StudentLogin)}
                    {link("Admin", View::AdminLogin)}
                </div>
                <p class="footer-note">
                    "PrepSeries - exam-pattern test series with detailed evaluation."
                </p>
            </div>
        </footer>
    }
}
