use leptos::prelude::*;

#[component]
pub fn ResultsSection() -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"Results That Back It Up"</h2>
                <div class="trust-bar">
                    <span><strong>"62%"</strong> " pass rate vs 19% national"</span>
                    <span><strong>"11"</strong> " all-India ranks last attempt"</span>
                    <span><strong>"86%"</strong> " students improve by 15+ marks"</span>
                </div>
            </div>
        </section>
    }
}
