use leptos::prelude::*;
use prep_router::View;

#[component]
pub fn ProcessSection(on_navigate: Callback<(View, Option<String>)>) -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"How It Works"</h2>
                <div class="card-grid">
                    <div class="info-card">
                        <h3>"1. Pick a series"</h3>
                        <p>"Scheduled, unscheduled, or fast-track - sized to your prep window."</p>
                    </div>
                    <div class="info-card">
                        <h3>"2. Write the paper"</h3>
                        <p>"Download the question paper, write under exam timing, upload your sheets."</p>
                    </div>
                    <div class="info-card">
                        <h3>"3. Get evaluated"</h3>
                        <p>"Step-wise marking, examiner-style remarks, and suggested answers within 48 hours."</p>
                    </div>
                </div>
                <button
                    class="link-button"
                    on:click=move |_| on_navigate.run((View::ProcessDetail, None))
                >
                    "See the full process"
                </button>
            </div>
        </section>
    }
}
