use leptos::prelude::*;
use prep_router::View;

#[component]
pub fn TestSeriesExplorer(on_navigate: Callback<(View, Option<String>)>) -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"Explore The Test Series"</h2>
                <p>
                    "Chapter-wise tests to warm up, full-syllabus papers to finish. "
                    "Each series maps to the current attempt's syllabus and paper "
                    "pattern."
                </p>
                <button
                    class="btn secondary"
                    on:click=move |_| on_navigate.run((View::TestSeriesDetail, None))
                >
                    "Browse the schedule"
                </button>
            </div>
        </section>
    }
}
