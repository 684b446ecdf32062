use leptos::prelude::*;
use prep_router::View;

#[component]
pub fn AboutSection(on_navigate: Callback<(View, Option<String>)>) -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"Built By People Who Cleared It"</h2>
                <p>
                    "PrepSeries started as a study circle of rankers sharing mock "
                    "papers. Today it is a full evaluation team, but the rule is "
                    "unchanged: nobody evaluates a paper they have not cleared "
                    "themselves."
                </p>
                <button
                    class="link-button"
                    on:click=move |_| on_navigate.run((View::AboutDetail, None))
                >
                    "More about us"
                </button>
            </div>
        </section>
    }
}
