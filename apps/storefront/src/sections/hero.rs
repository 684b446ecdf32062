use leptos::prelude::*;
use prep_router::View;

#[component]
pub fn Hero(on_navigate: Callback<(View, Option<String>)>) -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Write Exams Before The Exam"</h1>
            <p>
                "Exam-pattern mock tests, evaluated in detail by mentors who have "
                "cleared them. Know exactly where you stand before it counts."
            </p>
            <button class="btn" on:click=move |_| on_navigate.run((View::PricingDetail, None))>
                "Explore Test Series"
            </button>
        </section>
    }
}
