use leptos::prelude::*;

#[component]
pub fn GuaranteeSection() -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"Evaluated Like The Real Exam"</h2>
                <p>
                    "Every answer sheet is checked against the marking scheme the "
                    "examiners use, with step-wise marks and written feedback. If a "
                    "test goes unevaluated past 72 hours, that attempt is free."
                </p>
            </div>
        </section>
    }
}
