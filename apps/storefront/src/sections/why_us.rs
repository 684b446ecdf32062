use leptos::prelude::*;

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"Why Students Stay"</h2>
                <div class="card-grid">
                    <div class="info-card">
                        <h3>"Real evaluation"</h3>
                        <p>"Marks you can trust, not participation scores."</p>
                    </div>
                    <div class="info-card">
                        <h3>"Doubt solving"</h3>
                        <p>"Every remark on your sheet can be discussed with the evaluator."</p>
                    </div>
                    <div class="info-card">
                        <h3>"Rank benchmarks"</h3>
                        <p>"See your percentile against everyone who wrote the same paper."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
