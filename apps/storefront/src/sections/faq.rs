use leptos::prelude::*;

const FAQS: [(&str, &str); 4] = [
    (
        "When do I get my evaluated sheets back?",
        "Within 48 hours for scheduled series, 24 hours on the priority plans.",
    ),
    (
        "Can I switch between scheduled and unscheduled?",
        "Yes, once per attempt, from your student dashboard.",
    ),
    (
        "Are the papers really exam pattern?",
        "Papers follow the latest ICAI pattern and weighting, set fresh each attempt.",
    ),
    (
        "What if I miss a scheduled test?",
        "It converts into an unscheduled attempt valid until the exam date.",
    ),
];

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"Frequently Asked Questions"</h2>
                {FAQS
                    .iter()
                    .map(|(q, a)| {
                        view! {
                            <div class="info-card" style="margin-bottom: 0.75rem;">
                                <h3>{*q}</h3>
                                <p>{*a}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
