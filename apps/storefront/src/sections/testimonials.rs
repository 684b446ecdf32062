use leptos::prelude::*;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The evaluation remarks read like a personal coaching session. \
                I rewrote my presentation style completely.",
        author: "Sneha, cleared Group 2",
    },
    Testimonial {
        quote: "Unscheduled series saved my attempt. I wrote papers at 6am \
                before work and still got them back in two days.",
        author: "Arjun, working student",
    },
    Testimonial {
        quote: "Scored 14 marks higher in the real exam than in my last mock. \
                The benchmarks told me exactly what to fix.",
        author: "Kavya, first attempt",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"What Students Say"</h2>
                <div class="card-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="quote-card">
                                    <p>{t.quote}</p>
                                    <footer>{t.author}</footer>
                                </blockquote>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
