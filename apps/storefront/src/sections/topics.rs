//! Subject topic links. Each one navigates to the topic-detail view with the
//! human-readable topic name; the router takes care of the slug.

use leptos::prelude::*;
use prep_router::View;

const TOPICS: [&str; 6] = [
    "Advanced Accounting",
    "Direct Tax",
    "Indirect Tax",
    "Audit",
    "Corporate Law",
    "Costing",
];

#[component]
pub fn TopicLinks(on_navigate: Callback<(View, Option<String>)>) -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"Practice By Topic"</h2>
                <div class="topic-links">
                    {TOPICS
                        .iter()
                        .map(|topic| {
                            let topic = *topic;
                            view! {
                                <button
                                    class="btn secondary"
                                    on:click=move |_| {
                                        on_navigate.run((View::TopicDetail, Some(topic.to_string())))
                                    }
                                >
                                    {topic}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
