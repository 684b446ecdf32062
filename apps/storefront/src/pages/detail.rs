//! Long-form detail pages for the informational views.

use leptos::prelude::*;
use prep_commerce::{LineItem, PlanCatalog};
use prep_router::View;

use crate::sections::PlanCard;

#[component]
pub fn DetailPage(
    view: View,
    topic: Option<String>,
    plans: RwSignal<PlanCatalog>,
    on_navigate: Callback<(View, Option<String>)>,
    add_to_cart: Callback<LineItem>,
) -> impl IntoView {
    let body = match view {
        View::AboutDetail => view! {
            <h1>"About PrepSeries"</h1>
            <p>
                "We are an evaluation-first test series. The platform exists to "
                "answer one question honestly: if the exam were today, what would "
                "you score? Everything else - scheduling, benchmarks, doubt "
                "solving - serves that answer."
            </p>
            <p>
                "Papers are set fresh every attempt by mentors who cleared the "
                "exam themselves, and every sheet is returned with step-wise "
                "marks and written remarks."
            </p>
        }
        .into_any(),
        View::TestDetail => view! {
            <h1>"Inside A Test"</h1>
            <p>
                "Each test ships as a timed question paper in the exact ICAI "
                "layout. You write by hand, scan, and upload. Evaluators mark "
                "against the official marking scheme and attach suggested "
                "answers for every question."
            </p>
        }
        .into_any(),
        View::ProcessDetail => view! {
            <h1>"The Full Process"</h1>
            <p>"Enroll, pick your slot, write, upload, and get evaluated - in that order, every week."</p>
            <ul>
                <li>"Question papers unlock on schedule (or on demand for unscheduled plans)."</li>
                <li>"Uploads accepted as PDF scans up to 20 MB."</li>
                <li>"Evaluation lands in your dashboard with marks, remarks, and percentile."</li>
                <li>"Doubt window stays open for seven days per paper."</li>
            </ul>
        }
        .into_any(),
        View::MentorsDetail => view! {
            <h1>"The Mentor Team"</h1>
            <p>
                "Twelve evaluators, all qualified, each owning one subject. "
                "Mentors rotate through doubt-solving sessions so you can talk "
                "to the person who actually marked your sheet."
            </p>
        }
        .into_any(),
        View::PricingDetail => view! {
            <h1>"Plans In Detail"</h1>
            <p>"Every plan includes evaluation, suggested answers, and percentile benchmarks."</p>
            <div class="card-grid">
                {move || {
                    plans
                        .with(|catalog| {
                            catalog
                                .plans()
                                .iter()
                                .cloned()
                                .map(|plan| view! { <PlanCard plan add_to_cart/> })
                                .collect::<Vec<_>>()
                        })
                }}
            </div>
        }
        .into_any(),
        View::TestSeriesDetail => view! {
            <h1>"Test Series Schedule"</h1>
            <p>
                "Chapter-wise tests run for the first six weeks, followed by "
                "two full-syllabus rounds. Unscheduled students can write any "
                "paper from the moment it unlocks until exam day."
            </p>
        }
        .into_any(),
        View::TopicDetail => {
            let topic = topic.unwrap_or_else(|| "this topic".to_string());
            view! {
                <h1>{format!("Practice: {topic}")}</h1>
                <p>
                    {format!(
                        "Topic-wise tests for {topic} with suggested answers and \
                         evaluator remarks. Available inside every series plan."
                    )}
                </p>
            }
            .into_any()
        }
        // Dashboard and checkout views never reach this component.
        _ => view! {
            <h1>"Page Not Found"</h1>
            <p>"The page you were looking for does not exist."</p>
        }
        .into_any(),
    };

    view! {
        <div class="detail-page">
            {body}
            <button class="link-button" on:click=move |_| on_navigate.run((View::Home, None))>
                "Back to home"
            </button>
        </div>
    }
}
