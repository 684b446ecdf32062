//! Pricing cards driven by the live plan catalog.

use leptos::prelude::*;
use prep_commerce::{LineItem, Plan, PlanCatalog};
use prep_router::View;

use crate::format::rupees;

#[component]
pub fn PricingSection(
    plans: RwSignal<PlanCatalog>,
    on_navigate: Callback<(View, Option<String>)>,
    add_to_cart: Callback<LineItem>,
) -> impl IntoView {
    view! {
        <section id="pricing">
            <div class="section-inner">
                <h2>"Choose Your Test Series"</h2>
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
                <button
                    class="link-button"
                    on:click=move |_| on_navigate.run((View::PricingDetail, None))
                >
                    "Compare plans in detail"
                </button>
            </div>
        </section>
    }
}

/// One plan card. Adding to the cart is the only mutation available from a
/// catalog-browsing view.
#[component]
pub fn PlanCard(plan: Plan, add_to_cart: Callback<LineItem>) -> impl IntoView {
    let item = plan.to_line_item();
    let sale = plan.sale_price();

    view! {
        <div class="plan-card">
            <div class="plan-banner">{plan.series_count.clone()}</div>
            <div class="plan-body">
                <h3>{plan.name.clone()}</h3>
                <p class="plan-meta">{plan.student_count.clone()} " - " {plan.tagline.clone()}</p>
                <p class="plan-price">
                    {rupees(sale)}
                    <span class="struck">{rupees(plan.price_base)}</span>
                    " "
                    <span class="discount-badge">{plan.discount_pct} "% OFF"</span>
                </p>
                <ul class="plan-features">
                    {plan
                        .features
                        .iter()
                        .map(|feature| view! { <li>{feature.clone()}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <button class="btn" on:click=move |_| add_to_cart.run(item.clone())>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
