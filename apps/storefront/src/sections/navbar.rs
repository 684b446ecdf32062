//! Shared navigation bar with the live cart count.

use leptos::prelude::*;
use prep_router::View;

#[component]
pub fn Navbar(
    on_navigate: Callback<(View, Option<String>)>,
    current_view: Signal<View>,
    cart_count: Signal<usize>,
) -> impl IntoView {
    let nav_item = move |label: &'static str, target: View| {
        let class = move || {
            if current_view.get() == target {
                "active"
            } else {
                ""
            }
        };
        view! {
            <button class=class on:click=move |_| on_navigate.run((target, None))>
                {label}
            </button>
        }
    };

    view! {
        <header class="site-header">
            <nav class="nav-container">
                <span class="logo" on:click=move |_| on_navigate.run((View::Home, None))>
                    "PrepSeries"
                </span>
                <div class="nav-links">
                    {nav_item("Home", View::Home)}
                    {nav_item("Test Series", View::TestSeriesDetail)}
                    {nav_item("Pricing", View::PricingDetail)}
                    {nav_item("Mentors", View::MentorsDetail)}
                    {nav_item("Student Login", View::StudentLogin)}
                </div>
                <button
                    class="btn secondary cart-button"
                    on:click=move |_| on_navigate.run((View::Checkout, None))
                >
                    "Cart"
                    <span class="cart-badge">{move || cart_count.get()}</span>
                </button>
            </nav>
        </header>
    }
}
