//! Checkout view: read/remove access to the cart plus an order summary.
//!
//! Adding happens only from catalog-browsing views; this page can only take
//! items out.

use leptos::prelude::*;
use prep_commerce::{Cart, ItemId};
use prep_router::View;

use crate::format::rupees;

#[component]
pub fn CheckoutPage(
    cart: RwSignal<Cart>,
    remove_from_cart: Callback<ItemId>,
    on_navigate: Callback<(View, Option<String>)>,
) -> impl IntoView {
    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            {move || {
                if cart.with(|c| c.is_empty()) {
                    view! {
                        <p>"Your cart is empty."</p>
                        <button
                            class="btn"
                            on:click=move |_| on_navigate.run((View::PricingDetail, None))
                        >
                            "Browse test series"
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <div>
                            {cart
                                .with(|c| {
                                    c.items()
                                        .iter()
                                        .cloned()
                                        .map(|item| {
                                            let id = item.id.clone();
                                            view! {
                                                <div class="cart-row">
                                                    <div>
                                                        <strong>{item.name.clone()}</strong>
                                                        <p class="plan-meta">{item.kind.clone()}</p>
                                                    </div>
                                                    <div>
                                                        <span>{rupees(item.price)}</span>
                                                        " "
                                                        <span class="struck">
                                                            {rupees(item.original_price)}
                                                        </span>
                                                        <button
                                                            class="link-button"
                                                            on:click=move |_| {
                                                                remove_from_cart.run(id.clone())
                                                            }
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })}
                            <div class="summary-row">
                                <span>"Original total"</span>
                                <span class="struck">{move || rupees(cart.with(|c| c.original_total()))}</span>
                            </div>
                            <div class="summary-row">
                                <span>"You save"</span>
                                <span class="savings">{move || rupees(cart.with(|c| c.savings()))}</span>
                            </div>
                            <div class="summary-row total">
                                <span>"Total"</span>
                                <span>{move || rupees(cart.with(|c| c.total()))}</span>
                            </div>
                            <button class="btn" style="margin-top: 1rem;">"Proceed to Payment"</button>
                        </div>
                    }
                    .into_any()
                }
            }}
            <button class="link-button" on:click=move |_| on_navigate.run((View::Home, None))>
                "Continue browsing"
            </button>
        </div>
    }
}
