//! Admin login and the plan-editing panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use prep_backend::BackendClient;
use prep_commerce::{Plan, PlanCatalog};
use prep_router::View;

use crate::app::BackendHandle;
use crate::format::rupees;

/// Admin login form. Authentication failures stay on this page; only a
/// success callback reaches the composition root.
#[component]
pub fn AdminLoginPage(
    backend: BackendHandle,
    on_success: Callback<()>,
    on_navigate: Callback<(View, Option<String>)>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        pending.set(true);
        error.set(None);
        let backend = backend.get_value();
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match backend.authenticate_admin(&email, &password).await {
                Ok(()) => on_success.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h1>"Admin Login"</h1>
            <form on:submit=submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button class="btn" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <button class="link-button" on:click=move |_| on_navigate.run((View::Home, None))>
                "Back to site"
            </button>
        </div>
    }
}

/// Plan catalog editor. Edits accumulate in a working copy and replace the
/// live catalog wholesale on save.
#[component]
pub fn AdminPanelPage(
    plans: RwSignal<PlanCatalog>,
    backend: BackendHandle,
    on_update_plans: Callback<Vec<Plan>>,
    on_logout: Callback<()>,
    on_navigate: Callback<(View, Option<String>)>,
) -> impl IntoView {
    let working = RwSignal::new(plans.get_untracked().plans().to_vec());
    let saved = RwSignal::new(false);

    let save = move |_| {
        on_update_plans.run(working.get_untracked());
        saved.set(true);
    };

    view! {
        <div class="panel-page">
            <h1>"Admin Panel"</h1>

            <h2>"Pricing Plans"</h2>
            <div class="plan-editor-row plan-meta">
                <span>"Name"</span>
                <span>"Base price"</span>
                <span>"Discount %"</span>
                <span>"Sale price"</span>
            </div>
            {move || {
                working
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, plan)| {
                        view! {
                            <div class="plan-editor-row">
                                <input
                                    prop:value=plan.name.clone()
                                    on:input=move |ev| {
                                        working.update(|p| p[idx].name = event_target_value(&ev))
                                    }
                                />
                                <input
                                    type="number"
                                    prop:value=plan.price_base.to_string()
                                    on:input=move |ev| {
                                        if let Ok(price) = event_target_value(&ev).parse::<i64>() {
                                            working.update(|p| p[idx].price_base = price);
                                        }
                                    }
                                />
                                <input
                                    type="number"
                                    prop:value=plan.discount_pct.to_string()
                                    on:input=move |ev| {
                                        if let Ok(pct) = event_target_value(&ev).parse::<u8>() {
                                            if pct <= 100 {
                                                working.update(|p| p[idx].discount_pct = pct);
                                            }
                                        }
                                    }
                                />
                                <span>{rupees(plan.sale_price())}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button class="btn" on:click=save>"Save Plans"</button>
            {move || saved.get().then(|| view! { <p class="form-status">"Plans saved."</p> })}

            <h2 style="margin-top: 2rem;">"Course Materials"</h2>
            <MaterialUpload backend/>

            <div style="margin-top: 2rem; display: flex; gap: 1rem;">
                <button class="btn danger" on:click=move |_| on_logout.run(())>"Log Out"</button>
                <button
                    class="btn secondary"
                    on:click=move |_| on_navigate.run((View::Home, None))
                >
                    "Back to site"
                </button>
            </div>
        </div>
    }
}

#[component]
fn MaterialUpload(backend: BackendHandle) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let status = RwSignal::new(Option::<String>::None);

    let upload = move |_| {
        let backend = backend.get_value();
        let path = format!("materials/{}", name.get_untracked());
        let bytes = content.get_untracked().into_bytes();
        spawn_local(async move {
            match backend.upload_blob(&path, bytes).await {
                Ok(path) => status.set(Some(format!("Uploaded {path}"))),
                Err(e) => status.set(Some(format!("Upload failed: {e}"))),
            }
        });
    };

    view! {
        <input
            placeholder="File name"
            prop:value=move || name.get()
            on:input=move |ev| name.set(event_target_value(&ev))
        />
        <textarea
            placeholder="Material contents"
            prop:value=move || content.get()
            on:input=move |ev| content.set(event_target_value(&ev))
        ></textarea>
        <button class="btn secondary" on:click=upload>"Upload"</button>
        {move || status.get().map(|s| view! { <p class="form-status">{s}</p> })}
    }
}
