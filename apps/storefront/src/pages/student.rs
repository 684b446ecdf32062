//! Student login and dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use prep_backend::BackendClient;
use prep_router::View;

use crate::app::BackendHandle;

/// Student login form. On success the composition root persists the
/// identifier and navigates to the dashboard.
#[component]
pub fn StudentLoginPage(
    backend: BackendHandle,
    on_success: Callback<String>,
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
            match backend.authenticate_student(&email, &password).await {
                Ok(profile) => on_success.run(profile.email),
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h1>"Student Login"</h1>
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

const MATERIALS: [(&str, &str); 2] = [
    ("Suggested Answers - May Attempt", "materials/suggested-answers.pdf"),
    ("Marking Scheme Notes", "materials/marking-scheme.pdf"),
];

#[component]
pub fn StudentDashboardPage(
    backend: BackendHandle,
    identifier: Signal<Option<String>>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let status = RwSignal::new(Option::<String>::None);

    let download = move |path: &'static str| {
        let backend = backend.get_value();
        spawn_local(async move {
            match backend.download_blob(path).await {
                Ok(bytes) => status.set(Some(format!("Downloaded {path} ({} bytes)", bytes.len()))),
                Err(e) => status.set(Some(format!("Not available yet: {e}"))),
            }
        });
    };

    view! {
        <div class="panel-page">
            <h1>"Student Dashboard"</h1>
            <p>
                "Signed in as "
                <strong>{move || identifier.get().unwrap_or_else(|| "student".to_string())}</strong>
            </p>

            <h2>"Course Materials"</h2>
            {MATERIALS
                .iter()
                .map(|(label, path)| {
                    let path = *path;
                    view! {
                        <div class="cart-row">
                            <span>{*label}</span>
                            <button class="btn secondary" on:click=move |_| download(path)>
                                "Download"
                            </button>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            {move || status.get().map(|s| view! { <p class="form-status">{s}</p> })}

            <button class="btn danger" style="margin-top: 2rem;" on:click=move |_| on_logout.run(())>
                "Log Out"
            </button>
        </div>
    }
}
