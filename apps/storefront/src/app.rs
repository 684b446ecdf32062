//! Composition root.
//!
//! Owns every piece of shared state (route, session flags, cart, plan
//! catalog) and selects which subtree to mount from the current view. All
//! mutation goes through the callbacks defined here; the sections and pages
//! below are pure consumers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};
use std::sync::Arc;

use prep_backend::{BackendClient, MemoryBackend};
use prep_commerce::{Cart, ItemId, LineItem, Plan, PlanCatalog};
use prep_router::{resolve, RouteState, View};
use prep_session::{PlatformStore, Role, SessionStore};
use tracing::warn;

use crate::browser;
use crate::pages::{
    AdminLoginPage, AdminPanelPage, CheckoutPage, DetailPage, StudentDashboardPage,
    StudentLoginPage,
};
use crate::sections::{
    AboutSection, FaqSection, Footer, GuaranteeSection, Hero, MentorsSection, Navbar,
    PricingSection, ProcessSection, ResultsSection, Testimonials, TestSeriesExplorer, TopicLinks,
    TrustBar, WhyChooseUs,
};

/// Handle to the external backend, cheap to copy into event handlers.
pub(crate) type BackendHandle = StoredValue<Arc<MemoryBackend>>;

/// Demo backend credentials until the real platform client is wired in.
fn demo_backend() -> MemoryBackend {
    MemoryBackend::new()
        .with_admin("admin@prepseries.in", "admin123")
        .with_student("student@example.com", "student123")
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sessions = StoredValue::new_local(SessionStore::new(PlatformStore::platform()));
    let backend: BackendHandle = StoredValue::new(Arc::new(demo_backend()));

    let route = RwSignal::new(RouteState::new());
    let admin_authenticated =
        RwSignal::new(sessions.with_value(|s| s.is_authenticated(Role::Admin)));
    let student_authenticated =
        RwSignal::new(sessions.with_value(|s| s.is_authenticated(Role::Student)));
    let cart = RwSignal::new(Cart::new());
    let plans = RwSignal::new(PlanCatalog::seed());

    // External token change -> resolve -> apply. The guard's rewrite is the
    // only place a resolution writes the fragment back.
    let apply_token = move |token: String| {
        let resolution = resolve(&token, admin_authenticated.get_untracked());
        if let Some(rewrite) = &resolution.rewrite {
            browser::write_hash(rewrite);
        }
        route.update(|r| r.apply(resolution));
    };
    browser::subscribe_hash_change(move || apply_token(browser::read_hash()));
    apply_token(browser::read_hash());

    // Programmatic change -> navigate -> token write + scroll reset.
    let navigate = move |view: View, topic: Option<String>| {
        if let Some(token) = route.try_update(|r| r.navigate(view, topic.as_deref())) {
            browser::write_hash(&token);
        }
        browser::scroll_to_top();
    };
    let on_navigate = Callback::new(move |(view, topic): (View, Option<String>)| {
        navigate(view, topic);
    });

    let add_to_cart = Callback::new(move |item: LineItem| {
        cart.update(|c| {
            c.add(item);
        });
    });
    let remove_from_cart = Callback::new(move |id: ItemId| {
        cart.update(|c| {
            c.remove(&id);
        });
    });
    let cart_count = Signal::derive(move || cart.with(|c| c.len()));

    let on_admin_login = Callback::new(move |()| {
        sessions.with_value(|s| {
            if let Err(e) = s.sign_in_admin() {
                warn!(error = %e, "failed to persist admin session");
            }
        });
        admin_authenticated.set(true);
        navigate(View::AdminPanel, None);
    });

    // Local state clears unconditionally; the backend sign-out is
    // fire-and-forget and a failure only leaves the remote session alive.
    let on_admin_logout = Callback::new(move |()| {
        let backend = backend.get_value();
        spawn_local(async move {
            if let Err(e) = backend.sign_out().await {
                warn!(error = %e, "backend sign-out failed");
            }
        });
        sessions.with_value(|s| {
            if let Err(e) = s.sign_out(Role::Admin) {
                warn!(error = %e, "failed to clear admin session");
            }
        });
        admin_authenticated.set(false);
        navigate(View::Home, None);
    });

    let on_student_login = Callback::new(move |identifier: String| {
        sessions.with_value(|s| {
            if let Err(e) = s.sign_in_student(&identifier) {
                warn!(error = %e, "failed to persist student session");
            }
        });
        student_authenticated.set(true);
        navigate(View::StudentDashboard, None);
    });

    let on_student_logout = Callback::new(move |()| {
        let backend = backend.get_value();
        spawn_local(async move {
            if let Err(e) = backend.sign_out().await {
                warn!(error = %e, "backend sign-out failed");
            }
        });
        sessions.with_value(|s| {
            if let Err(e) = s.sign_out(Role::Student) {
                warn!(error = %e, "failed to clear student session");
            }
        });
        student_authenticated.set(false);
        navigate(View::Home, None);
    });

    let student_identifier = Signal::derive(move || {
        // Subscribe to the flag so the identifier refreshes on login/logout.
        student_authenticated.get();
        sessions.with_value(|s| s.student_identifier())
    });

    // Admin edits replace the catalog wholesale; persistence is
    // fire-and-forget.
    let on_update_plans = Callback::new(move |updated: Vec<Plan>| {
        plans.update(|catalog| catalog.replace_all(updated));
        let backend = backend.get_value();
        let catalog = plans.get_untracked();
        spawn_local(async move {
            if let Err(e) = backend.write_plan_catalog(&catalog).await {
                warn!(error = %e, "failed to persist plan catalog");
            }
        });
    });

    let is_dashboard = Signal::derive(move || route.with(|r| r.view().is_dashboard()));
    let current_view = Signal::derive(move || route.with(|r| r.view()));

    view! {
        <Title text="PrepSeries | CA Test Series"/>

        <Show when=move || !is_dashboard.get()>
            <Navbar on_navigate current_view cart_count/>
        </Show>

        <main>
            {move || {
                let (view, topic) = route.with(|r| (r.view(), r.topic().map(str::to_string)));
                match view {
                    View::Home => view! {
                        <Hero on_navigate/>
                        <PricingSection plans on_navigate add_to_cart/>
                        <TrustBar/>
                        <GuaranteeSection/>
                        <ProcessSection on_navigate/>
                        <AboutSection on_navigate/>
                        <TestSeriesExplorer on_navigate/>
                        <TopicLinks on_navigate/>
                        <WhyChooseUs/>
                        <MentorsSection on_navigate/>
                        <ResultsSection/>
                        <Testimonials/>
                        <FaqSection/>
                    }
                    .into_any(),
                    View::Checkout => view! {
                        <CheckoutPage cart remove_from_cart on_navigate/>
                    }
                    .into_any(),
                    View::AdminPanel => view! {
                        <AdminPanelPage
                            plans
                            backend
                            on_update_plans
                            on_logout=on_admin_logout
                            on_navigate
                        />
                    }
                    .into_any(),
                    View::AdminLogin => view! {
                        <AdminLoginPage backend on_success=on_admin_login on_navigate/>
                    }
                    .into_any(),
                    View::StudentLogin => view! {
                        <StudentLoginPage backend on_success=on_student_login on_navigate/>
                    }
                    .into_any(),
                    // The student dashboard re-checks the flag at render time
                    // and shows the login form in place; the token is not
                    // rewritten, unlike the admin guard.
                    View::StudentDashboard => {
                        if student_authenticated.get() {
                            view! {
                                <StudentDashboardPage
                                    backend
                                    identifier=student_identifier
                                    on_logout=on_student_logout
                                />
                            }
                            .into_any()
                        } else {
                            view! {
                                <StudentLoginPage
                                    backend
                                    on_success=on_student_login
                                    on_navigate
                                />
                            }
                            .into_any()
                        }
                    }
                    _ => view! {
                        <DetailPage view topic plans on_navigate add_to_cart/>
                    }
                    .into_any(),
                }
            }}
        </main>

        <Show when=move || !is_dashboard.get()>
            <Footer on_navigate/>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_backend_credentials() {
        let backend = demo_backend();
        backend
            .authenticate_admin("admin@prepseries.in", "admin123")
            .await
            .unwrap();
        let rejected = backend
            .authenticate_admin("admin@prepseries.in", "nope")
            .await;
        assert!(rejected.is_err());

        let profile = backend
            .authenticate_student("student@example.com", "student123")
            .await
            .unwrap();
        assert_eq!(profile.email, "student@example.com");
    }
}
