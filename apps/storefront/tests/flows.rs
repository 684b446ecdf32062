//! State-machine flows spanning router, session, and cart, without any
//! rendering surface.

use prep_commerce::{Cart, ItemId, PlanCatalog};
use prep_router::{resolve, RouteState, View};
use prep_session::{MemoryStore, Role, SessionStore};

#[test]
fn admin_login_then_logout() {
    let sessions = SessionStore::new(MemoryStore::new());
    let mut route = RouteState::new();

    // Unauthenticated visit to the panel bounces to the login view and
    // rewrites the token.
    let resolution = resolve("admin-panel", sessions.is_authenticated(Role::Admin));
    assert_eq!(resolution.rewrite.as_deref(), Some("admin-login"));
    route.apply(resolution);
    assert_eq!(route.view(), View::AdminLogin);

    // Successful login persists the flag and navigates to the panel.
    sessions.sign_in_admin().unwrap();
    let token = route.navigate(View::AdminPanel, None);
    assert_eq!(token, "admin-panel");

    // Revisiting the login token while authenticated shows the panel but
    // leaves the token alone.
    let resolution = resolve("admin-login", sessions.is_authenticated(Role::Admin));
    assert_eq!(resolution.view, View::AdminPanel);
    assert_eq!(resolution.rewrite, None);

    // Logout clears the marker and returns home.
    sessions.sign_out(Role::Admin).unwrap();
    let token = route.navigate(View::Home, None);
    assert_eq!(token, "home");
    assert!(!sessions.is_authenticated(Role::Admin));
    assert_eq!(route.view(), View::Home);
}

#[test]
fn reload_rederives_session_flags() {
    // A "reload" is a fresh SessionStore over the same backing store.
    let store = MemoryStore::new();
    {
        let sessions = SessionStore::new(&store);
        sessions.sign_in_student("kavya@example.com").unwrap();
    }
    let sessions = SessionStore::new(&store);
    assert!(sessions.is_authenticated(Role::Student));
    assert!(!sessions.is_authenticated(Role::Admin));
    assert_eq!(
        sessions.student_identifier().as_deref(),
        Some("kavya@example.com")
    );
}

#[test]
fn browse_then_checkout() {
    let catalog = PlanCatalog::seed();
    let mut cart = Cart::new();

    for plan in catalog.plans().iter().take(2) {
        assert!(cart.add(plan.to_line_item()));
    }
    // Re-adding the first plan from another catalog view is a no-op.
    assert!(!cart.add(catalog.plans()[0].to_line_item()));
    assert_eq!(cart.len(), 2);

    // Checkout removes one line item; totals follow.
    assert!(cart.remove(&ItemId::new("plan-2")));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), 699);
    assert_eq!(cart.original_total(), 1999);
    assert_eq!(cart.savings(), 1300);
}

#[test]
fn topic_navigation_round_trip() {
    let mut route = RouteState::new();
    let token = route.navigate(View::TopicDetail, Some("Direct Tax"));
    assert_eq!(token, "topic-direct-tax");

    // An external change to the same token (back/forward) resolves to the
    // slug-recovered topic name.
    route.apply(resolve(&token, false));
    assert_eq!(route.view(), View::TopicDetail);
    assert_eq!(route.topic(), Some("direct tax"));
}
