//! The route-state controller.

use crate::resolve::{to_token, Resolution, TopicChange};
use crate::view::View;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The single owner of the current view/topic pair.
///
/// Mutated only by [`RouteState::apply`] (external token changes) and
/// [`RouteState::navigate`] (programmatic changes). `navigate` returns the
/// token the caller must write so the fragment stays in sync with the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteState {
    view: View,
    topic: Option<String>,
}

impl RouteState {
    /// Start at the home view with no topic selected.
    pub fn new() -> Self {
        Self {
            view: View::Home,
            topic: None,
        }
    }

    /// The current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The currently selected topic, if the topic-detail view has one.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Apply the outcome of a token resolution.
    pub fn apply(&mut self, resolution: Resolution) {
        self.view = resolution.view;
        match resolution.topic {
            TopicChange::Keep => {}
            TopicChange::Clear => self.topic = None,
            TopicChange::Select(topic) => self.topic = Some(topic),
        }
        debug!(view = %self.view, topic = ?self.topic, "applied resolution");
    }

    /// Navigate to a view, returning the token to write.
    ///
    /// The human-readable topic is retained only for the topic-detail view;
    /// every other target clears it.
    pub fn navigate(&mut self, view: View, topic: Option<&str>) -> String {
        let token = to_token(view, topic);
        self.view = view;
        self.topic = match (view, topic) {
            (View::TopicDetail, Some(topic)) => Some(topic.to_string()),
            _ => None,
        };
        debug!(view = %self.view, topic = ?self.topic, token = %token, "navigated");
        token
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;

    #[test]
    fn test_starts_at_home() {
        let state = RouteState::new();
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.topic(), None);
    }

    #[test]
    fn test_navigate_to_topic() {
        let mut state = RouteState::new();
        let token = state.navigate(View::TopicDetail, Some("Direct Tax"));
        assert_eq!(token, "topic-direct-tax");
        assert_eq!(state.view(), View::TopicDetail);
        // The human-readable topic is retained, not the slug.
        assert_eq!(state.topic(), Some("Direct Tax"));
    }

    #[test]
    fn test_navigate_clears_topic() {
        let mut state = RouteState::new();
        state.navigate(View::TopicDetail, Some("Direct Tax"));
        let token = state.navigate(View::Checkout, None);
        assert_eq!(token, "checkout");
        assert_eq!(state.topic(), None);
    }

    #[test]
    fn test_external_change_pipeline() {
        // External token change -> resolve -> apply.
        let mut state = RouteState::new();
        state.apply(resolve("topic-advanced-accounting", false));
        assert_eq!(state.view(), View::TopicDetail);
        assert_eq!(state.topic(), Some("advanced accounting"));

        state.apply(resolve("unknown-token", false));
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.topic(), None);
    }

    #[test]
    fn test_guard_keeps_topic_untouched() {
        let mut state = RouteState::new();
        state.apply(resolve("topic-costing", false));
        // The login redirect branch leaves the selected topic as it was.
        state.apply(resolve("admin-panel", false));
        assert_eq!(state.view(), View::AdminLogin);
        assert_eq!(state.topic(), Some("costing"));
    }
}
