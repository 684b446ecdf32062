//! The closed set of top-level views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which top-level page of the storefront is shown.
///
/// Exactly one view is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    AboutDetail,
    TestDetail,
    ProcessDetail,
    MentorsDetail,
    PricingDetail,
    TopicDetail,
    AdminPanel,
    AdminLogin,
    TestSeriesDetail,
    StudentLogin,
    StudentDashboard,
    Checkout,
}

impl View {
    /// Every view, in declaration order.
    pub const ALL: [View; 13] = [
        View::Home,
        View::AboutDetail,
        View::TestDetail,
        View::ProcessDetail,
        View::MentorsDetail,
        View::PricingDetail,
        View::TopicDetail,
        View::AdminPanel,
        View::AdminLogin,
        View::TestSeriesDetail,
        View::StudentLogin,
        View::StudentDashboard,
        View::Checkout,
    ];

    /// The navigation-token identifier for this view.
    pub fn as_token(self) -> &'static str {
        match self {
            View::Home => "home",
            View::AboutDetail => "about-detail",
            View::TestDetail => "test-detail",
            View::ProcessDetail => "process-detail",
            View::MentorsDetail => "mentors-detail",
            View::PricingDetail => "pricing-detail",
            View::TopicDetail => "topic-detail",
            View::AdminPanel => "admin-panel",
            View::AdminLogin => "admin-login",
            View::TestSeriesDetail => "test-series-detail",
            View::StudentLogin => "student-login",
            View::StudentDashboard => "student-dashboard",
            View::Checkout => "checkout",
        }
    }

    /// Parse a plain view token.
    ///
    /// This is a straight identifier lookup; token precedence (the
    /// `admin-login` redirect and the `topic-` prefix) lives in
    /// [`crate::resolve`].
    pub fn from_token(token: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.as_token() == token)
    }

    /// Dashboard-style views suppress the shared navbar/footer chrome.
    pub fn is_dashboard(self) -> bool {
        matches!(
            self,
            View::AdminPanel | View::AdminLogin | View::StudentDashboard
        )
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_token(view.as_token()), Some(view));
        }
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(View::from_token("unknown-token"), None);
        assert_eq!(View::from_token(""), None);
    }

    #[test]
    fn test_dashboard_views() {
        assert!(View::AdminPanel.is_dashboard());
        assert!(View::AdminLogin.is_dashboard());
        assert!(View::StudentDashboard.is_dashboard());
        assert!(!View::StudentLogin.is_dashboard());
        assert!(!View::Home.is_dashboard());
        assert!(!View::Checkout.is_dashboard());
    }
}
