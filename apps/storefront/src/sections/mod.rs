//! Presentational sections of the home page and shared chrome.
//!
//! Thin consumers of the navigation and cart callbacks; no shared state is
//! owned here.

mod about;
mod explorer;
mod faq;
mod footer;
mod guarantee;
mod hero;
mod mentors;
mod navbar;
mod pricing;
mod process;
mod results;
mod testimonials;
mod topics;
mod trust;
mod why_us;

pub use about::AboutSection;
pub use explorer::TestSeriesExplorer;
pub use faq::FaqSection;
pub use footer::Footer;
pub use guarantee::GuaranteeSection;
pub use hero::Hero;
pub use mentors::MentorsSection;
pub use navbar::Navbar;
pub use pricing::{PlanCard, PricingSection};
pub use process::ProcessSection;
pub use results::ResultsSection;
pub use testimonials::Testimonials;
pub use topics::TopicLinks;
pub use trust::TrustBar;
pub use why_us::WhyChooseUs;
