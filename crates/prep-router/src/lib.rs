//! View routing for the PrepSeries storefront.
//!
//! The storefront is a single-page application whose current view is encoded
//! in a navigation token (the URL fragment). This crate owns that mapping as
//! an explicit state machine, kept independent of any rendering surface:
//!
//! - [`resolve`] parses a token into a [`Resolution`] (target view, what
//!   happens to the selected topic, and an optional token rewrite the caller
//!   must reflect back into the address bar),
//! - [`to_token`] serializes a view (and optional topic) back into a token,
//! - [`RouteState`] is the single owner of the current view/topic pair.
//!
//! The sync between token and view is one-directional in each direction:
//! external token changes flow through `resolve` + [`RouteState::apply`];
//! programmatic changes flow through [`RouteState::navigate`], which returns
//! the token to write. Nothing else mutates view state.
//!
//! No routing operation can fail. Unrecognized tokens degrade to
//! [`View::Home`] rather than erroring.

mod resolve;
mod state;
mod view;

pub use resolve::{resolve, slugify, to_token, Resolution, TopicChange, TOPIC_PREFIX};
pub use state::RouteState;
pub use view::View;
