//! Full-page views outside the home composition.

mod admin;
mod checkout;
mod detail;
mod student;

pub use admin::{AdminLoginPage, AdminPanelPage};
pub use checkout::CheckoutPage;
pub use detail::DetailPage;
pub use student::{StudentDashboardPage, StudentLoginPage};
