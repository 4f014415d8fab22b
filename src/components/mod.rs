mod auth;
mod dashboard;
mod error_screen;
mod expense_form;
mod expense_list;
mod group_detail;
mod icons;
mod nav;

pub use auth::AuthScreen;
pub use dashboard::Dashboard;
pub use error_screen::ErrorScreen;
pub use group_detail::{CategoryDetail, ExpenseHandlers, GroupDetail};
