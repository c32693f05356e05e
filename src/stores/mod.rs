pub mod auth_store;
pub mod dashboard_store;
pub mod list_store;

pub use auth_store::AuthStore;
pub use dashboard_store::DashboardStore;
pub use list_store::ListStore;
