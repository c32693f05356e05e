pub mod alert_service;
pub mod announcement_service;
pub mod api_client;
pub mod auth_service;
pub mod dashboard_service;
pub mod driver_service;
pub mod employee_service;
pub mod geofence_service;
pub mod notify;
pub mod punch_service;
pub mod session_guard;
pub mod vehicle_service;

pub use api_client::{ApiClient, ApiError};
