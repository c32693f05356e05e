pub mod fetch;
pub mod session_context;
pub mod use_alerts;
pub mod use_announcements;
pub mod use_dashboard;
pub mod use_drivers;
pub mod use_employees;
pub mod use_geofences;
pub mod use_punches;
pub mod use_session;
pub mod use_vehicles;

pub use session_context::SessionContextProvider;
pub use use_alerts::{use_alerts, UseAlertsHandle};
pub use use_announcements::{use_announcements, UseAnnouncementsHandle};
pub use use_dashboard::{use_dashboard, UseDashboardHandle};
pub use use_drivers::{use_drivers, UseDriversHandle};
pub use use_employees::{use_employees, UseEmployeesHandle};
pub use use_geofences::{use_geofences, UseGeofencesHandle};
pub use use_punches::{use_punches, UsePunchesHandle};
pub use use_session::{use_session, UseSessionHandle};
pub use use_vehicles::{use_vehicles, UseVehiclesHandle};
