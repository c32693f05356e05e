pub mod alerts_screen;
pub mod announcements_screen;
pub mod app;
pub mod dashboard_screen;
pub mod drivers_screen;
pub mod employees_screen;
pub mod geofences_screen;
pub mod login_screen;
pub mod punches_screen;
pub mod report_table;
pub mod sidebar;
pub mod vehicles_screen;

pub use alerts_screen::AlertsScreen;
pub use announcements_screen::AnnouncementsScreen;
pub use app::App;
pub use dashboard_screen::DashboardScreen;
pub use drivers_screen::DriversScreen;
pub use employees_screen::EmployeesScreen;
pub use geofences_screen::GeofencesScreen;
pub use login_screen::LoginScreen;
pub use punches_screen::PunchesScreen;
pub use report_table::ReportTable;
pub use sidebar::Sidebar;
pub use vehicles_screen::VehiclesScreen;
