pub mod alert;
pub mod announcement;
pub mod auth;
pub mod common;
pub mod dashboard;
pub mod driver;
pub mod employee;
pub mod geofence;
pub mod punch;
pub mod vehicle;

pub use alert::{AlertsData, EmergencyAlert};
pub use announcement::{Announcement, AnnouncementsData, NewAnnouncement};
pub use auth::{OtpRequest, OtpTokens, OtpVerifyRequest};
pub use common::{Envelope, ReportQuery};
pub use dashboard::{DashboardCounters, WeekChartData, WeekChartPoint};
pub use driver::{Driver, DriversData, NewDriver};
pub use employee::{Employee, EmployeesData, NewEmployee};
pub use geofence::{Geofence, GeofencesData, NewGeofence};
pub use punch::{PunchLog, PunchLogsData};
pub use vehicle::{NewVehicle, Vehicle, VehiclesData};
