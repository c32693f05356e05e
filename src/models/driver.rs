use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub license_no: Option<String>,
    pub status: Option<String>,
    pub vehicle_registration: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DriversData {
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewDriver {
    pub name: String,
    pub phone: String,
    pub license_no: Option<String>,
}
