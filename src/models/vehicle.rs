use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Vehicle {
    pub id: String,
    pub registration_no: String,
    pub model: Option<String>,
    pub vehicle_type: Option<String>,
    pub status: Option<String>,
    pub driver_name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VehiclesData {
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewVehicle {
    pub registration_no: String,
    pub model: Option<String>,
    pub vehicle_type: Option<String>,
}
