use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Geofence {
    pub id: String,
    pub name: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_m: f64,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GeofencesData {
    pub geofences: Vec<Geofence>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewGeofence {
    pub name: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_m: f64,
}
