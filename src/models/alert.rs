use serde::{Deserialize, Serialize};

/// Alerta de emergencia (botón de pánico de un conductor)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EmergencyAlert {
    pub id: String,
    pub alert_type: Option<String>,
    pub driver_name: Option<String>,
    pub vehicle_registration: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub resolved: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AlertsData {
    pub alerts: Vec<EmergencyAlert>,
    #[serde(default)]
    pub total: u64,
}
