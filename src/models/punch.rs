use serde::{Deserialize, Serialize};

/// Registro de fichaje de un empleado (solo lectura)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PunchLog {
    pub id: String,
    pub employee_name: String,
    pub date: String,
    pub punch_in: Option<String>,
    pub punch_out: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PunchLogsData {
    pub punches: Vec<PunchLog>,
    #[serde(default)]
    pub total: u64,
}
