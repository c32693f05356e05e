use serde::{Deserialize, Serialize};

/// Contadores agregados del dashboard
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardCounters {
    #[serde(default)]
    pub vehicles: u64,
    #[serde(default)]
    pub drivers: u64,
    #[serde(default)]
    pub employees: u64,
    #[serde(default)]
    pub geofences: u64,
    #[serde(default)]
    pub active_alerts: u64,
}

/// Punto del gráfico semanal de fichajes: semana anterior vs actual
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WeekChartPoint {
    pub previous: u32,
    pub current: u32,
    pub day: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WeekChartData {
    #[serde(rename = "weekChart")]
    pub week_chart: Vec<WeekChartPoint>,
}
