use crate::models::{DashboardCounters, ReportQuery, WeekChartData};
use crate::services::{ApiClient, ApiError};

/// Contadores agregados del dashboard
pub async fn fetch_counters(
    client: &ApiClient,
    query: &ReportQuery,
) -> Result<DashboardCounters, ApiError> {
    client
        .get(&format!("/dashboard/summary{}", query.to_query_string()))
        .await
}

/// Gráfico semanal de fichajes (semana anterior vs actual)
pub async fn fetch_week_chart(
    client: &ApiClient,
    query: &ReportQuery,
) -> Result<WeekChartData, ApiError> {
    client
        .get(&format!("/dashboard/week-chart{}", query.to_query_string()))
        .await
}
