use crate::models::{PunchLogsData, ReportQuery};
use crate::services::{ApiClient, ApiError};

/// Reporte de fichajes (solo lectura, con rango de fechas)
pub async fn fetch_punch_logs(
    client: &ApiClient,
    query: &ReportQuery,
) -> Result<PunchLogsData, ApiError> {
    client
        .get(&format!("/punch-logs{}", query.to_query_string()))
        .await
}
