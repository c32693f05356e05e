use crate::models::{AlertsData, ReportQuery};
use crate::services::{ApiClient, ApiError};

pub async fn fetch_alerts(client: &ApiClient, query: &ReportQuery) -> Result<AlertsData, ApiError> {
    client
        .get(&format!("/emergency-alerts{}", query.to_query_string()))
        .await
}

/// Marcar una alerta de emergencia como resuelta
pub async fn resolve_alert(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    log::info!("🚨 Resolviendo alerta {}", id);
    client
        .put_empty(&format!("/emergency-alerts/{}/resolve", id), &serde_json::json!({}), true)
        .await
}
