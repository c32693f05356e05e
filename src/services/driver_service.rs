use crate::models::{DriversData, NewDriver, ReportQuery};
use crate::services::{ApiClient, ApiError};

pub async fn fetch_drivers(
    client: &ApiClient,
    query: &ReportQuery,
) -> Result<DriversData, ApiError> {
    client
        .get(&format!("/drivers{}", query.to_query_string()))
        .await
}

pub async fn create_driver(client: &ApiClient, driver: &NewDriver) -> Result<(), ApiError> {
    log::info!("🧑 Alta de conductor {}", driver.name);
    client.post_empty("/drivers", driver, true).await
}

pub async fn delete_driver(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/drivers/{}", id), true).await
}
