use crate::models::{GeofencesData, NewGeofence, ReportQuery};
use crate::services::{ApiClient, ApiError};

pub async fn fetch_geofences(
    client: &ApiClient,
    query: &ReportQuery,
) -> Result<GeofencesData, ApiError> {
    client
        .get(&format!("/geofences{}", query.to_query_string()))
        .await
}

pub async fn create_geofence(client: &ApiClient, geofence: &NewGeofence) -> Result<(), ApiError> {
    log::info!("📍 Alta de geocerca {} (radio {} m)", geofence.name, geofence.radius_m);
    client.post_empty("/geofences", geofence, true).await
}

pub async fn delete_geofence(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/geofences/{}", id), true).await
}
