use crate::models::{NewVehicle, ReportQuery, VehiclesData};
use crate::services::{ApiClient, ApiError};

pub async fn fetch_vehicles(
    client: &ApiClient,
    query: &ReportQuery,
) -> Result<VehiclesData, ApiError> {
    client
        .get(&format!("/vehicles{}", query.to_query_string()))
        .await
}

pub async fn create_vehicle(client: &ApiClient, vehicle: &NewVehicle) -> Result<(), ApiError> {
    log::info!("🚛 Alta de vehículo {}", vehicle.registration_no);
    client.post_empty("/vehicles", vehicle, true).await
}

pub async fn delete_vehicle(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/vehicles/{}", id), true).await
}
