use crate::models::{AnnouncementsData, NewAnnouncement, ReportQuery};
use crate::services::{ApiClient, ApiError};

pub async fn fetch_announcements(
    client: &ApiClient,
    query: &ReportQuery,
) -> Result<AnnouncementsData, ApiError> {
    client
        .get(&format!("/announcements{}", query.to_query_string()))
        .await
}

pub async fn create_announcement(
    client: &ApiClient,
    announcement: &NewAnnouncement,
) -> Result<(), ApiError> {
    log::info!("📢 Publicando anuncio: {}", announcement.title);
    client.post_empty("/announcements", announcement, true).await
}

pub async fn delete_announcement(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/announcements/{}", id), true).await
}
