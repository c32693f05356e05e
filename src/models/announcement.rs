use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AnnouncementsData {
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewAnnouncement {
    pub title: String,
    pub body: String,
}
