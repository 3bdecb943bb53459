use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

// A task is an upcoming project sheet. It carries the same sections as a
// listed property plus an optional link to the developer running it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Task {
    pub id: Uuid,

    #[serde(rename = "developerId")]
    pub developer_id: Option<Uuid>,

    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub name: String,
    pub by: String,
    pub location: String,
    pub price: String,
    pub status: String,

    pub configuration: String,
    pub possession: Option<DateTime<Utc>>,
    pub units: String,
    pub land: String,
    pub residence: String,
    pub builtup: String,
    pub blocks: String,
    pub floor: String,
    pub noofunits: String,
    pub rera: String,
    pub highlight: String,
    pub about: String,

    pub unitytype: String,
    pub size: String,
    pub range: String,
    pub booking: String,
    pub token: String,
    pub plans: String,
    pub amenities: String,
    #[serde(rename = "virtual")]
    pub virtual_tour: String,
    pub payment: String,

    pub categories: Json<Vec<String>>,

    #[serde(rename = "floorImgs")]
    pub floor_imgs: Json<Vec<String>>,
    pub logos: Json<Vec<String>>,
    #[serde(rename = "disTexts")]
    pub dis_texts: Json<Vec<String>>,
    #[serde(rename = "logoTexts")]
    pub logo_texts: Json<Vec<String>>,
    #[serde(rename = "virtualImgs")]
    pub virtual_imgs: Json<Vec<String>>,
    #[serde(rename = "virtualVids")]
    pub virtual_vids: Json<Vec<String>>,
    pub pdfs: Json<Vec<String>>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
