use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Property {
    pub id: Uuid,

    // Listing card info
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub name: String,
    pub by: String,
    pub location: String,
    pub price: String,
    pub status: String,

    // Overview section
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

    // Unit plans and pricing
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

    // Home page placement tags
    pub categories: Json<Vec<String>>,

    // Media galleries, fixed slot counts from the admin form
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
