use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// A test card is a lightweight developer showcase shown on the home page.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Test {
    pub id: Uuid,
    pub logo: String,
    pub name: String,

    #[serde(rename = "longDescription")]
    pub long_description: String,

    #[serde(rename = "cityPresent")]
    pub city_present: String,

    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
