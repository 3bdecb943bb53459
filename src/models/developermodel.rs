use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Developer {
    pub id: Uuid,

    // Identifier chosen by the admin, printed on public developer links
    #[serde(rename = "externalId")]
    pub external_id: String,

    pub logo: String,
    pub name: String,
    pub established: String,
    pub project: String,

    #[serde(rename = "shortDescription")]
    pub short_description: String,

    #[serde(rename = "longDescription")]
    pub long_description: String,

    #[serde(rename = "ongoingProjects")]
    pub ongoing_projects: String,

    #[serde(rename = "cityPresent")]
    pub city_present: String,

    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
