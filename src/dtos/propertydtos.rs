use serde::{Deserialize, Serialize};

use crate::models::developermodel::Developer;
use crate::models::propertymodel::Property;
use crate::models::testmodel::Test;
use crate::service::listing::CategorizedProperties;

#[derive(Debug, Deserialize)]
pub struct HomeQueryDto {
    pub categories: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HomeData {
    pub properties: CategorizedProperties,
    pub developers: Vec<Developer>,
    pub tests: Vec<Test>,

    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
pub struct HomeResponseDto {
    pub status: String,
    pub data: HomeData,
}

#[derive(Debug, Serialize)]
pub struct PropertyData {
    pub property: Property,
}

#[derive(Debug, Serialize)]
pub struct PropertyResponseDto {
    pub status: String,
    pub data: PropertyData,
}
