use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::developermodel::Developer;
use crate::models::taskmodel::Task;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateDeveloperDto {
    // The identifier the admin prints on public developer links, submitted
    // under the form name "id".
    #[validate(length(min = 1, message = "Developer id is required"))]
    #[serde(default, rename = "id")]
    pub external_id: String,

    #[serde(default)]
    pub logo: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub established: String,

    #[serde(default)]
    pub project: String,

    #[serde(default, rename = "shortDescription")]
    pub short_description: String,

    #[serde(default, rename = "longDescription")]
    pub long_description: String,

    #[serde(default, rename = "ongoingProjects")]
    pub ongoing_projects: String,

    #[serde(default, rename = "cityPresent")]
    pub city_present: String,
}

// Edits never touch the external id.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateDeveloperDto {
    #[serde(default)]
    pub logo: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub established: String,

    #[serde(default)]
    pub project: String,

    #[serde(default, rename = "shortDescription")]
    pub short_description: String,

    #[serde(default, rename = "longDescription")]
    pub long_description: String,

    #[serde(default, rename = "ongoingProjects")]
    pub ongoing_projects: String,

    #[serde(default, rename = "cityPresent")]
    pub city_present: String,
}

#[derive(Debug, Serialize)]
pub struct DeveloperData {
    pub developer: Developer,
}

#[derive(Debug, Serialize)]
pub struct DeveloperResponseDto {
    pub status: String,
    pub data: DeveloperData,
}

#[derive(Debug, Serialize)]
pub struct DeveloperListResponseDto {
    pub status: String,
    pub developers: Vec<Developer>,
    pub results: i64,
}

/// The public developer page: the developer plus every upcoming project
/// linked to it.
#[derive(Debug, Serialize)]
pub struct DeveloperPageData {
    pub developer: Developer,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct DeveloperPageResponseDto {
    pub status: String,
    pub data: DeveloperPageData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_developer_needs_its_public_id() {
        let missing: CreateDeveloperDto = serde_json::from_str(r#"{"name": "DLF"}"#).unwrap();
        assert!(missing.validate().is_err());

        let complete: CreateDeveloperDto =
            serde_json::from_str(r#"{"id": "dlf", "name": "DLF"}"#).unwrap();
        assert!(complete.validate().is_ok());
        assert_eq!(complete.external_id, "dlf");
    }

    #[test]
    fn omitted_profile_fields_default_to_empty() {
        let dto: CreateDeveloperDto = serde_json::from_str(r#"{"id": "dlf"}"#).unwrap();

        assert_eq!(dto.logo, "");
        assert_eq!(dto.ongoing_projects, "");
        assert_eq!(dto.city_present, "");
    }
}
