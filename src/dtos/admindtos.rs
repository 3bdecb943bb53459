use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::developermodel::Developer;
use crate::models::propertymodel::Property;
use crate::models::taskmodel::Task;
use crate::models::testmodel::Test;
use crate::models::usermodel::User;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct VerifyCodeDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Access code is required"))]
    pub code: String,
}

/// Everything the dashboard lists, each collection oldest first.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub properties: Vec<Property>,
    pub developers: Vec<Developer>,
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
    pub tests: Vec<Test>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponseDto {
    pub status: String,
    pub data: DashboardData,
}
