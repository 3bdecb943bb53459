use serde::Serialize;

use crate::models::testmodel::Test;

#[derive(Debug, Serialize)]
pub struct TestData {
    pub test: Test,
}

#[derive(Debug, Serialize)]
pub struct TestResponseDto {
    pub status: String,
    pub data: TestData,
}
