use sqlx::{Pool, Postgres};

pub mod developerdb;
pub mod propertydb;
pub mod taskdb;
pub mod testdb;
pub mod userdb;

#[derive(Debug, Clone)]
pub struct DBClient {
    pool: Pool<Postgres>,
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }
}
