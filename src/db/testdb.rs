use async_trait::async_trait;
use uuid::Uuid;

use crate::db::DBClient;
use crate::models::testmodel::Test;
use crate::service::forms::TestForm;

#[async_trait]
pub trait TestExt {
    async fn get_test(&self, test_id: Uuid) -> Result<Option<Test>, sqlx::Error>;

    async fn get_tests(&self) -> Result<Vec<Test>, sqlx::Error>;

    async fn save_test(&self, data: TestForm) -> Result<Test, sqlx::Error>;

    async fn update_test(
        &self,
        test_id: Uuid,
        data: TestForm,
    ) -> Result<Option<Test>, sqlx::Error>;

    async fn delete_test(&self, test_id: Uuid) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl TestExt for DBClient {
    async fn get_test(&self, test_id: Uuid) -> Result<Option<Test>, sqlx::Error> {
        sqlx::query_as::<_, Test>(
            r#"
            SELECT id, logo, name, long_description, city_present, created_at, updated_at
            FROM tests
            WHERE id = $1
            "#,
        )
        .bind(test_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_tests(&self) -> Result<Vec<Test>, sqlx::Error> {
        sqlx::query_as::<_, Test>(
            r#"
            SELECT id, logo, name, long_description, city_present, created_at, updated_at
            FROM tests
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn save_test(&self, data: TestForm) -> Result<Test, sqlx::Error> {
        sqlx::query_as::<_, Test>(
            r#"
            INSERT INTO tests (logo, name, long_description, city_present)
            VALUES ($1, $2, $3, $4)
            RETURNING id, logo, name, long_description, city_present, created_at, updated_at
            "#,
        )
        .bind(data.logo)
        .bind(data.name)
        .bind(data.long_description)
        .bind(data.city_present)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_test(
        &self,
        test_id: Uuid,
        data: TestForm,
    ) -> Result<Option<Test>, sqlx::Error> {
        sqlx::query_as::<_, Test>(
            r#"
            UPDATE tests SET
                logo = $2, name = $3, long_description = $4, city_present = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, logo, name, long_description, city_present, created_at, updated_at
            "#,
        )
        .bind(test_id)
        .bind(data.logo)
        .bind(data.name)
        .bind(data.long_description)
        .bind(data.city_present)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_test(&self, test_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM tests WHERE id = $1"#)
            .bind(test_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
