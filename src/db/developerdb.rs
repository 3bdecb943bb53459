use async_trait::async_trait;
use uuid::Uuid;

use crate::db::DBClient;
use crate::dtos::developerdtos::{CreateDeveloperDto, UpdateDeveloperDto};
use crate::models::developermodel::Developer;

#[async_trait]
pub trait DeveloperExt {
    async fn get_developer(&self, developer_id: Uuid) -> Result<Option<Developer>, sqlx::Error>;

    /// Lookup by the admin-chosen identifier used in public links.
    async fn get_developer_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Developer>, sqlx::Error>;

    async fn get_developers(&self) -> Result<Vec<Developer>, sqlx::Error>;

    async fn save_developer(&self, data: CreateDeveloperDto) -> Result<Developer, sqlx::Error>;

    async fn update_developer(
        &self,
        developer_id: Uuid,
        data: UpdateDeveloperDto,
    ) -> Result<Option<Developer>, sqlx::Error>;

    async fn delete_developer(&self, developer_id: Uuid) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl DeveloperExt for DBClient {
    async fn get_developer(&self, developer_id: Uuid) -> Result<Option<Developer>, sqlx::Error> {
        sqlx::query_as::<_, Developer>(
            r#"
            SELECT
                id, external_id, logo, name, established, project,
                short_description, long_description, ongoing_projects,
                city_present, created_at, updated_at
            FROM developers
            WHERE id = $1
            "#,
        )
        .bind(developer_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_developer_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Developer>, sqlx::Error> {
        sqlx::query_as::<_, Developer>(
            r#"
            SELECT
                id, external_id, logo, name, established, project,
                short_description, long_description, ongoing_projects,
                city_present, created_at, updated_at
            FROM developers
            WHERE external_id = $1
            "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, sqlx::Error> {
        sqlx::query_as::<_, Developer>(
            r#"
            SELECT
                id, external_id, logo, name, established, project,
                short_description, long_description, ongoing_projects,
                city_present, created_at, updated_at
            FROM developers
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn save_developer(&self, data: CreateDeveloperDto) -> Result<Developer, sqlx::Error> {
        sqlx::query_as::<_, Developer>(
            r#"
            INSERT INTO developers (
                external_id, logo, name, established, project,
                short_description, long_description, ongoing_projects,
                city_present
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, external_id, logo, name, established, project,
                short_description, long_description, ongoing_projects,
                city_present, created_at, updated_at
            "#,
        )
        .bind(data.external_id)
        .bind(data.logo)
        .bind(data.name)
        .bind(data.established)
        .bind(data.project)
        .bind(data.short_description)
        .bind(data.long_description)
        .bind(data.ongoing_projects)
        .bind(data.city_present)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_developer(
        &self,
        developer_id: Uuid,
        data: UpdateDeveloperDto,
    ) -> Result<Option<Developer>, sqlx::Error> {
        sqlx::query_as::<_, Developer>(
            r#"
            UPDATE developers SET
                logo = $2, name = $3, established = $4, project = $5,
                short_description = $6, long_description = $7,
                ongoing_projects = $8, city_present = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, external_id, logo, name, established, project,
                short_description, long_description, ongoing_projects,
                city_present, created_at, updated_at
            "#,
        )
        .bind(developer_id)
        .bind(data.logo)
        .bind(data.name)
        .bind(data.established)
        .bind(data.project)
        .bind(data.short_description)
        .bind(data.long_description)
        .bind(data.ongoing_projects)
        .bind(data.city_present)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_developer(&self, developer_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM developers WHERE id = $1"#)
            .bind(developer_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
