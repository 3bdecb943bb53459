use async_trait::async_trait;

use crate::db::DBClient;
use crate::dtos::userdtos::CreateUserDto;
use crate::models::usermodel::User;

#[async_trait]
pub trait UserExt {
    async fn get_users(&self) -> Result<Vec<User>, sqlx::Error>;

    async fn save_user(&self, data: CreateUserDto) -> Result<User, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, number, created_at, updated_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn save_user(&self, data: CreateUserDto) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, number)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, number, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.number)
        .fetch_one(&self.pool)
        .await
    }
}
