use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;

use crate::db::DBClient;
use crate::models::taskmodel::Task;
use crate::service::forms::ListingForm;

#[async_trait]
pub trait TaskExt {
    async fn get_task(&self, task_id: Uuid) -> Result<Option<Task>, sqlx::Error>;

    async fn get_tasks(&self) -> Result<Vec<Task>, sqlx::Error>;

    async fn get_tasks_by_developer(&self, developer_id: Uuid)
        -> Result<Vec<Task>, sqlx::Error>;

    async fn save_task(
        &self,
        developer_id: Option<Uuid>,
        data: ListingForm,
    ) -> Result<Task, sqlx::Error>;

    async fn update_task(
        &self,
        task_id: Uuid,
        developer_id: Option<Uuid>,
        data: ListingForm,
    ) -> Result<Option<Task>, sqlx::Error>;

    async fn delete_task(&self, task_id: Uuid) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl TaskExt for DBClient {
    async fn get_task(&self, task_id: Uuid) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT
                id, developer_id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs,
                created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_tasks(&self) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT
                id, developer_id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs,
                created_at, updated_at
            FROM tasks
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_tasks_by_developer(
        &self,
        developer_id: Uuid,
    ) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT
                id, developer_id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs,
                created_at, updated_at
            FROM tasks
            WHERE developer_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(developer_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save_task(
        &self,
        developer_id: Option<Uuid>,
        data: ListingForm,
    ) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (
                developer_id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                $25, $26, $27, $28, $29, $30, $31, $32, $33, $34, $35, $36
            )
            RETURNING
                id, developer_id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs,
                created_at, updated_at
            "#,
        )
        .bind(developer_id)
        .bind(data.image_url)
        .bind(data.name)
        .bind(data.by)
        .bind(data.location)
        .bind(data.price)
        .bind(data.status)
        .bind(data.configuration)
        .bind(data.possession)
        .bind(data.units)
        .bind(data.land)
        .bind(data.residence)
        .bind(data.builtup)
        .bind(data.blocks)
        .bind(data.floor)
        .bind(data.noofunits)
        .bind(data.rera)
        .bind(data.highlight)
        .bind(data.about)
        .bind(data.unitytype)
        .bind(data.size)
        .bind(data.range)
        .bind(data.booking)
        .bind(data.token)
        .bind(data.plans)
        .bind(data.amenities)
        .bind(data.virtual_tour)
        .bind(data.payment)
        .bind(Json(data.categories))
        .bind(Json(data.floor_imgs))
        .bind(Json(data.logos))
        .bind(Json(data.dis_texts))
        .bind(Json(data.logo_texts))
        .bind(Json(data.virtual_imgs))
        .bind(Json(data.virtual_vids))
        .bind(Json(data.pdfs))
        .fetch_one(&self.pool)
        .await
    }

    async fn update_task(
        &self,
        task_id: Uuid,
        developer_id: Option<Uuid>,
        data: ListingForm,
    ) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks SET
                developer_id = $2, image_url = $3, name = $4, "by" = $5,
                location = $6, price = $7, status = $8, configuration = $9,
                possession = $10, units = $11, land = $12, residence = $13,
                builtup = $14, blocks = $15, floor = $16, noofunits = $17,
                rera = $18, highlight = $19, about = $20, unitytype = $21,
                size = $22, "range" = $23, booking = $24, token = $25,
                plans = $26, amenities = $27, virtual_tour = $28, payment = $29,
                categories = $30, floor_imgs = $31, logos = $32,
                dis_texts = $33, logo_texts = $34, virtual_imgs = $35,
                virtual_vids = $36, pdfs = $37,
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, developer_id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs,
                created_at, updated_at
            "#,
        )
        .bind(task_id)
        .bind(developer_id)
        .bind(data.image_url)
        .bind(data.name)
        .bind(data.by)
        .bind(data.location)
        .bind(data.price)
        .bind(data.status)
        .bind(data.configuration)
        .bind(data.possession)
        .bind(data.units)
        .bind(data.land)
        .bind(data.residence)
        .bind(data.builtup)
        .bind(data.blocks)
        .bind(data.floor)
        .bind(data.noofunits)
        .bind(data.rera)
        .bind(data.highlight)
        .bind(data.about)
        .bind(data.unitytype)
        .bind(data.size)
        .bind(data.range)
        .bind(data.booking)
        .bind(data.token)
        .bind(data.plans)
        .bind(data.amenities)
        .bind(data.virtual_tour)
        .bind(data.payment)
        .bind(Json(data.categories))
        .bind(Json(data.floor_imgs))
        .bind(Json(data.logos))
        .bind(Json(data.dis_texts))
        .bind(Json(data.logo_texts))
        .bind(Json(data.virtual_imgs))
        .bind(Json(data.virtual_vids))
        .bind(Json(data.pdfs))
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_task(&self, task_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM tasks WHERE id = $1"#)
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
