use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;

use crate::db::DBClient;
use crate::models::propertymodel::Property;
use crate::service::forms::ListingForm;

#[async_trait]
pub trait PropertyExt {
    async fn get_property(&self, property_id: Uuid) -> Result<Option<Property>, sqlx::Error>;

    /// All properties, oldest first. A non-empty filter keeps only
    /// properties tagged with at least one of the given categories.
    async fn get_properties(&self, filter: &[String]) -> Result<Vec<Property>, sqlx::Error>;

    async fn save_property(&self, data: ListingForm) -> Result<Property, sqlx::Error>;

    async fn update_property(
        &self,
        property_id: Uuid,
        data: ListingForm,
    ) -> Result<Option<Property>, sqlx::Error>;

    async fn delete_property(&self, property_id: Uuid) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl PropertyExt for DBClient {
    async fn get_property(&self, property_id: Uuid) -> Result<Option<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT
                id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs,
                created_at, updated_at
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_properties(&self, filter: &[String]) -> Result<Vec<Property>, sqlx::Error> {
        if filter.is_empty() {
            sqlx::query_as::<_, Property>(
                r#"
                SELECT
                    id, image_url, name, "by", location, price, status,
                    configuration, possession, units, land, residence, builtup,
                    blocks, floor, noofunits, rera, highlight, about,
                    unitytype, size, "range", booking, token, plans, amenities,
                    virtual_tour, payment, categories,
                    floor_imgs, logos, dis_texts, logo_texts,
                    virtual_imgs, virtual_vids, pdfs,
                    created_at, updated_at
                FROM properties
                ORDER BY created_at ASC
                "#,
            )
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, Property>(
                r#"
                SELECT
                    id, image_url, name, "by", location, price, status,
                    configuration, possession, units, land, residence, builtup,
                    blocks, floor, noofunits, rera, highlight, about,
                    unitytype, size, "range", booking, token, plans, amenities,
                    virtual_tour, payment, categories,
                    floor_imgs, logos, dis_texts, logo_texts,
                    virtual_imgs, virtual_vids, pdfs,
                    created_at, updated_at
                FROM properties
                WHERE categories ?| $1
                ORDER BY created_at ASC
                "#,
            )
            .bind(filter.to_vec())
            .fetch_all(&self.pool)
            .await
        }
    }

    async fn save_property(&self, data: ListingForm) -> Result<Property, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                image_url, name, "by", location, price, status,
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
                $25, $26, $27, $28, $29, $30, $31, $32, $33, $34, $35
            )
            RETURNING
                id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs,
                created_at, updated_at
            "#,
        )
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

    async fn update_property(
        &self,
        property_id: Uuid,
        data: ListingForm,
    ) -> Result<Option<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties SET
                image_url = $2, name = $3, "by" = $4, location = $5,
                price = $6, status = $7, configuration = $8, possession = $9,
                units = $10, land = $11, residence = $12, builtup = $13,
                blocks = $14, floor = $15, noofunits = $16, rera = $17,
                highlight = $18, about = $19, unitytype = $20, size = $21,
                "range" = $22, booking = $23, token = $24, plans = $25,
                amenities = $26, virtual_tour = $27, payment = $28,
                categories = $29, floor_imgs = $30, logos = $31,
                dis_texts = $32, logo_texts = $33, virtual_imgs = $34,
                virtual_vids = $35, pdfs = $36,
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, image_url, name, "by", location, price, status,
                configuration, possession, units, land, residence, builtup,
                blocks, floor, noofunits, rera, highlight, about,
                unitytype, size, "range", booking, token, plans, amenities,
                virtual_tour, payment, categories,
                floor_imgs, logos, dis_texts, logo_texts,
                virtual_imgs, virtual_vids, pdfs,
                created_at, updated_at
            "#,
        )
        .bind(property_id)
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

    async fn delete_property(&self, property_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM properties WHERE id = $1"#)
            .bind(property_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
