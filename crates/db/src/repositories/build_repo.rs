//! Repository for the `builds` table.
//!
//! Builds are write-once snapshots: inserted on "share", listed
//! most-recent-first, never updated or deleted in normal flow.

use std::collections::HashMap;

use rigforge_core::part::Part;
use rigforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::build::{BuildDetail, BuildPartIds, BuildRow, ResolvedParts};
use crate::repositories::PartRepo;

const COLUMNS: &str = "id, name, cpu_id, motherboard_id, gpu_id, ram_id, storage_id, \
     psu_id, case_id, total_price, created_at";

/// Default page size for build listings.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Hard cap on build listing page size.
pub const MAX_LIST_LIMIT: i64 = 50;

/// Clamp a requested listing limit into `[1, MAX_LIST_LIMIT]`.
pub fn clamp_limit(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

/// Provides persistence for shared builds.
pub struct BuildRepo;

impl BuildRepo {
    /// Insert a new build snapshot, returning the created row. Only
    /// projected part ids are stored, never embedded part objects.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        parts: &BuildPartIds,
        total_price: i64,
    ) -> Result<BuildRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO builds \
                (name, cpu_id, motherboard_id, gpu_id, ram_id, storage_id, psu_id, case_id, total_price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BuildRow>(&query)
            .bind(name)
            .bind(parts.cpu)
            .bind(parts.motherboard)
            .bind(parts.gpu)
            .bind(parts.ram)
            .bind(parts.storage)
            .bind(parts.psu)
            .bind(parts.chassis)
            .bind(total_price)
            .fetch_one(pool)
            .await
    }

    /// List builds most-recent-first, up to `limit` rows.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<BuildRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM builds ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, BuildRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a build by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BuildRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM builds WHERE id = $1");
        sqlx::query_as::<_, BuildRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a build with its referenced parts resolved for display. A
    /// dangling reference resolves to an empty slot rather than an error.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<BuildDetail>, sqlx::Error> {
        let Some(row) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let ids = row.part_ids();
        let parts = PartRepo::find_by_ids(pool, &ids).await?;
        if parts.len() < ids.len() {
            tracing::debug!(build_id = row.id, "Build references parts that no longer exist");
        }
        let mut by_id: HashMap<DbId, Part> =
            parts.into_iter().map(|part| (part.id, part)).collect();
        let mut resolve = |slot: Option<DbId>| slot.and_then(|id| by_id.remove(&id));

        let parts = ResolvedParts {
            cpu: resolve(row.cpu_id),
            motherboard: resolve(row.motherboard_id),
            gpu: resolve(row.gpu_id),
            ram: resolve(row.ram_id),
            storage: resolve(row.storage_id),
            psu: resolve(row.psu_id),
            chassis: resolve(row.case_id),
        };

        Ok(Some(BuildDetail {
            id: row.id,
            name: row.name,
            parts,
            total_price: row.total_price,
            created_at: row.created_at,
        }))
    }
}
