//! Repository for the `parts` catalog table. Read-only: the catalog is
//! seeded by migration and never mutated through the builder.

use rigforge_core::part::{Part, PartKind};
use rigforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::part::PartRow;

const COLUMNS: &str = "id, name, kind, brand, price, specs, image, compatibility";

/// Provides catalog reads.
pub struct PartRepo;

impl PartRepo {
    /// Full-category fetch in catalog (insertion) order.
    pub async fn list_by_kind(pool: &PgPool, kind: PartKind) -> Result<Vec<Part>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parts WHERE kind = $1 ORDER BY id ASC");
        let rows = sqlx::query_as::<_, PartRow>(&query)
            .bind(kind.as_str())
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Part::from).collect())
    }

    /// Find a part by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Part>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parts WHERE id = $1");
        let row = sqlx::query_as::<_, PartRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Part::from))
    }

    /// Fetch a batch of parts by ID. Missing ids are simply absent from
    /// the result.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Part>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM parts WHERE id = ANY($1) ORDER BY id ASC");
        let rows = sqlx::query_as::<_, PartRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Part::from).collect())
    }
}
