//! Catalog part row model.

use rigforge_core::part::{Compatibility, Part, PartKind};
use rigforge_core::types::DbId;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `parts` table.
///
/// `specs` and `compatibility` are JSONB documents; `kind` is validated
/// on decode so a bad row surfaces as a column-decode error rather than a
/// phantom category.
#[derive(Debug, Clone, FromRow)]
pub struct PartRow {
    pub id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub kind: PartKind,
    pub brand: String,
    pub price: i64,
    pub specs: Json<serde_json::Value>,
    pub image: Option<String>,
    pub compatibility: Json<Compatibility>,
}

impl From<PartRow> for Part {
    fn from(row: PartRow) -> Self {
        Part {
            id: row.id,
            name: row.name,
            kind: row.kind,
            brand: row.brand,
            price: row.price,
            specs: row.specs.0,
            image: row.image,
            compatibility: row.compatibility.0,
        }
    }
}
