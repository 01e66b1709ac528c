use sqlx::PgPool;

use lxnotes_core::types::DbId;

use crate::models::production::Production;

/// Column list for productions queries.
const COLUMNS: &str = "id, name, abbreviation, logo_url, created_at, updated_at";

/// Read access to productions (created and managed elsewhere).
pub struct ProductionRepo;

impl ProductionRepo {
    /// Find a production by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions WHERE id = $1");
        sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
