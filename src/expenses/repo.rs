use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::repo_types::Expense;

impl Expense {
    /// Insert a new expense for the owner; created_at is set by the store.
    pub async fn create(
        db: &PgPool,
        owner: Uuid,
        title: &str,
        amount: f64,
        quantity: Option<i32>,
    ) -> anyhow::Result<Expense> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (user_id, title, amount, quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, amount, quantity, created_at
            "#,
        )
        .bind(owner)
        .bind(title)
        .bind(amount)
        .bind(quantity)
        .fetch_one(db)
        .await?;
        Ok(expense)
    }

    /// All of the owner's expenses, newest first.
    pub async fn list_by_owner(db: &PgPool, owner: Uuid) -> anyhow::Result<Vec<Expense>> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, title, amount, quantity, created_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Update by id and owner. A non-owned or absent id matches zero rows and
    /// that is not an error.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        owner: Uuid,
        title: &str,
        amount: f64,
        quantity: Option<i32>,
    ) -> anyhow::Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET title = $1, amount = $2, quantity = $3
            WHERE id = $4 AND user_id = $5
            "#,
        )
        .bind(title)
        .bind(amount)
        .bind(quantity)
        .bind(id)
        .bind(owner)
        .execute(db)
        .await?;
        debug!(%id, %owner, rows = result.rows_affected(), "expense update");
        Ok(())
    }

    /// Delete by id and owner, with the same no-op-if-absent behavior.
    pub async fn delete(db: &PgPool, id: Uuid, owner: Uuid) -> anyhow::Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM expenses
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(db)
        .await?;
        debug!(%id, %owner, rows = result.rows_affected(), "expense delete");
        Ok(())
    }

    /// The owner's single latest expense by created_at, if any.
    pub async fn most_recent(db: &PgPool, owner: Uuid) -> anyhow::Result<Option<Expense>> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, title, amount, quantity, created_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(owner)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
