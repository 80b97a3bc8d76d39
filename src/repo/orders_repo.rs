use crate::domain::order::{Order, OrderStatus};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct OrdersRepo {
    pub pool: SqlitePool,
}

impl OrdersRepo {
    pub async fn insert(&self, order: &Order) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (id, email, ticket, method, phone, amount, status, provider, provider_reference, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&order.id)
        .bind(&order.email)
        .bind(&order.ticket)
        .bind(&order.method)
        .bind(&order.phone)
        .bind(order.amount)
        .bind(order.status.as_str())
        .bind(&order.provider)
        .bind(&order.provider_reference)
        .bind(order.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get(&self, id: &str) -> anyhow::Result<Option<Order>> {
        let row = sqlx::query(
            "SELECT id, email, ticket, method, phone, amount, status, provider, provider_reference, created_at FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(to_order))
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Order>> {
        let rows = sqlx::query(
            "SELECT id, email, ticket, method, phone, amount, status, provider, provider_reference, created_at FROM orders ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(to_order).collect())
    }

    /// Rewrites the status column only. Existence is the caller's concern;
    /// re-running with the same value is safe.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> anyhow::Result<()> {
        sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn to_order(r: SqliteRow) -> Order {
    Order {
        id: r.get("id"),
        email: r.get("email"),
        ticket: r.get("ticket"),
        method: r.get("method"),
        phone: r.get("phone"),
        amount: r.get("amount"),
        status: parse_status(&r.get::<String, _>("status")),
        provider: r.get("provider"),
        provider_reference: r.get("provider_reference"),
        created_at: r.get("created_at"),
    }
}

fn parse_status(s: &str) -> OrderStatus {
    match s {
        "paid" => OrderStatus::Paid,
        _ => OrderStatus::Pending,
    }
}
