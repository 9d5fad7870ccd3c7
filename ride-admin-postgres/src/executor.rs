use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::{PgArguments, PgQueryResult, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::Mutex;

/// Where repository statements run.
///
/// `Pool` commits every statement on its own. `Transaction` funnels every
/// repository built from the same executor through one transaction that is
/// rolled back when the last clone is dropped without [`Executor::commit`].
#[derive(Clone)]
pub enum Executor {
    Pool(Arc<PgPool>),
    Transaction(Arc<Mutex<Option<Transaction<'static, Postgres>>>>),
}

impl Executor {
    pub fn pool(pool: Arc<PgPool>) -> Self {
        Executor::Pool(pool)
    }

    pub async fn begin(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        Ok(Executor::Transaction(Arc::new(Mutex::new(Some(tx)))))
    }

    /// Commit a transactional executor. No-op for a pool.
    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Executor::Transaction(tx) = self {
            let transaction = tx.lock().await.take().ok_or("Transaction has been consumed")?;
            transaction.commit().await?;
        }
        Ok(())
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Executor::Transaction(tx) = self {
            let transaction = tx.lock().await.take().ok_or("Transaction has been consumed")?;
            transaction.rollback().await?;
        }
        Ok(())
    }

    pub async fn fetch_all<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Result<Vec<PgRow>, Box<dyn Error + Send + Sync>> {
        let rows = match self {
            Executor::Pool(pool) => query.fetch_all(pool.as_ref()).await?,
            Executor::Transaction(tx) => {
                let mut guard = tx.lock().await;
                let transaction = guard.as_mut().ok_or("Transaction has been consumed")?;
                query.fetch_all(&mut **transaction).await?
            }
        };
        Ok(rows)
    }

    pub async fn fetch_optional<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Result<Option<PgRow>, Box<dyn Error + Send + Sync>> {
        let row = match self {
            Executor::Pool(pool) => query.fetch_optional(pool.as_ref()).await?,
            Executor::Transaction(tx) => {
                let mut guard = tx.lock().await;
                let transaction = guard.as_mut().ok_or("Transaction has been consumed")?;
                query.fetch_optional(&mut **transaction).await?
            }
        };
        Ok(row)
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Result<PgQueryResult, Box<dyn Error + Send + Sync>> {
        let result = match self {
            Executor::Pool(pool) => query.execute(pool.as_ref()).await?,
            Executor::Transaction(tx) => {
                let mut guard = tx.lock().await;
                let transaction = guard.as_mut().ok_or("Transaction has been consumed")?;
                query.execute(&mut **transaction).await?
            }
        };
        Ok(result)
    }
}
