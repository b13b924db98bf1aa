//! `PostgreSQL` history log implementation.

use super::{
    blocking::{ChorePgPool, get_conn_with, run_blocking_with},
    models::{HistoryEventRow, NewHistoryEventRow},
    schema::history_events,
};
use crate::chore::{
    domain::{HistoryAction, HistoryEvent, HistoryEventId, PersistedHistoryEventData, TaskId},
    ports::{HistoryLog, HistoryLogError, HistoryLogResult},
};
use crate::family::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::collections::HashMap;

/// `PostgreSQL`-backed append-only history log.
#[derive(Debug, Clone)]
pub struct PostgresHistoryLog {
    pool: ChorePgPool,
}

impl PostgresHistoryLog {
    /// Creates a new log from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ChorePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> HistoryLogResult<T>
    where
        F: FnOnce(&mut PgConnection) -> HistoryLogResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, HistoryLogError::persistence)?;
                f(&mut connection)
            },
            HistoryLogError::persistence,
        )
        .await
    }
}

#[async_trait]
impl HistoryLog for PostgresHistoryLog {
    async fn append(&self, event: &HistoryEvent) -> HistoryLogResult<()> {
        let new_row = to_new_row(event);
        self.run_blocking(move |connection| {
            diesel::insert_into(history_events::table)
                .values(&new_row)
                .execute(connection)
                .map_err(HistoryLogError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn for_task(&self, task_id: TaskId) -> HistoryLogResult<Vec<HistoryEvent>> {
        self.run_blocking(move |connection| {
            let rows = history_events::table
                .filter(history_events::task_id.eq(task_id.into_inner()))
                .order(history_events::created_at.asc())
                .select(HistoryEventRow::as_select())
                .load::<HistoryEventRow>(connection)
                .map_err(HistoryLogError::persistence)?;
            rows.into_iter().map(row_to_event).collect()
        })
        .await
    }

    async fn for_tasks(
        &self,
        task_ids: &[TaskId],
    ) -> HistoryLogResult<HashMap<TaskId, Vec<HistoryEvent>>> {
        let id_values: Vec<uuid::Uuid> = task_ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            let rows = history_events::table
                .filter(history_events::task_id.eq_any(id_values))
                .order(history_events::created_at.asc())
                .select(HistoryEventRow::as_select())
                .load::<HistoryEventRow>(connection)
                .map_err(HistoryLogError::persistence)?;

            let mut grouped: HashMap<TaskId, Vec<HistoryEvent>> = HashMap::new();
            for row in rows {
                let event = row_to_event(row)?;
                grouped.entry(event.task_id()).or_default().push(event);
            }
            Ok(grouped)
        })
        .await
    }
}

fn to_new_row(event: &HistoryEvent) -> NewHistoryEventRow {
    NewHistoryEventRow {
        id: event.id().into_inner(),
        task_id: event.task_id().into_inner(),
        user_id: event.user_id().map(UserId::into_inner),
        action: event.action().to_string(),
        created_at: event.created_at(),
    }
}

fn row_to_event(row: HistoryEventRow) -> HistoryLogResult<HistoryEvent> {
    let action =
        HistoryAction::try_from(row.action.as_str()).map_err(HistoryLogError::persistence)?;

    Ok(HistoryEvent::from_persisted(PersistedHistoryEventData {
        id: HistoryEventId::from_uuid(row.id),
        task_id: TaskId::from_uuid(row.task_id),
        user_id: row.user_id.map(UserId::from_uuid),
        action,
        created_at: row.created_at,
    }))
}
