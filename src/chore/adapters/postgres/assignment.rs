//! `PostgreSQL` assignment store implementation.

use super::{
    blocking::{ChorePgPool, get_conn_with, run_blocking_with},
    models::{AssignmentRow, NewAssignmentRow},
    schema::assignments,
};
use crate::chore::{
    domain::{Assignment, AssignmentId, PersistedAssignmentData, TaskId},
    ports::{AssignmentStore, AssignmentStoreError, AssignmentStoreResult},
};
use crate::family::domain::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed assignment store.
#[derive(Debug, Clone)]
pub struct PostgresAssignmentStore {
    pool: ChorePgPool,
}

impl PostgresAssignmentStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ChorePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AssignmentStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AssignmentStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, AssignmentStoreError::persistence)?;
                f(&mut connection)
            },
            AssignmentStoreError::persistence,
        )
        .await
    }
}

#[async_trait]
impl AssignmentStore for PostgresAssignmentStore {
    async fn insert(&self, assignment: &Assignment) -> AssignmentStoreResult<()> {
        let new_row = to_new_row(assignment);
        self.run_blocking(move |connection| {
            diesel::insert_into(assignments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(AssignmentStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn complete_for_task(
        &self,
        task_id: TaskId,
        completed_at: DateTime<Utc>,
    ) -> AssignmentStoreResult<()> {
        self.run_blocking(move |connection| {
            diesel::update(
                assignments::table.filter(assignments::task_id.eq(task_id.into_inner())),
            )
            .set(assignments::completed_at.eq(completed_at))
            .execute(connection)
            .map_err(AssignmentStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn list_for_tasks(&self, task_ids: &[TaskId]) -> AssignmentStoreResult<Vec<Assignment>> {
        let id_values: Vec<uuid::Uuid> = task_ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            let rows = assignments::table
                .filter(assignments::task_id.eq_any(id_values))
                .order(assignments::assigned_at.asc())
                .select(AssignmentRow::as_select())
                .load::<AssignmentRow>(connection)
                .map_err(AssignmentStoreError::persistence)?;
            Ok(rows.into_iter().map(row_to_assignment).collect())
        })
        .await
    }
}

fn to_new_row(assignment: &Assignment) -> NewAssignmentRow {
    NewAssignmentRow {
        id: assignment.id().into_inner(),
        task_id: assignment.task_id().into_inner(),
        user_id: assignment.user_id().map(UserId::into_inner),
        assigned_at: assignment.assigned_at(),
        completed_at: assignment.completed_at(),
    }
}

fn row_to_assignment(row: AssignmentRow) -> Assignment {
    Assignment::from_persisted(PersistedAssignmentData {
        id: AssignmentId::from_uuid(row.id),
        task_id: TaskId::from_uuid(row.task_id),
        user_id: row.user_id.map(UserId::from_uuid),
        assigned_at: row.assigned_at,
        completed_at: row.completed_at,
    })
}
