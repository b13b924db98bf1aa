//! `PostgreSQL` task store implementation.

use super::{
    blocking::{ChorePgPool, get_conn_with, run_blocking_with},
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::chore::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use crate::family::domain::{FamilyId, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// Storage tags of the active statuses.
const ACTIVE_STATUSES: [&str; 3] = [
    TaskStatus::Unassigned.as_str(),
    TaskStatus::Assigned.as_str(),
    TaskStatus::InProgress.as_str(),
];

/// Storage tags of the terminal statuses.
const TERMINAL_STATUSES: [&str; 3] = [
    TaskStatus::Done.as_str(),
    TaskStatus::Verified.as_str(),
    TaskStatus::Failed.as_str(),
];

/// Storage tags of the sweep-eligible statuses.
const SWEEPABLE_STATUSES: [&str; 2] = [
    TaskStatus::Assigned.as_str(),
    TaskStatus::InProgress.as_str(),
];

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: ChorePgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ChorePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, TaskStoreError::persistence)?;
                f(&mut connection)
            },
            TaskStoreError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(tasks::status.eq(status.as_str()))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            if affected == 0 {
                return Err(TaskStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list_active(&self, family_id: FamilyId) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::family_id.eq(family_id.into_inner()))
                .filter(tasks::status.eq_any(ACTIVE_STATUSES))
                .order(tasks::due_date.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_terminal(&self, family_id: FamilyId) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::family_id.eq(family_id.into_inner()))
                .filter(tasks::status.eq_any(TERMINAL_STATUSES))
                .order(tasks::due_date.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_sweepable(
        &self,
        family_id: FamilyId,
        cutoff: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::family_id.eq(family_id.into_inner()))
                .filter(tasks::status.eq_any(SWEEPABLE_STATUSES))
                .filter(tasks::due_date.lt(cutoff))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_missed(
        &self,
        family_id: FamilyId,
        cutoff: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::family_id.eq(family_id.into_inner()))
                .filter(tasks::status.eq_any(ACTIVE_STATUSES))
                .filter(tasks::due_date.lt(cutoff))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn mark_failed(&self, ids: &[TaskId]) -> TaskStoreResult<()> {
        let id_values: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            diesel::update(tasks::table.filter(tasks::id.eq_any(id_values)))
                .set(tasks::status.eq(TaskStatus::Failed.as_str()))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        family_id: task.family_id().into_inner(),
        created_by: task.created_by().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        due_date: task.due_date(),
        reward_points: task.reward_points(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskStoreError::persistence)?;
    let title = TaskTitle::new(row.title).map_err(TaskStoreError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        family_id: FamilyId::from_uuid(row.family_id),
        created_by: UserId::from_uuid(row.created_by),
        title,
        description: row.description,
        due_date: row.due_date,
        reward_points: row.reward_points,
        status,
        created_at: row.created_at,
    };
    Ok(Task::from_persisted(data))
}
