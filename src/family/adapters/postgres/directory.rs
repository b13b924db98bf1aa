//! `PostgreSQL` member directory implementation.

use super::{models::FamilyMemberRow, schema::family_members};
use crate::family::{
    domain::{FamilyId, FamilyMembership, Member, MemberId, MemberRole, UserId},
    ports::{DirectoryError, DirectoryResult, MemberDirectory},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the directory adapter.
pub type FamilyPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed read-only member directory.
#[derive(Debug, Clone)]
pub struct PostgresMemberDirectory {
    pool: FamilyPgPool,
}

impl PostgresMemberDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: FamilyPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DirectoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DirectoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DirectoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DirectoryError::persistence)?
    }
}

#[async_trait]
impl MemberDirectory for PostgresMemberDirectory {
    async fn membership_for_user(
        &self,
        user_id: UserId,
    ) -> DirectoryResult<Option<FamilyMembership>> {
        self.run_blocking(move |connection| {
            let row = family_members::table
                .filter(family_members::user_id.eq(user_id.into_inner()))
                .select(FamilyMemberRow::as_select())
                .first::<FamilyMemberRow>(connection)
                .optional()
                .map_err(DirectoryError::persistence)?;
            row.map(|member_row| {
                let role = parse_role(&member_row.role)?;
                Ok(FamilyMembership {
                    member_id: MemberId::from_uuid(member_row.id),
                    family_id: FamilyId::from_uuid(member_row.family_id),
                    role,
                })
            })
            .transpose()
        })
        .await
    }

    async fn members_of_family(&self, family_id: FamilyId) -> DirectoryResult<Vec<Member>> {
        self.run_blocking(move |connection| {
            let rows = family_members::table
                .filter(family_members::family_id.eq(family_id.into_inner()))
                .select(FamilyMemberRow::as_select())
                .load::<FamilyMemberRow>(connection)
                .map_err(DirectoryError::persistence)?;
            rows.into_iter().map(row_to_member).collect()
        })
        .await
    }

    async fn find_member(&self, member_id: MemberId) -> DirectoryResult<Option<Member>> {
        self.run_blocking(move |connection| {
            let row = family_members::table
                .filter(family_members::id.eq(member_id.into_inner()))
                .select(FamilyMemberRow::as_select())
                .first::<FamilyMemberRow>(connection)
                .optional()
                .map_err(DirectoryError::persistence)?;
            row.map(row_to_member).transpose()
        })
        .await
    }
}

fn parse_role(value: &str) -> DirectoryResult<MemberRole> {
    MemberRole::try_from(value).map_err(DirectoryError::persistence)
}

fn row_to_member(row: FamilyMemberRow) -> DirectoryResult<Member> {
    let role = parse_role(&row.role)?;
    Ok(Member {
        id: MemberId::from_uuid(row.id),
        family_id: FamilyId::from_uuid(row.family_id),
        name: row.name,
        role,
        avatar_color: row.avatar_color,
        user_id: row.user_id.map(UserId::from_uuid),
    })
}
