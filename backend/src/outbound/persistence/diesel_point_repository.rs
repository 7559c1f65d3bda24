//! PostgreSQL-backed [`PointRepository`] implementation using Diesel.
//!
//! The duplicate check and the mutation run inside one transaction, so a
//! rejected candidate or a failed write leaves no partial state. Point
//! duplicate detection uses the PostGIS `=` operator: exact coordinate
//! equality, not a tolerance comparison. The `points_geom_key` unique
//! constraint backs the check authoritatively; a violation surfaces as the
//! same duplicate error.

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{PointRepository, RepositoryError};
use crate::domain::{NewPoint, PointPatch, PointRecord, SRID};

use super::error_mapping::map_pool_error;
use super::pool::DbPool;
use super::rows::PointRow;
use super::schema::points;
use super::spatial::{st_astext, st_geomfromtext, st_x, st_y};

/// Columns for reading a point back with its geometry re-derived from the
/// stored value (response assembly never echoes request input).
macro_rules! point_columns {
    () => {
        (
            points::id,
            points::name,
            points::description,
            st_x(points::geom),
            st_y(points::geom),
            st_astext(points::geom),
            points::created_at,
            points::updated_at,
        )
    };
}

/// Diesel-backed implementation of the point repository port.
#[derive(Clone)]
pub struct DieselPointRepository {
    pool: DbPool,
}

impl DieselPointRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Exact-equality existence probe, optionally excluding the record being
/// updated. Runs on the transaction connection so the check and the
/// subsequent write observe the same snapshot.
async fn geometry_exists<C>(
    conn: &mut C,
    wkt: &str,
    exclude: Option<i32>,
) -> Result<bool, diesel::result::Error>
where
    C: AsyncConnection<Backend = diesel::pg::Pg>,
{
    match exclude {
        Some(id) => {
            diesel::select(exists(
                points::table
                    .filter(points::geom.eq(st_geomfromtext(wkt.to_owned(), SRID)))
                    .filter(points::id.ne(id)),
            ))
            .get_result(conn)
            .await
        }
        None => {
            diesel::select(exists(
                points::table.filter(points::geom.eq(st_geomfromtext(wkt.to_owned(), SRID))),
            ))
            .get_result(conn)
            .await
        }
    }
}

#[async_trait]
impl PointRepository for DieselPointRepository {
    async fn insert(&self, draft: NewPoint) -> Result<PointRecord, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = conn
            .transaction::<PointRow, RepositoryError, _>(|conn| {
                async move {
                    let wkt = draft.coordinate().to_wkt();
                    if geometry_exists(conn, &wkt, None).await? {
                        return Err(RepositoryError::Duplicate);
                    }

                    let now = Utc::now();
                    let row: PointRow = diesel::insert_into(points::table)
                        .values((
                            points::name.eq(draft.name().to_owned()),
                            points::description.eq(draft.description().map(str::to_owned)),
                            points::geom.eq(st_geomfromtext(wkt, SRID)),
                            points::created_at.eq(now),
                            points::updated_at.eq(now),
                        ))
                        .returning(point_columns!())
                        .get_result(conn)
                        .await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<PointRecord>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PointRow> = points::table
            .select(point_columns!())
            .order_by(points::id.asc())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, patch: PointPatch) -> Result<PointRecord, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = conn
            .transaction::<PointRow, RepositoryError, _>(|conn| {
                async move {
                    let target: Option<i32> = points::table
                        .filter(points::id.eq(id))
                        .select(points::id)
                        .first(conn)
                        .await
                        .optional()?;
                    if target.is_none() {
                        return Err(RepositoryError::NotFound);
                    }

                    // Absent geometry skips the duplicate query entirely.
                    let wkt = patch.coordinate.map(|c| c.to_wkt());
                    if let Some(candidate) = &wkt {
                        if geometry_exists(conn, candidate, Some(id)).await? {
                            return Err(RepositoryError::Duplicate);
                        }
                    }

                    let row: PointRow = diesel::update(points::table.filter(points::id.eq(id)))
                        .set((
                            patch.name.map(|name| points::name.eq(name)),
                            patch
                                .description
                                .map(|description| points::description.eq(description)),
                            wkt.map(|candidate| {
                                points::geom.eq(st_geomfromtext(candidate, SRID))
                            }),
                            points::updated_at.eq(Utc::now()),
                        ))
                        .returning(point_columns!())
                        .get_result(conn)
                        .await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await?;

        Ok(row.into())
    }
}
