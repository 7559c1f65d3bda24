//! PostgreSQL-backed [`PolygonRepository`] implementation using Diesel.
//!
//! Polygon duplicate detection uses `ST_Equals`: true spatial-shape
//! equality, so reorderings and re-rotations of the same ring collide.
//! The `polygons_geom_shape_key` unique index (on the normalised WKT) backs
//! the check authoritatively; a violation surfaces as the same duplicate
//! error. As with points, check and mutation share one transaction.

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{PolygonRepository, RepositoryError};
use crate::domain::{NewPolygon, PolygonPatch, PolygonRecord, SRID};

use super::error_mapping::map_pool_error;
use super::pool::DbPool;
use super::rows::PolygonRow;
use super::schema::polygons;
use super::spatial::{st_astext, st_equals, st_geomfromtext};

/// Columns for reading a polygon back with its geometry serialised from the
/// stored value.
macro_rules! polygon_columns {
    () => {
        (
            polygons::id,
            polygons::name,
            polygons::description,
            st_astext(polygons::geom),
            polygons::population_density,
            polygons::created_at,
            polygons::updated_at,
        )
    };
}

/// Diesel-backed implementation of the polygon repository port.
#[derive(Clone)]
pub struct DieselPolygonRepository {
    pool: DbPool,
}

impl DieselPolygonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Shape-equality existence probe, optionally excluding the record being
/// updated. Runs on the transaction connection.
async fn shape_exists<C>(
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
                polygons::table
                    .filter(st_equals(
                        polygons::geom,
                        st_geomfromtext(wkt.to_owned(), SRID),
                    ))
                    .filter(polygons::id.ne(id)),
            ))
            .get_result(conn)
            .await
        }
        None => {
            diesel::select(exists(polygons::table.filter(st_equals(
                polygons::geom,
                st_geomfromtext(wkt.to_owned(), SRID),
            ))))
            .get_result(conn)
            .await
        }
    }
}

#[async_trait]
impl PolygonRepository for DieselPolygonRepository {
    async fn insert(&self, draft: NewPolygon) -> Result<PolygonRecord, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = conn
            .transaction::<PolygonRow, RepositoryError, _>(|conn| {
                async move {
                    let wkt = draft.ring().to_wkt();
                    if shape_exists(conn, &wkt, None).await? {
                        return Err(RepositoryError::Duplicate);
                    }

                    let now = Utc::now();
                    let row: PolygonRow = diesel::insert_into(polygons::table)
                        .values((
                            polygons::name.eq(draft.name().to_owned()),
                            polygons::description.eq(draft.description().map(str::to_owned)),
                            polygons::geom.eq(st_geomfromtext(wkt, SRID)),
                            polygons::population_density.eq(draft.population_density()),
                            polygons::created_at.eq(now),
                            polygons::updated_at.eq(now),
                        ))
                        .returning(polygon_columns!())
                        .get_result(conn)
                        .await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<PolygonRecord>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PolygonRow> = polygons::table
            .select(polygon_columns!())
            .order_by(polygons::id.asc())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: i32,
        patch: PolygonPatch,
    ) -> Result<PolygonRecord, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = conn
            .transaction::<PolygonRow, RepositoryError, _>(|conn| {
                async move {
                    let target: Option<i32> = polygons::table
                        .filter(polygons::id.eq(id))
                        .select(polygons::id)
                        .first(conn)
                        .await
                        .optional()?;
                    if target.is_none() {
                        return Err(RepositoryError::NotFound);
                    }

                    // Absent geometry skips the duplicate query entirely.
                    let wkt = patch.ring.as_ref().map(crate::domain::Ring::to_wkt);
                    if let Some(candidate) = &wkt {
                        if shape_exists(conn, candidate, Some(id)).await? {
                            return Err(RepositoryError::Duplicate);
                        }
                    }

                    let row: PolygonRow =
                        diesel::update(polygons::table.filter(polygons::id.eq(id)))
                            .set((
                                patch.name.map(|name| polygons::name.eq(name)),
                                patch
                                    .description
                                    .map(|description| polygons::description.eq(description)),
                                wkt.map(|candidate| {
                                    polygons::geom.eq(st_geomfromtext(candidate, SRID))
                                }),
                                patch
                                    .population_density
                                    .map(|density| polygons::population_density.eq(density)),
                                polygons::updated_at.eq(Utc::now()),
                            ))
                            .returning(polygon_columns!())
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
