//! Polygon domain services implementing the driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use super::ports::{PolygonRepository, PolygonsCommand, PolygonsQuery, RepositoryError};
use super::{Error, NewPolygon, PolygonPatch, PolygonRecord};

fn map_repository_error(error: RepositoryError) -> Error {
    match error {
        RepositoryError::Duplicate => {
            Error::duplicate_geometry("A polygon with the same coordinates already exists.")
        }
        RepositoryError::NotFound => Error::not_found("Polygon not found"),
        RepositoryError::Connection { message } | RepositoryError::Query { message } => {
            error!(%message, "polygon store failure");
            Error::internal(format!("polygon store failure: {message}"))
        }
    }
}

/// Command service applying polygon mutations through the repository port.
#[derive(Clone)]
pub struct PolygonCommandService<R> {
    repo: Arc<R>,
}

impl<R> PolygonCommandService<R> {
    /// Create a new command service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> PolygonsCommand for PolygonCommandService<R>
where
    R: PolygonRepository,
{
    async fn create_polygon(&self, draft: NewPolygon) -> Result<PolygonRecord, Error> {
        self.repo.insert(draft).await.map_err(map_repository_error)
    }

    async fn update_polygon(
        &self,
        id: i32,
        patch: PolygonPatch,
    ) -> Result<PolygonRecord, Error> {
        self.repo
            .update(id, patch)
            .await
            .map_err(map_repository_error)
    }
}

/// Query service reading polygons through the repository port.
#[derive(Clone)]
pub struct PolygonQueryService<R> {
    repo: Arc<R>,
}

impl<R> PolygonQueryService<R> {
    /// Create a new query service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> PolygonsQuery for PolygonQueryService<R>
where
    R: PolygonRepository,
{
    async fn list_polygons(&self) -> Result<Vec<PolygonRecord>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }
}
