//! Point domain services implementing the driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use super::ports::{PointRepository, PointsCommand, PointsQuery, RepositoryError};
use super::{Error, NewPoint, PointPatch, PointRecord};

fn map_repository_error(error: RepositoryError) -> Error {
    match error {
        RepositoryError::Duplicate => {
            Error::duplicate_geometry("A point with the same coordinates already exists.")
        }
        RepositoryError::NotFound => Error::not_found("Point not found"),
        RepositoryError::Connection { message } | RepositoryError::Query { message } => {
            error!(%message, "point store failure");
            Error::internal(format!("point store failure: {message}"))
        }
    }
}

/// Command service applying point mutations through the repository port.
#[derive(Clone)]
pub struct PointCommandService<R> {
    repo: Arc<R>,
}

impl<R> PointCommandService<R> {
    /// Create a new command service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> PointsCommand for PointCommandService<R>
where
    R: PointRepository,
{
    async fn create_point(&self, draft: NewPoint) -> Result<PointRecord, Error> {
        self.repo.insert(draft).await.map_err(map_repository_error)
    }

    async fn update_point(&self, id: i32, patch: PointPatch) -> Result<PointRecord, Error> {
        self.repo
            .update(id, patch)
            .await
            .map_err(map_repository_error)
    }
}

/// Query service reading points through the repository port.
#[derive(Clone)]
pub struct PointQueryService<R> {
    repo: Arc<R>,
}

impl<R> PointQueryService<R> {
    /// Create a new query service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> PointsQuery for PointQueryService<R>
where
    R: PointRepository,
{
    async fn list_points(&self) -> Result<Vec<PointRecord>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }
}
