//! In-memory repository stubs honouring the persistence contract.
//!
//! These stand in for the Diesel adapters in service and HTTP tests: exact
//! coordinate equality for points, normalised shape equality for polygons,
//! self-exclusion on update, and a deterministic clock so timestamp
//! refreshes are observable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use geolayer::domain::ports::{
    PointRepository, PolygonRepository, RepositoryError,
};
use geolayer::domain::{
    Coordinate, NewPoint, NewPolygon, PointCommandService, PointPatch, PointQueryService,
    PointRecord, PolygonCommandService, PolygonPatch, PolygonQueryService, PolygonRecord, Ring,
};
use geolayer::inbound::http::HttpState;

fn tick_time(ticks: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(ticks)
}

/// Canonical form of a ring under spatial-shape equality: closing vertex
/// dropped, consecutive repeats collapsed, minimised over rotations of both
/// orientations. Two rings describing the same shape share one key.
pub fn shape_key(ring: &Ring) -> Vec<(u64, u64)> {
    let mut pts: Vec<(u64, u64)> = ring
        .vertices()
        .iter()
        .map(|c| (c.longitude().to_bits(), c.latitude().to_bits()))
        .collect();
    if pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    pts.dedup();

    let reversed: Vec<(u64, u64)> = pts.iter().rev().copied().collect();
    let mut best = pts.clone();
    for orientation in [&pts, &reversed] {
        for start in 0..orientation.len() {
            let mut rotation = orientation[start..].to_vec();
            rotation.extend_from_slice(&orientation[..start]);
            if rotation < best {
                best = rotation;
            }
        }
    }
    best
}

#[derive(Default)]
struct PointState {
    next_id: i32,
    ticks: i64,
    rows: Vec<PointRecord>,
}

/// In-memory [`PointRepository`] with exact-coordinate duplicate detection.
#[derive(Default)]
pub struct InMemoryPointRepository {
    state: Mutex<PointState>,
    fail_next: AtomicBool,
}

impl InMemoryPointRepository {
    /// Make the next operation fail with a connection error, to exercise
    /// the internal-error path.
    pub fn fail_next_operation(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check_failure(&self) -> Result<(), RepositoryError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(RepositoryError::connection("store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl PointRepository for InMemoryPointRepository {
    async fn insert(&self, draft: NewPoint) -> Result<PointRecord, RepositoryError> {
        self.check_failure()?;
        let mut state = self.state.lock().expect("point state lock");

        let coordinate = draft.coordinate();
        if state
            .rows
            .iter()
            .any(|r| r.longitude == coordinate.longitude() && r.latitude == coordinate.latitude())
        {
            return Err(RepositoryError::Duplicate);
        }

        state.next_id += 1;
        state.ticks += 1;
        let now = tick_time(state.ticks);
        let record = PointRecord {
            id: state.next_id,
            name: draft.name().to_owned(),
            description: draft.description().map(str::to_owned),
            longitude: coordinate.longitude(),
            latitude: coordinate.latitude(),
            geom_wkt: coordinate.to_wkt(),
            created_at: now,
            updated_at: now,
        };
        state.rows.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<PointRecord>, RepositoryError> {
        self.check_failure()?;
        let state = self.state.lock().expect("point state lock");
        Ok(state.rows.clone())
    }

    async fn update(&self, id: i32, patch: PointPatch) -> Result<PointRecord, RepositoryError> {
        self.check_failure()?;
        let mut state = self.state.lock().expect("point state lock");

        let index = state
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(coordinate) = patch.coordinate {
            let collision = state.rows.iter().any(|r| {
                r.id != id
                    && r.longitude == coordinate.longitude()
                    && r.latitude == coordinate.latitude()
            });
            if collision {
                return Err(RepositoryError::Duplicate);
            }
        }

        state.ticks += 1;
        let now = tick_time(state.ticks);
        let record = &mut state.rows[index];
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(description) = patch.description {
            record.description = Some(description);
        }
        if let Some(coordinate) = patch.coordinate {
            record.longitude = coordinate.longitude();
            record.latitude = coordinate.latitude();
            record.geom_wkt = coordinate.to_wkt();
        }
        record.updated_at = now;
        Ok(record.clone())
    }
}

struct StoredPolygon {
    record: PolygonRecord,
    shape: Vec<(u64, u64)>,
}

#[derive(Default)]
struct PolygonState {
    next_id: i32,
    ticks: i64,
    rows: Vec<StoredPolygon>,
}

/// In-memory [`PolygonRepository`] with shape-equality duplicate detection.
#[derive(Default)]
pub struct InMemoryPolygonRepository {
    state: Mutex<PolygonState>,
}

#[async_trait]
impl PolygonRepository for InMemoryPolygonRepository {
    async fn insert(&self, draft: NewPolygon) -> Result<PolygonRecord, RepositoryError> {
        let mut state = self.state.lock().expect("polygon state lock");

        let shape = shape_key(draft.ring());
        if state.rows.iter().any(|r| r.shape == shape) {
            return Err(RepositoryError::Duplicate);
        }

        state.next_id += 1;
        state.ticks += 1;
        let now = tick_time(state.ticks);
        let record = PolygonRecord {
            id: state.next_id,
            name: draft.name().to_owned(),
            description: draft.description().map(str::to_owned),
            geom_wkt: draft.ring().to_wkt(),
            population_density: draft.population_density(),
            created_at: now,
            updated_at: now,
        };
        state.rows.push(StoredPolygon {
            record: record.clone(),
            shape,
        });
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<PolygonRecord>, RepositoryError> {
        let state = self.state.lock().expect("polygon state lock");
        Ok(state.rows.iter().map(|r| r.record.clone()).collect())
    }

    async fn update(
        &self,
        id: i32,
        patch: PolygonPatch,
    ) -> Result<PolygonRecord, RepositoryError> {
        let mut state = self.state.lock().expect("polygon state lock");

        let index = state
            .rows
            .iter()
            .position(|r| r.record.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let replacement_shape = patch.ring.as_ref().map(shape_key);
        if let Some(shape) = &replacement_shape {
            let collision = state
                .rows
                .iter()
                .any(|r| r.record.id != id && r.shape == *shape);
            if collision {
                return Err(RepositoryError::Duplicate);
            }
        }

        state.ticks += 1;
        let now = tick_time(state.ticks);
        let stored = &mut state.rows[index];
        if let Some(name) = patch.name {
            stored.record.name = name;
        }
        if let Some(description) = patch.description {
            stored.record.description = Some(description);
        }
        if let Some(ring) = patch.ring {
            stored.record.geom_wkt = ring.to_wkt();
        }
        if let Some(shape) = replacement_shape {
            stored.shape = shape;
        }
        if let Some(density) = patch.population_density {
            stored.record.population_density = Some(density);
        }
        stored.record.updated_at = now;
        Ok(stored.record.clone())
    }
}

/// Build HTTP state over fresh in-memory repositories, returning the point
/// repository handle for failure injection.
pub fn stub_state() -> (HttpState, Arc<InMemoryPointRepository>) {
    let point_repo = Arc::new(InMemoryPointRepository::default());
    let polygon_repo = Arc::new(InMemoryPolygonRepository::default());

    let state = HttpState {
        points: Arc::new(PointCommandService::new(point_repo.clone())),
        points_query: Arc::new(PointQueryService::new(point_repo.clone())),
        polygons: Arc::new(PolygonCommandService::new(polygon_repo.clone())),
        polygons_query: Arc::new(PolygonQueryService::new(polygon_repo)),
    };
    (state, point_repo)
}

/// Coordinate constructor shorthand for tests.
pub fn coordinate(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(lon, lat).expect("valid coordinate")
}

/// Ring constructor shorthand for tests.
pub fn ring(vertices: &[(f64, f64)]) -> Ring {
    let vertices = vertices
        .iter()
        .map(|&(x, y)| coordinate(x, y))
        .collect();
    Ring::new(vertices).expect("valid ring")
}
