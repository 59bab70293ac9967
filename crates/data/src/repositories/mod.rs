//! Persistence of saved strategies and points models.
//!
//! The whole [`SavedSnapshot`] is loaded and saved as one unit. Helpers on
//! top of [`SnapshotRepository`] implement upsert, export and import.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryRepository;
pub use json_file::JsonFileRepository;

use crate::error::DataError;
use async_trait::async_trait;
use looplab_domain::entities::{PointsModel, StrategyInput};
use looplab_domain::value_objects::SavedSnapshot;
use tracing::info;

/// Storage backend for the saved snapshot.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Loads the stored snapshot, empty if nothing was saved yet.
    ///
    /// # Errors
    /// Returns an error if the stored data cannot be read or parsed.
    async fn load(&self) -> Result<SavedSnapshot, DataError>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be written.
    async fn save(&self, snapshot: &SavedSnapshot) -> Result<(), DataError>;
}

/// A saved strategy or points model.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedEntry {
    Strategy(StrategyInput),
    Points(PointsModel),
}

/// Looks up a saved strategy or points model by id.
///
/// Ids compare case-insensitively; a strategy wins over a points model
/// with the same id.
///
/// # Errors
/// Returns [`DataError::EntryNotFound`] if nothing matches, or a store error.
pub async fn find_by_id<R>(repo: &R, id: &str) -> Result<SavedEntry, DataError>
where
    R: SnapshotRepository + ?Sized,
{
    let wanted = id.trim();
    let is_wanted = |candidate: String| candidate.eq_ignore_ascii_case(wanted);
    let snapshot = repo.load().await?;

    if let Some(strategy) = snapshot
        .strategies
        .into_iter()
        .find(|s| is_wanted(s.id.to_string()))
    {
        return Ok(SavedEntry::Strategy(strategy));
    }
    snapshot
        .points
        .into_iter()
        .find(|p| is_wanted(p.id.0.to_string()))
        .map(SavedEntry::Points)
        .ok_or_else(|| DataError::EntryNotFound(wanted.to_string()))
}

/// Saves `strategy` first in the list, replacing any entry with the same id.
///
/// # Errors
/// Returns an error if the strategy is invalid or the store fails.
pub async fn save_strategy<R>(repo: &R, strategy: StrategyInput) -> Result<SavedSnapshot, DataError>
where
    R: SnapshotRepository + ?Sized,
{
    strategy.validate()?;
    let mut snapshot = repo.load().await?;
    info!(strategy = %strategy.id, name = %strategy.name, "Saving strategy");
    snapshot.upsert_strategy(strategy);
    repo.save(&snapshot).await?;
    Ok(snapshot)
}

/// Saves `model` first in the list, replacing any entry with the same id.
///
/// # Errors
/// Returns an error if the model is invalid or the store fails.
pub async fn save_points<R>(repo: &R, model: PointsModel) -> Result<SavedSnapshot, DataError>
where
    R: SnapshotRepository + ?Sized,
{
    model.validate()?;
    let mut snapshot = repo.load().await?;
    info!(project = %model.project, "Saving points model");
    snapshot.upsert_points(model);
    repo.save(&snapshot).await?;
    Ok(snapshot)
}

/// Serializes the stored snapshot as pretty-printed JSON.
///
/// # Errors
/// Returns an error if the store cannot be read.
pub async fn export_snapshot<R>(repo: &R) -> Result<String, DataError>
where
    R: SnapshotRepository + ?Sized,
{
    let snapshot = repo.load().await?;
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Replaces the stored snapshot with the one parsed from `raw`.
///
/// Lists missing from `raw` import as empty. Nothing is written unless the
/// whole document parses.
///
/// # Errors
/// Returns [`DataError::Json`] for malformed input, or a store error.
pub async fn import_snapshot<R>(repo: &R, raw: &str) -> Result<SavedSnapshot, DataError>
where
    R: SnapshotRepository + ?Sized,
{
    let snapshot: SavedSnapshot = serde_json::from_str(raw)?;
    info!(
        strategies = snapshot.strategies.len(),
        points = snapshot.points.len(),
        "Importing snapshot"
    );
    repo.save(&snapshot).await?;
    Ok(snapshot)
}
