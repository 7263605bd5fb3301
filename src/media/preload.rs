// SPDX-License-Identifier: MPL-2.0
//! Preload gate for the gallery images.
//!
//! The gallery must not lay out or animate anything until every image of
//! the current item list has settled, successfully or not. Each run of the
//! gate carries a [`Generation`]; completions belonging to a superseded run
//! are ignored so a changed item list never unblocks on stale loads.

use crate::error::{Error, Result};
use crate::gallery::ItemId;
use crate::media::{load_image, ImageData};
use std::collections::HashSet;
use std::path::PathBuf;

/// Identifies one run of the preload gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A single image to load for a given run.
#[derive(Debug, Clone, PartialEq)]
pub struct PreloadRequest {
    pub generation: Generation,
    pub id: ItemId,
    pub path: PathBuf,
}

/// Outcome of reporting a settled load to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// The completion belongs to a superseded run, or was already reported.
    Stale,
    /// Accepted; other loads of the run are still in flight.
    Pending,
    /// Accepted; this was the last outstanding load of the run.
    Ready,
}

/// Tracks outstanding loads for the current item list.
#[derive(Debug, Clone, Default)]
pub struct PreloadGate {
    generation: Generation,
    pending: HashSet<ItemId>,
    ready: bool,
}

impl PreloadGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run for the given `(id, path)` pairs.
    ///
    /// Any previous run is superseded. An empty list makes the gate ready
    /// immediately and yields no requests.
    pub fn begin<I>(&mut self, images: I) -> Vec<PreloadRequest>
    where
        I: IntoIterator<Item = (ItemId, PathBuf)>,
    {
        self.generation = self.generation.next();
        self.pending.clear();

        let generation = self.generation;
        let requests: Vec<PreloadRequest> = images
            .into_iter()
            .filter(|(id, _)| self.pending.insert(id.clone()))
            .map(|(id, path)| PreloadRequest {
                generation,
                id,
                path,
            })
            .collect();

        self.ready = requests.is_empty();
        tracing::debug!(
            generation = generation.0,
            count = requests.len(),
            "preload started"
        );
        requests
    }

    /// Records that the load of `id` for `generation` has settled.
    pub fn settle(&mut self, generation: Generation, id: &ItemId) -> Settle {
        if generation != self.generation || !self.pending.remove(id) {
            return Settle::Stale;
        }
        if self.pending.is_empty() {
            self.ready = true;
            tracing::debug!(generation = generation.0, "preload complete");
            Settle::Ready
        } else {
            Settle::Pending
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of loads still outstanding in the current run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Decodes an image on the blocking thread pool.
///
/// # Errors
///
/// Returns the decoding error, or [`Error::Io`] if the worker was cancelled.
pub async fn load_in_background(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}
