// SPDX-License-Identifier: MPL-2.0
//! Responsive column count resolution.
//!
//! Breakpoints are matched widest first; the first one whose minimum width
//! is satisfied by the viewport decides the column count.

use serde::{Deserialize, Serialize};

/// A viewport width threshold and the column count used at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: f32,
    pub columns: usize,
}

impl Breakpoint {
    #[must_use]
    pub const fn new(min_width: f32, columns: usize) -> Self {
        Self { min_width, columns }
    }

    fn is_valid(&self) -> bool {
        self.min_width.is_finite() && self.min_width >= 0.0 && self.columns > 0
    }

    fn matches(&self, viewport_width: f32) -> bool {
        viewport_width >= self.min_width
    }
}

/// Default breakpoints, widest first.
pub const DEFAULT_BREAKPOINTS: [Breakpoint; 4] = [
    Breakpoint::new(1500.0, 5),
    Breakpoint::new(1000.0, 4),
    Breakpoint::new(600.0, 3),
    Breakpoint::new(400.0, 2),
];

/// Column count used when no breakpoint matches.
pub const DEFAULT_FALLBACK_COLUMNS: usize = 1;

/// Resolves a column count from the viewport width.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResolver {
    breakpoints: Vec<Breakpoint>,
    fallback: usize,
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINTS.to_vec(), DEFAULT_FALLBACK_COLUMNS)
    }
}

impl ColumnResolver {
    /// Builds a resolver, dropping invalid breakpoints and ordering the rest
    /// widest first. A zero fallback is raised to one column.
    #[must_use]
    pub fn new(breakpoints: Vec<Breakpoint>, fallback: usize) -> Self {
        let mut breakpoints: Vec<Breakpoint> = breakpoints
            .into_iter()
            .filter(Breakpoint::is_valid)
            .collect();
        breakpoints.sort_by(|a, b| b.min_width.total_cmp(&a.min_width));
        Self {
            breakpoints,
            fallback: fallback.max(1),
        }
    }

    /// Column count for the given viewport width.
    #[must_use]
    pub fn resolve(&self, viewport_width: f32) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| bp.matches(viewport_width))
            .map_or(self.fallback, |bp| bp.columns)
    }

    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    #[must_use]
    pub fn fallback(&self) -> usize {
        self.fallback
    }
}

/// Tracks the resolved column count as the viewport changes.
#[derive(Debug, Clone)]
pub struct ResponsiveColumns {
    resolver: ColumnResolver,
    current: usize,
}

impl ResponsiveColumns {
    /// Starts at the fallback count until the first viewport measurement.
    #[must_use]
    pub fn new(resolver: ColumnResolver) -> Self {
        let current = resolver.fallback();
        Self { resolver, current }
    }

    /// Re-evaluates the breakpoints for a new viewport width.
    ///
    /// Returns the new count only when it differs from the previous one, so
    /// callers can skip relayout when nothing changed.
    pub fn update(&mut self, viewport_width: f32) -> Option<usize> {
        let next = self.resolver.resolve(viewport_width);
        if next == self.current {
            None
        } else {
            self.current = next;
            Some(next)
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }
}

impl Default for ResponsiveColumns {
    fn default() -> Self {
        Self::new(ColumnResolver::default())
    }
}
