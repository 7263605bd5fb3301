// SPDX-License-Identifier: MPL-2.0
//! Masonry layout engine.
//!
//! Packs items into columns, always placing the next item in the currently
//! shortest column. The featured item (the first flagged one) is considered
//! first, spans up to three columns and is drawn taller than the rest.
//!
//! The engine is a pure function of its inputs: the column height
//! accumulator lives only for the duration of one call.

use super::item::{GalleryItem, PositionedItem, DEFAULT_FEATURED_HEIGHT, DEFAULT_ITEM_HEIGHT};

/// Maximum number of columns spanned by the featured item.
pub const FEATURED_MAX_SPAN: usize = 3;

/// Height multiplier applied to the featured item's nominal height.
pub const FEATURED_HEIGHT_FACTOR: f32 = 1.5;

/// Height multiplier applied to regular items' nominal height.
pub const ITEM_HEIGHT_FACTOR: f32 = 1.1;

/// Lays out `items` into `column_count` columns across `container_width`.
///
/// Returns the items in placement order: the featured item first, then the
/// remaining items in their original relative order. An unmeasured container
/// (zero, negative or non-finite width) yields an empty layout.
#[must_use]
pub fn layout(
    items: &[GalleryItem],
    container_width: f32,
    column_count: usize,
) -> Vec<PositionedItem> {
    if !container_width.is_finite() || container_width <= 0.0 {
        return Vec::new();
    }

    let columns = column_count.max(1);
    let column_width = container_width / columns as f32;
    let mut heights = vec![0.0_f32; columns];

    let featured_index = featured_index(items);
    let ordered = featured_index
        .into_iter()
        .chain((0..items.len()).filter(|&i| Some(i) != featured_index));

    ordered
        .map(|index| {
            let item = &items[index];
            let column = shortest_column(&heights);
            let x = column_width * column as f32;
            let y = heights[column];

            if Some(index) == featured_index {
                let span = FEATURED_MAX_SPAN.min(columns);
                let height =
                    item.nominal_height_or(DEFAULT_FEATURED_HEIGHT) * FEATURED_HEIGHT_FACTOR;
                // Columns past the right edge are simply not tracked.
                for acc in heights.iter_mut().skip(column).take(span) {
                    *acc += height;
                }
                PositionedItem {
                    item: item.clone(),
                    x,
                    y,
                    width: column_width * span as f32,
                    height,
                    is_featured: true,
                }
            } else {
                let height = item.nominal_height_or(DEFAULT_ITEM_HEIGHT) * ITEM_HEIGHT_FACTOR;
                heights[column] += height;
                PositionedItem {
                    item: item.clone(),
                    x,
                    y,
                    width: column_width,
                    height,
                    is_featured: false,
                }
            }
        })
        .collect()
}

/// Index of the item treated as featured: the first flagged one.
#[must_use]
pub fn featured_index(items: &[GalleryItem]) -> Option<usize> {
    items.iter().position(|item| item.featured)
}

/// Index of the first column with the minimum accumulated height.
fn shortest_column(heights: &[f32]) -> usize {
    heights
        .iter()
        .enumerate()
        .fold((0, f32::INFINITY), |(best, best_height), (index, &height)| {
            if height < best_height {
                (index, height)
            } else {
                (best, best_height)
            }
        })
        .0
}

/// Height of the laid out content: the lowest bottom edge of any box.
#[must_use]
pub fn content_height(grid: &[PositionedItem]) -> f32 {
    grid.iter().map(PositionedItem::bottom).fold(0.0, f32::max)
}
