use std::collections::HashMap;

use super::{Item, Layout, LayoutConfig, Rectangle};
use crate::render::colors::Palette;

/// Compute a row-packed treemap of `items` inside a `width` x `height` box.
///
/// Items are sorted by weight (descending, stable) and consumed as
/// contiguous prefixes: each row takes items while its accumulated area stays
/// within `width * height / config.row_cap_divisor`, always accepting the first
/// one. Rows stack top to bottom, items run left to right inside a row.
///
/// Never fails. Degenerate inputs produce an empty (or partial) layout:
/// - non-positive or non-finite box dimensions, an empty list, or a zero total
///   weight yield no rectangles;
/// - items with non-finite or non-positive weight are skipped;
/// - widths and heights are floored to `config.min_extent`, so a degenerate
///   last row may extend past the bottom edge;
/// - items still waiting when the remaining area reaches zero are dropped.
pub fn compute_layout(
    items: &[Item],
    width: f64,
    height: f64,
    palette: &Palette,
    config: &LayoutConfig,
) -> Layout {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        tracing::debug!("Skipping layout for degenerate box {}x{}", width, height);
        return Layout::default();
    }

    let mut sorted: Vec<&Item> = items
        .iter()
        .filter(|item| item.weight.is_finite() && item.weight > 0.0)
        .collect();
    if sorted.len() < items.len() {
        tracing::debug!(
            "Skipping {} of {} items with non-positive or non-finite weight",
            items.len() - sorted.len(),
            items.len()
        );
    }

    let total_weight: f64 = sorted.iter().map(|item| item.weight).sum();
    if total_weight <= 0.0 {
        return Layout::default();
    }

    // Largest first; sort_by is stable so equal weights keep input order
    sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let total_area = width * height;
    // The remaining width resets to the full width on every row, and the cap
    // deliberately uses the full height, so it is the same for every row.
    let row_cap = width * height / config.row_cap_divisor;
    let area_of = |item: &Item| item.weight / total_weight * total_area;

    let mut rects = Vec::with_capacity(sorted.len());
    let mut name_to_rect = HashMap::with_capacity(sorted.len());
    let mut remaining: &[&Item] = &sorted;
    let mut current_y = 0.0;
    let mut remaining_area = total_area;
    let mut row_count = 0usize;

    while !remaining.is_empty() && remaining_area > 0.0 {
        let (row_len, row_area) = select_row(remaining, row_cap, area_of);
        if row_len == 0 {
            break;
        }
        let (row, rest) = remaining.split_at(row_len);

        let row_height = (row_area / width)
            .min(height - current_y)
            .max(config.min_extent);

        let mut x = 0.0;
        for item in row {
            let item_width = (if row_height > 0.0 {
                area_of(*item) / row_height
            } else {
                width / row.len() as f64
            })
            .max(config.min_extent);

            name_to_rect
                .entry(item.name.clone())
                .or_insert(rects.len());
            rects.push(Rectangle {
                name: item.name.clone(),
                category: item.category.clone(),
                weight: item.weight,
                x,
                y: current_y,
                width: item_width,
                height: row_height,
                color: palette.color_of(&item.category),
                share_percent: round_to_tenth(item.weight / total_weight * 100.0),
            });

            x += item_width;
        }

        current_y += row_height;
        remaining_area -= row_area;
        remaining = rest;
        row_count += 1;
    }

    if !remaining.is_empty() {
        tracing::warn!(
            "Area exhausted after {} rows; dropping {} of {} items",
            row_count,
            remaining.len(),
            sorted.len()
        );
    }

    tracing::debug!(
        "Laid out {} items in {} rows within {:.0}x{:.0} (used height {:.1})",
        rects.len(),
        row_count,
        width,
        height,
        current_y
    );

    Layout {
        rects,
        total_weight,
        name_to_rect,
    }
}

/// Take the longest prefix of `remaining` whose area fits under `row_cap`.
/// The first item always fits. Returns `(item count, row area)`.
fn select_row(
    remaining: &[&Item],
    row_cap: f64,
    area_of: impl Fn(&Item) -> f64,
) -> (usize, f64) {
    let mut len = 0;
    let mut row_area = 0.0;
    for item in remaining {
        let item_area = area_of(*item);
        if len > 0 && row_area + item_area > row_cap {
            break;
        }
        len += 1;
        row_area += item_area;
    }
    (len, row_area)
}

/// Round to one decimal from the exact binary value, ties away from zero.
fn round_to_tenth(value: f64) -> f64 {
    let magnitude = value.abs();
    let base = (magnitude * 10.0).floor();
    // mul_add rounds once, so the sign of the distance to the midpoint is exact
    let past_half = magnitude.mul_add(10.0, -(base + 0.5));
    let tenths = if past_half >= 0.0 { base + 1.0 } else { base };
    (tenths / 10.0).copysign(value)
}
