pub mod rows;

use std::collections::HashMap;

use compact_str::CompactString;

use crate::render::colors::{Color, Palette};

pub use self::rows::compute_layout;

/// A weighted input item (one country, sized by its population).
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Display name, unique within a single layout call
    pub name: CompactString,
    /// Grouping key used for color lookup (the continent)
    pub category: CompactString,
    /// Relative weight. Only finite values > 0 are laid out.
    pub weight: f64,
}

impl Item {
    pub fn new(name: &str, category: &str, weight: f64) -> Self {
        Self {
            name: CompactString::new(name),
            category: CompactString::new(category),
            weight,
        }
    }
}

/// A positioned rectangle in the treemap layout.
/// Coordinates share the bounding box space: origin top-left, y grows downward.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub name: CompactString,
    pub category: CompactString,
    pub weight: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    /// `weight / total * 100`, rounded to one decimal
    pub share_percent: f64,
}

impl Rectangle {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Share with exactly one decimal digit, e.g. `"17.8"`.
    pub fn share_display(&self) -> String {
        format!("{:.1}", self.share_percent)
    }

    /// Half-open containment: `[x, x + width) x [y, y + height)`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Configuration for the row-packing layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// A row may claim at most `width * height / row_cap_divisor` of area
    /// (the first item of a row is always accepted).
    pub row_cap_divisor: f64,
    /// Floor applied to every rectangle's width and height (px)
    pub min_extent: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_cap_divisor: 4.0,
            min_extent: 1.0,
        }
    }
}

/// The full layout result (rects + fast lookup).
#[derive(Debug, Default)]
pub struct Layout {
    /// Placed rectangles in row-major order, largest weight first
    pub rects: Vec<Rectangle>,
    /// Sum of the weights that took part in the layout
    pub total_weight: f64,
    /// name → index into `rects` (hover/selection correlation across runs)
    pub name_to_rect: HashMap<CompactString, usize>,
}

impl Layout {
    pub fn get(&self, name: &str) -> Option<&Rectangle> {
        self.name_to_rect.get(name).map(|&idx| &self.rects[idx])
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Find the rectangle under a point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Rectangle> {
        hit_test(&self.rects, x, y)
    }
}

/// Hit-test: find which layout rectangle contains the given point.
/// Rows never overlap, so the first match is the only one outside of
/// floor-clamped overshoot.
pub fn hit_test(rects: &[Rectangle], x: f64, y: f64) -> Option<&Rectangle> {
    rects.iter().find(|rect| rect.contains(x, y))
}

/// Lay out `items` inside a `width` x `height` box with the default config.
pub fn layout(items: &[Item], width: f64, height: f64, palette: &Palette) -> Vec<Rectangle> {
    compute_layout(items, width, height, palette, &LayoutConfig::default()).rects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("India", "Asia", 1_450.0),
            Item::new("China", "Asia", 1_410.0),
            Item::new("United States", "North America", 340.0),
            Item::new("Brazil", "South America", 211.0),
            Item::new("Nigeria", "Africa", 227.0),
        ]
    }

    #[test]
    fn lookup_by_name_matches_rect() {
        let layout = compute_layout(
            &sample(),
            800.0,
            600.0,
            &Palette::continents(),
            &LayoutConfig::default(),
        );
        let brazil = layout.get("Brazil").expect("Brazil is laid out");
        assert_eq!(brazil.name, "Brazil");
        assert!(layout.get("Atlantis").is_none());
        assert_eq!(layout.name_to_rect.len(), layout.len());
    }

    #[test]
    fn hit_test_finds_rect_under_point() {
        let layout = compute_layout(
            &sample(),
            800.0,
            600.0,
            &Palette::continents(),
            &LayoutConfig::default(),
        );
        for rect in &layout.rects {
            let cx = rect.x + rect.width / 2.0;
            let cy = rect.y + rect.height / 2.0;
            let hit = layout.hit_test(cx, cy).expect("center is covered");
            assert_eq!(hit.name, rect.name);
        }
        assert!(layout.hit_test(-1.0, 10.0).is_none());
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rectangle {
            name: "A".into(),
            category: "Asia".into(),
            weight: 1.0,
            x: 10.0,
            y: 10.0,
            width: 5.0,
            height: 5.0,
            color: Color::new(0.0, 0.0, 0.0),
            share_percent: 100.0,
        };
        assert!(rect.contains(10.0, 10.0));
        assert!(!rect.contains(15.0, 12.0));
        assert!(!rect.contains(12.0, 15.0));
    }

    #[test]
    fn share_display_has_one_decimal() {
        let rects = layout(&sample(), 800.0, 600.0, &Palette::continents());
        for rect in &rects {
            let shown = rect.share_display();
            let (_, frac) = shown.split_once('.').expect("decimal point");
            assert_eq!(frac.len(), 1);
        }
    }
}
