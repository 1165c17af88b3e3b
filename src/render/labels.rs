use crate::layout::Rectangle;

/// How much text a rectangle can legibly host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTier {
    /// Full name plus formatted weight
    Full,
    /// First three characters of the name, uppercased
    Abbreviated,
    /// Too small for any text
    Hidden,
}

impl LabelTier {
    pub fn for_size(width: f64, height: f64) -> Self {
        if width > 80.0 && height > 40.0 {
            LabelTier::Full
        } else if width > 20.0 && height > 12.0 {
            LabelTier::Abbreviated
        } else {
            LabelTier::Hidden
        }
    }
}

/// One line of text anchored at its horizontal center.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    /// Name lines are drawn bold, weight lines in the regular face
    pub bold: bool,
}

pub fn label_tier(rect: &Rectangle) -> LabelTier {
    LabelTier::for_size(rect.width, rect.height)
}

/// Build the text lines for a rectangle according to its tier.
pub fn label_for(rect: &Rectangle) -> Vec<LabelLine> {
    let (w, h) = (rect.width, rect.height);
    let cx = rect.x + w / 2.0;
    let cy = rect.y + h / 2.0;

    match label_tier(rect) {
        LabelTier::Full => vec![
            LabelLine {
                text: rect.name.to_string(),
                x: cx,
                y: cy - 8.0,
                font_size: (w / 8.0).min(h / 4.0).min(14.0),
                bold: true,
            },
            LabelLine {
                text: format_weight(rect.weight),
                x: cx,
                y: cy + 8.0,
                font_size: (w / 10.0).min(h / 5.0).min(12.0),
                bold: false,
            },
        ],
        LabelTier::Abbreviated => vec![LabelLine {
            text: abbreviate(&rect.name),
            x: cx,
            y: cy,
            font_size: (w.min(h) / 3.0).max(6.0),
            bold: true,
        }],
        LabelTier::Hidden => Vec::new(),
    }
}

/// First three characters, uppercased.
pub fn abbreviate(name: &str) -> String {
    name.chars().take(3).collect::<String>().to_uppercase()
}

/// Format a weight with `,` thousands separators and at most three decimals.
pub fn format_weight(weight: f64) -> String {
    if !weight.is_finite() {
        return weight.to_string();
    }

    let rounded = (weight * 1000.0).round() / 1000.0;
    let abs = rounded.abs();
    let int_part = abs.trunc();

    let digits = format!("{:.0}", int_part);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = format!("{:.3}", abs - int_part);
    let frac = frac.trim_start_matches('0').trim_end_matches('0');
    if frac.len() > 1 {
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors::Color;

    fn rect(name: &str, width: f64, height: f64) -> Rectangle {
        Rectangle {
            name: name.into(),
            category: "Asia".into(),
            weight: 1_450_935_791.0,
            x: 100.0,
            y: 50.0,
            width,
            height,
            color: Color::new(1.0, 0.6, 0.6),
            share_percent: 17.8,
        }
    }

    #[test]
    fn tier_thresholds_are_strict() {
        assert_eq!(LabelTier::for_size(81.0, 41.0), LabelTier::Full);
        assert_eq!(LabelTier::for_size(80.0, 41.0), LabelTier::Abbreviated);
        assert_eq!(LabelTier::for_size(81.0, 40.0), LabelTier::Abbreviated);
        assert_eq!(LabelTier::for_size(21.0, 13.0), LabelTier::Abbreviated);
        assert_eq!(LabelTier::for_size(20.0, 13.0), LabelTier::Hidden);
        assert_eq!(LabelTier::for_size(500.0, 12.0), LabelTier::Hidden);
    }

    #[test]
    fn full_label_has_name_and_weight() {
        let lines = label_for(&rect("India", 400.0, 200.0));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "India");
        assert_eq!(lines[0].font_size, 14.0);
        assert_eq!((lines[0].x, lines[0].y), (300.0, 142.0));
        assert_eq!(lines[1].text, "1,450,935,791");
        assert_eq!(lines[1].font_size, 12.0);
        assert_eq!(lines[1].y, 158.0);
    }

    #[test]
    fn small_full_label_scales_font_down() {
        let lines = label_for(&rect("India", 88.0, 48.0));
        assert_eq!(lines[0].font_size, 11.0);
        assert!((lines[1].font_size - 8.8).abs() < 1e-9);
    }

    #[test]
    fn medium_label_is_abbreviated() {
        let lines = label_for(&rect("Bangladesh", 30.0, 24.0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "BAN");
        assert_eq!(lines[0].font_size, 8.0);

        let lines = label_for(&rect("Chad", 21.0, 13.0));
        assert_eq!(lines[0].font_size, 6.0);
    }

    #[test]
    fn tiny_rect_has_no_label() {
        assert!(label_for(&rect("Tuvalu", 5.0, 1.0)).is_empty());
    }

    #[test]
    fn abbreviation_respects_char_boundaries() {
        assert_eq!(abbreviate("Côte d'Ivoire"), "CÔT");
        assert_eq!(abbreviate("Ao"), "AO");
    }

    #[test]
    fn formats_weights_with_separators() {
        assert_eq!(format_weight(0.0), "0");
        assert_eq!(format_weight(999.0), "999");
        assert_eq!(format_weight(1_000.0), "1,000");
        assert_eq!(format_weight(1_234_567.0), "1,234,567");
        assert_eq!(format_weight(-12_345.0), "-12,345");
        assert_eq!(format_weight(1_234.5), "1,234.5");
        assert_eq!(format_weight(0.12345), "0.123");
    }
}
