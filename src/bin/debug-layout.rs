/// Diagnostic tool to verify items → layout → labels on a synthetic series
use anyhow::{ensure, Result};

use popview_rs::cli::arg_or;
use popview_rs::layout::{compute_layout, Item, LayoutConfig};
use popview_rs::render::labels::{label_tier, LabelTier};
use popview_rs::render::Palette;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("popview_rs=debug".parse()?),
        )
        .init();

    let count: usize = arg_or(1, "count", 200)?;
    let ratio: f64 = arg_or(2, "ratio", 0.9)?;
    let width: f64 = arg_or(3, "width", 800.0)?;
    let height: f64 = arg_or(4, "height", 600.0)?;
    ensure!(ratio > 0.0 && ratio.is_finite(), "ratio must be a positive number");

    println!("=== DIAGNOSTIC: Items → Layout Pipeline ===");
    println!(
        "Geometric series: {} items, ratio {}, box {}x{}",
        count, ratio, width, height
    );

    let continents = ["Asia", "Africa", "Europe", "North America", "South America", "Oceania"];
    let items: Vec<Item> = (0..count)
        .map(|i| {
            Item::new(
                &format!("Country {i:03}"),
                continents[i % continents.len()],
                1e9 * ratio.powi(i as i32),
            )
        })
        .collect();
    let input_weight: f64 = items.iter().map(|i| i.weight).sum();

    let config = LayoutConfig::default();
    let layout = compute_layout(&items, width, height, &Palette::continents(), &config);

    println!("\n[1] Layout computed: {} rectangles", layout.len());

    let mut row_tops: Vec<f64> = layout.rects.iter().map(|r| r.y).collect();
    row_tops.dedup();
    println!("    Rows: {}", row_tops.len());

    println!("\n[2] Top 10 rectangles:");
    for (i, rect) in layout.rects.iter().take(10).enumerate() {
        println!(
            "    [{}] '{}' - rect: {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1}) - share: {}%",
            i,
            rect.name,
            rect.width,
            rect.height,
            rect.area(),
            rect.x,
            rect.y,
            rect.share_display()
        );
    }

    println!("\n[3] Coverage:");
    let area_sum: f64 = layout.rects.iter().map(|r| r.area()).sum();
    let box_area = width * height;
    let used_height = layout
        .rects
        .last()
        .map(|r| r.y + r.height)
        .unwrap_or(0.0);
    println!("    Total rect area: {:.0}px²", area_sum);
    println!("    Box area:        {:.0}px²", box_area);
    println!("    Coverage: {:.1}%", (area_sum / box_area) * 100.0);
    println!("    Used height: {:.1} of {:.1}", used_height, height);

    println!("\n[4] Checking for anomalies:");
    let output_weight: f64 = layout.rects.iter().map(|r| r.weight).sum();
    let dropped = items.len().saturating_sub(layout.len());
    let floored = layout
        .rects
        .iter()
        .filter(|r| r.width <= config.min_extent || r.height <= config.min_extent)
        .count();
    let overflowing = layout
        .rects
        .iter()
        .filter(|r| r.x + r.width > width + 1e-6 || r.y + r.height > height + 1e-6)
        .count();
    let row_overlaps = layout
        .rects
        .windows(2)
        .filter(|w| w[0].y == w[1].y && w[0].x + w[0].width > w[1].x + 1e-9)
        .count();
    println!("    Dropped by area exhaustion: {}", dropped);
    println!(
        "    Weight conserved: {:.6e} of {:.6e}",
        output_weight, input_weight
    );
    println!("    Clamped to minimum size: {}", floored);
    println!("    Extending past the box: {}", overflowing);
    println!("    Overlaps within a row: {}", row_overlaps);

    let mut tiers = [0usize; 3];
    for rect in &layout.rects {
        let slot = match label_tier(rect) {
            LabelTier::Full => 0,
            LabelTier::Abbreviated => 1,
            LabelTier::Hidden => 2,
        };
        tiers[slot] += 1;
    }
    println!(
        "\n[5] Label tiers: {} full, {} abbreviated, {} hidden",
        tiers[0], tiers[1], tiers[2]
    );

    Ok(())
}
