use anyhow::Result;

use popview_rs::cli::arg_or;
use popview_rs::data::{self, sample};
use popview_rs::layout::{compute_layout, LayoutConfig};
use popview_rs::render::labels;
use popview_rs::render::Palette;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("popview_rs=info".parse()?),
        )
        .init();

    // Parse command line: optional bounding box, defaults to 800x600
    let width: f64 = arg_or(1, "width", 800.0)?;
    let height: f64 = arg_or(2, "height", 600.0)?;

    tracing::info!("PopView-rs starting, box {}x{}", width, height);

    let prepared = data::prepare_items(sample::sample_entries());
    if !prepared.dropped.is_empty() {
        tracing::info!("Ignored {} rows from the sample table", prepared.dropped.len());
    }

    let palette = Palette::continents();
    let layout = compute_layout(
        &prepared.items,
        width,
        height,
        &palette,
        &LayoutConfig::default(),
    );

    println!("World Population Visualization");
    println!(
        "Total Population: {} people",
        labels::format_weight(data::total_weight(&prepared.items))
    );
    println!();
    println!(
        "{:<22} {:<14} {:>8} {:>8} {:>8} {:>8} {:>6}  {:<8} label",
        "name", "continent", "x", "y", "w", "h", "share", "color"
    );

    for rect in &layout.rects {
        let label = labels::label_for(rect)
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join(" / ");
        println!(
            "{:<22} {:<14} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>5}%  {:<8} {}",
            rect.name.as_str(),
            rect.category.as_str(),
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            rect.share_display(),
            rect.color.to_hex(),
            label
        );
    }

    Ok(())
}
