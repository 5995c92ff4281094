//! This example shows how to plot a GeoJSON file into an image file.
//!
//! Run this example with one argument - path to a `.geojson` file to plot. Running it will create
//! a file `output_map.png` with the plotted features.
//!
//! ```shell
//! cargo run --example render_geojson -- "./landfall/examples/data/tampa.geojson"
//! ```

use anyhow::{anyhow, Result};
use landfall::geojson::plot_geojson_file;
use landfall::{Context, PlotOptions, TileProvider};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(file_name) = std::env::args().nth(1) else {
        return Err(anyhow!(
            "This example must be run with one argument - name of the .geojson file to load"
        ));
    };

    let options = PlotOptions::default()
        .with_window_size(800, 600)
        .with_tile_provider(TileProvider::carto_light());

    let mut context = Context::new();
    let image = plot_geojson_file(&mut context, &file_name, &options)?;

    if let Some((center, zoom)) = context.determine_center_zoom(options.window_size) {
        log::info!("Map centered at {center:?} with zoom level {zoom}");
    }

    image.save("output_map.png")?;
    log::info!("Map saved to output_map.png");

    Ok(())
}
