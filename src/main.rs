mod app;
mod astro;
mod canvas;
mod config;
mod coord;
mod data;
mod draw;
mod kepler;
mod model;
mod render;
mod sim;

use anyhow::Result;

fn main() -> Result<()> {
    app::run()
}
