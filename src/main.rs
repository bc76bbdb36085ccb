#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod crypto;
mod environment;
mod pages;
mod theme;

use breachgrid_core::PuzzleConfig;
use tracing::Level;

fn main() {
    // Routes tracing output to the browser console.
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        tracing::warn!("logger already initialised: {}", err);
    }

    if let Err(err) = PuzzleConfig::default().validate() {
        tracing::error!(%err, "puzzle config rejected");
        return;
    }

    tracing::info!("Starting breachgrid");

    dioxus::launch(app::App);
}
