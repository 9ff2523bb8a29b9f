#![allow(non_snake_case)]

mod app;
mod components;
mod content;
mod pages;
mod theme;

use dioxus::logger::tracing::Level;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {}", err);
    }

    tracing::info!("Starting landing page");

    dioxus::LaunchBuilder::web().launch(app::App);
}
