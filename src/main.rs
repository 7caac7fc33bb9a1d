mod app;
mod catalog;
mod config;
mod logging;
mod player;
mod runtime;
mod scroll;
mod shop;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
