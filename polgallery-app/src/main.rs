mod app;
mod app_state;
mod asset_worker;
mod preferences;
mod ui;

fn main() -> eframe::Result {
    app::run()
}
