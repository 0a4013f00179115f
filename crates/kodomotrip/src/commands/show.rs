use crate::app::App;
use crate::render;

pub fn run(app: &App, place_id: &str) -> anyhow::Result<()> {
    print!("{}", render_detail(app, place_id));
    Ok(())
}

fn render_detail(app: &App, place_id: &str) -> String {
    match app.catalog.find(place_id) {
        Some(place) => render::place_detail(place),
        None => render::place_not_found(place_id),
    }
}
