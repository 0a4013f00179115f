//! Install prompt commands: one `visit` per app start, then the user's answer

use kodomotrip_prompt::InstallPromptState;
use serde_json::{json, Value};

use crate::app::App;
use crate::render;

pub fn run_visit(app: &App) -> anyhow::Result<()> {
    let mut dialog = app.dialog();
    if dialog.on_start() {
        print!("{}", render::install_dialog());
    }
    Ok(())
}

pub fn run_dismiss(app: &App) -> anyhow::Result<()> {
    let mut dialog = app.dialog();
    dialog.dismiss();
    report_answer(app)
}

pub fn run_close(app: &App) -> anyhow::Result<()> {
    let mut dialog = app.dialog();
    dialog.close();
    report_answer(app)
}

pub fn run_status(app: &App) -> anyhow::Result<()> {
    let state = if app.settings.preview {
        *app.stored_prompt().state()
    } else {
        *app.install_prompt().state()
    };
    println!("{}", status_json(&state, app.settings.preview));
    Ok(())
}

fn report_answer(app: &App) -> anyhow::Result<()> {
    if app.settings.preview {
        println!("preview mode: install prompt state is not persisted");
        return Ok(());
    }
    println!("{}", status_json(app.stored_prompt().state(), false));
    Ok(())
}

fn status_json(state: &InstallPromptState, preview: bool) -> Value {
    json!({
        "visitCount": state.visit_count,
        "shouldShowDialog": state.should_show_dialog,
        "lastDismissed": state.last_dismissed_at.map(|t| t.to_rfc3339()),
        "preview": preview,
    })
}
