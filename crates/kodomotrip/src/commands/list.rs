use kodomotrip_core::Scope;

use crate::app::App;
use crate::cli::FilterArgs;
use crate::render;

pub fn run(app: &App, filter: &FilterArgs, scope: Scope) -> anyhow::Result<()> {
    print!("{}", render_list(app, filter, scope));
    Ok(())
}

fn render_list(app: &App, filter: &FilterArgs, scope: Scope) -> String {
    let state = filter.to_state();
    let places = app.catalog.filter(&state, scope);
    tracing::debug!(
        age = %state.age_group,
        category = %state.category,
        matches = places.len(),
        "filtered catalog"
    );
    render::place_list(&places, scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn filter(age: &str, category: &str) -> FilterArgs {
        FilterArgs {
            age: age.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_events_listing() {
        let temp = TempDir::new().unwrap();
        let app = App::open(Some(temp.path()), None).unwrap();

        let out = render_list(&app, &filter("all", "all"), Scope::Event);
        assert!(out.contains("[3] 春祭り in 桜公園"));
        assert!(out.contains("[7] 夏祭り"));
        assert!(!out.contains("[1]"));
    }

    #[test]
    fn test_unknown_filter_renders_empty_state() {
        let temp = TempDir::new().unwrap();
        let app = App::open(Some(temp.path()), None).unwrap();

        let out = render_list(&app, &filter("all", "zoo"), Scope::Outing);
        assert!(out.contains("該当するおでかけ先が見つかりません"));
        assert!(run(&app, &filter("all", "zoo"), Scope::Outing).is_ok());
    }
}
