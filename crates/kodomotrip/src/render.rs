//! Plain-text rendering of lists, details and the install dialog

use kodomotrip_core::{Place, Scope};
use std::fmt::Write;

pub fn list_header(scope: Scope) -> String {
    match scope {
        Scope::Outing => {
            "おでかけスポット\nお子様と一緒に楽しめる場所を見つけよう\n".to_string()
        }
        Scope::Event => "イベント情報\n期間限定の楽しいイベントをチェック\n".to_string(),
    }
}

pub fn empty_state(scope: Scope) -> String {
    let what = match scope {
        Scope::Outing => "おでかけ先",
        Scope::Event => "イベント",
    };
    format!(
        "該当する{}が見つかりません\nフィルターを変更してみてください\n",
        what
    )
}

pub fn place_card(place: &Place) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] {} ({})  ★{}",
        place.id,
        place.name,
        place.category.label(),
        place.rating
    );
    let _ = writeln!(out, "    {} | {}", place.location, place.open_hours);
    let _ = writeln!(out, "    混雑度: {}", place.crowd_level.label());

    let amenities = amenity_labels(place);
    if !amenities.is_empty() {
        let _ = writeln!(out, "    設備: {}", amenities);
    }
    if let Some(period) = &place.event_period {
        let _ = writeln!(out, "    期間: {}", period);
    }
    out
}

pub fn place_list(places: &[&Place], scope: Scope) -> String {
    let mut out = list_header(scope);
    out.push('\n');

    if places.is_empty() {
        out.push_str(&empty_state(scope));
        return out;
    }

    for place in places {
        out.push_str(&place_card(place));
        out.push('\n');
    }
    out
}

pub fn place_detail(place: &Place) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]  ★{}", place.name, place.category.label(), place.rating);
    let _ = writeln!(out, "場所: {}", place.location);
    let _ = writeln!(out, "営業時間: {}", place.open_hours);
    if let Some(period) = &place.event_period {
        let _ = writeln!(out, "開催期間: {}", period);
    }
    let _ = writeln!(out, "混雑度: {}", place.crowd_level.label());
    let _ = writeln!(out, "対象年齢: {}", place.ages_label());

    let amenities = amenity_labels(place);
    let _ = writeln!(
        out,
        "設備・サービス: {}",
        if amenities.is_empty() { "なし" } else { amenities.as_str() }
    );
    let _ = writeln!(out, "詳細情報: {}", place.description);
    let _ = writeln!(out, "画像: {}", place.image_url);
    out
}

pub fn place_not_found(place_id: &str) -> String {
    format!("スポット情報が見つかりません ({})\n", place_id)
}

pub fn install_dialog() -> String {
    [
        "┌ アプリのように使おう！",
        "│ ホーム画面に追加すると、より快適に使えます",
        "│",
        "│ 1. Safariの共有ボタンをタップ",
        "│ 2. 「ホーム画面に追加」を選択",
        "│",
        "│ 追加すると...",
        "│ • アプリのように簡単アクセス",
        "│ • オフラインでも使える",
        "│ • プッシュ通知も受信可能",
        "│",
        "└ 後で: kodomotrip dismiss   閉じる: kodomotrip close",
    ]
    .iter()
    .fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}

fn amenity_labels(place: &Place) -> String {
    place
        .amenities()
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kodomotrip_core::Catalog;

    #[test]
    fn test_place_card_event() {
        let catalog = Catalog::builtin();
        let card = place_card(catalog.find("3").unwrap());
        assert!(card.starts_with("[3] 春祭り in 桜公園 (イベント)"));
        assert!(card.contains("混雑度: 混雑"));
        assert!(card.contains("設備: おむつ交換台, トイレ"));
        assert!(card.contains("期間: 2025年4月1日 - 2025年4月7日"));
    }

    #[test]
    fn test_place_card_without_period() {
        let catalog = Catalog::builtin();
        let card = place_card(catalog.find("1").unwrap());
        assert!(!card.contains("期間"));
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let out = place_list(&[], Scope::Event);
        assert!(out.starts_with("イベント情報"));
        assert!(out.contains("該当するイベントが見つかりません"));
        assert!(out.contains("フィルターを変更してみてください"));
    }

    #[test]
    fn test_list_keeps_order() {
        let catalog = Catalog::builtin();
        let places: Vec<_> = catalog.places().iter().collect();
        let out = place_list(&places, Scope::Outing);
        let first = out.find("[1]").unwrap();
        let last = out.find("[8]").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_detail() {
        let catalog = Catalog::builtin();
        let out = place_detail(catalog.find("2").unwrap());
        assert!(out.contains("対象年齢: 0-1歳, 2-3歳"));
        assert!(out.contains("設備・サービス: 駐車場, おむつ交換台, 授乳室, トイレ"));
        assert!(!out.contains("開催期間"));
    }

    #[test]
    fn test_install_dialog_lines() {
        let dialog = install_dialog();
        assert_eq!(dialog.lines().count(), 12);
        assert!(dialog.contains("kodomotrip dismiss"));
    }
}
