//! Localized label selection in built views.

use dexpage::logic::{ListConfig, build_view, select_label};
use dexpage::state::{Entity, FetchResult, Label, PageState, ViewState};

fn single(entity: Entity) -> dexpage::state::ListItemView {
    let view = build_view(
        &PageState::default(),
        &ListConfig::default(),
        &FetchResult::Success(vec![entity]),
    );
    match view {
        ViewState::Ready(mut vm) => vm.items.remove(0),
        other => panic!("expected ready view, got {other:?}"),
    }
}

#[test]
fn both_languages_present() {
    let item = single(Entity {
        id: 25,
        labels: vec![Label::new(1, "ピカチュウ"), Label::new(9, "Pikachu")],
    });
    assert_eq!(item.id, 25);
    assert_eq!(item.primary_label.as_deref(), Some("ピカチュウ"));
    assert_eq!(item.secondary_label.as_deref(), Some("Pikachu"));
}

#[test]
fn missing_primary_is_absent_not_empty() {
    let item = single(Entity {
        id: 25,
        labels: vec![Label::new(9, "Pikachu")],
    });
    assert_eq!(item.primary_label, None);
    assert_eq!(item.secondary_label.as_deref(), Some("Pikachu"));
}

#[test]
fn first_match_wins_on_duplicates() {
    let labels = [
        Label::new(9, "Pikachu"),
        Label::new(9, "Pika"),
        Label::new(1, "ピカチュウ"),
    ];
    assert_eq!(select_label(&labels, 9), Some("Pikachu"));
    assert_eq!(select_label(&labels, 5), None);
}
