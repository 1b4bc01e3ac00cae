use super::*;

fn paths(items: &[MenuItem]) -> Vec<&'static str> {
    items
        .iter()
        .flat_map(|item| item.path.into_iter().chain(paths(item.children)))
        .collect()
}

#[test]
fn menu_reaches_dashboard_and_question_submit() {
    let all = paths(MENU);
    assert!(all.contains(&"/"));
    assert!(all.contains(&"/questions/new"));
    assert!(all.contains(&"/settings"));
}

#[test]
fn group_is_active_when_a_child_is() {
    let mistakes = &MENU[1];
    assert!(mistakes.path.is_none());
    assert!(is_active(mistakes, "/questions/new"));
    assert!(!is_active(mistakes, "/"));
}

#[test]
fn dashboard_entry_matches_only_root() {
    assert!(is_active(&MENU[0], "/"));
    assert!(!is_active(&MENU[0], "/questions"));
}

#[test]
fn brand_shortens_when_collapsed() {
    assert_eq!(brand(false), "GradNote");
    assert_eq!(brand(true), "GN");
}
