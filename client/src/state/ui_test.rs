use super::*;

#[test]
fn ui_state_default_shows_sidebar() {
    let state = UiState::default();
    assert!(!state.sidebar_hidden);
}

#[test]
fn toggle_sidebar_flips_flag() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_hidden);
    state.toggle_sidebar();
    assert!(!state.sidebar_hidden);
}
