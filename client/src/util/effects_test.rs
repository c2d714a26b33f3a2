use super::*;
use std::cell::RefCell;

#[test]
fn toast_signal_notifier_pushes_kind_and_message() {
    let owner = Owner::new();
    owner.set();
    let toasts = RwSignal::new(ToastState::default());

    toasts.success("Email sent!");
    toasts.error("Email not sent!");

    let items = toasts.get_untracked().items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, ToastKind::Success);
    assert_eq!(items[0].message, "Email sent!");
    assert_eq!(items[1].kind, ToastKind::Error);
}

#[test]
fn router_navigator_forwards_path() {
    let visited = RefCell::new(Vec::<String>::new());
    let navigator = RouterNavigator(|path: &str, _opts: NavigateOptions| visited.borrow_mut().push(path.to_owned()));
    navigator.push("/login");
    assert_eq!(visited.borrow().as_slice(), ["/login".to_owned()]);
}

#[test]
fn browser_clipboard_is_a_no_op_off_browser() {
    BrowserClipboard.write_text("ignored");
}

#[test]
fn current_origin_is_empty_off_browser() {
    assert_eq!(current_origin(), "");
}
