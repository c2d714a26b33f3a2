use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut s = ToastState::default();
    let a = s.push(ToastKind::Success, "Email sent!");
    let b = s.push(ToastKind::Error, "Email not sent!");
    assert!(b > a);
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.items[0].message, "Email sent!");
    assert_eq!(s.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut s = ToastState::default();
    let a = s.push(ToastKind::Success, "one");
    let b = s.push(ToastKind::Success, "two");
    s.dismiss(a);
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.items[0].id, b);
    s.dismiss(999);
    assert_eq!(s.items.len(), 1);
}

#[test]
fn css_modifier_per_kind() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
}
