use super::*;

#[test]
fn push_puts_newest_first_with_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "one");
    let second = state.push(ToastKind::Error, "two");
    assert!(second > first);
    assert_eq!(state.items[0].message, "two");
    assert_eq!(state.items[1].message, "one");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "saved");
    let _second = state.push(ToastKind::Info, "hello");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "hello");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "a");
    state.dismiss(first);
    let second = state.push(ToastKind::Info, "b");
    assert_ne!(first, second);
}

#[test]
fn kind_class_names() {
    assert_eq!(ToastKind::Success.class(), "toast toast-success");
    assert_eq!(ToastKind::Error.class(), "toast toast-error");
    assert_eq!(ToastKind::Info.class(), "toast toast-info");
}
