use super::*;

#[test]
fn first_uri_renders() {
    let mut gate = RenderGate::new();
    assert!(gate.should_render("/a.pdf"));
    assert_eq!(gate.renders(), 1);
    assert_eq!(gate.last_uri(), Some("/a.pdf"));
}

#[test]
fn same_uri_twice_renders_once() {
    let mut gate = RenderGate::new();
    assert!(gate.should_render("/a.pdf"));
    assert!(!gate.should_render("/a.pdf"));
    assert_eq!(gate.renders(), 1);
}

#[test]
fn changed_uri_renders_again() {
    let mut gate = RenderGate::new();
    assert!(gate.should_render("/a.pdf"));
    assert!(gate.should_render("https://h.test/b.xlsx"));
    assert!(gate.should_render("/a.pdf"));
    assert_eq!(gate.renders(), 3);
}

#[test]
fn fresh_gate_has_no_history() {
    let gate = RenderGate::default();
    assert!(gate.last_uri().is_none());
    assert_eq!(gate.renders(), 0);
}
