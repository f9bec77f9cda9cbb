use rxcoord::{Diagram, DiagramSettings, Layout};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn setters_bump_version_only_on_change() {
    let mut d = Diagram::new();
    let v0 = d.version();
    assert!(!d.set_exothermic(true), "default is exothermic");
    assert_eq!(d.version(), v0);
    assert!(d.set_exothermic(false));
    assert!(d.set_barrier(0.2));
    assert!(!d.set_barrier(0.2));
    assert_eq!(d.version(), v0 + 2);
    assert_eq!(d.curve().product.y, 440.0);
}

#[test]
fn overlay_toggles_drive_catalyst_curve() {
    let mut d = Diagram::new();
    assert!(d.catalyst_curve().is_none());
    d.set_catalyst_overlay(true);
    let cat = d.catalyst_curve().expect("catalyst curve");
    assert_eq!(cat.reactant, d.curve().reactant);
    d.set_heat_overlay(true);
    assert!(d.scene().heat_overlay);
    assert!(d.to_svg().contains("TS (a)"));
}

#[test]
fn listeners_see_each_recompute() {
    let mut d = Diagram::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let id = d.subscribe(move |scene| sink.borrow_mut().push(scene.base.transition.y));
    d.set_barrier(1.0);
    d.set_barrier(1.0);
    d.set_barrier(0.5);
    assert_eq!(*seen.borrow(), vec![150.0, 190.0]);
    assert!(d.unsubscribe(id));
    assert!(!d.unsubscribe(id));
    d.set_barrier(0.0);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn apply_is_a_single_recompute() {
    let mut d = Diagram::new();
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    d.subscribe(move |_| *c.borrow_mut() += 1);
    d.apply(DiagramSettings {
        exothermic: false,
        barrier: 0.1,
        catalyst_overlay: true,
        heat_overlay: true,
    });
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn json_round_trip() {
    let mut a = Diagram::new();
    a.set_exothermic(false);
    a.set_barrier(0.4);
    a.set_catalyst_overlay(true);
    let v = a.to_json_value().unwrap();
    assert_eq!(v["version"], 1);
    assert_eq!(v["curve"]["path"], json!(a.path_string()));
    assert!(v["catalyst_curve"].is_object());

    let mut b = Diagram::new();
    assert!(b.from_json_value(v));
    assert_eq!(b.settings(), a.settings());
    assert_eq!(b.curve(), a.curve());
}

#[test]
fn json_rejects_bad_docs_without_mutation() {
    let mut d = Diagram::new();
    let ver = d.version();
    assert!(!d.from_json_value(json!({"settings": {"exothermic": "yes", "barrier": 0.5}})));
    let err = d
        .from_json_value_strict(json!({
            "settings": {"exothermic": true, "barrier": 0.5},
            "layout": {"width": -5.0}
        }))
        .unwrap_err();
    assert_eq!(err.0, "out_of_bounds");
    let err = d
        .from_json_value_strict(json!({"version": 99, "settings": {"exothermic": true, "barrier": 0.5}}))
        .unwrap_err();
    assert_eq!(err.0, "unsupported_version");
    assert_eq!(d.version(), ver);
}

#[test]
fn custom_layout_moves_anchors() {
    let layout = Layout { width: 1200.0, ..Layout::default() };
    let d = Diagram::with_layout(layout).unwrap();
    assert_eq!(d.curve().product.x, 1080.0);
    assert_eq!(d.curve().transition.x, 590.0);
    assert!(d.to_svg().contains("viewBox=\"0 0 1200 520\""));
}

#[test]
fn programmatic_layouts_are_validated() {
    let zero = Layout { width: 0.0, ..Layout::default() };
    assert_eq!(Diagram::with_layout(zero).err().map(|e| e.0), Some("out_of_bounds"));

    let mut d = Diagram::new();
    let ver = d.version();
    let huge = Layout { height: 1.0e6, ..Layout::default() };
    assert_eq!(d.set_layout(huge).unwrap_err().0, "out_of_bounds");
    let nan = Layout { reactant_y: f32::NAN, ..Layout::default() };
    assert!(d.set_layout(nan).is_err());
    assert_eq!(d.version(), ver);

    assert_eq!(d.set_layout(Layout { width: 800.0, ..Layout::default() }), Ok(true));
    assert_eq!(d.curve().product.x, 680.0);
}

#[test]
fn json_of_nan_barrier_is_a_value_that_loads_back_as_rejected() {
    let mut d = Diagram::new();
    d.set_barrier(f32::NAN);
    let v = d.to_json_value().expect("serializes");
    assert!(v["settings"]["barrier"].is_null());
    assert!(v["curve"]["path"].is_string());

    let mut fresh = Diagram::new();
    let ver = fresh.version();
    assert!(!fresh.from_json_value(v));
    assert_eq!(fresh.version(), ver);
}
