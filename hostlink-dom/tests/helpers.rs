use hostlink_dom::{Element, MemoryElement, add_class, has_class, remove_class, unique_input_types};

// --- Class round-trips ---

#[test]
fn class_round_trip_on_every_name() {
    for name in ["a", "is-open", "x_1", "ünïcode"] {
        let mut el = MemoryElement::new("div").with_attribute("class", "base");

        add_class(&mut el, name);
        assert!(has_class(&el, name), "{name} should be present after add");
        add_class(&mut el, name);
        assert!(has_class(&el, name));

        remove_class(&mut el, name);
        assert!(!has_class(&el, name), "{name} should be gone after remove");
        remove_class(&mut el, name);
        assert!(!has_class(&el, name));

        assert!(has_class(&el, "base"));
    }
}

#[test]
fn helpers_work_through_trait_objects() {
    let mut el = MemoryElement::new("form");
    let dyn_el: &mut dyn Element = &mut el;
    add_class(dyn_el, "sending");
    assert!(has_class(dyn_el, "sending"));
    remove_class(dyn_el, "sending");
    assert!(!has_class(dyn_el, "sending"));
}

// --- Forms from fixtures ---

#[test]
fn input_types_from_json_fixture() {
    let form: Vec<MemoryElement> = serde_json::from_str(
        r#"[
            { "tag": "input", "attributes": { "type": "text", "name": "first" } },
            { "tag": "input", "attributes": { "type": "text", "name": "last" } },
            { "tag": "input", "attributes": { "type": "checkbox", "name": "agree" } },
            { "tag": "select" }
        ]"#,
    )
    .unwrap();

    assert_eq!(unique_input_types(&form), vec!["text", "checkbox"]);
}
