use pretty_assertions::assert_eq;

use super::*;

#[test]
fn interface_with_marker() {
    let name = name_for(&InterfaceContract::interface("Acme", "IWidget"));
    assert_eq!(
        name,
        MockName {
            type_name: "Mock_Widget".to_string(),
            target_namespace: "Acme.Mocks".to_string(),
        }
    );
}

#[test]
fn interface_without_marker() {
    let name = name_for(&InterfaceContract::interface("Acme.Data", "Repository"));
    assert_eq!(name.type_name, "Mock_Repository");
    assert_eq!(name.target_namespace, "Acme.Data.Mocks");
}

#[test]
fn any_leading_i_is_stripped() {
    assert_eq!(strip_interface_marker("IWidget"), "Widget");
    assert_eq!(strip_interface_marker("IO"), "O");
    assert_eq!(strip_interface_marker("Item"), "tem");
    assert_eq!(strip_interface_marker("Iterable"), "terable");
    assert_eq!(strip_interface_marker("I"), "");
    assert_eq!(strip_interface_marker("Widget"), "Widget");
}

#[test]
fn lowercase_after_i_still_loses_the_i() {
    assert_eq!(
        name_for(&InterfaceContract::interface("Acme", "Item")).type_name,
        "Mock_tem"
    );
    assert_eq!(
        name_for(&InterfaceContract::interface("Acme", "Iterable")).type_name,
        "Mock_terable"
    );
    assert_eq!(name_for(&InterfaceContract::interface("Acme", "I")).type_name, "Mock_");
}

#[test]
fn only_one_marker_is_stripped() {
    assert_eq!(strip_interface_marker("IIdentity"), "Identity");
    assert_eq!(strip_interface_marker("IIOPort"), "IOPort");
}

#[test]
fn global_namespace_maps_to_mocks() {
    let name = name_for(&InterfaceContract::interface("", "IClock"));
    assert_eq!(name.type_name, "Mock_Clock");
    assert_eq!(name.target_namespace, "Mocks");
}

#[test]
fn backing_field_is_underscore_prefixed() {
    assert_eq!(backing_field_name("Count"), "_Count");
}
