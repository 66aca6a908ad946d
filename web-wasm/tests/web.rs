//! ブラウザ上で動かすテスト（wasm-pack test --headless --chrome）

#![cfg(target_arch = "wasm32")]

use vocab_dashboard_common::FlagStore;
use vocab_dashboard_wasm::bridge::{
    mount_root, vocab_from_js, LocalFlagStore, CARDS_CONTAINER_ID, DASHBOARD_ROOT_ID,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_flag_store_round_trip() {
    let mut store = LocalFlagStore;
    store.clear_flag();
    assert!(store.get_flag().is_none());

    store.set_flag("true");
    assert_eq!(store.get_flag().as_deref(), Some("true"));

    store.clear_flag();
    assert!(store.get_flag().is_none());
}

#[wasm_bindgen_test]
fn missing_vocab_is_none() {
    assert!(vocab_from_js(JsValue::UNDEFINED).is_none());
    assert!(vocab_from_js(JsValue::NULL).is_none());
}

#[wasm_bindgen_test]
fn malformed_vocab_is_none() {
    assert!(vocab_from_js(JsValue::from_str("not a list")).is_none());
}

#[wasm_bindgen_test]
fn vocab_array_is_parsed() {
    let json = r#"[{"word":"猫","reading":"neko","translation":"cat","category":"Animals"}]"#;
    let value = js_sys::JSON::parse(json).unwrap();
    let items = vocab_from_js(value).expect("語彙データが読めない");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].word, "猫");
    assert!(items[0].collocations.is_empty());
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn remove_by_id(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.remove();
    }
}

#[wasm_bindgen_test]
fn mount_root_requires_cards_container() {
    remove_by_id(DASHBOARD_ROOT_ID);
    remove_by_id(CARDS_CONTAINER_ID);
    assert!(mount_root().is_none());
    assert!(document().get_element_by_id(DASHBOARD_ROOT_ID).is_none());
}

#[wasm_bindgen_test]
fn mount_root_is_separate_from_cards_container() {
    remove_by_id(DASHBOARD_ROOT_ID);
    remove_by_id(CARDS_CONTAINER_ID);
    let container = document().create_element("div").unwrap();
    container.set_id(CARDS_CONTAINER_ID);
    document().body().unwrap().append_child(&container).unwrap();

    let root = mount_root().expect("マウント先が作られない");
    assert_eq!(root.id(), DASHBOARD_ROOT_ID);
    assert_eq!(container.child_element_count(), 0);

    // 二度目は同じ要素を使う
    let again = mount_root().expect("マウント先が見つからない");
    assert!(root.is_same_node(Some(&again)));

    remove_by_id(DASHBOARD_ROOT_ID);
    remove_by_id(CARDS_CONTAINER_ID);
}
