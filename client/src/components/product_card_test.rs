use super::*;

fn product(id: &str, url: Option<&str>) -> Product {
    Product { id: id.to_owned(), name: "Item".to_owned(), price: "$1".to_owned(), url: url.map(str::to_owned) }
}

#[test]
fn table_covers_catalogue_ids() {
    for id in ["1", "2", "3"] {
        assert!(catalogue_image(id).is_some(), "missing image for id {id}");
    }
}

#[test]
fn table_ids_are_unique() {
    let mut ids: Vec<&str> = PRODUCT_IMAGES.iter().map(|(id, _)| *id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PRODUCT_IMAGES.len());
}

#[test]
fn known_id_uses_table_image() {
    let p = product("1", None);
    assert_eq!(resolve_image_url(&p).as_deref(), catalogue_image("1"));
}

#[test]
fn table_overrides_backend_url() {
    let p = product("2", Some("https://cdn.example/cap.png"));
    assert_eq!(resolve_image_url(&p).as_deref(), catalogue_image("2"));
}

#[test]
fn unknown_id_falls_back_to_backend_url() {
    let p = product("42", Some("https://cdn.example/mug.png"));
    assert_eq!(resolve_image_url(&p).as_deref(), Some("https://cdn.example/mug.png"));
}

#[test]
fn unknown_id_without_url_has_no_image() {
    assert_eq!(resolve_image_url(&product("42", None)), None);
}

#[test]
fn resolution_is_deterministic() {
    let p = product("3", Some("https://cdn.example/bottle.png"));
    assert_eq!(resolve_image_url(&p), resolve_image_url(&p.clone()));
}

#[test]
fn card_key_uses_product_id() {
    assert_eq!(card_key(4, &product("2", None)), "2");
}

#[test]
fn card_key_falls_back_to_position_without_id() {
    let first = card_key(0, &product("", None));
    let second = card_key(1, &product("", None));
    assert_eq!(first, "#0");
    assert_ne!(first, second);
}

#[test]
fn product_without_id_uses_backend_url() {
    let p = product("", Some("https://cdn.example/hoodie.png"));
    assert_eq!(resolve_image_url(&p).as_deref(), Some("https://cdn.example/hoodie.png"));
}
