use crate::browse::{ListingError, strip_base_prefix};

const BASE: &str = "https://host/remote.php/dav/files/42";

#[test]
fn strips_known_prefix() {
    let relative = strip_base_prefix(
        "https://host/remote.php/dav/files/42/Photos/a.jpg",
        BASE,
    )
    .unwrap();

    assert_eq!(relative, "/Photos/a.jpg");
}

#[test]
fn address_equal_to_prefix_maps_to_root() {
    assert_eq!(
        strip_base_prefix("https://host/remote.php/dav/files/42", BASE)
            .unwrap(),
        "/"
    );
}

#[test]
fn trailing_slash_on_prefix_is_ignored() {
    let relative = strip_base_prefix(
        "https://host/remote.php/dav/files/42/Photos/a.jpg",
        "https://host/remote.php/dav/files/42/",
    )
    .unwrap();

    assert_eq!(relative, "/Photos/a.jpg");
}

#[test]
fn foreign_address_is_a_prefix_mismatch() {
    let result = strip_base_prefix(
        "https://other-host/remote.php/dav/files/42/a.jpg",
        BASE,
    );

    assert!(matches!(result, Err(ListingError::PrefixMismatch { .. })));
}

#[test]
fn sibling_user_tree_is_a_prefix_mismatch() {
    // "421" 以 "42" 开头但不是同一棵文件树，不允许按字符截断
    let result = strip_base_prefix(
        "https://host/remote.php/dav/files/421/a.jpg",
        BASE,
    );

    assert!(matches!(result, Err(ListingError::PrefixMismatch { .. })));
}
