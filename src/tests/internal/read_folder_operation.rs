use crate::auth::WebdavAuth;
use crate::browse::{ListingError, ListingStatus, ReadFolderOperation};
use crate::internal::webdav::enums::Depth;

/// 指向一个没有服务监听的本地端口，连接必然被拒绝
fn offline_auth() -> WebdavAuth {
    WebdavAuth::new("alice", "sekrit-token", "http://127.0.0.1:1/", 42)
        .unwrap()
}

#[test]
fn files_root_carries_the_user_id() {
    let auth = offline_auth();

    assert_eq!(
        auth.files_root.as_str(),
        "http://127.0.0.1:1/remote.php/dav/files/42/"
    );
    assert_eq!(
        auth.base_prefix(),
        "http://127.0.0.1:1/remote.php/dav/files/42"
    );
}

#[test]
fn target_url_joins_the_relative_path() {
    let auth = offline_auth();

    let operation =
        ReadFolderOperation::new(&auth, "/Photos", Depth::One).unwrap();

    assert_eq!(
        operation.url().as_str(),
        "http://127.0.0.1:1/remote.php/dav/files/42/Photos"
    );
}

#[test]
fn rejects_paths_escaping_the_files_root() {
    let auth = offline_auth();

    let result = ReadFolderOperation::new(&auth, "../43", Depth::One);

    assert!(matches!(result, Err(ListingError::InvalidPath(_))));
}

#[test]
fn debug_output_hides_the_token() {
    let auth = offline_auth();

    let printed = format!("{:?}", auth);

    assert!(!printed.contains("sekrit-token"));
    assert!(!printed.contains("alice"));
}

#[test]
fn equality_compares_token_digest_and_base_url() {
    let a = offline_auth();
    let b = WebdavAuth::new("alice", "sekrit-token", "http://127.0.0.1:1/", 42)
        .unwrap();
    let c = WebdavAuth::new("alice", "other-token", "http://127.0.0.1:1/", 42)
        .unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.eq_only_token(&b));
    assert!(!a.eq_only_token(&c));
}

#[tokio::test]
async fn transport_failure_degrades_the_listing() {
    let auth = offline_auth();
    let operation =
        ReadFolderOperation::new(&auth, "/Photos", Depth::One).unwrap();

    let listing = operation.read_remote_path().await;

    assert!(listing.is_degraded());
    assert!(listing.browser_files.is_empty());
    assert!(listing.remote_files.is_empty());
    assert!(listing.last_response.is_none());
    assert!(matches!(
        listing.status,
        ListingStatus::Degraded(ListingError::Transport(_))
    ));
}
