use url::Url;

use crate::internal::webdav::enums::{Depth, HrefRelation};
use crate::internal::webdav::functions::classify_responses::{
    classify_href, classify_responses,
};
use crate::webdav::structs::{MultiStatus, Response};

fn response(href: &str) -> Response {
    Response {
        href: href.to_string(),
        propstats: Vec::new(),
    }
}

fn target_url() -> Url {
    Url::parse("https://cloud.example.com/remote.php/dav/files/42/Photos/")
        .unwrap()
}

#[test]
fn target_itself_is_self() {
    let url = target_url();

    assert_eq!(
        classify_href(&url, "/remote.php/dav/files/42/Photos/", &Depth::One),
        HrefRelation::SelfResource
    );
    // 末尾斜杠不影响归属
    assert_eq!(
        classify_href(&url, "/remote.php/dav/files/42/Photos", &Depth::One),
        HrefRelation::SelfResource
    );
    // 绝对 URL 形式的 href 也一样
    assert_eq!(
        classify_href(
            &url,
            "https://cloud.example.com/remote.php/dav/files/42/Photos/",
            &Depth::One
        ),
        HrefRelation::SelfResource
    );
}

#[test]
fn direct_child_is_member_at_depth_one() {
    let url = target_url();

    assert_eq!(
        classify_href(
            &url,
            "/remote.php/dav/files/42/Photos/a.jpg",
            &Depth::One
        ),
        HrefRelation::Member
    );
    assert_eq!(
        classify_href(&url, "/remote.php/dav/files/42/Photos/sub/", &Depth::One),
        HrefRelation::Member
    );
}

#[test]
fn deeper_descendants_and_ancestors_are_other() {
    let url = target_url();

    assert_eq!(
        classify_href(
            &url,
            "/remote.php/dav/files/42/Photos/sub/b.jpg",
            &Depth::One
        ),
        HrefRelation::Other
    );
    assert_eq!(
        classify_href(&url, "/remote.php/dav/files/42/", &Depth::One),
        HrefRelation::Other
    );
    // 路径前缀相同但不是子层级
    assert_eq!(
        classify_href(
            &url,
            "/remote.php/dav/files/42/Photos2/a.jpg",
            &Depth::One
        ),
        HrefRelation::Other
    );
}

#[test]
fn depth_zero_never_yields_members() {
    let url = target_url();

    assert_eq!(
        classify_href(
            &url,
            "/remote.php/dav/files/42/Photos/a.jpg",
            &Depth::Zero
        ),
        HrefRelation::Other
    );
}

#[test]
fn cross_origin_href_is_other() {
    let url = target_url();

    assert_eq!(
        classify_href(
            &url,
            "https://evil.example.com/remote.php/dav/files/42/Photos/",
            &Depth::One
        ),
        HrefRelation::Other
    );
}

#[test]
fn percent_encoding_does_not_change_relation() {
    let url = Url::parse(
        "https://cloud.example.com/remote.php/dav/files/42/Photos%20album/",
    )
    .unwrap();

    assert_eq!(
        classify_href(
            &url,
            "/remote.php/dav/files/42/Photos%20album/",
            &Depth::One
        ),
        HrefRelation::SelfResource
    );
}

#[test]
fn buckets_keep_member_order_and_drop_other() {
    let multi_status = MultiStatus {
        responses: vec![
            // 祖先目录，应被丢弃
            response("/remote.php/dav/files/42/"),
            response("/remote.php/dav/files/42/Photos/"),
            response("/remote.php/dav/files/42/Photos/a.jpg"),
            response("/remote.php/dav/files/42/Photos/b.jpg"),
            // 更深层级，应被丢弃
            response("/remote.php/dav/files/42/Photos/sub/c.jpg"),
        ],
    };

    let classified =
        classify_responses(multi_status, &target_url(), &Depth::One);

    assert_eq!(
        classified.self_response.unwrap().href,
        "/remote.php/dav/files/42/Photos/"
    );
    let member_hrefs: Vec<&str> = classified
        .members
        .iter()
        .map(|m| m.href.as_str())
        .collect();
    assert_eq!(
        member_hrefs,
        vec![
            "/remote.php/dav/files/42/Photos/a.jpg",
            "/remote.php/dav/files/42/Photos/b.jpg",
        ]
    );
    // last_response 是文档顺序的最后一条，即便它被分类为无关
    assert_eq!(
        classified.last_response.unwrap().href,
        "/remote.php/dav/files/42/Photos/sub/c.jpg"
    );
}

#[test]
fn duplicate_self_keeps_the_first() {
    let first = Response {
        href: "/remote.php/dav/files/42/Photos/".to_string(),
        propstats: Vec::new(),
    };
    let multi_status = MultiStatus {
        responses: vec![
            first.clone(),
            response("/remote.php/dav/files/42/Photos"),
        ],
    };

    let classified =
        classify_responses(multi_status, &target_url(), &Depth::One);

    assert_eq!(classified.self_response.unwrap(), first);
    assert!(classified.members.is_empty());
}

#[test]
fn empty_multistatus_has_no_self() {
    let classified = classify_responses(
        MultiStatus { responses: Vec::new() },
        &target_url(),
        &Depth::One,
    );

    assert!(classified.self_response.is_none());
    assert!(classified.members.is_empty());
    assert!(classified.last_response.is_none());
}
