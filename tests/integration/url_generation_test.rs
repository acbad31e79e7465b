//! End-to-end URL generation through the public builder API

use rezizer::{OperationValue, RezizerError, UrlBuilder};

const SERVER: &str = "http://img.example.com";

#[test]
fn test_unsigned_resize_url() {
    let mut url = UrlBuilder::new(SERVER);
    url.resize(300, 200).unwrap().with("/path/to/image.jpg");

    assert_eq!(
        url.generate(),
        "http://img.example.com/200x300/path/to/image.jpg"
    );
}

#[test]
fn test_signed_resize_url() {
    let mut url = UrlBuilder::signed(SERVER, "mysecret");
    url.resize(300, 200).unwrap().with("/path/to/image.jpg");

    let generated = url.generate();
    assert!(generated.starts_with("http://img.example.com/"));
    assert_eq!(
        generated,
        "http://img.example.com/3Y3XZIr8T3zOZb1z4pmt2SZdMFA=/200x300/path/to/image.jpg"
    );
}

#[test]
fn test_full_chain_keeps_call_order() {
    let mut url = UrlBuilder::new(SERVER);
    url.fit_in()
        .resize(300, 200)
        .unwrap()
        .align("top")
        .blur(5)
        .with("photos/cat.jpg");

    assert_eq!(
        url.generate(),
        "http://img.example.com/fit-in/200x300/north/blur:5/photos/cat.jpg"
    );
}

#[test]
fn test_retina_and_smart() {
    let mut url = UrlBuilder::new(SERVER);
    url.retina(2)
        .fit_in()
        .resize(100, 50)
        .unwrap()
        .smart()
        .quality(80)
        .with("a.png");

    assert_eq!(
        url.generate(),
        "http://img.example.com/fit-in/50x100@2x/smart/quality:80/a.png"
    );
}

#[test]
fn test_repeated_operation_keeps_first_position() {
    let mut url = UrlBuilder::new(SERVER);
    url.blur(1).grayscale().blur(9).with("x.jpg");

    assert_eq!(url.generate(), "http://img.example.com/blur:9/grayscale/x.jpg");
}

#[test]
fn test_tile_overrides_everything() {
    let mut url = UrlBuilder::new(SERVER);
    url.resize(10, 10).unwrap().blur(3).palette(Some("P1")).map().tile().with("x.jpg");

    assert_eq!(url.generate(), "http://img.example.com/tile/x.jpg");
}

#[test]
fn test_map_overrides_palette() {
    let mut url = UrlBuilder::new(SERVER);
    url.palette(None).map().with("x.jpg");

    assert_eq!(url.generate(), "http://img.example.com/map/x.jpg");
}

#[test]
fn test_dynamic_dispatch_sanitizes_arguments() {
    let mut url = UrlBuilder::new(SERVER);
    url.apply("blur", &["5;DROP"]).with("x.jpg");

    assert_eq!(
        url.operations().get("blur"),
        Some(&OperationValue::text("5DROP"))
    );
    assert_eq!(url.generate(), "http://img.example.com/blur:5DROP/x.jpg");
}

#[test]
fn test_dynamic_dispatch_renames() {
    let mut url = UrlBuilder::new(SERVER);
    url.apply("fitIn", &[] as &[&str])
        .apply("maxKb", &["100"])
        .apply("maxAge", &["3600"])
        .with("x.jpg");

    assert_eq!(
        url.generate(),
        "http://img.example.com/fit-in/max-kb:100/max-age:3600/x.jpg"
    );
}

#[test]
fn test_unknown_dynamic_operation_is_silently_ignored() {
    let mut url = UrlBuilder::new(SERVER);
    url.flip().apply("sepia", &["10"]).with("x.jpg");

    assert_eq!(url.generate(), "http://img.example.com/flip/x.jpg");
}

#[test]
fn test_strict_dispatch_reports_unknown_operation() {
    let mut url = UrlBuilder::new(SERVER);
    let err = url.try_apply("sepia", &["10"]).unwrap_err();

    assert!(matches!(err, RezizerError::UnknownOperation { ref name } if name == "sepia"));
}

#[test]
fn test_invalid_geometry_leaves_builder_untouched() {
    let mut url = UrlBuilder::new(SERVER);
    url.flip().with("x.jpg");
    let before = url.generate();

    let err = url.crop(0, 0, "ten", 10).unwrap_err();
    assert!(err.to_string().contains("bottom: ten"));
    assert!(url.resize("", 10).is_err());

    assert_eq!(url.generate(), before);
}

#[test]
fn test_face_detection_variants() {
    let mut url = UrlBuilder::new(SERVER);
    url.face_detection(true).with("x.jpg");
    assert_eq!(url.generate(), "http://img.example.com/face:focused/x.jpg");

    url.face_detection(false);
    assert_eq!(url.generate(), "http://img.example.com/face/x.jpg");
}

#[test]
fn test_builder_can_be_forked_per_request() {
    let mut base = UrlBuilder::signed(SERVER, "mysecret");
    base.fit_in();

    let mut first = base.clone();
    first.resize(300, 200).unwrap().with("one.jpg");
    let mut second = base.clone();
    second.grayscale().with("two.jpg");

    assert!(first.generate().ends_with("/fit-in/200x300/one.jpg"));
    assert!(second.generate().ends_with("/fit-in/grayscale/two.jpg"));
    assert_eq!(base.path(), "fit-in");
}

#[test]
fn test_display_matches_generate() {
    let mut url = UrlBuilder::signed(SERVER, "mysecret");
    url.crop(10, 20, 30, 40).unwrap().with("x.jpg");

    assert_eq!(format!("{}", url), url.generate());
}
