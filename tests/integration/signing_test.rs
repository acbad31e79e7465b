//! Signature pinning and verification against the generated URL

use rezizer::signer::{sign, verify};
use rezizer::UrlBuilder;

const SERVER: &str = "http://img.example.com";

fn signed_chain(secret: &str) -> UrlBuilder {
    let mut url = UrlBuilder::signed(SERVER, secret);
    url.fit_in()
        .resize(300, 200)
        .unwrap()
        .align("top")
        .blur(5)
        .with("image.jpg");
    url
}

#[test]
fn test_signature_uses_url_safe_alphabet() {
    // Standard base64 of these digests contains '+' and '/'
    assert_eq!(
        signed_chain("mysecret").signature().as_deref(),
        Some("qYW3iSHmB1v-IkGYLvLhp7N5gdE=")
    );
    assert_eq!(
        signed_chain("another-secret").signature().as_deref(),
        Some("xvR7TS4iMfbxNx-r_gK6RRfXh3w=")
    );
}

#[test]
fn test_signature_precedes_path() {
    assert_eq!(
        signed_chain("mysecret").generate(),
        "http://img.example.com/qYW3iSHmB1v-IkGYLvLhp7N5gdE=/fit-in/200x300/north/blur:5/image.jpg"
    );
}

#[test]
fn test_signature_covers_path_not_image() {
    let mut a = UrlBuilder::signed(SERVER, "mysecret");
    a.resize(300, 200).unwrap().with("a.jpg");
    let mut b = UrlBuilder::signed(SERVER, "mysecret");
    b.resize(300, 200).unwrap().with("b.jpg");

    assert_eq!(a.signature(), b.signature());
}

#[test]
fn test_server_can_verify_generated_url() {
    let url = signed_chain("mysecret");
    let generated = url.generate();

    let rest = generated.strip_prefix("http://img.example.com/").unwrap();
    let (signature, rest) = rest.split_once('/').unwrap();
    let path = rest.strip_suffix("/image.jpg").unwrap();

    assert!(verify(signature, path, Some("mysecret")));
    assert!(!verify(signature, "fit-in/200x300/south/blur:5", Some("mysecret")));
}

#[test]
fn test_distinct_paths_give_distinct_signatures() {
    let paths = ["200x300", "300x200", "200x300/flip", "fit-in/200x300", "crop/x"];
    let signatures: Vec<String> = paths
        .iter()
        .map(|path| sign(path, Some("mysecret")).unwrap())
        .collect();

    for (i, a) in signatures.iter().enumerate() {
        for b in &signatures[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
