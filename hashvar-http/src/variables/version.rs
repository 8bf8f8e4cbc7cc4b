use std::borrow::Cow;

use http::Version;
use http::request::Parts;

/// The request protocol as written in a request line.
pub fn server_protocol(parts: &Parts) -> Cow<'static, [u8]> {
    let protocol: &'static str = if parts.version == Version::HTTP_09 {
        "HTTP/0.9"
    } else if parts.version == Version::HTTP_10 {
        "HTTP/1.0"
    } else if parts.version == Version::HTTP_11 {
        "HTTP/1.1"
    } else if parts.version == Version::HTTP_2 {
        "HTTP/2.0"
    } else if parts.version == Version::HTTP_3 {
        "HTTP/3.0"
    } else {
        ""
    };
    Cow::Borrowed(protocol.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_protocol() {
        for (version, expected) in [
            (Version::HTTP_10, "HTTP/1.0"),
            (Version::HTTP_11, "HTTP/1.1"),
            (Version::HTTP_2, "HTTP/2.0"),
        ] {
            let (parts, _) = http::Request::get("/")
                .version(version)
                .body(())
                .unwrap()
                .into_parts();
            assert_eq!(server_protocol(&parts).as_ref(), expected.as_bytes());
        }
    }
}
