//! Header and cookie variables.

use std::borrow::Cow;

use http::HeaderName;
use http::header::COOKIE;
use http::request::Parts;

/// Maps a `$http_` suffix to a header name: `_` becomes `-`, case folded.
pub fn header_name(suffix: &str) -> Option<HeaderName> {
    if suffix.is_empty() {
        return None;
    }
    let name = suffix.replace('_', "-").to_ascii_lowercase();
    HeaderName::from_bytes(name.as_bytes()).ok()
}

/// Value of the first header called `name`.
pub fn header<'a>(parts: &'a Parts, name: &HeaderName) -> Cow<'a, [u8]> {
    parts
        .headers
        .get(name)
        .map_or(Cow::Borrowed(&[][..]), |value| Cow::Borrowed(value.as_bytes()))
}

/// Value of the cookie `name` across all `Cookie` headers.
///
/// Cookie names are matched case-insensitively; the first match wins.
pub fn cookie<'a>(parts: &'a Parts, name: &str) -> Cow<'a, [u8]> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .flat_map(|value| value.as_bytes().split(|&b| b == b';'))
        .find_map(|pair| {
            let pair = pair.trim_ascii();
            let eq = pair.iter().position(|&b| b == b'=')?;
            let (key, value) = (&pair[..eq], &pair[eq + 1..]);
            key.trim_ascii()
                .eq_ignore_ascii_case(name.as_bytes())
                .then(|| value.trim_ascii())
        })
        .map_or(Cow::Borrowed(&[][..]), Cow::Borrowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;

    fn parts(request: http::request::Builder) -> Parts {
        request.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_header_name_mapping() {
        assert_eq!(
            header_name("User_Agent"),
            Some(HeaderName::from_static("user-agent"))
        );
        assert_eq!(header_name(""), None);
    }

    #[test]
    fn test_header_first_value() {
        let parts = parts(
            Request::get("/")
                .header("x-tenant", "alpha")
                .header("x-tenant", "beta"),
        );
        let name = HeaderName::from_static("x-tenant");
        assert_eq!(header(&parts, &name).as_ref(), b"alpha");
        let missing = HeaderName::from_static("x-missing");
        assert_eq!(header(&parts, &missing).as_ref(), b"");
    }

    #[test]
    fn test_cookie_lookup() {
        let parts = parts(
            Request::get("/")
                .header(COOKIE, "theme=dark; SESSION=abc123")
                .header(COOKIE, "lang=en"),
        );
        assert_eq!(cookie(&parts, "session").as_ref(), b"abc123");
        assert_eq!(cookie(&parts, "lang").as_ref(), b"en");
        assert_eq!(cookie(&parts, "theme").as_ref(), b"dark");
        assert_eq!(cookie(&parts, "missing").as_ref(), b"");
    }
}
