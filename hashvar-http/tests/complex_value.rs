use hashvar_core::{Algorithm, HashContext, Range, ValueSource};
use hashvar_http::{ComplexValue, HttpRegistry, RequestVariable};
use http::Request;
use http::request::Parts;
use pretty_assertions::assert_eq;

fn parts(request: http::request::Builder) -> Parts {
    request.body(()).unwrap().into_parts().0
}

fn hash(algorithm: Algorithm, expression: &str, parts: &Parts) -> String {
    let value = ComplexValue::compile(expression).unwrap();
    HashContext::new(algorithm, value)
        .evaluate(parts)
        .unwrap()
        .as_str()
        .unwrap()
        .to_owned()
}

#[test]
fn test_md5_of_uri() {
    let parts = parts(Request::get("/index.html"));
    assert_eq!(
        hash(Algorithm::Md5, "$uri", &parts),
        "D1546D731A9F30CC80127D57142A482B"
    );
}

#[test]
fn test_crc32_of_uri() {
    let parts = parts(Request::get("/index.html"));
    assert_eq!(hash(Algorithm::Crc32, "$uri", &parts), "EA224B42");
}

#[test]
fn test_concatenated_expression() {
    let parts = parts(Request::get("/index.html"));
    assert_eq!(
        hash(Algorithm::Md5, "$request_method $uri", &parts),
        "6B67BA601D853FEA94656FD0B84940CC"
    );
    assert_eq!(
        hash(Algorithm::Crc32, "${request_method} ${uri}", &parts),
        "139492AD"
    );
}

#[test]
fn test_query_variables() {
    let parts = parts(Request::get("/search?q=rust"));
    assert_eq!(
        hash(Algorithm::Md5, "$request_uri", &parts),
        "953E538C53C6244D9822B43B19C51B9F"
    );
    assert_eq!(hash(Algorithm::Crc32, "$arg_q", &parts), "E13282A0");
}

#[test]
fn test_header_and_cookie_variables() {
    let parts = parts(
        Request::get("/a")
            .header("x-tenant", "alpha")
            .header("cookie", "session=abc123"),
    );
    assert_eq!(
        hash(Algorithm::Md5, "$http_x_tenant:$uri", &parts),
        "018AC40726E8AE46FB1CDF836AD200F6"
    );
    assert_eq!(hash(Algorithm::Crc32, "$cookie_session", &parts), "CF02BB5C");
}

#[test]
fn test_host_variable() {
    let parts = parts(Request::get("/").header("host", "Example.COM:8080"));
    assert_eq!(
        hash(Algorithm::Md5, "$host", &parts),
        "5ABABD603B22780302DD8D83498E5172"
    );
}

#[test]
fn test_missing_component_hashes_empty_input() {
    let parts = parts(Request::get("/"));
    assert_eq!(
        hash(Algorithm::Md5, "$http_x_missing$arg_none", &parts),
        "D41D8CD98F00B204E9800998ECF8427E"
    );
    assert_eq!(hash(Algorithm::Crc32, "$args", &parts), "00000000");
}

#[test]
fn test_ranged_variable() {
    let parts = parts(Request::get("/index.html"));
    let value = ComplexValue::compile("$uri").unwrap();
    let ctx = HashContext::new(Algorithm::Md5, value).with_range(Range::new(0, 8).unwrap());
    assert_eq!(ctx.evaluate(&parts).unwrap().as_str(), Some("D1546D73"));
}

#[test]
fn test_single_variable_resolves_borrowed() {
    let parts = parts(Request::get("/index.html"));
    let value = ComplexValue::compile("$uri").unwrap();
    assert!(matches!(
        value.resolve(&parts).unwrap(),
        std::borrow::Cow::Borrowed(b"/index.html")
    ));
}

#[test]
fn test_registry_over_requests() {
    let registry: HttpRegistry = HttpRegistry::builder()
        .variable(
            "uri_md5",
            HashContext::new(Algorithm::Md5, ComplexValue::compile("$uri").unwrap()),
        )
        .variable(
            "id_crc",
            HashContext::new(Algorithm::Crc32, RequestVariable::Arg("id".into())),
        )
        .build();

    let parts = parts(Request::get("/index.html?id=42"));
    assert_eq!(
        registry.evaluate("uri_md5", &parts).unwrap().as_str(),
        Some("D1546D731A9F30CC80127D57142A482B")
    );
    assert_eq!(
        registry.evaluate("id_crc", &parts).unwrap().as_str(),
        Some("3224B088")
    );
}
