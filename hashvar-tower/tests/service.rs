use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hashvar_configuration::Config;
use hashvar_core::{Algorithm, HashContext, Range};
use hashvar_http::{HttpRegistry, RequestVariable};
use hashvar_tower::{EvaluatedVariables, HashVariables, LayerError};
use http::{HeaderName, Request, Response, StatusCode};
use tower::{Layer, ServiceExt, service_fn};

fn registry() -> Arc<HttpRegistry> {
    let config = Config::from_directives(
        r#"
        md5_hash   $uri_md5 0:8 $uri;
        crc32_hash $id_crc $arg_id;
        "#,
    )
    .unwrap();
    Arc::new(config.into_registry())
}

/// Echoes the evaluated variables and the hash header back.
async fn echo(req: Request<String>) -> Result<Response<String>, Infallible> {
    let variables = req.extensions().get::<EvaluatedVariables>().cloned();
    let header = req
        .headers()
        .get("x-uri-hash")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_owned();

    let body = match variables {
        Some(variables) => {
            let mut body = variables
                .iter()
                .map(|(name, value)| {
                    let value = value
                        .and_then(|value| std::str::from_utf8(value).ok())
                        .unwrap_or("");
                    format!("{name}={value}")
                })
                .collect::<Vec<_>>()
                .join(",");
            body.push_str(&format!(";header={header}"));
            body
        }
        None => "none".to_owned(),
    };
    Ok(Response::new(body))
}

#[tokio::test]
async fn test_variables_in_extensions_and_headers() {
    let layer = HashVariables::new(registry())
        .header("uri_md5", HeaderName::from_static("x-uri-hash"))
        .unwrap()
        .expose("id_crc")
        .unwrap();
    let service = layer.layer(service_fn(echo));

    let request = Request::get("/index.html?id=42")
        .body(String::new())
        .unwrap();
    let response = service.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.body(),
        "uri_md5=D1546D73,id_crc=3224B088;header=D1546D73"
    );
}

#[tokio::test]
async fn test_nothing_exposed() {
    let service = HashVariables::new(registry()).layer(service_fn(echo));
    let request = Request::get("/").body(String::new()).unwrap();
    let response = service.oneshot(request).await.unwrap();
    assert_eq!(response.body(), ";header=-");
}

#[tokio::test]
async fn test_evaluation_error_short_circuits() {
    let registry = HttpRegistry::builder()
        .variable(
            "broken",
            HashContext::new(Algorithm::Crc32, RequestVariable::Uri)
                .with_range(Range::new(0, 16).unwrap()),
        )
        .build();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let inner = service_fn(move |req: Request<String>| {
        counter.fetch_add(1, Ordering::SeqCst);
        echo(req)
    });

    let service = HashVariables::new(Arc::new(registry))
        .expose("broken")
        .unwrap()
        .layer(inner);
    let request = Request::get("/").body(String::new()).unwrap();
    let response = service.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body(), "");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unknown_variable_rejected() {
    assert_eq!(
        HashVariables::new(registry())
            .header("missing", HeaderName::from_static("x-missing"))
            .unwrap_err(),
        LayerError::UnknownVariable("missing".into())
    );
}

#[tokio::test]
async fn test_repeated_and_nested_query_parameters() {
    let layer = HashVariables::new(registry()).expose("id_crc").unwrap();

    for uri in ["/?id=1&id=2", "/?page[size]=10&id=1"] {
        let service = layer.clone().layer(service_fn(echo));
        let request = Request::get(uri).body(String::new()).unwrap();
        let response = service.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "uri {uri}");
        assert_eq!(response.body(), "id_crc=83DCEFB7;header=-", "uri {uri}");
    }
}
