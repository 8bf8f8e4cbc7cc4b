use hashvar_configuration::{
    Config, ConfigError, DirectiveError, HashVariableConfig, VariablesConfig,
};
use hashvar_core::{Algorithm, Range, RangeError};
use http::Request;
use http::request::Parts;
use pretty_assertions::assert_eq;

fn parts(uri: &str) -> Parts {
    Request::get(uri).body(()).unwrap().into_parts().0
}

fn evaluate(config: &Config, name: &str, parts: &Parts) -> String {
    config
        .registry()
        .evaluate(name, parts)
        .unwrap()
        .as_str()
        .unwrap()
        .to_owned()
}

#[test]
fn test_directives_evaluate() {
    let config = Config::from_directives(
        r#"
        # request fingerprint
        md5_hash   $request_hash "$request_method$request_uri";
        md5_hash   $short_hash 0:8 $uri;
        crc32_hash $uri_crc $uri;
        crc32_hash $id_crc $arg_id;
        "#,
    )
    .unwrap();

    let parts = parts("/index.html?id=42");
    assert_eq!(
        config.registry().names().collect::<Vec<_>>(),
        vec!["request_hash", "short_hash", "uri_crc", "id_crc"]
    );
    assert_eq!(
        evaluate(&config, "request_hash", &parts),
        "36A1E4860DCB1F8FDAE138DB760CC397"
    );
    assert_eq!(evaluate(&config, "short_hash", &parts), "D1546D73");
    assert_eq!(evaluate(&config, "uri_crc", &parts), "EA224B42");
    assert_eq!(evaluate(&config, "id_crc", &parts), "3224B088");
}

#[cfg(feature = "lookup3")]
#[test]
fn test_lookup3_directive() {
    let config = Config::from_directives("lookup3_hash $l $uri;").unwrap();
    let ctx = config.registry().get("l").unwrap();
    assert_eq!(ctx.algorithm(), Algorithm::Lookup3);
    assert_eq!(evaluate(&config, "l", &parts("/index.html")), "C8B7A57D");
}

#[test]
fn test_inverted_range_rejected() {
    let err = Config::from_directives("md5_hash $h 8:4 $uri;").unwrap_err();
    assert_eq!(
        err,
        ConfigError::Directive {
            line: 1,
            source: DirectiveError::Range {
                directive: "md5_hash".to_owned(),
                argument: "8:4".to_owned(),
                source: RangeError::Empty { start: 8, end: 4 },
            },
        }
    );
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_range_beyond_digest_rejected() {
    let err = Config::from_directives("\n\ncrc32_hash $h 4:12 $uri;").unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert!(matches!(
        err.directive_error(),
        Some(DirectiveError::Range {
            source: RangeError::OutOfBounds { hex_len: 8, .. },
            ..
        })
    ));
}

#[test]
fn test_malformed_range_rejected() {
    for range in ["a:b", "-1:4", "4", "1:2:3"] {
        let input = format!("md5_hash $h {range} $uri;");
        assert!(
            matches!(
                Config::from_directives(&input),
                Err(ConfigError::Directive {
                    source: DirectiveError::Range {
                        source: RangeError::Syntax(_),
                        ..
                    },
                    ..
                })
            ),
            "range {range:?}"
        );
    }
}

#[test]
fn test_argument_count_rejected() {
    for (input, count) in [
        ("md5_hash $h;", 1),
        ("md5_hash;", 0),
        ("md5_hash $h 0:8 $uri extra;", 4),
    ] {
        assert_eq!(
            Config::from_directives(input).unwrap_err().directive_error(),
            Some(&DirectiveError::ArgumentCount {
                directive: "md5_hash".to_owned(),
                count,
            }),
            "input {input:?}"
        );
    }
}

#[test]
fn test_unknown_directive_rejected() {
    assert_eq!(
        Config::from_directives("md5_hash $a $uri;\nsha256_hash $b $uri;").unwrap_err(),
        ConfigError::Directive {
            line: 2,
            source: DirectiveError::UnknownDirective("sha256_hash".to_owned()),
        }
    );
}

#[test]
fn test_bad_expression_rejected() {
    let err = Config::from_directives("md5_hash $h $no_such_thing;").unwrap_err();
    assert!(matches!(
        err.directive_error(),
        Some(DirectiveError::Expression { argument, .. }) if argument == "$no_such_thing"
    ));
}

#[test]
fn test_redefinition_last_wins() {
    let config = Config::from_directives(
        "md5_hash $h $uri;\ncrc32_hash $h $uri;",
    )
    .unwrap();
    assert_eq!(config.registry().len(), 1);
    assert_eq!(evaluate(&config, "h", &parts("/index.html")), "EA224B42");
}

#[test]
fn test_yaml_config() {
    let yaml = r#"
variables:
  - algorithm: md5
    name: $request_hash
    range: "0:8"
    value: "$uri"
  - algorithm: crc32
    name: id_crc
    value: "$arg_id"
"#;
    let document: VariablesConfig = serde_saphyr::from_str(yaml).unwrap();
    assert_eq!(
        document.variables[1],
        HashVariableConfig {
            algorithm: Algorithm::Crc32,
            name: "id_crc".to_owned(),
            range: None,
            value: "$arg_id".to_owned(),
        }
    );

    let config = Config::from_yaml(yaml).unwrap();
    let parts = parts("/index.html?id=42");
    assert_eq!(
        config.registry().get("request_hash").unwrap().range(),
        Range::new(0, 8).ok()
    );
    assert_eq!(evaluate(&config, "request_hash", &parts), "D1546D73");
    assert_eq!(evaluate(&config, "id_crc", &parts), "3224B088");
}

#[test]
fn test_yaml_bind_error_names_entry() {
    let yaml = r#"
variables:
  - algorithm: md5
    name: ok
    value: "$uri"
  - algorithm: crc32
    name: bad
    range: "0:16"
    value: "$uri"
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Variable { index: 2, .. }));
    assert_eq!(err.line(), None);
}

#[test]
fn test_yaml_unknown_algorithm() {
    let yaml = r#"
variables:
  - algorithm: sha1
    name: h
    value: "$uri"
"#;
    assert!(matches!(Config::from_yaml(yaml), Err(ConfigError::Yaml(_))));
}

#[test]
fn test_yaml_algorithm_names() {
    let yaml = r#"
variables:
  - algorithm: MD5
    name: upper
    value: "$uri"
  - algorithm: crc32
    name: lower
    value: "$uri"
"#;
    let document: VariablesConfig = serde_saphyr::from_str(yaml).unwrap();
    let algorithms: Vec<_> = document.variables.iter().map(|v| v.algorithm).collect();
    assert_eq!(algorithms, vec![Algorithm::Md5, Algorithm::Crc32]);

    let yaml = serde_saphyr::to_string(&document.variables[1]).unwrap();
    assert!(yaml.contains("algorithm: crc32"), "{yaml}");
}

#[test]
fn test_empty_config() {
    assert!(Config::from_directives("# nothing here\n").unwrap().registry().is_empty());
    assert!(Config::from_yaml("variables: []").unwrap().into_registry().is_empty());
}
