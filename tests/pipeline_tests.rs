#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use kitgen::config::{Enum, Field, ModelConfig};
use kitgen::generator::{ensure_dirs, generate, TemplateSet};

fn field(name: &str, ty: &str) -> Field {
    Field {
        name: name.to_string(),
        ty: ty.to_string(),
        is_enum: false,
        is_relation: false,
        nullable: false,
        validation: vec![],
        gorm_tag: String::new(),
        comment: String::new(),
    }
}

fn order_config(out: &Path) -> ModelConfig {
    let mut config = ModelConfig {
        model_name: "Order".to_string(),
        module_path: "github.com/example/shop".to_string(),
        fields: vec![field("Amount", "float64")],
        enums: vec![],
        generate_http: true,
        generate_grpc: false,
        generate_tests: true,
        output_path: out.to_path_buf(),
    };
    config.finalize().unwrap();
    config
}

#[test]
fn test_no_transports_skips_proto_and_transport_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = order_config(dir.path());
    config.generate_http = false;
    config.generate_grpc = false;
    config.generate_tests = false;

    let templates = TemplateSet::new().unwrap();
    generate(&templates, &config).unwrap();

    let out = dir.path();
    assert!(out.join("internal/models/order.go").exists());
    assert!(out.join("internal/repositories/order_repository.go").exists());
    assert!(out.join("internal/service/order_service.go").exists());
    assert!(out.join("internal/service/dto/order_dto.go").exists());
    assert!(out.join("internal/api/endpoints/order_endpoint.go").exists());

    assert!(!out.join("api/proto/v1/order.proto").exists());
    assert!(!out.join("internal/api/transports/http/order_http.go").exists());
    assert!(!out
        .join("internal/api/transports/http/order_http_test.go")
        .exists());
    assert!(!out.join("internal/api/transports/grpc/order_grpc.go").exists());
}

#[test]
fn test_http_only_with_tests_exact_file_set() {
    let dir = tempfile::tempdir().unwrap();
    let config = order_config(dir.path());

    let templates = TemplateSet::new().unwrap();
    let reported = generate(&templates, &config).unwrap();
    assert_eq!(reported, dir.path());

    let out = dir.path();
    let expected = [
        "internal/models/order.go",
        "internal/repositories/order_repository.go",
        "internal/service/order_service.go",
        "internal/service/dto/order_dto.go",
        "internal/api/endpoints/order_endpoint.go",
        "internal/api/transports/http/order_http.go",
        "internal/api/transports/http/order_http_test.go",
        "internal/api/transports/http/routes.go",
        "internal/service/order_service_test.go",
        "internal/api/endpoints/order_endpoint_test.go",
        "api/proto/v1/order.proto",
    ];
    for rel in expected {
        assert!(out.join(rel).exists(), "missing {rel}");
    }
    assert!(!out.join("internal/api/transports/grpc/order_grpc.go").exists());
    assert!(!out
        .join("internal/api/transports/grpc/order_grpc_test.go")
        .exists());

    // float64 maps to the float wire type.
    let proto = fs::read_to_string(out.join("api/proto/v1/order.proto")).unwrap();
    assert!(proto.contains("float amount"));
}

#[test]
fn test_transport_test_is_not_gated_by_generate_tests() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = order_config(dir.path());
    config.generate_tests = false;

    let templates = TemplateSet::new().unwrap();
    generate(&templates, &config).unwrap();

    let out = dir.path();
    // The transport test rides on the transport flag alone.
    assert!(out
        .join("internal/api/transports/http/order_http_test.go")
        .exists());
    assert!(!out.join("internal/service/order_service_test.go").exists());
    assert!(!out
        .join("internal/api/endpoints/order_endpoint_test.go")
        .exists());
}

#[test]
fn test_grpc_only_file_set() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = order_config(dir.path());
    config.generate_http = false;
    config.generate_grpc = true;
    config.generate_tests = false;

    let templates = TemplateSet::new().unwrap();
    generate(&templates, &config).unwrap();

    let out = dir.path();
    assert!(out.join("api/proto/v1/order.proto").exists());
    assert!(out.join("internal/api/transports/grpc/order_grpc.go").exists());
    assert!(out
        .join("internal/api/transports/grpc/order_grpc_test.go")
        .exists());
    assert!(!out.join("internal/api/transports/http/order_http.go").exists());
}

#[test]
fn test_ensure_dirs_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    ensure_dirs(dir.path()).unwrap();
    ensure_dirs(dir.path()).unwrap();
    assert!(dir.path().join("internal/service/dto").is_dir());
    assert!(dir.path().join("internal/api/transports/grpc").is_dir());
}

#[test]
fn test_routes_file_is_generated_once_and_never_touched() {
    let dir = tempfile::tempdir().unwrap();
    let config = order_config(dir.path());
    let templates = TemplateSet::new().unwrap();

    generate(&templates, &config).unwrap();
    let routes_path = dir.path().join("internal/api/transports/http/routes.go");
    assert!(routes_path.exists());

    // Simulate manual edits, then regenerate: the edit must survive.
    let edited = "package http\n\n// manually maintained\n";
    fs::write(&routes_path, edited).unwrap();
    generate(&templates, &config).unwrap();
    assert_eq!(fs::read_to_string(&routes_path).unwrap(), edited);
}

#[test]
fn test_lowercased_model_name_in_paths() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = order_config(dir.path());
    config.model_name = "OrderItem".to_string();
    config.finalize().unwrap();

    let templates = TemplateSet::new().unwrap();
    generate(&templates, &config).unwrap();
    assert!(dir.path().join("internal/models/orderitem.go").exists());
    assert!(dir
        .path()
        .join("internal/service/orderitem_service.go")
        .exists());
}
