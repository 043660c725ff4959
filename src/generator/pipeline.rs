//! The generation pipeline: an ordered, conditionally gated sequence of
//! steps, each rendering one template (two for the service step) and writing
//! it to a path computed from the output root and the lower-cased model name.
//!
//! Steps run strictly in sequence and fail fast; files already written stay
//! on disk. The only prior state ever consulted is the existence of the
//! routes file, which is generated once and then left for manual edits.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::ModelConfig;

use super::renderer::TemplateSet;

/// Run the full pipeline for one model and report the output root.
///
/// # Errors
///
/// Returns the first step's error: directory creation, template rendering,
/// or file writing. No rollback of already-written files is attempted.
pub fn generate(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<PathBuf> {
    ensure_dirs(&config.output_path)?;

    generate_model(templates, config)?;
    generate_proto(templates, config)?;
    generate_repository(templates, config)?;
    generate_service(templates, config)?;
    generate_endpoint(templates, config)?;

    if config.generate_http {
        generate_transport_http(templates, config)?;
        generate_transport_http_test(templates, config)?;
    }
    if config.generate_grpc {
        generate_transport_grpc(templates, config)?;
        generate_transport_grpc_test(templates, config)?;
    }

    generate_routes(templates, config)?;

    if config.generate_tests {
        generate_service_test(templates, config)?;
        generate_api_test(templates, config)?;
    }

    Ok(config.output_path.clone())
}

/// Create the fixed directory tree under the output root.
///
/// Creation is idempotent; per-artifact directories (models, repositories,
/// proto) are provisioned lazily by the steps that write into them.
pub fn ensure_dirs(output_path: &Path) -> anyhow::Result<()> {
    let dirs = [
        output_path.join("internal").join("service"),
        output_path.join("internal").join("service").join("dto"),
        output_path.join("internal").join("api").join("endpoints"),
        output_path.join("internal").join("api").join("transports"),
        output_path
            .join("internal")
            .join("api")
            .join("transports")
            .join("http"),
        output_path
            .join("internal")
            .join("api")
            .join("transports")
            .join("grpc"),
    ];
    for dir in &dirs {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

fn model_slug(config: &ModelConfig) -> String {
    config.model_name.to_lowercase()
}

/// Render one template and write it; the workhorse shared by every step.
fn render_to(
    templates: &TemplateSet,
    config: &ModelConfig,
    name: &str,
    path: &Path,
) -> anyhow::Result<()> {
    let rendered = templates.render(name, config)?;
    fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    println!("✅ Generated {} → {}", name, path.display());
    Ok(())
}

fn generate_model(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let models_dir = config.output_path.join("internal").join("models");
    fs::create_dir_all(&models_dir)
        .with_context(|| format!("failed to create directory {}", models_dir.display()))?;
    let path = models_dir.join(format!("{}.go", model_slug(config)));
    render_to(templates, config, "model", &path)
}

fn generate_proto(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    // Proto only matters when some transport is generated.
    if !config.generate_http && !config.generate_grpc {
        return Ok(());
    }
    let proto_dir = config.output_path.join("api").join("proto").join("v1");
    fs::create_dir_all(&proto_dir)
        .with_context(|| format!("failed to create directory {}", proto_dir.display()))?;
    let path = proto_dir.join(format!("{}.proto", model_slug(config)));
    render_to(templates, config, "proto", &path)
}

fn generate_repository(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let repo_dir = config.output_path.join("internal").join("repositories");
    fs::create_dir_all(&repo_dir)
        .with_context(|| format!("failed to create directory {}", repo_dir.display()))?;
    let path = repo_dir.join(format!("{}_repository.go", model_slug(config)));
    render_to(templates, config, "repository", &path)
}

/// The service step emits two artifacts: the service itself and its DTOs.
fn generate_service(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let service_dir = config.output_path.join("internal").join("service");
    let path = service_dir.join(format!("{}_service.go", model_slug(config)));
    render_to(templates, config, "service", &path)?;

    let dto_path = service_dir
        .join("dto")
        .join(format!("{}_dto.go", model_slug(config)));
    render_to(templates, config, "dto", &dto_path)
}

fn generate_endpoint(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let path = config
        .output_path
        .join("internal")
        .join("api")
        .join("endpoints")
        .join(format!("{}_endpoint.go", model_slug(config)));
    render_to(templates, config, "endpoint", &path)
}

fn http_transport_dir(config: &ModelConfig) -> PathBuf {
    config
        .output_path
        .join("internal")
        .join("api")
        .join("transports")
        .join("http")
}

fn grpc_transport_dir(config: &ModelConfig) -> PathBuf {
    config
        .output_path
        .join("internal")
        .join("api")
        .join("transports")
        .join("grpc")
}

fn generate_transport_http(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let path = http_transport_dir(config).join(format!("{}_http.go", model_slug(config)));
    render_to(templates, config, "transport_http", &path)
}

// Transport tests ride on the transport flag alone, not on `generate_tests`.
fn generate_transport_http_test(
    templates: &TemplateSet,
    config: &ModelConfig,
) -> anyhow::Result<()> {
    let path = http_transport_dir(config).join(format!("{}_http_test.go", model_slug(config)));
    render_to(templates, config, "transport_http_test", &path)
}

fn generate_transport_grpc(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let path = grpc_transport_dir(config).join(format!("{}_grpc.go", model_slug(config)));
    render_to(templates, config, "transport_grpc", &path)
}

fn generate_transport_grpc_test(
    templates: &TemplateSet,
    config: &ModelConfig,
) -> anyhow::Result<()> {
    let path = grpc_transport_dir(config).join(format!("{}_grpc_test.go", model_slug(config)));
    render_to(templates, config, "transport_grpc_test", &path)
}

/// Routes registration is generated exactly once per project. Existence is
/// the only check; content is never inspected or merged.
fn generate_routes(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let path = http_transport_dir(config).join("routes.go");
    if path.exists() {
        println!("⚠️  routes.go already exists, manual update required for now.");
        return Ok(());
    }
    render_to(templates, config, "routes", &path)
}

fn generate_service_test(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let path = config
        .output_path
        .join("internal")
        .join("service")
        .join(format!("{}_service_test.go", model_slug(config)));
    render_to(templates, config, "service_test", &path)
}

fn generate_api_test(templates: &TemplateSet, config: &ModelConfig) -> anyhow::Result<()> {
    let path = config
        .output_path
        .join("internal")
        .join("api")
        .join("endpoints")
        .join(format!("{}_endpoint_test.go", model_slug(config)));
    render_to(templates, config, "api_test", &path)
}
