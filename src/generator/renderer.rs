//! Template rendering against a [`ModelConfig`].
//!
//! The template set is a fixed, versioned resource embedded at compile time;
//! there is no user-supplied template loading. The environment is built once
//! at startup and passed by reference into the pipeline.

use anyhow::Context;
use minijinja::Environment;

use crate::config::ModelConfig;

use super::funcs;

/// The closed set of template names the pipeline may request.
pub const TEMPLATE_NAMES: [&str; 13] = [
    "model",
    "repository",
    "service",
    "dto",
    "endpoint",
    "transport_http",
    "transport_http_test",
    "transport_grpc",
    "transport_grpc_test",
    "proto",
    "routes",
    "service_test",
    "api_test",
];

static TEMPLATE_SOURCES: [(&str, &str); 13] = [
    ("model", include_str!("../../templates/model.go.txt")),
    ("repository", include_str!("../../templates/repository.go.txt")),
    ("service", include_str!("../../templates/service.go.txt")),
    ("dto", include_str!("../../templates/dto.go.txt")),
    ("endpoint", include_str!("../../templates/endpoint.go.txt")),
    (
        "transport_http",
        include_str!("../../templates/transport_http.go.txt"),
    ),
    (
        "transport_http_test",
        include_str!("../../templates/transport_http_test.go.txt"),
    ),
    (
        "transport_grpc",
        include_str!("../../templates/transport_grpc.go.txt"),
    ),
    (
        "transport_grpc_test",
        include_str!("../../templates/transport_grpc_test.go.txt"),
    ),
    ("proto", include_str!("../../templates/proto.txt")),
    ("routes", include_str!("../../templates/routes.go.txt")),
    (
        "service_test",
        include_str!("../../templates/service_test.go.txt"),
    ),
    ("api_test", include_str!("../../templates/api_test.go.txt")),
];

/// Immutable bundle of parsed templates plus the registered function table.
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    /// Parse every embedded template into a fresh environment.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded template fails to parse. With the
    /// bundled set this indicates a packaging bug, not a user mistake.
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        funcs::register(&mut env);
        for (name, source) in TEMPLATE_SOURCES {
            env.add_template(name, source)
                .with_context(|| format!("failed to parse embedded template `{name}`"))?;
        }
        Ok(Self { env })
    }

    /// Render a named template with the configuration as the sole context.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown template name or a render-time
    /// failure; both are fatal to the generation run.
    pub fn render(&self, name: &str, config: &ModelConfig) -> anyhow::Result<String> {
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("unknown template `{name}`"))?;
        tracing::debug!(template = name, model = %config.model_name, "rendering template");
        template
            .render(config)
            .with_context(|| format!("failed to render template `{name}`"))
    }
}
