//! Model configuration: the single source of truth for one generation run.
//!
//! A [`ModelConfig`] is produced either by the interactive wizard or by
//! loading a YAML/JSON model description file. Once built it is read-only:
//! the generation pipeline only fans it out to template renders.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Sentinel used when the user supplies no module path. Generated imports
/// then read `your-module/internal/...` and are fixed up by hand.
pub const MODULE_PATH_FALLBACK: &str = "your-module";

/// Prefix marking a field type as a relation to another model, e.g. `Ref:Market`.
pub const RELATION_PREFIX: &str = "Ref:";

/// A user-declared enum attached to the model.
///
/// Value casing is preserved verbatim; it appears both in generated constants
/// and in display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// One field of the model.
///
/// `is_enum` and `is_relation` are derived by [`Field::classify`], never
/// supplied by the user. They are mutually exclusive: the `Ref:` prefix is
/// stripped before the enum lookup runs, so a relation target can never be
/// classified as an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub is_enum: bool,
    #[serde(default)]
    pub is_relation: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub validation: Vec<String>,
    /// Storage tag, e.g. `default:0`, `index`, `unique`. Only meaningful for
    /// plain fields; enum and relation fields leave it empty.
    #[serde(default)]
    pub gorm_tag: String,
    #[serde(default)]
    pub comment: String,
}

impl Field {
    /// Derive the type classifiers from the declared type string.
    ///
    /// Relation detection runs first: `Ref:Market` becomes `Market` with
    /// `is_relation` set, and the stripped name is never checked against the
    /// enum table. Anything else that matches a declared enum name is an
    /// enum; the rest is treated as a primitive.
    pub fn classify(&mut self, enum_names: &[String]) {
        self.is_enum = false;
        self.is_relation = false;
        if let Some(stripped) = self.ty.strip_prefix(RELATION_PREFIX) {
            self.ty = stripped.to_string();
            self.is_relation = true;
        } else if enum_names.iter().any(|n| n == &self.ty) {
            self.is_enum = true;
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./")
}

/// Complete description of what to generate for one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model_name: String,
    #[serde(default)]
    pub module_path: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub generate_http: bool,
    #[serde(default)]
    pub generate_grpc: bool,
    #[serde(default)]
    pub generate_tests: bool,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl ModelConfig {
    /// Load a model description from a YAML or JSON file and enforce the
    /// wizard-boundary invariants on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// model name is empty.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read model description {}", path.display()))?;
        let mut config: ModelConfig = if path.extension().and_then(|e| e.to_str()) == Some("json")
        {
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse model description {}", path.display()))?
        } else {
            serde_yaml::from_str(&raw)
                .with_context(|| format!("failed to parse model description {}", path.display()))?
        };
        config.finalize()?;
        Ok(config)
    }

    /// Enforce the invariants the wizard guarantees interactively: non-empty
    /// model name, module path sentinel, no valueless enums, and freshly
    /// derived field classifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the model name is empty.
    pub fn finalize(&mut self) -> anyhow::Result<()> {
        self.model_name = self.model_name.trim().to_string();
        if self.model_name.is_empty() {
            bail!("model name is required");
        }
        self.module_path = self.module_path.trim().to_string();
        if self.module_path.is_empty() {
            self.module_path = MODULE_PATH_FALLBACK.to_string();
        }
        self.enums
            .retain(|e| !e.name.trim().is_empty() && !e.values.is_empty());
        let enum_names: Vec<String> = self.enums.iter().map(|e| e.name.clone()).collect();
        for field in &mut self.fields {
            field.classify(&enum_names);
        }
        Ok(())
    }
}
