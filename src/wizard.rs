//! Interactive terminal wizard that collects a [`ModelConfig`].
//!
//! A straight sequential form: model name, module path, enums, fields,
//! transport choice, tests flag. The input source is generic over
//! [`BufRead`] so tests can drive the flow with a scripted transcript.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};

use crate::config::{Enum, Field, ModelConfig, MODULE_PATH_FALLBACK, RELATION_PREFIX};

/// Run the wizard against stdin.
///
/// # Errors
///
/// Returns an error on a read failure or when the model name is left empty.
pub fn run_wizard() -> anyhow::Result<ModelConfig> {
    run(io::stdin().lock())
}

/// Run the wizard against an arbitrary line source.
///
/// # Errors
///
/// Returns an error on a read failure or when the model name is left empty.
pub fn run<R: BufRead>(mut input: R) -> anyhow::Result<ModelConfig> {
    let model_name = prompt(&mut input, "📝 Enter model name (e.g., Order): ")?;
    if model_name.is_empty() {
        bail!("model name is required");
    }

    let mut module_path = prompt(&mut input, "📦 Enter module path (e.g., github.com/your_project): ")?;
    if module_path.is_empty() {
        println!("⚠️  Module path is required for imports. Using '{MODULE_PATH_FALLBACK}' as fallback.");
        module_path = MODULE_PATH_FALLBACK.to_string();
    }

    let enums = ask_enums(&mut input)?;
    let fields = ask_fields(&mut input, &enums)?;
    let (generate_http, generate_grpc) = ask_transports(&mut input)?;
    let generate_tests = ask_yes_no(&mut input, "🧪 Generate tests? (y/n): ")?;

    Ok(ModelConfig {
        model_name,
        module_path,
        fields,
        enums,
        generate_http,
        generate_grpc,
        generate_tests,
        output_path: "./".into(),
    })
}

fn prompt<R: BufRead>(input: &mut R, text: &str) -> anyhow::Result<String> {
    print!("{text}");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read input")?;
    Ok(line.trim().to_string())
}

fn ask_yes_no<R: BufRead>(input: &mut R, text: &str) -> anyhow::Result<bool> {
    Ok(prompt(input, text)?.to_lowercase() == "y")
}

fn ask_enums<R: BufRead>(input: &mut R) -> anyhow::Result<Vec<Enum>> {
    let mut enums = Vec::new();
    loop {
        if !ask_yes_no(input, "🎨 Add enum? (y/n): ")? {
            break;
        }

        let name = prompt(input, "  Enum name (e.g., OrderStatus): ")?;
        if name.is_empty() {
            println!("⚠️  Enum name is required. Skipping.");
            continue;
        }

        let mut values = Vec::new();
        loop {
            let value = prompt(input, "  Add value (e.g., PENDING) or press Enter to finish: ")?;
            if value.is_empty() {
                break;
            }
            values.push(value);
        }
        if values.is_empty() {
            println!("⚠️  At least one value is required. Skipping enum.");
            continue;
        }

        enums.push(Enum { name, values });
    }
    Ok(enums)
}

fn ask_fields<R: BufRead>(input: &mut R, enums: &[Enum]) -> anyhow::Result<Vec<Field>> {
    let enum_names: Vec<String> = enums.iter().map(|e| e.name.clone()).collect();
    let mut fields = Vec::new();
    loop {
        if !ask_yes_no(input, "➕ Add field? (y/n): ")? {
            break;
        }

        let name = prompt(input, "  Field name (e.g., Side, Market, Amount): ")?;
        if name.is_empty() {
            println!("⚠️  Field name is required. Skipping.");
            continue;
        }

        let ty = prompt(
            input,
            &format!(
                "  Field type (e.g., string, int, uint, bool, an enum name like OrderStatus, or {RELATION_PREFIX}Market for a relation): "
            ),
        )?;
        if ty.is_empty() {
            println!("⚠️  Field type is required. Skipping.");
            continue;
        }

        let nullable = ask_yes_no(input, "  Nullable? (y/n): ")?;

        let mut validation = Vec::new();
        loop {
            let rule = prompt(
                input,
                "  Add validation? (e.g., required, email, min=1, or press Enter to skip): ",
            )?;
            if rule.is_empty() {
                break;
            }
            validation.push(rule);
        }

        let mut field = Field {
            name,
            ty,
            is_enum: false,
            is_relation: false,
            nullable,
            validation,
            gorm_tag: String::new(),
            comment: String::new(),
        };
        field.classify(&enum_names);

        // Storage tags only apply to plain columns.
        if !field.is_enum && !field.is_relation {
            field.gorm_tag = prompt(
                input,
                "  Add GORM tag? (e.g., default:0, index, unique, or press Enter to skip): ",
            )?;
        }

        field.comment = prompt(
            input,
            "  Add comment? (e.g., Order side type, or press Enter to skip): ",
        )?;

        fields.push(field);
    }
    Ok(fields)
}

fn ask_transports<R: BufRead>(input: &mut R) -> anyhow::Result<(bool, bool)> {
    let choice = prompt(input, "🌐 Generate API for (1=HTTP, 2=gRPC, 3=Both): ")?;
    Ok(match choice.as_str() {
        "1" => (true, false),
        "2" => (false, true),
        "3" => (true, true),
        _ => {
            println!("⚠️  Invalid choice. Defaulting to HTTP.");
            (true, false)
        }
    })
}
