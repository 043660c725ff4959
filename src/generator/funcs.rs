//! Helper functions exposed to templates.
//!
//! Every function here is total and deterministic: templates have no error
//! channel, so unknown or invalid input degrades to a documented default
//! instead of failing the render.

use minijinja::{Environment, Value};

/// Register the full function table on a template environment.
pub fn register(env: &mut Environment<'_>) {
    env.add_function("lower", |s: String| s.to_lowercase());
    env.add_function("title", |s: String| title(&s));
    env.add_function("to_pascal", |s: String| to_pascal(&s));
    env.add_function("join", |values: Vec<String>, sep: String| values.join(&sep));
    env.add_function("protobuf_type", |ty: String| protobuf_type(&ty));
    env.add_function("add_index", add_index);
}

/// Uppercase only the first character, leaving the rest untouched.
pub fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Split on hyphens, underscores and whitespace, uppercase each token's
/// first character, and concatenate: `order-item_id` becomes `OrderItemId`.
pub fn to_pascal(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(title)
        .collect()
}

/// Map a primitive type name to its protobuf wire type.
///
/// Unrecognized names, including enum and relation types, fall back to
/// `string`; refining those is a post-generation manual step.
pub fn protobuf_type(ty: &str) -> &'static str {
    match ty {
        "string" => "string",
        "int" | "int32" | "int64" => "int32",
        "uint" | "uint32" | "uint64" => "uint32",
        "bool" => "bool",
        "float32" | "float64" => "float",
        _ => "string",
    }
}

/// Add `offset` to a template-supplied index.
///
/// Template expressions are the one place heterogeneous numerics originate,
/// so the argument is normalized to `i64` right here at the boundary;
/// non-integer input yields `offset` unchanged. Used to compute proto field
/// tags from `loop.index0`.
pub fn add_index(index: Value, offset: i64) -> i64 {
    i64::try_from(index).map_or(offset, |i| i + offset)
}
