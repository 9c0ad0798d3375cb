//! Identifier and literal conversions for generated Rust source.
//!
//! Schema names are arbitrary strings; everything emitted as a Rust
//! identifier goes through [`rust_ident`] so that keywords become raw
//! identifiers instead of syntax errors.

/// Converts `snake_case`, dotted or already-Pascal names to `PascalCase`.
///
/// Underscores and dots separate words; the first letter of each word is
/// uppercased and the rest kept as written.
///
/// # Examples
///
/// ```
/// use mcpserver_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("example_service"), "ExampleService");
/// assert_eq!(to_pascal_case("Outer.Inner"), "OuterInner");
/// assert_eq!(to_pascal_case("SumRequest"), "SumRequest");
/// ```
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '.'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// Converts `PascalCase` or `camelCase` names to `snake_case`.
///
/// Acronyms stay together: `HTTPServer` becomes `http_server`.
///
/// # Examples
///
/// ```
/// use mcpserver_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("ProcessNames"), "process_names");
/// assert_eq!(to_snake_case("getHTTPStatus"), "get_http_status");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '.' || c == '-' || c == ' ' {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

const RESERVED_2024: &[&str] = &["gen"];

/// Returns `name` as a valid Rust identifier.
///
/// Keywords become raw identifiers (`type` → `r#type`), including `gen`,
/// which is reserved from edition 2024 on; the few keywords that cannot be
/// raw (`self`, `Self`, `super`, `crate`) get a trailing underscore.
///
/// # Examples
///
/// ```
/// use mcpserver_codegen::naming::rust_ident;
///
/// assert_eq!(rust_ident("names"), "names");
/// assert_eq!(rust_ident("type"), "r#type");
/// assert_eq!(rust_ident("gen"), "r#gen");
/// assert_eq!(rust_ident("self"), "self_");
/// ```
#[must_use]
pub fn rust_ident(name: &str) -> String {
    if matches!(name, "self" | "Self" | "super" | "crate" | "_") {
        return format!("{name}_");
    }
    // syn accepts edition 2024 reserved words as plain identifiers
    if RESERVED_2024.contains(&name) {
        return format!("r#{name}");
    }
    if syn::parse_str::<syn::Ident>(name).is_ok() {
        return name.to_string();
    }

    let raw = format!("r#{name}");
    if syn::parse_str::<syn::Ident>(&raw).is_ok() {
        raw
    } else {
        tracing::warn!(name, "Name is not a valid Rust identifier, appending '_'");
        format!("{name}_")
    }
}

/// Quotes `s` as a Rust string literal.
///
/// # Examples
///
/// ```
/// use mcpserver_codegen::naming::string_literal;
///
/// assert_eq!(string_literal("Parameter a"), r#""Parameter a""#);
/// assert_eq!(string_literal(r#"say "hi""#), r#""say \"hi\"""#);
/// ```
#[must_use]
pub fn string_literal(s: &str) -> String {
    format!("{s:?}")
}
