//! Scalar literals.

use itertools::Itertools;

use crate::declaration::Scalar;

pub const NULL_LITERAL: &str = "null";

/// Type hints which change how a scalar is spelled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LiteralHint {
    Bool,
    Int,
    Float,
    String,
}

impl LiteralHint {
    fn parse(type_hint: &str) -> Option<Self> {
        match type_hint.trim().to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Some(Self::Bool),
            "int" | "integer" => Some(Self::Int),
            "float" | "double" => Some(Self::Float),
            "string" => Some(Self::String),
            _ => None,
        }
    }
}

/// Renders a scalar as a PHP literal.
///
/// The optional type hint is the declared type of the value, it decides between numeric and string
/// spellings.
pub fn render_scalar_literal(value: &Scalar, type_hint: Option<&str>) -> String {
    let hint = type_hint.and_then(LiteralHint::parse);
    match (value, hint) {
        (Scalar::Null, _) => NULL_LITERAL.to_owned(),
        (Scalar::Bool(b), _) => render_bool(*b),
        (Scalar::Int(i), Some(LiteralHint::Float)) => render_float(*i as f64),
        (Scalar::Int(i), Some(LiteralHint::String)) => quote(&i.to_string()),
        (Scalar::Int(i), _) => i.to_string(),
        (Scalar::Float(f), Some(LiteralHint::Int)) if is_integral(*f) => (*f as i64).to_string(),
        (Scalar::Float(f), Some(LiteralHint::String)) => quote(&f.to_string()),
        (Scalar::Float(f), _) => render_float(*f),
        (Scalar::String(s), Some(LiteralHint::Int)) => match s.trim().parse::<i64>() {
            Ok(i) => i.to_string(),
            Err(_) => quote(s),
        },
        (Scalar::String(s), Some(LiteralHint::Float)) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => render_float(f),
            _ => quote(s),
        },
        (Scalar::String(s), Some(LiteralHint::Bool)) => {
            match s.trim().to_ascii_lowercase().as_str() {
                "true" => render_bool(true),
                "false" => render_bool(false),
                _ => quote(s),
            }
        }
        (Scalar::String(s), _) => quote(s),
    }
}

/// Renders an array literal out of already rendered items.
pub fn render_array_literal<I>(items: I, short_syntax: bool) -> String
where
    I: IntoIterator<Item = String>,
{
    let items = items.into_iter().join(", ");
    if short_syntax {
        format!("[{}]", items)
    } else {
        format!("array({})", items)
    }
}

fn render_bool(b: bool) -> String {
    let literal = if b { "true" } else { "false" };
    literal.to_owned()
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_owned()
    } else if f.is_infinite() {
        let literal = if f > 0.0 { "INF" } else { "-INF" };
        literal.to_owned()
    } else if is_integral(f) {
        format!("{:.1}", f)
    } else if f.abs() >= 1e15 {
        format!("{:e}", f)
    } else {
        f.to_string()
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}
