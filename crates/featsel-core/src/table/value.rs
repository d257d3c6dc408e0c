use std::fmt;
use std::hash::{Hash, Hasher};

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Boolean,
    Contin,
    Enum,
    /// Opaque text, written back exactly as it was read.
    Raw,
}

/// A single cell of a table.
///
/// Reals compare and hash by bit pattern so that identical rows can be grouped
/// in a hash map when the table is compressed.
#[derive(Debug, Clone)]
pub enum Value {
    Boolean(bool),
    Contin(f64),
    Enum(String),
    Raw(String),
}

impl Value {
    /// Parse `text` as a value of the given column type.
    pub fn parse(kind: ColumnType, text: &str) -> Option<Value> {
        let text = text.trim();
        match kind {
            ColumnType::Boolean => parse_bool(text).map(Value::Boolean),
            ColumnType::Contin => text.parse::<f64>().ok().map(Value::Contin),
            ColumnType::Enum => Some(Value::Enum(text.to_string())),
            ColumnType::Raw => Some(Value::Raw(text.to_string())),
        }
    }

    pub fn kind(&self) -> ColumnType {
        match self {
            Value::Boolean(_) => ColumnType::Boolean,
            Value::Contin(_) => ColumnType::Contin,
            Value::Enum(_) => ColumnType::Enum,
            Value::Raw(_) => ColumnType::Raw,
        }
    }

    /// Same content, retyped as opaque text.
    pub fn to_raw(&self) -> Value {
        match self {
            Value::Raw(s) => Value::Raw(s.clone()),
            other => Value::Raw(other.to_string()),
        }
    }

    fn contin_bits(x: f64) -> u64 {
        // -0.0 and 0.0 must land in the same group
        if x == 0.0 {
            0.0f64.to_bits()
        } else {
            x.to_bits()
        }
    }
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text.to_lowercase().as_str() {
        "1" | "true" | "t" => Some(true),
        "0" | "false" | "f" => Some(false),
        _ => None,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Contin(a), Value::Contin(b)) => Value::contin_bits(*a) == Value::contin_bits(*b),
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Raw(a), Value::Raw(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Boolean(b) => b.hash(state),
            Value::Contin(x) => Value::contin_bits(*x).hash(state),
            Value::Enum(s) | Value::Raw(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", if *b { 1 } else { 0 }),
            Value::Contin(x) => write!(f, "{}", x),
            Value::Enum(s) | Value::Raw(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_signed_zero_groups_together() {
        let mut set = HashSet::new();
        set.insert(Value::Contin(0.0));
        set.insert(Value::Contin(-0.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_and_raw() {
        assert_eq!(Value::parse(ColumnType::Boolean, "T"), Some(Value::Boolean(true)));
        assert_eq!(Value::parse(ColumnType::Boolean, "maybe"), None);
        assert_eq!(Value::parse(ColumnType::Contin, " 2.5 "), Some(Value::Contin(2.5)));

        let raw = Value::Boolean(false).to_raw();
        assert_eq!(raw, Value::Raw("0".to_string()));
        assert_ne!(raw, Value::Enum("0".to_string()));
    }
}
