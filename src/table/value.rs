use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::errors::TableError;

/// A single scalar cell.
///
/// Equality, hashing and ordering are value based: floats compare with
/// `-0.0 == 0.0` and every NaN equal to every other NaN, and values of
/// different variants never compare equal. Across variants the order is
/// `Empty < Bool < Int < Float < Str`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl CellValue {
    /// Types a raw text cell the way a delimited file is read: empty text is
    /// `Empty`, then integer, float and boolean literals, then plain text.
    /// Words such as `nan` or `inf` stay text; a float literal needs a digit.
    pub fn parse_text(text: &str) -> Self {
        if text.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(i) = text.parse::<i64>() {
            return CellValue::Int(i);
        }
        if text.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(f) = text.parse::<f64>() {
                return CellValue::Float(f);
            }
        }
        if text.eq_ignore_ascii_case("true") {
            return CellValue::Bool(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return CellValue::Bool(false);
        }
        CellValue::Str(text.to_string())
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, TableError> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(CellValue::Empty),
            Value::Bool(b) => Ok(CellValue::Bool(*b)),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Ok(CellValue::Int(i)),
                (None, Some(f)) => Ok(CellValue::Float(f)),
                (None, None) => Err(TableError::UnsupportedCell(n.to_string())),
            },
            Value::String(s) => Ok(CellValue::Str(s.clone())),
            Value::Array(_) | Value::Object(_) => {
                Err(TableError::UnsupportedCell(format!("nested value {value}")))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) => 2,
            CellValue::Float(_) => 3,
            CellValue::Str(_) => 4,
        }
    }
}

// Folds -0.0 onto 0.0 and every NaN payload onto one canonical NaN.
fn canonical_float(f: f64) -> f64 {
    if f == 0.0 {
        0.0
    } else if f.is_nan() {
        f64::NAN
    } else {
        f
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Float(a), CellValue::Float(b)) => {
                canonical_float(*a).total_cmp(&canonical_float(*b))
            }
            (CellValue::Str(a), CellValue::Str(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            CellValue::Empty => {}
            CellValue::Bool(b) => b.hash(state),
            CellValue::Int(i) => i.hash(state),
            CellValue::Float(f) => canonical_float(*f).to_bits().hash(state),
            CellValue::Str(s) => s.hash(state),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Str(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Str(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_text_types_cells() {
        assert_eq!(CellValue::parse_text(""), CellValue::Empty);
        assert_eq!(CellValue::parse_text("42"), CellValue::Int(42));
        assert_eq!(CellValue::parse_text("-1.5"), CellValue::Float(-1.5));
        assert_eq!(CellValue::parse_text("TRUE"), CellValue::Bool(true));
        assert_eq!(CellValue::parse_text("false"), CellValue::Bool(false));
        assert_eq!(CellValue::parse_text("A"), CellValue::Str("A".into()));
    }

    #[test]
    fn float_words_stay_text() {
        for word in ["nan", "NaN", "inf", "-inf", "Infinity"] {
            assert_eq!(CellValue::parse_text(word), CellValue::Str(word.into()));
        }
        assert_eq!(CellValue::parse_text("1e3"), CellValue::Float(1000.0));
        assert_ne!(CellValue::parse_text("nan"), CellValue::parse_text("NaN"));
    }

    #[test]
    fn floats_compare_by_value() {
        assert_eq!(CellValue::Float(0.0), CellValue::Float(-0.0));
        assert_eq!(CellValue::Float(f64::NAN), CellValue::Float(-f64::NAN));
        assert_ne!(CellValue::Int(1), CellValue::Float(1.0));

        let set: HashSet<CellValue> = [
            CellValue::Float(0.0),
            CellValue::Float(-0.0),
            CellValue::Float(f64::NAN),
            CellValue::Float(f64::NAN),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn variants_order_by_rank() {
        let mut values = vec![
            CellValue::Str("a".into()),
            CellValue::Float(0.5),
            CellValue::Int(7),
            CellValue::Bool(false),
            CellValue::Empty,
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                CellValue::Empty,
                CellValue::Bool(false),
                CellValue::Int(7),
                CellValue::Float(0.5),
                CellValue::Str("a".into()),
            ]
        );
    }

    #[test]
    fn from_json_rejects_nested_values() {
        let nested = serde_json::json!([1, 2]);
        assert!(matches!(
            CellValue::from_json(&nested),
            Err(TableError::UnsupportedCell(_))
        ));
        assert_eq!(
            CellValue::from_json(&serde_json::json!(null)).unwrap(),
            CellValue::Empty
        );
        assert_eq!(
            CellValue::from_json(&serde_json::json!(2.5)).unwrap(),
            CellValue::Float(2.5)
        );
    }
}
