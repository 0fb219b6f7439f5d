use serde_json::Value;

/// Identity-key capability for derived tags.
///
/// A type whose values have usable value identity (it could key an
/// identity-keyed set) returns `Some` token, and the same value always
/// produces the same tag. Aggregate types return `None` and consume the
/// allocator's per-type occurrence counter instead. Rust has no
/// first-class object identity, so non-primitive types always take the
/// counter path.
pub trait Taggable {
    /// Label used as the tag's type-name component.
    fn type_label(&self) -> &'static str;

    /// The value's own identity token, when the type supports keying.
    fn identity_token(&self) -> Option<String>;
}

macro_rules! scalar_taggable {
    ($($ty:ty => $label:literal),* $(,)?) => {
        $(
            impl Taggable for $ty {
                fn type_label(&self) -> &'static str {
                    $label
                }

                fn identity_token(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

scalar_taggable! {
    bool => "bool",
    i32 => "i32",
    i64 => "i64",
    u32 => "u32",
    u64 => "u64",
    str => "str",
    String => "String",
}

impl Taggable for Value {
    fn type_label(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    fn identity_token(&self) -> Option<String> {
        match self {
            Value::Null => Some("null".to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            // Aggregates have no value identity; the allocator counts them.
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_carry_their_own_token() {
        assert_eq!(42i64.identity_token(), Some("42".to_string()));
        assert_eq!(true.identity_token(), Some("true".to_string()));
        assert_eq!("abc".identity_token(), Some("abc".to_string()));
    }

    #[test]
    fn json_scalars_carry_their_own_token() {
        assert_eq!(json!(null).identity_token(), Some("null".to_string()));
        assert_eq!(json!(3.5).identity_token(), Some("3.5".to_string()));
        assert_eq!(json!("x").identity_token(), Some("x".to_string()));
    }

    #[test]
    fn json_aggregates_have_no_token() {
        assert_eq!(json!([1, 2]).identity_token(), None);
        assert_eq!(json!({"a": 1}).identity_token(), None);
    }

    #[test]
    fn json_labels_name_the_variant() {
        assert_eq!(json!({"a": 1}).type_label(), "Object");
        assert_eq!(json!([1]).type_label(), "Array");
        assert_eq!(json!(1).type_label(), "Number");
    }
}
