use super::Value;
use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// The logical cast type of an attribute.
///
/// Each variant carries its own coercion rules (see [`Type::cast`]). The SQL
/// column type used for schema creation is chosen by the SQL serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed 64-bit integer
    Integer,

    /// 64-bit floating point number
    Float,

    /// UTF-8 string
    String,

    /// Boolean value. Engines without a native boolean store it as `0`/`1`.
    Boolean,
}

impl Type {
    /// The tag used to name this type, e.g. in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Integer => "integer",
            Type::Float => "float",
            Type::String => "string",
            Type::Boolean => "boolean",
        }
    }

    /// Coerces `value` into this type.
    ///
    /// `Null` casts to every type; nullability is checked by the compiler,
    /// not here. Integers widen to floats, floats with no fractional part
    /// narrow to integers when they fit in an `i64`, and `0`/`1` integers cast to booleans. Any other
    /// mismatch is a type conversion error.
    pub fn cast(self, value: Value) -> Result<Value> {
        match (self, value) {
            (_, Value::Null) => Ok(Value::Null),
            (Type::Integer, Value::I64(v)) => Ok(Value::I64(v)),
            // `i64::MAX as f64` rounds up to 2^63, which is out of range
            (Type::Integer, Value::F64(v))
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 =>
            {
                Ok(Value::I64(v as i64))
            }
            (Type::Float, Value::F64(v)) => Ok(Value::F64(v)),
            (Type::Float, Value::I64(v)) => Ok(Value::F64(v as f64)),
            (Type::String, Value::String(v)) => Ok(Value::String(v)),
            (Type::Boolean, Value::Bool(v)) => Ok(Value::Bool(v)),
            (Type::Boolean, Value::I64(0)) => Ok(Value::Bool(false)),
            (Type::Boolean, Value::I64(1)) => Ok(Value::Bool(true)),
            (ty, value) => Err(Error::type_conversion(value, ty.name())),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match &s.to_ascii_lowercase()[..] {
            "int" | "integer" => Ok(Type::Integer),
            "float" | "real" => Ok(Type::Float),
            "string" | "text" => Ok(Type::String),
            "bool" | "boolean" => Ok(Type::Boolean),
            _ => Err(Error::invalid_schema(format!("unknown attribute type `{s}`"))),
        }
    }
}
