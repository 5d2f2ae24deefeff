//! Human-readable rendering of a revived tree
//!
//! Plain values print as compact JSON; typed values print as `Kind(payload)`
//! so they are visibly distinct from the strings and objects they came from.

use std::fmt;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Bool(b) => write!(f, "{b}"),

            Value::Number(n) => write!(f, "{n}"),

            Value::String(s) => write_json_string(f, s),

            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }

            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write_json_string(f, key)?;
                    write!(f, ":{value}")?;
                }
                write!(f, "}}")
            }

            Value::Decimal(d) => write!(f, "Decimal({d})"),

            Value::Date(d) => write!(f, "Date({d})"),

            Value::DateTime(dt) => write!(f, "DateTime({dt})"),

            Value::Time(t) => write!(f, "Time({t})"),

            Value::TimeDelta(td) => write!(f, "TimeDelta({td})"),

            Value::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
        }
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}
