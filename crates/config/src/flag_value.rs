//! Typed conversion of flag values.
//!
//! `get_flag` finds a flag by exact (case-insensitive) key and parses its value
//! into the requested scalar type. Absent flags, absent values and values that
//! fail to parse all yield the type's zero value.

use crate::lookup::find_by_key;
use crate::types::Flag;

/// A scalar type a flag value can be converted to.
pub trait FlagValue: Default {
    /// Parses `raw`, returning `None` when it is not a valid value of `Self`.
    fn parse_flag(raw: &str) -> Option<Self>;
}

impl FlagValue for String {
    fn parse_flag(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FlagValue for bool {
    fn parse_flag(raw: &str) -> Option<Self> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
            _ => None,
        }
    }
}

macro_rules! impl_flag_value_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FlagValue for $ty {
                fn parse_flag(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )+
    };
}

impl_flag_value_from_str!(i32, i64, isize, u32, u64, f32, f64);

/// Returns the value of the flag named `key`, converted to `T`.
///
/// ```
/// use appcfg::{Flag, get_flag};
///
/// let flags = vec![Flag::new("PoolSize", "8"), Flag::new("Verbose", "true")];
/// assert_eq!(get_flag::<i64>(Some(flags.as_slice()), "poolsize"), 8);
/// assert!(get_flag::<bool>(Some(flags.as_slice()), "VERBOSE"));
/// assert_eq!(get_flag::<String>(Some(flags.as_slice()), "missing"), "");
/// ```
pub fn get_flag<T: FlagValue>(flags: Option<&[Flag]>, key: &str) -> T {
    find_by_key(flags, |f| f.key.as_str(), key)
        .and_then(|flag| flag.value.as_deref())
        .and_then(T::parse_flag)
        .unwrap_or_default()
}
