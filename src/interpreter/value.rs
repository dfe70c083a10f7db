use std::fmt;

/// The result of interpreting one statement, as shown to the user.
///
/// Statements whose root is `&&` or `||` are shown as boolean words; every
/// other statement is shown as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A 64 bit integer result.
    Integer(i64),
    /// A truth value produced by `&&` or `||`.
    Bool(bool),
}

impl Value {
    /// Wraps an evaluated integer, choosing the boolean form when
    /// `is_logical` is set. Any non-zero integer is `true`.
    ///
    /// # Example
    /// ```
    /// use volt::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from_result(7, false), Value::Integer(7));
    /// assert_eq!(Value::from_result(1, true).to_string(), "true");
    /// assert_eq!(Value::from_result(0, true).to_string(), "false");
    /// ```
    #[must_use]
    pub fn from_result(result: i64, is_logical: bool) -> Self {
        if is_logical { (result != 0).into() } else { result.into() }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
