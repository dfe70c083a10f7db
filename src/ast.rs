use std::fmt;

/// The numeric kind of a literal, declaration or lowered value.
///
/// Kinds are ordered `Int < Float < Double`; the result kind of a binary
/// operation is the larger of its operand kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    /// Native integer.
    Int,
    /// Single-precision floating point.
    Float,
    /// Double-precision floating point.
    Double,
}

impl NumericKind {
    /// Returns the wider of two kinds.
    ///
    /// # Example
    /// ```
    /// use volt::ast::NumericKind;
    ///
    /// assert_eq!(NumericKind::Int.promote(NumericKind::Float), NumericKind::Float);
    /// assert_eq!(NumericKind::Double.promote(NumericKind::Float), NumericKind::Double);
    /// ```
    #[must_use]
    pub fn promote(self, other: Self) -> Self {
        self.max(other)
    }

    /// Returns `true` for `float` and `double`.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// The type name used in the generated listing.
    #[must_use]
    pub const fn ir_type(self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// The additive identity written in the generated listing.
    #[must_use]
    pub const fn ir_zero(self) -> &'static str {
        match self {
            Self::Int => "0",
            Self::Float | Self::Double => "0.0",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// Arithmetic and logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl BinaryOperator {
    /// Returns `true` for `&&` and `||`.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{symbol}")
    }
}

/// Relational operators. They always yield `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `gt` / `>`
    Greater,
    /// `lt` / `<`
    Less,
    /// `gte` / `>=`
    GreaterEqual,
    /// `lte` / `<=`
    LessEqual,
    /// `di` / `!=`
    NotEqual,
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Greater => "gt",
            Self::Less => "lt",
            Self::GreaterEqual => "gte",
            Self::LessEqual => "lte",
            Self::NotEqual => "di",
        };
        write!(f, "{word}")
    }
}

/// An expression node.
///
/// Children are owned exclusively by their parent. Variable names are only
/// resolved when the tree is evaluated or lowered.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, kept as written.
    Literal {
        /// The literal's source text, e.g. `42` or `2.5`.
        text: String,
        /// The kind inferred from the text and the enclosing declaration.
        kind: NumericKind,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// An arithmetic or logical operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A relational comparison.
    LogicOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::BinaryOp`] from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a [`Expr::LogicOp`] from two operands.
    #[must_use]
    pub fn comparison(left: Self, op: ComparisonOperator, right: Self) -> Self {
        Self::LogicOp { left: Box::new(left),
                        op,
                        right: Box::new(right) }
    }
}

/// One arm of a conditional statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// The condition; `None` only for the final `else` arm.
    pub guard: Option<Expr>,
    /// Statements run when this arm is taken.
    pub body:  Vec<Statement>,
}

/// A statement: the root of the tree built for one source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `what <name> : <kind> = <value>`
    Declaration {
        /// Name of the declared variable.
        name:  String,
        /// Declared numeric kind.
        kind:  NumericKind,
        /// Initializer expression.
        value: Expr,
    },
    /// `if … then ; … elseif … then ; … else ; … endif`
    Conditional {
        /// Arms in source order.
        branches: Vec<Branch>,
    },
    /// An expression used as a statement.
    Expression {
        /// The expression.
        expr: Expr,
    },
}

impl Statement {
    /// Returns `true` if the result of this statement should be shown as a
    /// boolean word rather than a number.
    ///
    /// This holds exactly when the statement is an expression whose root is
    /// `&&` or `||`.
    #[must_use]
    pub const fn is_logical(&self) -> bool {
        matches!(self,
                 Self::Expression { expr: Expr::BinaryOp { op: BinaryOperator::And
                                                               | BinaryOperator::Or,
                                                           .. }, })
    }
}
