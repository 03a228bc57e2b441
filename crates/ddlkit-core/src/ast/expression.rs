//! Expression AST types.

use super::select::SelectWithUnion;
use super::types::IdentifierWithParameters;

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// Non-negative integer literal.
    UInt(u64),
    /// Negative integer literal (only produced where a sign is part of the literal).
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal.
    String(String),
    /// NULL.
    Null,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinaryOp {
    // Logical
    Or,
    And,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    In,
    NotIn,

    // String
    Concat,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::And => "AND",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Concat => "||",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Logical NOT
    Not,
}

/// Units accepted by `INTERVAL n UNIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IntervalUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl IntervalUnit {
    /// Looks up a unit by keyword, ignoring ASCII case.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        const UNITS: [(&str, IntervalUnit); 8] = [
            ("SECOND", IntervalUnit::Second),
            ("MINUTE", IntervalUnit::Minute),
            ("HOUR", IntervalUnit::Hour),
            ("DAY", IntervalUnit::Day),
            ("WEEK", IntervalUnit::Week),
            ("MONTH", IntervalUnit::Month),
            ("QUARTER", IntervalUnit::Quarter),
            ("YEAR", IntervalUnit::Year),
        ];
        UNITS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(word))
            .map(|(_, unit)| *unit)
    }
}

/// A function call, `name(arguments)` or parametric `name(parameters)(arguments)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionCall {
    /// Function name.
    pub name: String,
    /// Parameters of a parametric call such as `quantile(0.9)(x)`.
    pub parameters: Option<Vec<Expr>>,
    /// Arguments.
    pub arguments: Vec<Expr>,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),
    /// A possibly compound identifier (`a`, `t.a`, `db.t.a`).
    Identifier(Vec<String>),
    /// `*`
    Asterisk,
    /// A function call.
    Function(FunctionCall),
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// The operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },
    /// `expr [NOT] BETWEEN low AND high`
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },
    /// `expr IS [NOT] NULL`
    IsNull { expr: Box<Expr>, negated: bool },
    /// `condition ? then : otherwise`
    Ternary {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    /// `x -> body` or `(x, y) -> body`
    Lambda {
        /// Parameter names.
        params: Vec<String>,
        /// The lambda body.
        body: Box<Expr>,
    },
    /// `(a, b, ...)`
    Tuple(Vec<Expr>),
    /// `[a, b, ...]`
    Array(Vec<Expr>),
    /// `INTERVAL value UNIT`
    Interval { value: Box<Expr>, unit: IntervalUnit },
    /// `CAST(expr AS type)`
    Cast {
        expr: Box<Expr>,
        data_type: IdentifierWithParameters,
    },
    /// A parenthesized SELECT.
    Subquery(Box<SelectWithUnion>),
}

impl Expr {
    /// Creates a single-part identifier expression.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(vec![name.into()])
    }

    /// Returns the identifier as a dotted name if this is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<String> {
        match self {
            Self::Identifier(parts) => Some(parts.join(".")),
            _ => None,
        }
    }

    /// Returns true if this expression mentions the column `name` anywhere.
    #[must_use]
    pub fn references(&self, name: &str) -> bool {
        match self {
            Self::Identifier(parts) => parts.last().is_some_and(|p| p == name),
            Self::Literal(_) | Self::Asterisk | Self::Subquery(_) => false,
            Self::Function(call) => call
                .parameters
                .iter()
                .flatten()
                .chain(&call.arguments)
                .any(|e| e.references(name)),
            Self::Unary { operand, .. } => operand.references(name),
            Self::Binary { left, right, .. } => left.references(name) || right.references(name),
            Self::Between {
                expr, low, high, ..
            } => expr.references(name) || low.references(name) || high.references(name),
            Self::IsNull { expr, .. }
            | Self::Interval { value: expr, .. }
            | Self::Cast { expr, .. } => expr.references(name),
            Self::Ternary {
                condition,
                then,
                otherwise,
            } => {
                condition.references(name) || then.references(name) || otherwise.references(name)
            }
            Self::Lambda { params, body } => {
                !params.iter().any(|p| p == name) && body.references(name)
            }
            Self::Tuple(items) | Self::Array(items) => items.iter().any(|e| e.references(name)),
        }
    }
}
