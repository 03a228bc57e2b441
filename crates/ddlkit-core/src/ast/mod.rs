//! Abstract Syntax Tree (AST) types for CREATE/ATTACH statements.

mod create;
mod dictionary;
mod expression;
mod select;
mod table;
mod types;

pub use create::{
    CreateKind, CreateQuery, DatabaseDefinition, DictionaryDefinition, LiveViewDefinition,
    TableDefinition, ViewDefinition,
};
pub use dictionary::{
    DictionaryAttribute, DictionaryBody, DictionaryLifetime, DictionaryParameter,
    DictionaryRange, DictionarySpec,
};
pub use expression::{BinaryOp, Expr, FunctionCall, IntervalUnit, Literal, UnaryOp};
pub use select::{
    OrderBy, OrderDirection, SelectItem, SelectStatement, SelectWithUnion, TableSource,
};
pub use table::{
    ColumnDeclaration, ColumnDefault, Columns, ConstraintDeclaration, DefaultKind,
    IndexDeclaration, SettingChange, Storage, TableProperty, TtlAction, TtlElement,
};
pub use types::{IdentifierWithParameters, NameTypePair, TypeArguments};
