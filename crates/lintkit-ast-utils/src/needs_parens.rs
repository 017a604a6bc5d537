//! Whether a synthesized expression must be wrapped before it is composed
//! into a larger one.

use lintkit_parser::{NodeArena, NodeIndex, syntax_kind_ext};
use lintkit_scanner::SyntaxKind;
use serde::Serialize;

/// Coarse expression classification, ESTree style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ExpressionKind {
    Array,
    ArrowFunction,
    Assignment,
    Binary,
    Call,
    Conditional,
    Function,
    Identifier,
    Import,
    Literal,
    Logical,
    Member,
    New,
    Object,
    Sequence,
    Spread,
    Template,
    This,
    Unary,
    Update,
    Other,
}

/// How the expression is about to be composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionContext {
    /// Operand of a `!`.
    Not,
    /// Operand of `&&` / `||`.
    Logical,
}

impl ExpressionKind {
    /// Classify a node. Unknown indices are [`ExpressionKind::Other`].
    pub fn of(arena: &NodeArena, index: NodeIndex) -> ExpressionKind {
        let Some(node) = arena.get(index) else {
            return ExpressionKind::Other;
        };

        match node.kind {
            syntax_kind_ext::ARRAY_LITERAL_EXPRESSION => ExpressionKind::Array,
            syntax_kind_ext::OBJECT_LITERAL_EXPRESSION => ExpressionKind::Object,
            syntax_kind_ext::ARROW_FUNCTION => ExpressionKind::ArrowFunction,
            syntax_kind_ext::FUNCTION_EXPRESSION => ExpressionKind::Function,
            syntax_kind_ext::CONDITIONAL_EXPRESSION => ExpressionKind::Conditional,
            syntax_kind_ext::CALL_EXPRESSION => ExpressionKind::Call,
            syntax_kind_ext::NEW_EXPRESSION => ExpressionKind::New,
            syntax_kind_ext::IMPORT_EXPRESSION => ExpressionKind::Import,
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
            | syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION => ExpressionKind::Member,
            syntax_kind_ext::SPREAD_ELEMENT => ExpressionKind::Spread,
            syntax_kind_ext::TEMPLATE_EXPRESSION => ExpressionKind::Template,
            syntax_kind_ext::POSTFIX_UNARY_EXPRESSION => ExpressionKind::Update,
            syntax_kind_ext::PREFIX_UNARY_EXPRESSION => {
                let is_update = arena.get_unary_expr(node).is_some_and(|unary| {
                    unary.operator == SyntaxKind::PlusPlusToken as u16
                        || unary.operator == SyntaxKind::MinusMinusToken as u16
                });
                if is_update {
                    ExpressionKind::Update
                } else {
                    ExpressionKind::Unary
                }
            }
            syntax_kind_ext::BINARY_EXPRESSION => {
                let Some(binary) = arena.get_binary_expr(node) else {
                    return ExpressionKind::Other;
                };
                match SyntaxKind::try_from_u16(binary.operator_token) {
                    Some(SyntaxKind::CommaToken) => ExpressionKind::Sequence,
                    Some(op) if op.is_assignment_operator() => ExpressionKind::Assignment,
                    Some(op) if op.is_logical_operator() => ExpressionKind::Logical,
                    _ => ExpressionKind::Binary,
                }
            }
            kind => match SyntaxKind::try_from_u16(kind) {
                Some(SyntaxKind::Identifier) => ExpressionKind::Identifier,
                Some(SyntaxKind::ThisKeyword) => ExpressionKind::This,
                Some(SyntaxKind::NoSubstitutionTemplateLiteral) => ExpressionKind::Template,
                Some(
                    SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::TrueKeyword
                    | SyntaxKind::FalseKeyword
                    | SyntaxKind::NullKeyword,
                ) => ExpressionKind::Literal,
                _ => ExpressionKind::Other,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExpressionKind::Array => "Array",
            ExpressionKind::ArrowFunction => "ArrowFunction",
            ExpressionKind::Assignment => "Assignment",
            ExpressionKind::Binary => "Binary",
            ExpressionKind::Call => "Call",
            ExpressionKind::Conditional => "Conditional",
            ExpressionKind::Function => "Function",
            ExpressionKind::Identifier => "Identifier",
            ExpressionKind::Import => "Import",
            ExpressionKind::Literal => "Literal",
            ExpressionKind::Logical => "Logical",
            ExpressionKind::Member => "Member",
            ExpressionKind::New => "New",
            ExpressionKind::Object => "Object",
            ExpressionKind::Sequence => "Sequence",
            ExpressionKind::Spread => "Spread",
            ExpressionKind::Template => "Template",
            ExpressionKind::This => "This",
            ExpressionKind::Unary => "Unary",
            ExpressionKind::Update => "Update",
            ExpressionKind::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether an expression of `kind` needs parentheses in `context`.
pub fn need_parentheses(kind: ExpressionKind, context: CompositionContext) -> bool {
    match kind {
        ExpressionKind::ArrowFunction
        | ExpressionKind::Assignment
        | ExpressionKind::Binary
        | ExpressionKind::Conditional
        | ExpressionKind::Logical
        | ExpressionKind::Sequence
        | ExpressionKind::Unary
        | ExpressionKind::Update => true,
        // `(function () {}) || x`
        ExpressionKind::Function => context == CompositionContext::Logical,
        _ => false,
    }
}

/// [`need_parentheses`] for a parsed node.
pub fn need_parentheses_for(
    arena: &NodeArena,
    node: NodeIndex,
    context: CompositionContext,
) -> bool {
    need_parentheses(ExpressionKind::of(arena, node), context)
}
