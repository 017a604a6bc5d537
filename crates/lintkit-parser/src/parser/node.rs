//! Thin node storage.
//!
//! Every node is a 16-byte [`Node`] header. Kind-specific children live in
//! typed pools on the [`NodeArena`], addressed by `Node::data_index`; nodes
//! without children (`this`, `true`, empty statements) carry no data.
//!
//! Parent links are kept in the parallel `extended_info` vector. They are
//! written once, when the parent is created: the parser builds bottom-up, so
//! every child already exists at that point.

use super::base::{NodeIndex, NodeList};
use serde::Serialize;

/// A thin 16-byte node header.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    /// `SyntaxKind` value for token nodes, `syntax_kind_ext` constant otherwise.
    pub kind: u16,
    /// Packed `node_flags`.
    pub flags: u16,
    /// Start of the node's first token.
    pub pos: u32,
    /// End of the node's last token.
    pub end: u32,
    /// Index into the kind's pool (`Node::NO_DATA` = no data).
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }
}

/// Per-node information kept outside the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
        }
    }
}

// =============================================================================
// Node data
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// String, numeric and template-part literals.
#[derive(Clone, Debug, Serialize)]
pub struct LiteralData {
    /// Cooked text: escapes decoded, numeric separators removed.
    pub text: String,
    /// Numeric value of a `NumericLiteral`.
    pub value: Option<f64>,
}

/// Binary, logical, assignment and comma expressions.
#[derive(Clone, Debug, Serialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: u16,
    pub right: NodeIndex,
}

/// Prefix and postfix unary expressions.
#[derive(Clone, Debug, Serialize)]
pub struct UnaryExprData {
    pub operator: u16,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// Call and `new` expressions. `arguments` is `None` for `new F` without
/// an argument list.
#[derive(Clone, Debug, Serialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: Option<NodeList>,
}

/// Property (`a.b`, `a?.b`) and element (`a[b]`) access.
#[derive(Clone, Debug, Serialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
    pub question_dot_token: bool,
}

/// Dynamic `import(source, options)`.
#[derive(Clone, Debug, Serialize)]
pub struct ImportExprData {
    pub source: NodeIndex,
    pub options: NodeIndex,
}

/// `head${expression}middle${expression}tail`
#[derive(Clone, Debug, Serialize)]
pub struct TemplateExprData {
    pub head: NodeIndex,
    pub template_spans: NodeList,
}

/// One substitution of a template and the literal part that follows it.
#[derive(Clone, Debug, Serialize)]
pub struct TemplateSpanData {
    pub expression: NodeIndex,
    pub literal: NodeIndex,
}

/// Function declarations, function expressions and arrow functions.
#[derive(Clone, Debug, Serialize)]
pub struct FunctionData {
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// A block, or an expression for concise arrow bodies.
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct ParameterData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Array and object literal elements.
#[derive(Clone, Debug, Serialize)]
pub struct LiteralExprData {
    pub elements: NodeList,
    pub multi_line: bool,
}

/// `name: initializer`, or a shorthand `name` (initializer is `NONE`).
#[derive(Clone, Debug, Serialize)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct SpreadData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct BlockData {
    pub statements: NodeList,
    pub multi_line: bool,
}

/// `var`/`let`/`const` statement; the keyword is in the node flags.
#[derive(Clone, Debug, Serialize)]
pub struct VariableData {
    pub declarations: NodeList,
}

#[derive(Clone, Debug, Serialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// `while (condition) statement` and `do statement while (condition)`.
#[derive(Clone, Debug, Serialize)]
pub struct LoopData {
    pub condition: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct SwitchData {
    pub expression: NodeIndex,
    pub clauses: NodeList,
}

/// `case expression:` or `default:` (expression is `NONE`).
#[derive(Clone, Debug, Serialize)]
pub struct CaseClauseData {
    pub expression: NodeIndex,
    pub statements: NodeList,
}

#[derive(Clone, Debug, Serialize)]
pub struct WithData {
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

/// `return expression` and `throw expression`.
#[derive(Clone, Debug, Serialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

/// `break label` and `continue label`.
#[derive(Clone, Debug, Serialize)]
pub struct JumpData {
    pub label: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
    pub end_of_file_token: NodeIndex,
}

// =============================================================================
// Arena
// =============================================================================

/// Owner of every node of one parse.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,

    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub binary_exprs: Vec<BinaryExprData>,
    pub unary_exprs: Vec<UnaryExprData>,
    pub conditional_exprs: Vec<ConditionalExprData>,
    pub call_exprs: Vec<CallExprData>,
    pub access_exprs: Vec<AccessExprData>,
    pub import_exprs: Vec<ImportExprData>,
    pub template_exprs: Vec<TemplateExprData>,
    pub template_spans: Vec<TemplateSpanData>,
    pub functions: Vec<FunctionData>,
    pub parameters: Vec<ParameterData>,
    pub literal_exprs: Vec<LiteralExprData>,
    pub property_assignments: Vec<PropertyAssignmentData>,
    pub spread_data: Vec<SpreadData>,

    pub blocks: Vec<BlockData>,
    pub variables: Vec<VariableData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub if_statements: Vec<IfStatementData>,
    pub loops: Vec<LoopData>,
    pub switch_data: Vec<SwitchData>,
    pub case_clauses: Vec<CaseClauseData>,
    pub with_data: Vec<WithData>,
    pub return_data: Vec<ReturnData>,
    pub jump_data: Vec<JumpData>,
    pub source_files: Vec<SourceFileData>,
}
