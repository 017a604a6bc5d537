//! Node kinds that are not tokens.
//!
//! Token kinds (identifiers, literals, `this`, `true`, ...) are used directly
//! as node kinds via `SyntaxKind as u16`. Composite nodes use the constants
//! below, which start at `SyntaxKind::FIRST_NODE` so the two ranges never
//! collide.

// Expressions
pub const ARRAY_LITERAL_EXPRESSION: u16 = 200;
pub const OBJECT_LITERAL_EXPRESSION: u16 = 201;
pub const PROPERTY_ASSIGNMENT: u16 = 202;
pub const SHORTHAND_PROPERTY_ASSIGNMENT: u16 = 203;
pub const SPREAD_ELEMENT: u16 = 204;
pub const PROPERTY_ACCESS_EXPRESSION: u16 = 205;
pub const ELEMENT_ACCESS_EXPRESSION: u16 = 206;
pub const CALL_EXPRESSION: u16 = 207;
pub const NEW_EXPRESSION: u16 = 208;
pub const IMPORT_EXPRESSION: u16 = 209;
pub const FUNCTION_EXPRESSION: u16 = 210;
pub const ARROW_FUNCTION: u16 = 211;
pub const PREFIX_UNARY_EXPRESSION: u16 = 212;
pub const POSTFIX_UNARY_EXPRESSION: u16 = 213;
pub const BINARY_EXPRESSION: u16 = 214;
pub const CONDITIONAL_EXPRESSION: u16 = 215;
pub const TEMPLATE_EXPRESSION: u16 = 216;
pub const TEMPLATE_SPAN: u16 = 217;
pub const PARAMETER: u16 = 218;

// Statements
pub const BLOCK: u16 = 230;
pub const VARIABLE_STATEMENT: u16 = 231;
pub const VARIABLE_DECLARATION: u16 = 232;
pub const EMPTY_STATEMENT: u16 = 233;
pub const EXPRESSION_STATEMENT: u16 = 234;
pub const IF_STATEMENT: u16 = 235;
pub const DO_STATEMENT: u16 = 236;
pub const WHILE_STATEMENT: u16 = 237;
pub const CONTINUE_STATEMENT: u16 = 238;
pub const BREAK_STATEMENT: u16 = 239;
pub const RETURN_STATEMENT: u16 = 240;
pub const WITH_STATEMENT: u16 = 241;
pub const SWITCH_STATEMENT: u16 = 242;
pub const THROW_STATEMENT: u16 = 243;
pub const CASE_CLAUSE: u16 = 244;
pub const DEFAULT_CLAUSE: u16 = 245;
pub const FUNCTION_DECLARATION: u16 = 246;

// Top level
pub const SOURCE_FILE: u16 = 260;

/// Human-readable name of a node kind (token or composite).
pub fn kind_name(kind: u16) -> &'static str {
    match kind {
        ARRAY_LITERAL_EXPRESSION => "ArrayLiteralExpression",
        OBJECT_LITERAL_EXPRESSION => "ObjectLiteralExpression",
        PROPERTY_ASSIGNMENT => "PropertyAssignment",
        SHORTHAND_PROPERTY_ASSIGNMENT => "ShorthandPropertyAssignment",
        SPREAD_ELEMENT => "SpreadElement",
        PROPERTY_ACCESS_EXPRESSION => "PropertyAccessExpression",
        ELEMENT_ACCESS_EXPRESSION => "ElementAccessExpression",
        CALL_EXPRESSION => "CallExpression",
        NEW_EXPRESSION => "NewExpression",
        IMPORT_EXPRESSION => "ImportExpression",
        FUNCTION_EXPRESSION => "FunctionExpression",
        ARROW_FUNCTION => "ArrowFunction",
        PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpression",
        POSTFIX_UNARY_EXPRESSION => "PostfixUnaryExpression",
        BINARY_EXPRESSION => "BinaryExpression",
        CONDITIONAL_EXPRESSION => "ConditionalExpression",
        TEMPLATE_EXPRESSION => "TemplateExpression",
        TEMPLATE_SPAN => "TemplateSpan",
        PARAMETER => "Parameter",
        BLOCK => "Block",
        VARIABLE_STATEMENT => "VariableStatement",
        VARIABLE_DECLARATION => "VariableDeclaration",
        EMPTY_STATEMENT => "EmptyStatement",
        EXPRESSION_STATEMENT => "ExpressionStatement",
        IF_STATEMENT => "IfStatement",
        DO_STATEMENT => "DoStatement",
        WHILE_STATEMENT => "WhileStatement",
        CONTINUE_STATEMENT => "ContinueStatement",
        BREAK_STATEMENT => "BreakStatement",
        RETURN_STATEMENT => "ReturnStatement",
        WITH_STATEMENT => "WithStatement",
        SWITCH_STATEMENT => "SwitchStatement",
        THROW_STATEMENT => "ThrowStatement",
        CASE_CLAUSE => "CaseClause",
        DEFAULT_CLAUSE => "DefaultClause",
        FUNCTION_DECLARATION => "FunctionDeclaration",
        SOURCE_FILE => "SourceFile",
        _ => token_kind_name(kind),
    }
}

fn token_kind_name(kind: u16) -> &'static str {
    use lintkit_scanner::SyntaxKind;
    match SyntaxKind::try_from_u16(kind) {
        Some(SyntaxKind::Identifier) => "Identifier",
        Some(SyntaxKind::StringLiteral) => "StringLiteral",
        Some(SyntaxKind::NumericLiteral) => "NumericLiteral",
        Some(SyntaxKind::NoSubstitutionTemplateLiteral) => "NoSubstitutionTemplateLiteral",
        Some(SyntaxKind::TemplateHead) => "TemplateHead",
        Some(SyntaxKind::TemplateMiddle) => "TemplateMiddle",
        Some(SyntaxKind::TemplateTail) => "TemplateTail",
        Some(SyntaxKind::ThisKeyword) => "ThisKeyword",
        Some(SyntaxKind::TrueKeyword) => "TrueKeyword",
        Some(SyntaxKind::FalseKeyword) => "FalseKeyword",
        Some(SyntaxKind::NullKeyword) => "NullKeyword",
        Some(SyntaxKind::EndOfFileToken) => "EndOfFileToken",
        _ => "Unknown",
    }
}
