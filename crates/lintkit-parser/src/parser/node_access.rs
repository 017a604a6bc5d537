//! NodeArena access methods and node kind utilities.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind_ext::*;
use lintkit_scanner::SyntaxKind;

/// Generates a typed pool accessor: returns the node's data if the node has
/// data and its kind is one of the listed kinds.
macro_rules! pool_accessor {
    ($(#[$meta:meta])* $name:ident, $pool:ident, $data:ty, [$($kind:expr),+ $(,)?]) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&self, node: &Node) -> Option<&$data> {
            if node.has_data() && ($(node.kind == $kind)||+) {
                self.$pool.get(node.data_index as usize)
            } else {
                None
            }
        }
    };
}

impl NodeArena {
    /// Get a thin node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of a node, `NodeIndex::NONE` for the root or unknown indices.
    #[inline]
    pub fn get_parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index).map_or(NodeIndex::NONE, |e| e.parent)
    }

    pool_accessor!(
        /// Identifier data. Returns None if the node is not an identifier.
        get_identifier, identifiers, IdentifierData, [SyntaxKind::Identifier as u16]
    );

    pool_accessor!(
        /// Literal data for string, numeric and template-part literals.
        get_literal, literals, LiteralData, [
            SyntaxKind::StringLiteral as u16,
            SyntaxKind::NumericLiteral as u16,
            SyntaxKind::NoSubstitutionTemplateLiteral as u16,
            SyntaxKind::TemplateHead as u16,
            SyntaxKind::TemplateMiddle as u16,
            SyntaxKind::TemplateTail as u16,
        ]
    );

    pool_accessor!(get_binary_expr, binary_exprs, BinaryExprData, [BINARY_EXPRESSION]);

    pool_accessor!(
        /// Prefix or postfix unary expression data.
        get_unary_expr, unary_exprs, UnaryExprData,
        [PREFIX_UNARY_EXPRESSION, POSTFIX_UNARY_EXPRESSION]
    );

    pool_accessor!(
        get_conditional_expr, conditional_exprs, ConditionalExprData, [CONDITIONAL_EXPRESSION]
    );

    pool_accessor!(
        /// Call or `new` expression data.
        get_call_expr, call_exprs, CallExprData, [CALL_EXPRESSION, NEW_EXPRESSION]
    );

    pool_accessor!(
        /// Property access or element access data.
        get_access_expr, access_exprs, AccessExprData,
        [PROPERTY_ACCESS_EXPRESSION, ELEMENT_ACCESS_EXPRESSION]
    );

    pool_accessor!(get_import_expr, import_exprs, ImportExprData, [IMPORT_EXPRESSION]);

    pool_accessor!(get_template_expr, template_exprs, TemplateExprData, [TEMPLATE_EXPRESSION]);

    pool_accessor!(get_template_span, template_spans, TemplateSpanData, [TEMPLATE_SPAN]);

    pool_accessor!(
        /// Function declaration, function expression or arrow function data.
        get_function, functions, FunctionData,
        [FUNCTION_DECLARATION, FUNCTION_EXPRESSION, ARROW_FUNCTION]
    );

    pool_accessor!(get_parameter, parameters, ParameterData, [PARAMETER]);

    pool_accessor!(
        /// Array or object literal elements.
        get_literal_expr, literal_exprs, LiteralExprData,
        [ARRAY_LITERAL_EXPRESSION, OBJECT_LITERAL_EXPRESSION]
    );

    pool_accessor!(
        get_property_assignment, property_assignments, PropertyAssignmentData,
        [PROPERTY_ASSIGNMENT, SHORTHAND_PROPERTY_ASSIGNMENT]
    );

    pool_accessor!(get_spread, spread_data, SpreadData, [SPREAD_ELEMENT]);

    pool_accessor!(get_block, blocks, BlockData, [BLOCK]);

    pool_accessor!(get_variable, variables, VariableData, [VARIABLE_STATEMENT]);

    pool_accessor!(
        get_variable_declaration, variable_declarations, VariableDeclarationData,
        [VARIABLE_DECLARATION]
    );

    pool_accessor!(
        get_expression_statement, expr_statements, ExprStatementData, [EXPRESSION_STATEMENT]
    );

    pool_accessor!(get_if_statement, if_statements, IfStatementData, [IF_STATEMENT]);

    pool_accessor!(
        /// `while` or `do`/`while` loop data.
        get_loop, loops, LoopData, [WHILE_STATEMENT, DO_STATEMENT]
    );

    pool_accessor!(get_switch, switch_data, SwitchData, [SWITCH_STATEMENT]);

    pool_accessor!(get_case_clause, case_clauses, CaseClauseData, [CASE_CLAUSE, DEFAULT_CLAUSE]);

    pool_accessor!(get_with_statement, with_data, WithData, [WITH_STATEMENT]);

    pool_accessor!(
        /// `return` or `throw` statement data.
        get_return_statement, return_data, ReturnData, [RETURN_STATEMENT, THROW_STATEMENT]
    );

    pool_accessor!(
        get_jump_data, jump_data, JumpData, [BREAK_STATEMENT, CONTINUE_STATEMENT]
    );

    pool_accessor!(get_source_file, source_files, SourceFileData, [SOURCE_FILE]);

    /// Source file data by node index.
    pub fn get_source_file_at(&self, index: NodeIndex) -> Option<&SourceFileData> {
        self.get_source_file(self.get(index)?)
    }

    /// Text of an identifier node.
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node).map(|data| data.escaped_text.as_str())
    }

    /// Cooked text of a literal node.
    pub fn get_literal_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_literal(node).map(|data| data.text.as_str())
    }

    /// Direct children of a node, in source order.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };

        fn add(children: &mut Vec<NodeIndex>, idx: NodeIndex) {
            if idx.is_some() {
                children.push(idx);
            }
        }
        fn add_list(children: &mut Vec<NodeIndex>, list: &NodeList) {
            for &idx in &list.nodes {
                add(children, idx);
            }
        }

        let mut children = Vec::new();

        match node.kind {
            BINARY_EXPRESSION => {
                if let Some(data) = self.get_binary_expr(node) {
                    add(&mut children, data.left);
                    add(&mut children, data.right);
                }
            }
            PREFIX_UNARY_EXPRESSION | POSTFIX_UNARY_EXPRESSION => {
                if let Some(data) = self.get_unary_expr(node) {
                    add(&mut children, data.operand);
                }
            }
            CONDITIONAL_EXPRESSION => {
                if let Some(data) = self.get_conditional_expr(node) {
                    add(&mut children, data.condition);
                    add(&mut children, data.when_true);
                    add(&mut children, data.when_false);
                }
            }
            CALL_EXPRESSION | NEW_EXPRESSION => {
                if let Some(data) = self.get_call_expr(node) {
                    add(&mut children, data.expression);
                    if let Some(arguments) = &data.arguments {
                        add_list(&mut children, arguments);
                    }
                }
            }
            PROPERTY_ACCESS_EXPRESSION | ELEMENT_ACCESS_EXPRESSION => {
                if let Some(data) = self.get_access_expr(node) {
                    add(&mut children, data.expression);
                    add(&mut children, data.name_or_argument);
                }
            }
            IMPORT_EXPRESSION => {
                if let Some(data) = self.get_import_expr(node) {
                    add(&mut children, data.source);
                    add(&mut children, data.options);
                }
            }
            TEMPLATE_EXPRESSION => {
                if let Some(data) = self.get_template_expr(node) {
                    add(&mut children, data.head);
                    add_list(&mut children, &data.template_spans);
                }
            }
            TEMPLATE_SPAN => {
                if let Some(data) = self.get_template_span(node) {
                    add(&mut children, data.expression);
                    add(&mut children, data.literal);
                }
            }
            FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION => {
                if let Some(data) = self.get_function(node) {
                    add(&mut children, data.name);
                    add_list(&mut children, &data.parameters);
                    add(&mut children, data.body);
                }
            }
            PARAMETER => {
                if let Some(data) = self.get_parameter(node) {
                    add(&mut children, data.name);
                    add(&mut children, data.initializer);
                }
            }
            ARRAY_LITERAL_EXPRESSION | OBJECT_LITERAL_EXPRESSION => {
                if let Some(data) = self.get_literal_expr(node) {
                    add_list(&mut children, &data.elements);
                }
            }
            PROPERTY_ASSIGNMENT | SHORTHAND_PROPERTY_ASSIGNMENT => {
                if let Some(data) = self.get_property_assignment(node) {
                    add(&mut children, data.name);
                    add(&mut children, data.initializer);
                }
            }
            SPREAD_ELEMENT => {
                if let Some(data) = self.get_spread(node) {
                    add(&mut children, data.expression);
                }
            }
            BLOCK => {
                if let Some(data) = self.get_block(node) {
                    add_list(&mut children, &data.statements);
                }
            }
            VARIABLE_STATEMENT => {
                if let Some(data) = self.get_variable(node) {
                    add_list(&mut children, &data.declarations);
                }
            }
            VARIABLE_DECLARATION => {
                if let Some(data) = self.get_variable_declaration(node) {
                    add(&mut children, data.name);
                    add(&mut children, data.initializer);
                }
            }
            EXPRESSION_STATEMENT => {
                if let Some(data) = self.get_expression_statement(node) {
                    add(&mut children, data.expression);
                }
            }
            IF_STATEMENT => {
                if let Some(data) = self.get_if_statement(node) {
                    add(&mut children, data.expression);
                    add(&mut children, data.then_statement);
                    add(&mut children, data.else_statement);
                }
            }
            WHILE_STATEMENT => {
                if let Some(data) = self.get_loop(node) {
                    add(&mut children, data.condition);
                    add(&mut children, data.statement);
                }
            }
            DO_STATEMENT => {
                if let Some(data) = self.get_loop(node) {
                    add(&mut children, data.statement);
                    add(&mut children, data.condition);
                }
            }
            SWITCH_STATEMENT => {
                if let Some(data) = self.get_switch(node) {
                    add(&mut children, data.expression);
                    add_list(&mut children, &data.clauses);
                }
            }
            CASE_CLAUSE | DEFAULT_CLAUSE => {
                if let Some(data) = self.get_case_clause(node) {
                    add(&mut children, data.expression);
                    add_list(&mut children, &data.statements);
                }
            }
            WITH_STATEMENT => {
                if let Some(data) = self.get_with_statement(node) {
                    add(&mut children, data.expression);
                    add(&mut children, data.statement);
                }
            }
            RETURN_STATEMENT | THROW_STATEMENT => {
                if let Some(data) = self.get_return_statement(node) {
                    add(&mut children, data.expression);
                }
            }
            BREAK_STATEMENT | CONTINUE_STATEMENT => {
                if let Some(data) = self.get_jump_data(node) {
                    add(&mut children, data.label);
                }
            }
            SOURCE_FILE => {
                if let Some(data) = self.get_source_file(node) {
                    add_list(&mut children, &data.statements);
                }
            }
            _ => {}
        }

        children
    }
}

// =============================================================================
// Node Kind Utilities
// =============================================================================

impl Node {
    #[inline]
    pub fn is_identifier(&self) -> bool {
        self.kind == SyntaxKind::Identifier as u16
    }

    #[inline]
    pub fn is_string_literal(&self) -> bool {
        self.kind == SyntaxKind::StringLiteral as u16
    }

    #[inline]
    pub fn is_function_like(&self) -> bool {
        matches!(
            self.kind,
            FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION
        )
    }

    /// Check if this node is an expression (anything that can appear as an
    /// operand).
    pub fn is_expression(&self) -> bool {
        if self.kind < SyntaxKind::FIRST_NODE {
            return matches!(
                SyntaxKind::try_from_u16(self.kind),
                Some(
                    SyntaxKind::Identifier
                        | SyntaxKind::StringLiteral
                        | SyntaxKind::NumericLiteral
                        | SyntaxKind::NoSubstitutionTemplateLiteral
                        | SyntaxKind::ThisKeyword
                        | SyntaxKind::TrueKeyword
                        | SyntaxKind::FalseKeyword
                        | SyntaxKind::NullKeyword
                )
            );
        }
        matches!(
            self.kind,
            ARRAY_LITERAL_EXPRESSION
                | OBJECT_LITERAL_EXPRESSION
                | PROPERTY_ACCESS_EXPRESSION
                | ELEMENT_ACCESS_EXPRESSION
                | CALL_EXPRESSION
                | NEW_EXPRESSION
                | IMPORT_EXPRESSION
                | FUNCTION_EXPRESSION
                | ARROW_FUNCTION
                | PREFIX_UNARY_EXPRESSION
                | POSTFIX_UNARY_EXPRESSION
                | BINARY_EXPRESSION
                | CONDITIONAL_EXPRESSION
                | TEMPLATE_EXPRESSION
        )
    }

    #[inline]
    pub fn is_statement(&self) -> bool {
        (BLOCK..=FUNCTION_DECLARATION).contains(&self.kind)
            && !matches!(self.kind, VARIABLE_DECLARATION | CASE_CLAUSE | DEFAULT_CLAUSE)
    }
}
