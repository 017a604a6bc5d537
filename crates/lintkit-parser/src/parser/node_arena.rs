//! NodeArena creation methods (`add_*`).
//!
//! Each `add_*` pushes the data into its pool, pushes the header, and points
//! the children's parent links at the new node.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind_ext::SOURCE_FILE;

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow on huge inputs.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with room for roughly `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(Self::MAX_NODE_PREALLOC);
        let mut arena = NodeArena::default();
        arena.nodes = Vec::with_capacity(safe_capacity);
        arena.extended_info = Vec::with_capacity(safe_capacity);
        arena.identifiers = Vec::with_capacity(safe_capacity / 4);
        arena.literals = Vec::with_capacity(safe_capacity / 8);
        arena.binary_exprs = Vec::with_capacity(safe_capacity / 8);
        arena.call_exprs = Vec::with_capacity(safe_capacity / 8);
        arena.access_exprs = Vec::with_capacity(safe_capacity / 8);
        arena
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_some() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a node without data (`this`, `true`, `null`, empty statement).
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind, pos, end))
    }

    pub fn add_identifier(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: IdentifierData,
    ) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    pub fn add_literal(&mut self, kind: u16, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    pub fn add_binary_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: BinaryExprData,
    ) -> NodeIndex {
        let (left, right) = (data.left, data.right);
        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    pub fn add_unary_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: UnaryExprData,
    ) -> NodeIndex {
        let operand = data.operand;
        let data_index = self.unary_exprs.len() as u32;
        self.unary_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(operand, parent);
        parent
    }

    pub fn add_conditional_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: ConditionalExprData,
    ) -> NodeIndex {
        let children = [data.condition, data.when_true, data.when_false];
        let data_index = self.conditional_exprs.len() as u32;
        self.conditional_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        for child in children {
            self.set_parent(child, parent);
        }
        parent
    }

    pub fn add_call_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: CallExprData,
    ) -> NodeIndex {
        let expression = data.expression;
        let arguments = data.arguments.clone();
        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        if let Some(arguments) = &arguments {
            self.set_parent_list(arguments, parent);
        }
        parent
    }

    pub fn add_access_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: AccessExprData,
    ) -> NodeIndex {
        let (expression, name) = (data.expression, data.name_or_argument);
        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        self.set_parent(name, parent);
        parent
    }

    pub fn add_import_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: ImportExprData,
    ) -> NodeIndex {
        let (source, options) = (data.source, data.options);
        let data_index = self.import_exprs.len() as u32;
        self.import_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(source, parent);
        self.set_parent(options, parent);
        parent
    }

    pub fn add_template_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: TemplateExprData,
    ) -> NodeIndex {
        let head = data.head;
        let spans = data.template_spans.clone();
        let data_index = self.template_exprs.len() as u32;
        self.template_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(head, parent);
        self.set_parent_list(&spans, parent);
        parent
    }

    pub fn add_template_span(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: TemplateSpanData,
    ) -> NodeIndex {
        let (expression, literal) = (data.expression, data.literal);
        let data_index = self.template_spans.len() as u32;
        self.template_spans.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        self.set_parent(literal, parent);
        parent
    }

    pub fn add_function(&mut self, kind: u16, pos: u32, end: u32, data: FunctionData) -> NodeIndex {
        let (name, body) = (data.name, data.body);
        let parameters = data.parameters.clone();
        let data_index = self.functions.len() as u32;
        self.functions.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(name, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_parameter(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: ParameterData,
    ) -> NodeIndex {
        let (name, initializer) = (data.name, data.initializer);
        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(name, parent);
        self.set_parent(initializer, parent);
        parent
    }

    /// Add an array or object literal.
    pub fn add_literal_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: LiteralExprData,
    ) -> NodeIndex {
        let elements = data.elements.clone();
        let data_index = self.literal_exprs.len() as u32;
        self.literal_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent_list(&elements, parent);
        parent
    }

    pub fn add_property_assignment(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: PropertyAssignmentData,
    ) -> NodeIndex {
        let (name, initializer) = (data.name, data.initializer);
        let data_index = self.property_assignments.len() as u32;
        self.property_assignments.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(name, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_spread(&mut self, kind: u16, pos: u32, end: u32, data: SpreadData) -> NodeIndex {
        let expression = data.expression;
        let data_index = self.spread_data.len() as u32;
        self.spread_data.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        parent
    }

    pub fn add_block(&mut self, kind: u16, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();
        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_variable(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        flags: u32,
        data: VariableData,
    ) -> NodeIndex {
        let declarations = data.declarations.clone();
        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        let mut node = Node::with_data(kind, pos, end, data_index);
        node.flags = flags as u16;
        let parent = self.push_node(node);
        self.set_parent_list(&declarations, parent);
        parent
    }

    pub fn add_variable_declaration(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        let (name, initializer) = (data.name, data.initializer);
        let data_index = self.variable_declarations.len() as u32;
        self.variable_declarations.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(name, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_expr_statement(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: ExprStatementData,
    ) -> NodeIndex {
        let expression = data.expression;
        let data_index = self.expr_statements.len() as u32;
        self.expr_statements.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        parent
    }

    pub fn add_if_statement(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: IfStatementData,
    ) -> NodeIndex {
        let children = [data.expression, data.then_statement, data.else_statement];
        let data_index = self.if_statements.len() as u32;
        self.if_statements.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        for child in children {
            self.set_parent(child, parent);
        }
        parent
    }

    /// Add a `while` or `do`/`while` loop.
    pub fn add_loop(&mut self, kind: u16, pos: u32, end: u32, data: LoopData) -> NodeIndex {
        let (condition, statement) = (data.condition, data.statement);
        let data_index = self.loops.len() as u32;
        self.loops.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(condition, parent);
        self.set_parent(statement, parent);
        parent
    }

    pub fn add_switch(&mut self, kind: u16, pos: u32, end: u32, data: SwitchData) -> NodeIndex {
        let expression = data.expression;
        let clauses = data.clauses.clone();
        let data_index = self.switch_data.len() as u32;
        self.switch_data.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        self.set_parent_list(&clauses, parent);
        parent
    }

    pub fn add_case_clause(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: CaseClauseData,
    ) -> NodeIndex {
        let expression = data.expression;
        let statements = data.statements.clone();
        let data_index = self.case_clauses.len() as u32;
        self.case_clauses.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_with(&mut self, kind: u16, pos: u32, end: u32, data: WithData) -> NodeIndex {
        let (expression, statement) = (data.expression, data.statement);
        let data_index = self.with_data.len() as u32;
        self.with_data.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        self.set_parent(statement, parent);
        parent
    }

    /// Add a `return` or `throw` statement.
    pub fn add_return(&mut self, kind: u16, pos: u32, end: u32, data: ReturnData) -> NodeIndex {
        let expression = data.expression;
        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        parent
    }

    /// Add a `break` or `continue` statement.
    pub fn add_jump(&mut self, kind: u16, pos: u32, end: u32, data: JumpData) -> NodeIndex {
        let label = data.label;
        let data_index = self.jump_data.len() as u32;
        self.jump_data.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(label, parent);
        parent
    }

    pub fn add_source_file(&mut self, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        let statements = data.statements.clone();
        let eof = data.end_of_file_token;
        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        let parent = self.push_node(Node::with_data(SOURCE_FILE, pos, end, data_index));
        self.set_parent_list(&statements, parent);
        self.set_parent(eof, parent);
        parent
    }
}
