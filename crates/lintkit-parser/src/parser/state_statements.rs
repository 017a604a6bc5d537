//! Parser state - statement and source file parsing methods

use super::node::*;
use super::state::{CONTEXT_FLAG_IN_FUNCTION, ParserState, diagnostic_codes};
use super::{NodeIndex, NodeList, node_flags, syntax_kind_ext};
use lintkit_scanner::SyntaxKind;
use tracing::debug;

impl ParserState {
    // =========================================================================
    // Parse Methods - Source File
    // =========================================================================

    /// Parse the whole source text into a `SourceFile` node.
    pub fn parse_source_file(&mut self) -> NodeIndex {
        let _span = tracing::debug_span!("parse_source_file", file = %self.file_name).entered();

        self.start_scanning();
        let statements = self.parse_statement_list(|_| false);

        let eof_pos = self.token_pos();
        let end_of_file_token =
            self.arena
                .add_token(SyntaxKind::EndOfFileToken as u16, eof_pos, eof_pos);
        self.merge_scanner_diagnostics();

        debug!(
            nodes = self.arena.len(),
            tokens = self.tokens.len(),
            diagnostics = self.parse_diagnostics.len(),
            "parsed source file"
        );

        let end_pos = self.get_source_text().len() as u32;
        self.arena.add_source_file(
            0,
            end_pos,
            SourceFileData {
                file_name: self.file_name.clone(),
                statements,
                end_of_file_token,
            },
        )
    }

    /// Statements up to end of file or a token accepted by `is_terminator`.
    /// A token that starts no statement is reported and skipped.
    fn parse_statement_list(&mut self, is_terminator: fn(SyntaxKind) -> bool) -> NodeList {
        let list_pos = self.token_pos();
        let mut statements = Vec::new();

        while !self.is_token(SyntaxKind::EndOfFileToken) && !is_terminator(self.token()) {
            let consumed = self.tokens.len();
            let statement = self.parse_statement();
            if statement.is_some() {
                statements.push(statement);
            }
            if self.tokens.len() == consumed {
                self.parse_error_at_current_token(
                    "Declaration or statement expected.",
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                );
                self.next_token();
            }
        }

        self.make_node_list(statements, list_pos, self.node_end())
    }

    // =========================================================================
    // Parse Methods - Statements
    // =========================================================================

    pub fn parse_statement(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let statement = match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                self.parse_variable_statement()
            }
            SyntaxKind::SemicolonToken => {
                let start_pos = self.token_pos();
                let end_pos = self.token_end();
                self.next_token();
                self.arena
                    .add_token(syntax_kind_ext::EMPTY_STATEMENT, start_pos, end_pos)
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::WithKeyword => self.parse_with_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::BreakKeyword | SyntaxKind::ContinueKeyword => {
                self.parse_break_or_continue_statement()
            }
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(),
            _ if self.is_start_of_expression() => self.parse_expression_statement(),
            _ => {
                self.parse_error_at_current_token(
                    "Declaration or statement expected.",
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                );
                NodeIndex::NONE
            }
        };

        self.exit_recursion();
        statement
    }

    pub(crate) fn parse_block(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);

        let statements = self.parse_statement_list(|kind| kind == SyntaxKind::CloseBraceToken);
        let multi_line = self.has_preceding_line_break();
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let end_pos = self.node_end();

        self.arena.add_block(
            syntax_kind_ext::BLOCK,
            start_pos,
            end_pos,
            BlockData {
                statements,
                multi_line,
            },
        )
    }

    /// `var`/`let`/`const` with one or more declarators.
    fn parse_variable_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let flags = match self.token() {
            SyntaxKind::LetKeyword => node_flags::LET,
            SyntaxKind::ConstKeyword => node_flags::CONST,
            _ => node_flags::NONE,
        };
        self.next_token();

        let list_pos = self.token_pos();
        let mut declarations = Vec::new();
        loop {
            let decl_start = self.token_pos();
            let name = self.parse_identifier();
            if name.is_none() {
                break;
            }
            let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                let initializer = self.parse_assignment_expression();
                if initializer.is_none() {
                    self.error_expression_expected();
                }
                initializer
            } else {
                NodeIndex::NONE
            };
            let decl_end = self.node_end();
            declarations.push(self.arena.add_variable_declaration(
                syntax_kind_ext::VARIABLE_DECLARATION,
                decl_start,
                decl_end,
                VariableDeclarationData { name, initializer },
            ));

            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let declarations = self.make_node_list(declarations, list_pos, self.node_end());

        self.parse_semicolon();
        let end_pos = self.node_end();

        self.arena.add_variable(
            syntax_kind_ext::VARIABLE_STATEMENT,
            start_pos,
            end_pos,
            flags,
            VariableData { declarations },
        )
    }

    fn parse_expression_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let expression = self.parse_expression();
        if expression.is_none() {
            return NodeIndex::NONE;
        }
        self.parse_semicolon();
        let end_pos = self.node_end();

        self.arena.add_expr_statement(
            syntax_kind_ext::EXPRESSION_STATEMENT,
            start_pos,
            end_pos,
            ExprStatementData { expression },
        )
    }

    /// `( expression )` of if/while/do/switch/with.
    fn parse_parenthesized_condition(&mut self) -> NodeIndex {
        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression();
        if expression.is_none() {
            self.error_expression_expected();
        }
        self.parse_expected(SyntaxKind::CloseParenToken);
        expression
    }

    fn parse_if_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::IfKeyword);
        let expression = self.parse_parenthesized_condition();
        let then_statement = self.parse_statement();
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            self.parse_statement()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.node_end();

        self.arena.add_if_statement(
            syntax_kind_ext::IF_STATEMENT,
            start_pos,
            end_pos,
            IfStatementData {
                expression,
                then_statement,
                else_statement,
            },
        )
    }

    fn parse_while_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::WhileKeyword);
        let condition = self.parse_parenthesized_condition();
        let statement = self.parse_statement();
        let end_pos = self.node_end();

        self.arena.add_loop(
            syntax_kind_ext::WHILE_STATEMENT,
            start_pos,
            end_pos,
            LoopData {
                condition,
                statement,
            },
        )
    }

    fn parse_do_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::DoKeyword);
        let statement = self.parse_statement();
        self.parse_expected(SyntaxKind::WhileKeyword);
        let condition = self.parse_parenthesized_condition();
        // `do x; while (y) z` is valid: the `;` is optional here.
        self.parse_optional(SyntaxKind::SemicolonToken);
        let end_pos = self.node_end();

        self.arena.add_loop(
            syntax_kind_ext::DO_STATEMENT,
            start_pos,
            end_pos,
            LoopData {
                condition,
                statement,
            },
        )
    }

    fn parse_switch_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::SwitchKeyword);
        let expression = self.parse_parenthesized_condition();

        self.parse_expected(SyntaxKind::OpenBraceToken);
        let clauses_pos = self.token_pos();
        let mut clauses = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let clause_start = self.token_pos();
            let (kind, test) = match self.token() {
                SyntaxKind::CaseKeyword => {
                    self.next_token();
                    let test = self.parse_expression();
                    if test.is_none() {
                        self.error_expression_expected();
                    }
                    (syntax_kind_ext::CASE_CLAUSE, test)
                }
                SyntaxKind::DefaultKeyword => {
                    self.next_token();
                    (syntax_kind_ext::DEFAULT_CLAUSE, NodeIndex::NONE)
                }
                _ => {
                    self.parse_error_at_current_token(
                        "'case' or 'default' expected.",
                        diagnostic_codes::EXPECTED,
                    );
                    self.next_token();
                    continue;
                }
            };
            self.parse_expected(SyntaxKind::ColonToken);
            let statements = self.parse_statement_list(|kind| {
                matches!(
                    kind,
                    SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword | SyntaxKind::CloseBraceToken
                )
            });
            let clause_end = self.node_end();
            clauses.push(self.arena.add_case_clause(
                kind,
                clause_start,
                clause_end,
                CaseClauseData {
                    expression: test,
                    statements,
                },
            ));
        }
        let clauses = self.make_node_list(clauses, clauses_pos, self.token_pos());
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let end_pos = self.node_end();

        self.arena.add_switch(
            syntax_kind_ext::SWITCH_STATEMENT,
            start_pos,
            end_pos,
            SwitchData {
                expression,
                clauses,
            },
        )
    }

    fn parse_with_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::WithKeyword);
        let expression = self.parse_parenthesized_condition();
        let statement = self.parse_statement();
        let end_pos = self.node_end();

        self.arena.add_with(
            syntax_kind_ext::WITH_STATEMENT,
            start_pos,
            end_pos,
            WithData {
                expression,
                statement,
            },
        )
    }

    fn parse_return_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        if self.context_flags & CONTEXT_FLAG_IN_FUNCTION == 0 {
            self.parse_error_at_current_token(
                "A 'return' statement can only be used within a function body.",
                diagnostic_codes::RETURN_OUTSIDE_FUNCTION,
            );
        }
        self.parse_expected(SyntaxKind::ReturnKeyword);

        let expression = if self.can_parse_semicolon() {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_semicolon();
        let end_pos = self.node_end();

        self.arena.add_return(
            syntax_kind_ext::RETURN_STATEMENT,
            start_pos,
            end_pos,
            ReturnData { expression },
        )
    }

    fn parse_throw_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ThrowKeyword);
        let expression = self.parse_expression();
        if expression.is_none() {
            self.error_expression_expected();
        }
        self.parse_semicolon();
        let end_pos = self.node_end();

        self.arena.add_return(
            syntax_kind_ext::THROW_STATEMENT,
            start_pos,
            end_pos,
            ReturnData { expression },
        )
    }

    fn parse_break_or_continue_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let kind = if self.is_token(SyntaxKind::BreakKeyword) {
            syntax_kind_ext::BREAK_STATEMENT
        } else {
            syntax_kind_ext::CONTINUE_STATEMENT
        };
        self.next_token();

        let label = if self.is_token(SyntaxKind::Identifier) && !self.has_preceding_line_break() {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };
        self.parse_semicolon();
        let end_pos = self.node_end();

        self.arena
            .add_jump(kind, start_pos, end_pos, JumpData { label })
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn parse_function_declaration(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let name = self.parse_identifier();
        let parameters = self.parse_parameter_list();
        let body = self.parse_function_body();
        let end_pos = self.node_end();

        self.arena.add_function(
            syntax_kind_ext::FUNCTION_DECLARATION,
            start_pos,
            end_pos,
            FunctionData {
                name,
                parameters,
                body,
            },
        )
    }

    /// `( a, b = 1 )`
    pub(crate) fn parse_parameter_list(&mut self) -> NodeList {
        let list_pos = self.token_pos();
        let mut parameters = Vec::new();
        let mut has_trailing_comma = false;

        if self.parse_expected(SyntaxKind::OpenParenToken) {
            while !self.is_token(SyntaxKind::CloseParenToken)
                && !self.is_token(SyntaxKind::EndOfFileToken)
            {
                let param_start = self.token_pos();
                let name = self.parse_identifier();
                if name.is_none() {
                    break;
                }
                let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                    let initializer = self.parse_assignment_expression();
                    if initializer.is_none() {
                        self.error_expression_expected();
                    }
                    initializer
                } else {
                    NodeIndex::NONE
                };
                let param_end = self.node_end();
                parameters.push(self.arena.add_parameter(
                    syntax_kind_ext::PARAMETER,
                    param_start,
                    param_end,
                    ParameterData { name, initializer },
                ));

                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
                has_trailing_comma = self.is_token(SyntaxKind::CloseParenToken);
            }
            self.parse_expected(SyntaxKind::CloseParenToken);
        }

        let mut list = self.make_node_list(parameters, list_pos, self.node_end());
        list.has_trailing_comma = has_trailing_comma;
        list
    }

    /// Block body with `return` allowed.
    pub(crate) fn parse_function_body(&mut self) -> NodeIndex {
        if !self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_expected(SyntaxKind::OpenBraceToken);
            return NodeIndex::NONE;
        }

        let saved_flags = self.context_flags;
        self.context_flags |= CONTEXT_FLAG_IN_FUNCTION;
        let body = self.parse_block();
        self.context_flags = saved_flags;
        body
    }
}
