//! Parser state - expression parsing methods

use super::node::*;
use super::state::{ParserState, diagnostic_codes};
use super::{NodeIndex, NodeList, node_flags, syntax_kind_ext};
use lintkit_scanner::{SyntaxKind, token_flags};

impl ParserState {
    // =========================================================================
    // Parse Methods - Expressions
    // =========================================================================

    /// Parse an expression (including comma operator)
    pub fn parse_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut left = self.parse_assignment_expression();
        if left.is_none() {
            return left;
        }

        while self.is_token(SyntaxKind::CommaToken) {
            self.next_token();
            let right = self.parse_assignment_expression();
            if right.is_none() {
                self.error_expression_expected();
                break;
            }
            let end_pos = self.node_end();

            left = self.arena.add_binary_expr(
                syntax_kind_ext::BINARY_EXPRESSION,
                start_pos,
                end_pos,
                BinaryExprData {
                    left,
                    operator_token: SyntaxKind::CommaToken as u16,
                    right,
                },
            );
        }

        left
    }

    /// Parse assignment expression (no comma operator)
    pub(crate) fn parse_assignment_expression(&mut self) -> NodeIndex {
        if self.is_start_of_arrow_function() {
            return self.parse_arrow_function_expression();
        }
        // Precedence 1 is the comma operator, handled by `parse_expression`.
        self.parse_binary_expression(2)
    }

    pub(crate) fn is_start_of_expression(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::Identifier
                | SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::TildeToken
                | SyntaxKind::ExclamationToken
                | SyntaxKind::PlusPlusToken
                | SyntaxKind::MinusMinusToken
                | SyntaxKind::TypeOfKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::DeleteKeyword
                | SyntaxKind::ThisKeyword
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::ImportKeyword
        )
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    /// `x => ...` or `(a, b = 1) => ...`
    fn is_start_of_arrow_function(&mut self) -> bool {
        match self.token() {
            SyntaxKind::Identifier => self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::EqualsGreaterThanToken) && !p.has_preceding_line_break()
            }),
            SyntaxKind::OpenParenToken => {
                self.look_ahead(ParserState::look_ahead_is_parenthesized_arrow)
            }
            _ => false,
        }
    }

    /// Token-level check for `( ident [= default], ... ) =>`.
    fn look_ahead_is_parenthesized_arrow(&mut self) -> bool {
        self.next_token();
        loop {
            match self.token() {
                SyntaxKind::CloseParenToken => break,
                SyntaxKind::Identifier => {
                    self.next_token();
                    if self.is_token(SyntaxKind::EqualsToken) {
                        self.next_token();
                        if !self.skip_parameter_initializer() {
                            return false;
                        }
                    }
                    match self.token() {
                        SyntaxKind::CommaToken => {
                            self.next_token();
                        }
                        SyntaxKind::CloseParenToken => break,
                        _ => return false,
                    }
                }
                _ => return false,
            }
        }
        self.next_token();
        self.is_token(SyntaxKind::EqualsGreaterThanToken)
    }

    /// Skip a default value up to the `,` or `)` that ends the parameter.
    fn skip_parameter_initializer(&mut self) -> bool {
        let mut depth = 0u32;
        loop {
            match self.token() {
                SyntaxKind::CommaToken | SyntaxKind::CloseParenToken if depth == 0 => return true,
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                SyntaxKind::EndOfFileToken | SyntaxKind::TemplateHead => return false,
                _ => {}
            }
            self.next_token();
        }
    }

    fn parse_arrow_function_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let start_pos = self.token_pos();
        let parameters = if self.is_token(SyntaxKind::Identifier) {
            let name = self.parse_identifier();
            let end_pos = self.node_end();
            let parameter = self.arena.add_parameter(
                syntax_kind_ext::PARAMETER,
                start_pos,
                end_pos,
                ParameterData {
                    name,
                    initializer: NodeIndex::NONE,
                },
            );
            self.make_node_list(vec![parameter], start_pos, end_pos)
        } else {
            self.parse_parameter_list()
        };

        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);

        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_function_body()
        } else {
            let body = self.parse_assignment_expression();
            if body.is_none() {
                self.error_expression_expected();
            }
            body
        };
        let end_pos = self.node_end();

        self.exit_recursion();

        self.arena.add_function(
            syntax_kind_ext::ARROW_FUNCTION,
            start_pos,
            end_pos,
            FunctionData {
                name: NodeIndex::NONE,
                parameters,
                body,
            },
        )
    }

    // =========================================================================
    // Binary / conditional
    // =========================================================================

    /// Binding power of a binary operator; 0 for tokens that are not one.
    pub(crate) fn get_operator_precedence(op: SyntaxKind) -> u8 {
        match op {
            _ if op.is_assignment_operator() => 2,
            SyntaxKind::QuestionToken => 3,
            SyntaxKind::QuestionQuestionToken => 4,
            SyntaxKind::BarBarToken => 5,
            SyntaxKind::AmpersandAmpersandToken => 6,
            SyntaxKind::BarToken => 7,
            SyntaxKind::CaretToken => 8,
            SyntaxKind::AmpersandToken => 9,
            SyntaxKind::EqualsEqualsToken
            | SyntaxKind::ExclamationEqualsToken
            | SyntaxKind::EqualsEqualsEqualsToken
            | SyntaxKind::ExclamationEqualsEqualsToken => 10,
            SyntaxKind::LessThanToken
            | SyntaxKind::GreaterThanToken
            | SyntaxKind::LessThanEqualsToken
            | SyntaxKind::GreaterThanEqualsToken
            | SyntaxKind::InstanceOfKeyword
            | SyntaxKind::InKeyword => 11,
            SyntaxKind::LessThanLessThanToken
            | SyntaxKind::GreaterThanGreaterThanToken
            | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => 12,
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => 13,
            SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => 14,
            SyntaxKind::AsteriskAsteriskToken => 15,
            _ => 0,
        }
    }

    /// Precedence climbing over binary operators, assignments and the
    /// conditional operator.
    pub(crate) fn parse_binary_expression(&mut self, min_precedence: u8) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let start_pos = self.token_pos();
        let mut left = self.parse_unary_expression();
        if left.is_none() {
            self.exit_recursion();
            return left;
        }

        loop {
            let op = self.token();
            let precedence = Self::get_operator_precedence(op);
            if precedence == 0 || precedence < min_precedence {
                break;
            }

            let operator_token = op as u16;
            self.next_token();

            if op == SyntaxKind::QuestionToken {
                let when_true = self.parse_assignment_expression();
                if when_true.is_none() {
                    self.error_expression_expected();
                }
                self.parse_expected(SyntaxKind::ColonToken);
                let when_false = self.parse_assignment_expression();
                if when_false.is_none() {
                    self.error_expression_expected();
                }
                let end_pos = self.node_end();

                left = self.arena.add_conditional_expr(
                    syntax_kind_ext::CONDITIONAL_EXPRESSION,
                    start_pos,
                    end_pos,
                    ConditionalExprData {
                        condition: left,
                        when_true,
                        when_false,
                    },
                );
                continue;
            }

            // Assignment and exponentiation are right associative.
            let right = if op.is_assignment_operator() {
                self.parse_assignment_expression()
            } else {
                let next_min = if op == SyntaxKind::AsteriskAsteriskToken {
                    precedence
                } else {
                    precedence + 1
                };
                self.parse_binary_expression(next_min)
            };
            if right.is_none() {
                // a + [missing]
                self.error_expression_expected();
                break;
            }
            let end_pos = self.node_end();

            left = self.arena.add_binary_expr(
                syntax_kind_ext::BINARY_EXPRESSION,
                start_pos,
                end_pos,
                BinaryExprData {
                    left,
                    operator_token,
                    right,
                },
            );
        }

        self.exit_recursion();
        left
    }

    // =========================================================================
    // Unary / postfix
    // =========================================================================

    pub(crate) fn parse_unary_expression(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken => {
                if !self.enter_recursion() {
                    return NodeIndex::NONE;
                }
                let start_pos = self.token_pos();
                let operator = self.token() as u16;
                self.next_token();

                let operand = self.parse_unary_expression();
                if operand.is_none() {
                    self.error_expression_expected();
                }
                let end_pos = self.node_end();
                self.exit_recursion();

                self.arena.add_unary_expr(
                    syntax_kind_ext::PREFIX_UNARY_EXPRESSION,
                    start_pos,
                    end_pos,
                    UnaryExprData { operator, operand },
                )
            }
            _ => self.parse_postfix_expression(),
        }
    }

    fn parse_postfix_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let expression = self.parse_left_hand_side_expression();

        // `a \n ++b` is two statements.
        if expression.is_some()
            && (self.is_token(SyntaxKind::PlusPlusToken)
                || self.is_token(SyntaxKind::MinusMinusToken))
            && !self.has_preceding_line_break()
        {
            let operator = self.token() as u16;
            self.next_token();
            let end_pos = self.node_end();
            return self.arena.add_unary_expr(
                syntax_kind_ext::POSTFIX_UNARY_EXPRESSION,
                start_pos,
                end_pos,
                UnaryExprData {
                    operator,
                    operand: expression,
                },
            );
        }

        expression
    }

    // =========================================================================
    // Left-hand side: new, calls, member access
    // =========================================================================

    pub(crate) fn parse_left_hand_side_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let expression = if self.is_token(SyntaxKind::NewKeyword) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        };
        if expression.is_none() {
            return expression;
        }
        self.parse_member_expression_rest(start_pos, expression, true)
    }

    /// `new Callee` or `new Callee(args)`. Calls are not part of the callee:
    /// `new a.b()` constructs `a.b`.
    fn parse_new_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::NewKeyword);

        let callee_start = self.token_pos();
        let mut callee = if self.is_token(SyntaxKind::NewKeyword) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        };
        if callee.is_some() {
            callee = self.parse_member_expression_rest(callee_start, callee, false);
        } else {
            self.error_expression_expected();
        }

        let arguments = if self.is_token(SyntaxKind::OpenParenToken) {
            Some(self.parse_argument_list())
        } else {
            None
        };
        let end_pos = self.node_end();

        self.exit_recursion();

        self.arena.add_call_expr(
            syntax_kind_ext::NEW_EXPRESSION,
            start_pos,
            end_pos,
            CallExprData {
                expression: callee,
                arguments,
            },
        )
    }

    fn parse_member_expression_rest(
        &mut self,
        start_pos: u32,
        mut expr: NodeIndex,
        allow_call: bool,
    ) -> NodeIndex {
        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name = self.parse_identifier_name();
                    if name.is_none() {
                        break;
                    }
                    expr = self.add_access(
                        syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
                        start_pos,
                        expr,
                        name,
                        false,
                    );
                }
                SyntaxKind::OpenBracketToken => {
                    let argument = self.parse_element_access_argument();
                    expr = self.add_access(
                        syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION,
                        start_pos,
                        expr,
                        argument,
                        false,
                    );
                }
                SyntaxKind::OpenParenToken if allow_call => {
                    expr = self.add_call(start_pos, expr, false);
                }
                // Optional chaining: expr?.prop, expr?.[index], expr?.()
                SyntaxKind::QuestionDotToken if allow_call => {
                    self.next_token();
                    if self.is_token(SyntaxKind::OpenBracketToken) {
                        let argument = self.parse_element_access_argument();
                        expr = self.add_access(
                            syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION,
                            start_pos,
                            expr,
                            argument,
                            true,
                        );
                    } else if self.is_token(SyntaxKind::OpenParenToken) {
                        expr = self.add_call(start_pos, expr, true);
                    } else {
                        let name = self.parse_identifier_name();
                        if name.is_none() {
                            break;
                        }
                        expr = self.add_access(
                            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
                            start_pos,
                            expr,
                            name,
                            true,
                        );
                    }
                }
                _ => break,
            }
        }
        expr
    }

    /// `[argument]` of an element access.
    fn parse_element_access_argument(&mut self) -> NodeIndex {
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let argument = self.parse_expression();
        if argument.is_none() {
            // obj[[missing]]
            self.error_expression_expected();
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);
        argument
    }

    fn add_access(
        &mut self,
        kind: u16,
        start_pos: u32,
        expression: NodeIndex,
        name_or_argument: NodeIndex,
        question_dot_token: bool,
    ) -> NodeIndex {
        let end_pos = self.node_end();
        self.arena.add_access_expr(
            kind,
            start_pos,
            end_pos,
            AccessExprData {
                expression,
                name_or_argument,
                question_dot_token,
            },
        )
    }

    /// Parse the argument list at `(` and build the call node.
    fn add_call(&mut self, start_pos: u32, callee: NodeIndex, optional: bool) -> NodeIndex {
        let arguments = self.parse_argument_list();
        let end_pos = self.node_end();

        let is_optional_chain = optional
            || self
                .arena
                .get(callee)
                .and_then(|callee_node| self.arena.get_access_expr(callee_node))
                .is_some_and(|access| access.question_dot_token);

        let call_expr = self.arena.add_call_expr(
            syntax_kind_ext::CALL_EXPRESSION,
            start_pos,
            end_pos,
            CallExprData {
                expression: callee,
                arguments: Some(arguments),
            },
        );
        if is_optional_chain {
            if let Some(call_node) = self.arena.get_mut(call_expr) {
                call_node.flags |= node_flags::OPTIONAL_CHAIN as u16;
            }
        }
        call_expr
    }

    /// Parse `( args )`, including both parentheses.
    pub(crate) fn parse_argument_list(&mut self) -> NodeList {
        let list_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenParenToken);

        let mut arguments = Vec::new();
        let mut has_trailing_comma = false;
        if self.enter_recursion() {
            while !self.is_token(SyntaxKind::CloseParenToken)
                && !self.is_token(SyntaxKind::EndOfFileToken)
            {
                let argument = if self.is_token(SyntaxKind::DotDotDotToken) {
                    self.parse_spread_element()
                } else {
                    self.parse_assignment_expression()
                };
                if argument.is_none() {
                    self.parse_error_at_current_token(
                        "Argument expression expected.",
                        diagnostic_codes::ARGUMENT_EXPRESSION_EXPECTED,
                    );
                    break;
                }
                arguments.push(argument);

                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
                has_trailing_comma = self.is_token(SyntaxKind::CloseParenToken);
            }
            self.exit_recursion();
        }

        self.parse_expected(SyntaxKind::CloseParenToken);
        let mut list = self.make_node_list(arguments, list_pos, self.node_end());
        list.has_trailing_comma = has_trailing_comma;
        list
    }

    fn parse_spread_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::DotDotDotToken);
        let expression = self.parse_assignment_expression();
        if expression.is_none() {
            self.error_expression_expected();
        }
        let end_pos = self.node_end();
        self.arena.add_spread(
            syntax_kind_ext::SPREAD_ELEMENT,
            start_pos,
            end_pos,
            SpreadData { expression },
        )
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    pub(crate) fn parse_primary_expression(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::Identifier => self.parse_identifier(),
            SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral => self.parse_literal(),
            SyntaxKind::TemplateHead => self.parse_template_expression(),
            SyntaxKind::ThisKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => {
                let kind = self.token() as u16;
                let start_pos = self.token_pos();
                let end_pos = self.token_end();
                self.next_token();
                self.arena.add_token(kind, start_pos, end_pos)
            }
            SyntaxKind::OpenParenToken => self.parse_parenthesized_expression(),
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::FunctionKeyword => self.parse_function_expression(),
            SyntaxKind::ImportKeyword => self.parse_import_expression(),
            _ => {
                self.error_expression_expected();
                NodeIndex::NONE
            }
        }
    }

    /// Grouping parentheses produce no node: the inner expression is
    /// returned as is and the parentheses stay in the token stream.
    fn parse_parenthesized_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression();
        if expression.is_none() {
            self.error_expression_expected();
        }
        self.parse_expected(SyntaxKind::CloseParenToken);

        self.exit_recursion();
        expression
    }

    pub(crate) fn parse_identifier(&mut self) -> NodeIndex {
        if !self.is_token(SyntaxKind::Identifier) {
            self.error_identifier_expected();
            return NodeIndex::NONE;
        }
        self.parse_identifier_name()
    }

    /// Identifier or keyword used as a name (`a.default`, `{ if: 1 }`).
    pub(crate) fn parse_identifier_name(&mut self) -> NodeIndex {
        if !self.is_token(SyntaxKind::Identifier) && !self.token().is_keyword() {
            self.error_identifier_expected();
            return NodeIndex::NONE;
        }
        let start_pos = self.token_pos();
        let end_pos = self.token_end();
        let escaped_text = self.token_value().to_string();
        self.next_token();
        self.arena.add_identifier(
            SyntaxKind::Identifier as u16,
            start_pos,
            end_pos,
            IdentifierData { escaped_text },
        )
    }

    /// String, numeric, no-substitution template and template-part literals.
    pub(crate) fn parse_literal(&mut self) -> NodeIndex {
        let kind = self.token();
        let start_pos = self.token_pos();
        let end_pos = self.token_end();
        let text = self.token_value().to_string();
        let value = if kind == SyntaxKind::NumericLiteral {
            self.numeric_literal_value(start_pos, &text)
        } else {
            None
        };
        self.next_token();
        self.arena
            .add_literal(kind as u16, start_pos, end_pos, LiteralData { text, value })
    }

    fn numeric_literal_value(&self, start_pos: u32, digits: &str) -> Option<f64> {
        if self.scanner.get_token_flags() & token_flags::NON_DECIMAL_NUMBER == 0 {
            return digits.parse::<f64>().ok();
        }
        let radix = match self
            .get_source_text()
            .as_bytes()
            .get(start_pos as usize + 1)
        {
            Some(b'x' | b'X') => 16,
            Some(b'o' | b'O') => 8,
            Some(b'b' | b'B') => 2,
            _ => return None,
        };
        u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
    }

    /// `head${expr}middle${expr}tail`
    fn parse_template_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let start_pos = self.token_pos();
        let head = self.parse_literal();
        let spans_pos = self.token_pos();
        let mut spans = Vec::new();

        loop {
            let span_start = self.token_pos();
            let expression = self.parse_expression();
            if expression.is_none() {
                // `${}`
                self.error_expression_expected();
            }

            let literal = if self.is_token(SyntaxKind::CloseBraceToken) {
                self.re_scan_template_token();
                self.parse_literal()
            } else {
                self.parse_expected(SyntaxKind::CloseBraceToken);
                self.add_missing_template_tail()
            };
            let is_middle = self
                .arena
                .get(literal)
                .is_some_and(|node| node.kind == SyntaxKind::TemplateMiddle as u16);

            let end_pos = self.node_end();
            spans.push(self.arena.add_template_span(
                syntax_kind_ext::TEMPLATE_SPAN,
                span_start,
                end_pos,
                TemplateSpanData {
                    expression,
                    literal,
                },
            ));

            if !is_middle {
                break;
            }
        }

        let end_pos = self.node_end();
        let template_spans = self.make_node_list(spans, spans_pos, end_pos);
        self.exit_recursion();

        self.arena.add_template_expr(
            syntax_kind_ext::TEMPLATE_EXPRESSION,
            start_pos,
            end_pos,
            TemplateExprData {
                head,
                template_spans,
            },
        )
    }

    /// Empty tail closing a template whose substitution was never closed.
    fn add_missing_template_tail(&mut self) -> NodeIndex {
        let pos = self.node_end();
        let tail = self.arena.add_literal(
            SyntaxKind::TemplateTail as u16,
            pos,
            pos,
            LiteralData {
                text: String::new(),
                value: None,
            },
        );
        if let Some(node) = self.arena.get_mut(tail) {
            node.flags |= node_flags::MISSING as u16;
        }
        tail
    }

    fn parse_array_literal(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let list_pos = self.token_pos();

        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBracketToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            // Elision: [a, , b]
            if self.is_token(SyntaxKind::CommaToken) {
                elements.push(NodeIndex::NONE);
                self.next_token();
                continue;
            }
            let element = if self.is_token(SyntaxKind::DotDotDotToken) {
                self.parse_spread_element()
            } else {
                self.parse_assignment_expression()
            };
            if element.is_none() {
                self.error_expression_expected();
                break;
            }
            elements.push(element);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }

        let multi_line = self.has_preceding_line_break();
        let elements = self.make_node_list(elements, list_pos, self.token_pos());
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let end_pos = self.node_end();
        self.exit_recursion();

        self.arena.add_literal_expr(
            syntax_kind_ext::ARRAY_LITERAL_EXPRESSION,
            start_pos,
            end_pos,
            LiteralExprData {
                elements,
                multi_line,
            },
        )
    }

    fn parse_object_literal(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let list_pos = self.token_pos();

        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let element = self.parse_object_literal_element();
            if element.is_none() {
                break;
            }
            elements.push(element);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }

        let multi_line = self.has_preceding_line_break();
        let elements = self.make_node_list(elements, list_pos, self.token_pos());
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let end_pos = self.node_end();
        self.exit_recursion();

        self.arena.add_literal_expr(
            syntax_kind_ext::OBJECT_LITERAL_EXPRESSION,
            start_pos,
            end_pos,
            LiteralExprData {
                elements,
                multi_line,
            },
        )
    }

    /// `name: value`, shorthand `name`, or `...spread`.
    fn parse_object_literal_element(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::DotDotDotToken) {
            return self.parse_spread_element();
        }

        let start_pos = self.token_pos();
        let name = match self.token() {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => self.parse_literal(),
            kind if kind == SyntaxKind::Identifier || kind.is_keyword() => {
                self.parse_identifier_name()
            }
            _ => {
                self.parse_error_at_current_token(
                    "Property assignment expected.",
                    diagnostic_codes::PROPERTY_ASSIGNMENT_EXPECTED,
                );
                return NodeIndex::NONE;
            }
        };

        let is_identifier_name = self.arena.get(name).is_some_and(|node| node.is_identifier());
        let (kind, initializer) = if self.parse_optional(SyntaxKind::ColonToken) {
            let initializer = self.parse_assignment_expression();
            if initializer.is_none() {
                self.error_expression_expected();
            }
            (syntax_kind_ext::PROPERTY_ASSIGNMENT, initializer)
        } else if is_identifier_name {
            (syntax_kind_ext::SHORTHAND_PROPERTY_ASSIGNMENT, NodeIndex::NONE)
        } else {
            self.parse_expected(SyntaxKind::ColonToken);
            (syntax_kind_ext::PROPERTY_ASSIGNMENT, NodeIndex::NONE)
        };
        let end_pos = self.node_end();

        self.arena.add_property_assignment(
            kind,
            start_pos,
            end_pos,
            PropertyAssignmentData { name, initializer },
        )
    }

    fn parse_function_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let name = if self.is_token(SyntaxKind::Identifier) {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };
        let parameters = self.parse_parameter_list();
        let body = self.parse_function_body();
        let end_pos = self.node_end();

        self.exit_recursion();

        self.arena.add_function(
            syntax_kind_ext::FUNCTION_EXPRESSION,
            start_pos,
            end_pos,
            FunctionData {
                name,
                parameters,
                body,
            },
        )
    }

    /// Dynamic `import(source[, options])`.
    fn parse_import_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ImportKeyword);
        if !self.parse_expected(SyntaxKind::OpenParenToken) {
            return NodeIndex::NONE;
        }

        let source = self.parse_assignment_expression();
        if source.is_none() {
            self.error_expression_expected();
        }
        let mut options = NodeIndex::NONE;
        if self.parse_optional(SyntaxKind::CommaToken)
            && !self.is_token(SyntaxKind::CloseParenToken)
        {
            options = self.parse_assignment_expression();
            if options.is_none() {
                self.error_expression_expected();
            }
            self.parse_optional(SyntaxKind::CommaToken);
        }
        self.parse_expected(SyntaxKind::CloseParenToken);
        let end_pos = self.node_end();

        self.arena.add_import_expr(
            syntax_kind_ext::IMPORT_EXPRESSION,
            start_pos,
            end_pos,
            ImportExprData { source, options },
        )
    }
}
