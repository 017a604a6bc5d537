//! Token kinds produced by the scanner.
//!
//! Node kinds that are not tokens live in `lintkit_parser::syntax_kind_ext`
//! and start at [`SyntaxKind::FIRST_NODE`], so both share one `u16` space.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::LazyLock;

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    QuestionQuestionToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,

    // Identifiers
    Identifier,

    // Keywords
    BreakKeyword,
    CaseKeyword,
    ConstKeyword,
    ContinueKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    FalseKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    LetKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, SyntaxKind>> = LazyLock::new(|| {
    use SyntaxKind::*;
    [
        ("break", BreakKeyword),
        ("case", CaseKeyword),
        ("const", ConstKeyword),
        ("continue", ContinueKeyword),
        ("default", DefaultKeyword),
        ("delete", DeleteKeyword),
        ("do", DoKeyword),
        ("else", ElseKeyword),
        ("false", FalseKeyword),
        ("function", FunctionKeyword),
        ("if", IfKeyword),
        ("import", ImportKeyword),
        ("in", InKeyword),
        ("instanceof", InstanceOfKeyword),
        ("let", LetKeyword),
        ("new", NewKeyword),
        ("null", NullKeyword),
        ("return", ReturnKeyword),
        ("switch", SwitchKeyword),
        ("this", ThisKeyword),
        ("throw", ThrowKeyword),
        ("true", TrueKeyword),
        ("typeof", TypeOfKeyword),
        ("var", VarKeyword),
        ("void", VoidKeyword),
        ("while", WhileKeyword),
        ("with", WithKeyword),
    ]
    .into_iter()
    .collect()
});

impl SyntaxKind {
    /// First value available for node kinds (see `syntax_kind_ext`).
    pub const FIRST_NODE: u16 = 200;

    /// Look up the keyword kind for an identifier text.
    pub fn keyword_from_text(text: &str) -> Option<SyntaxKind> {
        KEYWORDS.get(text).copied()
    }

    /// Convert a raw `u16` kind back to a token kind.
    ///
    /// Returns `None` for node kinds and out-of-range values.
    pub fn try_from_u16(value: u16) -> Option<SyntaxKind> {
        if value > SyntaxKind::WithKeyword as u16 {
            return None;
        }
        ALL_KINDS.get(value as usize).copied()
    }

    pub const fn is_keyword(self) -> bool {
        (self as u16) >= (SyntaxKind::BreakKeyword as u16)
            && (self as u16) <= (SyntaxKind::WithKeyword as u16)
    }

    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::NoSubstitutionTemplateLiteral
        )
    }

    pub const fn is_template_part(self) -> bool {
        matches!(
            self,
            SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead
                | SyntaxKind::TemplateMiddle
                | SyntaxKind::TemplateTail
        )
    }

    pub const fn is_assignment_operator(self) -> bool {
        (self as u16) >= (SyntaxKind::EqualsToken as u16)
            && (self as u16) <= (SyntaxKind::QuestionQuestionEqualsToken as u16)
    }

    pub const fn is_logical_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::AmpersandAmpersandToken
                | SyntaxKind::BarBarToken
                | SyntaxKind::QuestionQuestionToken
        )
    }

    /// Operators that bind tighter than `+`/`-`.
    pub const fn is_multiplicative_or_exponent_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::AsteriskToken
                | SyntaxKind::SlashToken
                | SyntaxKind::PercentToken
                | SyntaxKind::AsteriskAsteriskToken
        )
    }

    /// Source text of fixed-text tokens, `None` for literals and identifiers.
    pub const fn text(self) -> Option<&'static str> {
        use SyntaxKind::*;
        let text = match self {
            OpenBraceToken => "{",
            CloseBraceToken => "}",
            OpenParenToken => "(",
            CloseParenToken => ")",
            OpenBracketToken => "[",
            CloseBracketToken => "]",
            DotToken => ".",
            DotDotDotToken => "...",
            SemicolonToken => ";",
            CommaToken => ",",
            QuestionDotToken => "?.",
            LessThanToken => "<",
            GreaterThanToken => ">",
            LessThanEqualsToken => "<=",
            GreaterThanEqualsToken => ">=",
            EqualsEqualsToken => "==",
            ExclamationEqualsToken => "!=",
            EqualsEqualsEqualsToken => "===",
            ExclamationEqualsEqualsToken => "!==",
            EqualsGreaterThanToken => "=>",
            PlusToken => "+",
            MinusToken => "-",
            AsteriskToken => "*",
            AsteriskAsteriskToken => "**",
            SlashToken => "/",
            PercentToken => "%",
            PlusPlusToken => "++",
            MinusMinusToken => "--",
            LessThanLessThanToken => "<<",
            GreaterThanGreaterThanToken => ">>",
            GreaterThanGreaterThanGreaterThanToken => ">>>",
            AmpersandToken => "&",
            BarToken => "|",
            CaretToken => "^",
            ExclamationToken => "!",
            TildeToken => "~",
            AmpersandAmpersandToken => "&&",
            BarBarToken => "||",
            QuestionToken => "?",
            ColonToken => ":",
            QuestionQuestionToken => "??",
            EqualsToken => "=",
            PlusEqualsToken => "+=",
            MinusEqualsToken => "-=",
            AsteriskEqualsToken => "*=",
            AsteriskAsteriskEqualsToken => "**=",
            SlashEqualsToken => "/=",
            PercentEqualsToken => "%=",
            LessThanLessThanEqualsToken => "<<=",
            GreaterThanGreaterThanEqualsToken => ">>=",
            GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            AmpersandEqualsToken => "&=",
            BarEqualsToken => "|=",
            CaretEqualsToken => "^=",
            BarBarEqualsToken => "||=",
            AmpersandAmpersandEqualsToken => "&&=",
            QuestionQuestionEqualsToken => "??=",
            BreakKeyword => "break",
            CaseKeyword => "case",
            ConstKeyword => "const",
            ContinueKeyword => "continue",
            DefaultKeyword => "default",
            DeleteKeyword => "delete",
            DoKeyword => "do",
            ElseKeyword => "else",
            FalseKeyword => "false",
            FunctionKeyword => "function",
            IfKeyword => "if",
            ImportKeyword => "import",
            InKeyword => "in",
            InstanceOfKeyword => "instanceof",
            LetKeyword => "let",
            NewKeyword => "new",
            NullKeyword => "null",
            ReturnKeyword => "return",
            SwitchKeyword => "switch",
            ThisKeyword => "this",
            ThrowKeyword => "throw",
            TrueKeyword => "true",
            TypeOfKeyword => "typeof",
            VarKeyword => "var",
            VoidKeyword => "void",
            WhileKeyword => "while",
            WithKeyword => "with",
            _ => return None,
        };
        Some(text)
    }
}

/// Every token kind, indexed by discriminant.
const ALL_KINDS: [SyntaxKind; SyntaxKind::WithKeyword as usize + 1] = {
    use SyntaxKind::*;
    [
        Unknown,
        EndOfFileToken,
        NumericLiteral,
        StringLiteral,
        NoSubstitutionTemplateLiteral,
        TemplateHead,
        TemplateMiddle,
        TemplateTail,
        OpenBraceToken,
        CloseBraceToken,
        OpenParenToken,
        CloseParenToken,
        OpenBracketToken,
        CloseBracketToken,
        DotToken,
        DotDotDotToken,
        SemicolonToken,
        CommaToken,
        QuestionDotToken,
        LessThanToken,
        GreaterThanToken,
        LessThanEqualsToken,
        GreaterThanEqualsToken,
        EqualsEqualsToken,
        ExclamationEqualsToken,
        EqualsEqualsEqualsToken,
        ExclamationEqualsEqualsToken,
        EqualsGreaterThanToken,
        PlusToken,
        MinusToken,
        AsteriskToken,
        AsteriskAsteriskToken,
        SlashToken,
        PercentToken,
        PlusPlusToken,
        MinusMinusToken,
        LessThanLessThanToken,
        GreaterThanGreaterThanToken,
        GreaterThanGreaterThanGreaterThanToken,
        AmpersandToken,
        BarToken,
        CaretToken,
        ExclamationToken,
        TildeToken,
        AmpersandAmpersandToken,
        BarBarToken,
        QuestionToken,
        ColonToken,
        QuestionQuestionToken,
        EqualsToken,
        PlusEqualsToken,
        MinusEqualsToken,
        AsteriskEqualsToken,
        AsteriskAsteriskEqualsToken,
        SlashEqualsToken,
        PercentEqualsToken,
        LessThanLessThanEqualsToken,
        GreaterThanGreaterThanEqualsToken,
        GreaterThanGreaterThanGreaterThanEqualsToken,
        AmpersandEqualsToken,
        BarEqualsToken,
        CaretEqualsToken,
        BarBarEqualsToken,
        AmpersandAmpersandEqualsToken,
        QuestionQuestionEqualsToken,
        Identifier,
        BreakKeyword,
        CaseKeyword,
        ConstKeyword,
        ContinueKeyword,
        DefaultKeyword,
        DeleteKeyword,
        DoKeyword,
        ElseKeyword,
        FalseKeyword,
        FunctionKeyword,
        IfKeyword,
        ImportKeyword,
        InKeyword,
        InstanceOfKeyword,
        LetKeyword,
        NewKeyword,
        NullKeyword,
        ReturnKeyword,
        SwitchKeyword,
        ThisKeyword,
        ThrowKeyword,
        TrueKeyword,
        TypeOfKeyword,
        VarKeyword,
        VoidKeyword,
        WhileKeyword,
        WithKeyword,
    ]
};
