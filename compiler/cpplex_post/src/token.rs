//! Keyword and operator classification.
//!
//! Identifiers and preprocessing-op-or-punc spellings that denote a
//! fixed token (keywords, operators, alternative operator spellings
//! such as `<%` and `bitand`) map to a [`TokenType`]. Everything else
//! stays an identifier, or is rejected as a stray preprocessing
//! operator (`#`, `##`, `%:`, `%:%:` have no meaning after the
//! preprocessing phases).

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Token types for keywords and operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    KwAlignas,
    KwAlignof,
    KwAsm,
    KwAuto,
    KwBool,
    KwBreak,
    KwCase,
    KwCatch,
    KwChar,
    KwChar16T,
    KwChar32T,
    KwClass,
    KwConst,
    KwConstexpr,
    KwConstCast,
    KwContinue,
    KwDecltype,
    KwDefault,
    KwDelete,
    KwDo,
    KwDouble,
    KwDynamicCast,
    KwElse,
    KwEnum,
    KwExplicit,
    KwExport,
    KwExtern,
    KwFalse,
    KwFloat,
    KwFor,
    KwFriend,
    KwGoto,
    KwIf,
    KwInline,
    KwInt,
    KwLong,
    KwMutable,
    KwNamespace,
    KwNew,
    KwNoexcept,
    KwNullptr,
    KwOperator,
    KwPrivate,
    KwProtected,
    KwPublic,
    KwRegister,
    KwReinterpretCast,
    KwReturn,
    KwShort,
    KwSigned,
    KwSizeof,
    KwStatic,
    KwStaticAssert,
    KwStaticCast,
    KwStruct,
    KwSwitch,
    KwTemplate,
    KwThis,
    KwThreadLocal,
    KwThrow,
    KwTrue,
    KwTry,
    KwTypedef,
    KwTypeid,
    KwTypename,
    KwUnion,
    KwUnsigned,
    KwUsing,
    KwVirtual,
    KwVoid,
    KwVolatile,
    KwWcharT,
    KwWhile,
    OpLBrace,
    OpRBrace,
    OpLSquare,
    OpRSquare,
    OpLParen,
    OpRParen,
    OpBOr,
    OpXor,
    OpCompl,
    OpAmp,
    OpLNot,
    OpSemicolon,
    OpColon,
    OpDots,
    OpQMark,
    OpColon2,
    OpDot,
    OpDotStar,
    OpPlus,
    OpMinus,
    OpStar,
    OpDiv,
    OpMod,
    OpAssign,
    OpLt,
    OpGt,
    OpPlusAssign,
    OpMinusAssign,
    OpStarAssign,
    OpDivAssign,
    OpModAssign,
    OpXorAssign,
    OpAndAssign,
    OpOrAssign,
    OpLShift,
    OpRShift,
    OpRShiftAssign,
    OpLShiftAssign,
    OpEq,
    OpNe,
    OpLe,
    OpGe,
    OpLAnd,
    OpLOr,
    OpInc,
    OpDec,
    OpComma,
    OpArrowStar,
    OpArrow,
}

static TOKEN_TYPES: LazyLock<FxHashMap<&'static str, TokenType>> = LazyLock::new(|| {
    use TokenType::{
        KwAlignas, KwAlignof, KwAsm, KwAuto, KwBool, KwBreak, KwCase, KwCatch, KwChar,
        KwChar16T, KwChar32T, KwClass, KwConst, KwConstCast, KwConstexpr, KwContinue,
        KwDecltype, KwDefault, KwDelete, KwDo, KwDouble, KwDynamicCast, KwElse, KwEnum,
        KwExplicit, KwExport, KwExtern, KwFalse, KwFloat, KwFor, KwFriend, KwGoto, KwIf,
        KwInline, KwInt, KwLong, KwMutable, KwNamespace, KwNew, KwNoexcept, KwNullptr,
        KwOperator, KwPrivate, KwProtected, KwPublic, KwRegister, KwReinterpretCast,
        KwReturn, KwShort, KwSigned, KwSizeof, KwStatic, KwStaticAssert, KwStaticCast,
        KwStruct, KwSwitch, KwTemplate, KwThis, KwThreadLocal, KwThrow, KwTrue, KwTry,
        KwTypedef, KwTypeid, KwTypename, KwUnion, KwUnsigned, KwUsing, KwVirtual, KwVoid,
        KwVolatile, KwWcharT, KwWhile, OpAmp, OpAndAssign, OpArrow, OpArrowStar, OpAssign,
        OpBOr, OpColon, OpColon2, OpComma, OpCompl, OpDec, OpDiv, OpDivAssign, OpDot,
        OpDotStar, OpDots, OpEq, OpGe, OpGt, OpInc, OpLAnd, OpLBrace, OpLNot, OpLOr,
        OpLParen, OpLShift, OpLShiftAssign, OpLSquare, OpLe, OpLt, OpMinus, OpMinusAssign,
        OpMod, OpModAssign, OpNe, OpOrAssign, OpPlus, OpPlusAssign, OpQMark, OpRBrace,
        OpRParen, OpRShift, OpRShiftAssign, OpRSquare, OpSemicolon, OpStar, OpStarAssign,
        OpXor, OpXorAssign,
    };

    let entries: &[(&str, TokenType)] = &[
        ("alignas", KwAlignas),
        ("alignof", KwAlignof),
        ("asm", KwAsm),
        ("auto", KwAuto),
        ("bool", KwBool),
        ("break", KwBreak),
        ("case", KwCase),
        ("catch", KwCatch),
        ("char", KwChar),
        ("char16_t", KwChar16T),
        ("char32_t", KwChar32T),
        ("class", KwClass),
        ("const", KwConst),
        ("constexpr", KwConstexpr),
        ("const_cast", KwConstCast),
        ("continue", KwContinue),
        ("decltype", KwDecltype),
        ("default", KwDefault),
        ("delete", KwDelete),
        ("do", KwDo),
        ("double", KwDouble),
        ("dynamic_cast", KwDynamicCast),
        ("else", KwElse),
        ("enum", KwEnum),
        ("explicit", KwExplicit),
        ("export", KwExport),
        ("extern", KwExtern),
        ("false", KwFalse),
        ("float", KwFloat),
        ("for", KwFor),
        ("friend", KwFriend),
        ("goto", KwGoto),
        ("if", KwIf),
        ("inline", KwInline),
        ("int", KwInt),
        ("long", KwLong),
        ("mutable", KwMutable),
        ("namespace", KwNamespace),
        ("new", KwNew),
        ("noexcept", KwNoexcept),
        ("nullptr", KwNullptr),
        ("operator", KwOperator),
        ("private", KwPrivate),
        ("protected", KwProtected),
        ("public", KwPublic),
        ("register", KwRegister),
        ("reinterpret_cast", KwReinterpretCast),
        ("return", KwReturn),
        ("short", KwShort),
        ("signed", KwSigned),
        ("sizeof", KwSizeof),
        ("static", KwStatic),
        ("static_assert", KwStaticAssert),
        ("static_cast", KwStaticCast),
        ("struct", KwStruct),
        ("switch", KwSwitch),
        ("template", KwTemplate),
        ("this", KwThis),
        ("thread_local", KwThreadLocal),
        ("throw", KwThrow),
        ("true", KwTrue),
        ("try", KwTry),
        ("typedef", KwTypedef),
        ("typeid", KwTypeid),
        ("typename", KwTypename),
        ("union", KwUnion),
        ("unsigned", KwUnsigned),
        ("using", KwUsing),
        ("virtual", KwVirtual),
        ("void", KwVoid),
        ("volatile", KwVolatile),
        ("wchar_t", KwWcharT),
        ("while", KwWhile),
        ("{", OpLBrace),
        ("<%", OpLBrace),
        ("}", OpRBrace),
        ("%>", OpRBrace),
        ("[", OpLSquare),
        ("<:", OpLSquare),
        ("]", OpRSquare),
        (":>", OpRSquare),
        ("(", OpLParen),
        (")", OpRParen),
        ("|", OpBOr),
        ("bitor", OpBOr),
        ("^", OpXor),
        ("xor", OpXor),
        ("~", OpCompl),
        ("compl", OpCompl),
        ("&", OpAmp),
        ("bitand", OpAmp),
        ("!", OpLNot),
        ("not", OpLNot),
        (";", OpSemicolon),
        (":", OpColon),
        ("...", OpDots),
        ("?", OpQMark),
        ("::", OpColon2),
        (".", OpDot),
        (".*", OpDotStar),
        ("+", OpPlus),
        ("-", OpMinus),
        ("*", OpStar),
        ("/", OpDiv),
        ("%", OpMod),
        ("=", OpAssign),
        ("<", OpLt),
        (">", OpGt),
        ("+=", OpPlusAssign),
        ("-=", OpMinusAssign),
        ("*=", OpStarAssign),
        ("/=", OpDivAssign),
        ("%=", OpModAssign),
        ("^=", OpXorAssign),
        ("xor_eq", OpXorAssign),
        ("&=", OpAndAssign),
        ("and_eq", OpAndAssign),
        ("|=", OpOrAssign),
        ("or_eq", OpOrAssign),
        ("<<", OpLShift),
        (">>", OpRShift),
        (">>=", OpRShiftAssign),
        ("<<=", OpLShiftAssign),
        ("==", OpEq),
        ("!=", OpNe),
        ("not_eq", OpNe),
        ("<=", OpLe),
        (">=", OpGe),
        ("&&", OpLAnd),
        ("and", OpLAnd),
        ("||", OpLOr),
        ("or", OpLOr),
        ("++", OpInc),
        ("--", OpDec),
        (",", OpComma),
        ("->*", OpArrowStar),
        ("->", OpArrow),
    ];
    entries.iter().copied().collect()
});

/// Looks up the fixed token type for an identifier or operator
/// spelling. Returns `None` for ordinary identifiers and for
/// preprocessing-only operators.
pub fn token_type(text: &[u8]) -> Option<TokenType> {
    let text = std::str::from_utf8(text).ok()?;
    TOKEN_TYPES.get(text).copied()
}

#[cfg(test)]
mod tests {
    use super::{token_type, TokenType};

    #[test]
    fn keywords_and_alternative_spellings_resolve() {
        assert_eq!(token_type(b"reinterpret_cast"), Some(TokenType::KwReinterpretCast));
        assert_eq!(token_type(b"<%"), Some(TokenType::OpLBrace));
        assert_eq!(token_type(b"and"), Some(TokenType::OpLAnd));
        assert_eq!(token_type(b"new"), Some(TokenType::KwNew));
    }

    #[test]
    fn plain_identifiers_and_pp_operators_do_not() {
        assert_eq!(token_type(b"foo"), None);
        assert_eq!(token_type(b"#"), None);
        assert_eq!(token_type(b"%:%:"), None);
        assert_eq!(token_type(b"\xC3\xA9"), None);
    }
}
