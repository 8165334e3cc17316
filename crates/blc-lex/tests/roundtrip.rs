//! Property tests for the lexer.
//!
//! The stream of lexemes a lex pass produces must itself lex back to the
//! same stream: tokenization loses whitespace and nothing else.

use blc_lex::{Lexer, Token};
use proptest::prelude::*;

/// One space-separable source atom: an identifier or keyword, a numeric
/// literal, or an operator/punctuation lexeme. Strings are excluded
/// because their lexemes drop the quotes and would not re-lex.
fn atom() -> impl Strategy<Value = String> {
    let operators = prop::sample::select(vec![
        "==", "!=", "<=", ">=", "&&", "||", "++", "--", "=", "!", "<", ">", "+", "-", "*", "/",
        "%", "(", ")", "{", "}", "[", "]", ",",
    ]);
    prop_oneof![
        "[a-z_][a-z0-9_]{0,10}",
        "[0-9]{1,8}",
        "[0-9]{1,4}\\.[0-9]{1,4}",
        operators.prop_map(str::to_string),
    ]
}

proptest! {
    #[test]
    fn lexemes_relex_to_the_same_stream(atoms in prop::collection::vec(atom(), 0..40)) {
        let source = atoms.join(" ");
        let first: Vec<Token> = Lexer::new(&source).collect();

        let lexemes: Vec<&[u8]> = first.iter().map(|t| t.lexeme.as_slice()).collect();
        let rejoined: Vec<u8> = lexemes.join(&b' ');
        let second: Vec<Token> = Lexer::new(&rejoined).collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn lexing_never_panics(source in "\\PC{0,200}") {
        let _tokens: Vec<Token> = Lexer::new(&source).collect();
    }

    #[test]
    fn lexing_never_panics_on_raw_bytes(source in prop::collection::vec(any::<u8>(), 0..200)) {
        let _tokens: Vec<Token> = Lexer::new(&source).collect();
    }
}
