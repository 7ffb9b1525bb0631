use intexpr::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    config::{Config, InvalidCharacterPolicy},
    error::ParseError,
    interpreter::lexer::{Lexer, Spanned, Token},
    parse, parse_with,
};

fn tokens(src: &str, policy: InvalidCharacterPolicy) -> Vec<Spanned> {
    let mut lexer = Lexer::new(src, policy).unwrap();
    let mut out = Vec::new();
    loop {
        let next = lexer.next_token().unwrap();
        out.push(next);
        if next.token == Token::EndOfInput {
            return out;
        }
    }
}

fn kinds(src: &str) -> Vec<Token> {
    tokens(src, InvalidCharacterPolicy::Reject).into_iter()
                                               .map(|s| s.token)
                                               .collect()
}

#[test]
fn lexer_classifies_every_token() {
    assert_eq!(kinds("(12+3)*4/-5"),
               vec![Token::LParen,
                    Token::Integer(12),
                    Token::Plus,
                    Token::Integer(3),
                    Token::RParen,
                    Token::Star,
                    Token::Integer(4),
                    Token::Slash,
                    Token::Minus,
                    Token::Integer(5),
                    Token::EndOfInput]);
}

#[test]
fn lexer_collapses_whitespace_runs() {
    assert_eq!(kinds(" \t\n 7 \r\n "),
               vec![Token::Whitespace,
                    Token::Integer(7),
                    Token::Whitespace,
                    Token::EndOfInput]);
}

#[test]
fn lexer_reports_positions() {
    let positions: Vec<usize> = tokens("10 + 200", InvalidCharacterPolicy::Reject).iter()
                                                                             .map(|s| s.position)
                                                                             .collect();
    assert_eq!(positions, vec![0, 2, 3, 4, 5, 8]);
}

#[test]
fn lexer_keeps_leading_zeros_as_one_literal() {
    assert_eq!(kinds("007"), vec![Token::Integer(7), Token::EndOfInput]);
}

#[test]
fn lexer_end_of_input_is_sticky() {
    let mut lexer = Lexer::new("1", InvalidCharacterPolicy::Reject).unwrap();
    assert_eq!(lexer.next_token().unwrap().token, Token::Integer(1));
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap(),
                   Spanned { token:    Token::EndOfInput,
                             position: 1, });
    }
}

#[test]
fn lexer_invalid_character_policies() {
    let mut strict = Lexer::new("1a2", InvalidCharacterPolicy::Reject).unwrap();
    assert_eq!(strict.next_token().unwrap().token, Token::Integer(1));
    assert_eq!(strict.next_token(),
               Err(ParseError::InvalidCharacter { character: 'a',
                                                  position:  1, }));

    let lenient = tokens("1a", InvalidCharacterPolicy::EndOfInput);
    assert_eq!(lenient,
               vec![Spanned { token:    Token::Integer(1),
                              position: 0, },
                    Spanned { token:    Token::EndOfInput,
                              position: 1, }]);
}

#[test]
fn lexer_rejects_empty_input() {
    assert!(matches!(Lexer::new("", InvalidCharacterPolicy::EndOfInput),
                     Err(ParseError::EmptyInput)));
}

#[test]
fn parser_builds_signs_innermost_last() {
    assert_eq!(parse("-+5").unwrap(),
               Expr::UnaryOp { op:       UnaryOperator::Negate,
                               expr:     Box::new(Expr::UnaryOp { op:       UnaryOperator::Plus,
                                                                  expr:     Box::new(Expr::Number { value:    5,
                                                                                                    position: 2, }),
                                                                  position: 1, }),
                               position: 0, });
}

#[test]
fn parser_folds_left() {
    let expr = parse("10 - 2 - 3").unwrap();
    let Expr::BinaryOp { left, op, right, position } = expr else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Sub);
    assert_eq!(position, 7);
    assert_eq!(*right, Expr::Number { value: 3, position: 9 });
    assert_eq!(left.to_string(), "(10 - 2)");
}

#[test]
fn parser_renders_structure() {
    let cases = [("2 + 3 * 4", "(2 + (3 * 4))"),
                 ("(2 + 3) * 4", "((2 + 3) * 4)"),
                 ("8 / 4 / 2", "((8 / 4) / 2)"),
                 ("1 - -1", "(1 - (-1))"),
                 ("((7))", "7"),
                 ("  -(1)  ", "(-1)")];
    for (source, rendered) in cases {
        assert_eq!(parse(source).unwrap().to_string(), rendered, "for {source:?}");
    }
}

#[test]
fn parser_zero_fallback_does_not_consume() {
    assert_eq!(parse_with(")", Config::lenient()).unwrap(),
               Expr::Number { value:    0,
                              position: 0, });
    assert_eq!(parse_with("2 * ", Config::lenient()).unwrap().to_string(), "(2 * 0)");
}
