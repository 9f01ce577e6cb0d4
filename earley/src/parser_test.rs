#![deny(warnings)]

use crate::error::{Error, EvalError};
use crate::grammar::Grammar;
use crate::parser::EarleyParser;
use crate::state::{Child, ParserState};
use crate::symbol::Symbol::{NonTerm as N, Term as T};
use crate::symbol::Token;
use std::collections::HashSet;
use std::rc::Rc;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Tm { Num, Plus, Minus, Star, Slash, Caret, LParen, RParen, End }

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Nt { Goal, Sum, Mul, Pow, Atom }

type C = Child<Tm, Nt, f64>;

fn first(c: &[C]) -> Result<f64, EvalError> { c[0].evaluate() }
fn second(c: &[C]) -> Result<f64, EvalError> { c[1].evaluate() }
fn add(c: &[C]) -> Result<f64, EvalError> { Ok(c[0].evaluate()? + c[2].evaluate()?) }
fn sub(c: &[C]) -> Result<f64, EvalError> { Ok(c[0].evaluate()? - c[2].evaluate()?) }
fn mul(c: &[C]) -> Result<f64, EvalError> { Ok(c[0].evaluate()? * c[2].evaluate()?) }
fn div(c: &[C]) -> Result<f64, EvalError> { Ok(c[0].evaluate()? / c[2].evaluate()?) }
fn pow(c: &[C]) -> Result<f64, EvalError> { Ok(c[0].evaluate()?.powf(c[2].evaluate()?)) }

// Goal -> Sum $
// Sum -> Sum + Mul | Sum - Mul | Mul
// Mul -> Mul * Pow | Mul / Pow | Pow
// Pow -> Atom ^ Pow | Atom
// Atom -> Number | ( Sum )
fn grammar_math() -> Grammar<Tm, Nt, f64> {
    Grammar::builder()
        .rule(Nt::Goal, &[N(Nt::Sum), T(Tm::End)], first)
        .rule(Nt::Sum, &[N(Nt::Sum), T(Tm::Plus), N(Nt::Mul)], add)
        .rule(Nt::Sum, &[N(Nt::Sum), T(Tm::Minus), N(Nt::Mul)], sub)
        .rule(Nt::Sum, &[N(Nt::Mul)], first)
        .rule(Nt::Mul, &[N(Nt::Mul), T(Tm::Star), N(Nt::Pow)], mul)
        .rule(Nt::Mul, &[N(Nt::Mul), T(Tm::Slash), N(Nt::Pow)], div)
        .rule(Nt::Mul, &[N(Nt::Pow)], first)
        .rule(Nt::Pow, &[N(Nt::Atom), T(Tm::Caret), N(Nt::Pow)], pow)
        .rule(Nt::Pow, &[N(Nt::Atom)], first)
        .rule(Nt::Atom, &[T(Tm::Num)], first)
        .rule(Nt::Atom, &[T(Tm::LParen), N(Nt::Sum), T(Tm::RParen)], second)
        .into_grammar()
        .expect("Bad Grammar")
}

// Whitespace separated lexemes, terminated by an End token
fn tokens(input: &str) -> Vec<Token<Tm, f64>> {
    let mut out: Vec<_> = input.split_whitespace().enumerate().map(|(pos, lexeme)| {
        match lexeme {
            "+" => Token::new(Tm::Plus, pos),
            "-" => Token::new(Tm::Minus, pos),
            "*" => Token::new(Tm::Star, pos),
            "/" => Token::new(Tm::Slash, pos),
            "^" => Token::new(Tm::Caret, pos),
            "(" => Token::new(Tm::LParen, pos),
            ")" => Token::new(Tm::RParen, pos),
            n => Token::with_value(Tm::Num, n.parse().expect("test number"), pos),
        }
    }).collect();
    out.push(Token::new(Tm::End, out.len()));
    out
}

fn eval(input: &str) -> f64 {
    let parser = EarleyParser::new(grammar_math());
    let accepted = parser.parse(&tokens(input)).unwrap().expect("no parse");
    accepted.evaluate().unwrap()
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn math_values() {
    fuzzy_eq!(eval("1 + 2 * 3"), 7.0);
    fuzzy_eq!(eval("( 1 + 2 ) * 3"), 9.0);
    fuzzy_eq!(eval("2 ^ 3 ^ 2"), 512.0);
    fuzzy_eq!(eval("8 - 3 - 2"), 3.0);
    fuzzy_eq!(eval("8 / 4 / 2"), 1.0);
    fuzzy_eq!(eval("( ( 5 ) )"), 5.0);
    fuzzy_eq!(eval("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3"), 3.0001220703125);
}

#[test]
fn badparse() {
    let parser = EarleyParser::new(grammar_math());
    assert!(parser.parse(&tokens("1 +")).unwrap().is_none());
    assert!(parser.parse(&tokens("( 1")).unwrap().is_none());
    assert!(parser.parse(&tokens("1 1")).unwrap().is_none());
    assert!(parser.parse(&tokens("")).unwrap().is_none());
    // no end-of-input marker at all
    let mut no_end = tokens("1 + 2");
    no_end.pop();
    assert!(parser.parse(&no_end).unwrap().is_none());
}

#[test]
fn empty_input() {
    let parser = EarleyParser::new(grammar_math());
    assert_eq!(parser.parse(&[]).unwrap_err(), Error::EmptyInput);
}

#[test]
fn chart_shape() {
    let parser = EarleyParser::new(grammar_math());
    let input = tokens("1 + 2");
    let chart = parser.build_chart(&input).unwrap();
    assert_eq!(chart.len(), input.len() + 1);
    // Goal -> . Sum $ plus every prediction reachable from it
    assert_eq!(chart.column(0).len(), 11);
    assert_eq!(chart.column(0)[0].to_string(), "(0) Goal -> \u{00b7} Sum End");
    // nothing ever scans past the end marker
    assert!(chart.last().unwrap().iter().all(|s| s.is_complete()));
}

#[test]
fn accepted_state_lives_in_chart() {
    let parser = EarleyParser::new(grammar_math());
    let chart = parser.build_chart(&tokens("1 + 2")).unwrap();
    let accepted = parser.accepted(&chart).unwrap();
    let probe = ParserState::start(parser.grammar.start_rule(), 0).as_fully_matched();
    let stored = chart.last().unwrap().get(&probe).unwrap();
    assert!(Rc::ptr_eq(&accepted, stored));
    assert_eq!(accepted.children().len(), 2);
    assert_eq!(accepted.origin(), 0);
    fuzzy_eq!(accepted.evaluate().unwrap(), 3.0);
}

#[test]
fn left_recursion() {
    let input = vec!["1"; 300].join(" + ");
    fuzzy_eq!(eval(&input), 300.0);
    let input = vec!["2"; 30].join(" * ");
    fuzzy_eq!(eval(&input), 2f64.powi(30));
}

///////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Bt { B, End }

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Bn { Start, S }

type BC = Child<Bt, Bn, String>;

fn b_start(c: &[BC]) -> Result<String, EvalError> { c[0].evaluate() }
fn b_pair(c: &[BC]) -> Result<String, EvalError> {
    Ok(format!("({} {})", c[0].evaluate()?, c[1].evaluate()?))
}
fn b_leaf(_: &[BC]) -> Result<String, EvalError> { Ok("b".to_string()) }

// Start -> S $
// S -> S S | b
fn grammar_ambiguous() -> Grammar<Bt, Bn, String> {
    Grammar::builder()
        .rule(Bn::Start, &[N(Bn::S), T(Bt::End)], b_start)
        .rule(Bn::S, &[N(Bn::S), N(Bn::S)], b_pair)
        .rule(Bn::S, &[T(Bt::B)], b_leaf)
        .into_grammar()
        .expect("Bad grammar")
}

fn bs(n: usize) -> Vec<Token<Bt, String>> {
    let mut out: Vec<_> = (0..n).map(|pos| Token::new(Bt::B, pos)).collect();
    out.push(Token::new(Bt::End, n));
    out
}

#[test]
fn ambiguous_first_completion_wins() {
    let parser = EarleyParser::new(grammar_ambiguous());
    let accepted = parser.parse(&bs(3)).unwrap().expect("no parse");
    let tree = accepted.evaluate().unwrap();
    // S -> S S . from 0 with (b b) on the left lands in the last column
    // before the (b (b b)) derivation gets there, so it sticks.
    assert_eq!(tree, "((b b) b)");
    // deterministic across runs
    let again = parser.parse(&bs(3)).unwrap().unwrap().evaluate().unwrap();
    assert_eq!(tree, again);
}

#[test]
fn chart_columns_are_deduped() {
    let parser = EarleyParser::new(grammar_ambiguous());
    let chart = parser.build_chart(&bs(6)).unwrap();
    for column in chart.columns() {
        let keys: HashSet<_> = column.iter()
            .map(|s| (s.rule().to_string(), s.cursor(), s.origin()))
            .collect();
        assert_eq!(keys.len(), column.len());
    }
    assert!(parser.accepted(&chart).is_some());
}
