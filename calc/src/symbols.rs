use crate::number::Number;

/// Token tags, also the grammar's terminal symbols.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Terminal {
    Plus,
    Minus,
    Mult,
    Div,
    LParen,
    RParen,
    Literal,
    End,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NonTerminal {
    Goal,
    Expr,
    Term,
    Factor,
}

pub type Token = earley::Token<Terminal, Number>;
pub type Child = earley::Child<Terminal, NonTerminal, Number>;
pub type State = earley::ParserState<Terminal, NonTerminal, Number>;
pub type Grammar = earley::Grammar<Terminal, NonTerminal, Number>;
pub type Parser = earley::EarleyParser<Terminal, NonTerminal, Number>;
