use crate::number::Number;
use crate::symbols::{Child, Grammar, NonTerminal, Terminal};
use earley::EvalError;
use earley::Symbol::{NonTerm as N, Term as T};

// Evaluate the child matched at `slot`
fn arg(children: &[Child], slot: usize) -> Result<Number, EvalError> {
    children.get(slot)
        .ok_or_else(|| EvalError::UnexpectedChild { rule: "arith".to_string(), slot })?
        .evaluate()
}

// Binary rules look like: lhs OP rhs
fn operands(children: &[Child]) -> Result<(Number, Number), EvalError> {
    Ok((arg(children, 0)?, arg(children, 2)?))
}

fn pass(children: &[Child]) -> Result<Number, EvalError> {
    arg(children, 0)
}

fn add(children: &[Child]) -> Result<Number, EvalError> {
    let (l, r) = operands(children)?;
    Ok(l + r)
}

fn sub(children: &[Child]) -> Result<Number, EvalError> {
    let (l, r) = operands(children)?;
    Ok(l - r)
}

fn mul(children: &[Child]) -> Result<Number, EvalError> {
    let (l, r) = operands(children)?;
    Ok(l * r)
}

fn div(children: &[Child]) -> Result<Number, EvalError> {
    let (l, r) = operands(children)?;
    l.checked_div(r)
        .ok_or_else(|| EvalError::Action(format!("division by zero: {} / {}", l, r)))
}

fn literal(children: &[Child]) -> Result<Number, EvalError> {
    match children.first() {
        Some(Child::Token(token)) => token.value.ok_or_else(|| {
            EvalError::MissingValue { token: format!("{:?}", token.kind) }
        }),
        _ => Err(EvalError::UnexpectedChild { rule: "Factor -> Literal".to_string(), slot: 0 }),
    }
}

fn paren(children: &[Child]) -> Result<Number, EvalError> {
    arg(children, 1)
}

/// Standard arithmetic with the usual precedence, all operators associate
/// to the left. Rule 0 accepts a whole expression followed by `End`.
pub fn grammar() -> Result<Grammar, earley::Error> {
    use NonTerminal::*;
    use Terminal::*;
    Grammar::builder()
        .rule(Goal, &[N(Expr), T(End)], pass)
        .rule(Expr, &[N(Expr), T(Plus), N(Term)], add)
        .rule(Expr, &[N(Expr), T(Minus), N(Term)], sub)
        .rule(Expr, &[N(Term)], pass)
        .rule(Term, &[N(Term), T(Mult), N(Factor)], mul)
        .rule(Term, &[N(Term), T(Div), N(Factor)], div)
        .rule(Term, &[N(Factor)], pass)
        .rule(Factor, &[T(Literal)], literal)
        .rule(Factor, &[T(LParen), N(Expr), T(RParen)], paren)
        .into_grammar()
}

///////////////////////////////////////////////////////////////////////////////
