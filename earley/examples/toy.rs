use earley::Symbol::{NonTerm as N, Term as T};
use earley::{Child, EarleyParser, EvalError, Grammar, Token};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Term { Plus, Digit, Eof }

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum NonTerm { Top, S }

type C = Child<Term, NonTerm, u32>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Gramar:  Top -> S $;  S -> S + N | N;
    let grammar = Grammar::builder()
        .rule(NonTerm::Top, &[N(NonTerm::S), T(Term::Eof)], |c: &[C]| c[0].evaluate())
        .rule(NonTerm::S, &[N(NonTerm::S), T(Term::Plus), T(Term::Digit)],
              |c: &[C]| Ok(c[0].evaluate()? + c[2].evaluate()?))
        .rule(NonTerm::S, &[T(Term::Digit)], |c: &[C]| c[0].evaluate())
        .into_grammar()
        .unwrap();
    println!("{}", grammar);

    // Parse some sum
    let mut tokens: Vec<_> = "1 + 2 + 3".split_whitespace().enumerate()
        .map(|(pos, lexeme)| match lexeme.parse::<u32>() {
            Ok(n) => Token::with_value(Term::Digit, n, pos),
            Err(_) => Token::new(Term::Plus, pos),
        })
        .collect();
    tokens.push(Token::new(Term::Eof, tokens.len()));

    let parser = EarleyParser::new(grammar);
    match parser.parse(&tokens) {
        Err(e) => println!("Parse err: {}", e),
        Ok(None) => println!("No parse"),
        Ok(Some(accepted)) => {
            let value: Result<u32, EvalError> = accepted.evaluate();
            println!("{:?}", value);
        }
    }
}
