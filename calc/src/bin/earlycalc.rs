use anyhow::Context as _;
use earlycalc::Calculator;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Front end settings taken from the environment.
#[derive(Debug, Default)]
struct Config {
    history: Option<PathBuf>,
}

impl Config {
    fn from_env() -> Self {
        Config { history: std::env::var_os("EARLYCALC_HISTORY").map(PathBuf::from) }
    }
}

fn repl(calc: &Calculator, config: &Config) -> anyhow::Result<()> {
    let mut rl = rustyline::DefaultEditor::new().context("failed to set up line editor")?;
    if let Some(path) = &config.history {
        // first run has no history yet
        if let Err(e) = rl.load_history(path) {
            tracing::debug!("no history loaded from {}: {}", path.display(), e);
        }
    }
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read line"),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match calc.evaluate(&line) {
                Err(e) => println!("{}", e),
                Ok(n) => {
                    let _ = rl.add_history_entry(line.as_str());
                    println!("{}", n);
                }
            },
        }
    }
    if let Some(path) = &config.history {
        rl.save_history(path)
            .with_context(|| format!("failed to save history to {}", path.display()))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let calc = Calculator::new().context("failed to build the arithmetic grammar")?;
    tracing::trace!("grammar:\n{}", calc.grammar());

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        println!("{}", calc.evaluate(&input)?);
        return Ok(());
    }

    let config = Config::from_env();
    tracing::trace!("config = {:?}", config);
    repl(&calc, &config)
}
