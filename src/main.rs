use std::io::Read;

use anyhow::{bail, Result};
use sql_lexer::lex;

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();

    // Parse arguments
    let args = std::env::args().collect::<Vec<_>>();
    let source = match args.len() {
        0 | 1 => bail!("Missing <sql>; pass the statement text, or - to read stdin"),
        2 if args[1] == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        2 => args[1].clone(),
        _ => bail!("Expected a single <sql> argument, got {}", args.len() - 1),
    };

    for token in lex(&source)? {
        println!(
            "{} {} {}",
            token.location, token.kind, token.value
        );
    }

    Ok(())
}
