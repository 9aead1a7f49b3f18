use std::io::{self, BufRead, Write};

use eyre::WrapErr;
use secrecy::{ExposeSecret, SecretString};
use strong_password::{get_wordlist_path, load_index_from_path, IndexConfig, PasswordStrengthChecker};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

fn setup_logger() -> eyre::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive(LevelFilter::WARN.into())
        .add_directive("strong_password=info".parse()?);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(())
}

fn main() -> eyre::Result<()> {
    setup_logger()?;

    let path = get_wordlist_path();

    println!("Loading dictionary...");
    let index = load_index_from_path(&path, &IndexConfig::default())
        .wrap_err_with(|| format!("cannot load dictionary from {}", path.display()))?;
    println!("Dictionary loaded.");
    debug!("{} words indexed", index.len());

    let checker = PasswordStrengthChecker::new(index);

    print!("Enter a password to check: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    let password = SecretString::new(line.into());

    println!("Checking password: {}", password.expose_secret());
    let verdict = checker.check_password(&password);
    println!("Is the password strong? {}", verdict.is_strong());
    if let Some(reason) = verdict.reason() {
        debug!("{}", reason);
    }

    Ok(())
}
