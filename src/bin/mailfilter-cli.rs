#[path = "mailfilter-cli/args.rs"]
mod args;
#[path = "mailfilter-cli/output.rs"]
mod output;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use mailfilter_lib::{EmailFilter, RuleSet};
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands};
use output::OutputRow;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "with-serde")]
fn load_rules(path: Option<&str>) -> Result<RuleSet> {
    let Some(path) = path else {
        return Ok(RuleSet::builtin());
    };
    let raw = std::fs::read_to_string(path).with_context(|| format!("read rules {path}"))?;
    RuleSet::from_json(&raw).with_context(|| format!("parse rules {path}"))
}

#[cfg(not(feature = "with-serde"))]
fn load_rules(path: Option<&str>) -> Result<RuleSet> {
    if path.is_some() {
        anyhow::bail!("--rules nécessite la feature 'with-serde'");
    }
    Ok(RuleSet::builtin())
}

fn main() {
    // codes de sortie : 0 toutes légitimes, 2 au moins une fausse, 1 fatal
    match run() {
        Ok(true) => std::process::exit(2),
        Ok(false) => {}
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_tracing();

    let emails: Vec<String> = if cli.stdin {
        io::stdin()
            .lock()
            .lines()
            .map(|line| line.context("read stdin"))
            .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .collect::<Result<_>>()?
    } else if let Some(Commands::Check { email, .. }) = &cli.cmd {
        vec![email.clone()]
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(false);
    };

    let rules = load_rules(cli.rules.as_deref())?;
    let filter = EmailFilter::with_rules(rules, cli.filter_options())
        .context("start email filter")?;
    let strictness = cli.strictness();

    let rows: Vec<OutputRow> = emails
        .into_iter()
        .map(|email| {
            let verdict = filter.classify(&email, strictness, cli.mx);
            OutputRow::new(email, strictness, verdict)
        })
        .collect();

    output::write_reports(&rows, &cli.format)?;
    Ok(output::any_fake(&rows))
}
