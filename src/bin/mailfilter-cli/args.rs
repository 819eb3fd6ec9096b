use clap::{Parser, Subcommand};
use mailfilter_lib::{FilterOptions, Strictness};

#[derive(Parser)]
#[command(name = "mailfilter-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// niveau de sévérité 0..=10 (0 = seulement les fausses certaines)
    #[arg(long, default_value_t = 0)]
    pub strictness: u8,

    /// vérifie aussi la réputation des serveurs MX (requêtes DNS)
    #[arg(global = true, long)]
    pub mx: bool,

    /// format: human|json|ndjson
    #[arg(global = true, long, default_value = "human")]
    pub format: String,

    /// configuration des règles au format JSON (feature `with-serde`)
    #[arg(global = true, long)]
    pub rules: Option<String>,

    /// timeout par requête DNS (ms)
    #[arg(global = true, long = "dns-timeout-ms", default_value_t = 2_000)]
    pub dns_timeout_ms: u64,

    /// attente maximale de la liste MX (ms, 0 = illimitée)
    #[arg(global = true, long = "ready-timeout-ms", default_value_t = 0)]
    pub ready_timeout_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    Check {
        /// niveau de sévérité (prend le pas sur l'option globale)
        #[arg(long)]
        strictness: Option<u8>,
        email: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn strictness(&self) -> Strictness {
        match &self.cmd {
            Some(Commands::Check {
                strictness: Some(level),
                ..
            }) => Strictness::new(*level),
            _ => Strictness::new(self.strictness),
        }
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::default()
            .with_dns_timeout_ms(self.dns_timeout_ms)
            .with_ready_timeout_ms(self.ready_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_flags_after_the_address() {
        let cli = <Cli as Parser>::try_parse_from([
            "mailfilter-cli",
            "check",
            "user@example.com",
            "--mx",
            "--strictness",
            "7",
            "--format",
            "json",
            "--ready-timeout-ms",
            "250",
        ])
        .expect("valid command line");

        assert!(cli.mx);
        assert_eq!(cli.format, "json");
        assert_eq!(cli.strictness(), Strictness::new(7));
        assert_eq!(cli.filter_options().ready_timeout_ms, 250);
    }

    #[test]
    fn global_flags_still_work_before_the_subcommand() {
        let cli = <Cli as Parser>::try_parse_from([
            "mailfilter-cli",
            "--mx",
            "--strictness",
            "3",
            "check",
            "user@example.com",
        ])
        .expect("valid command line");

        assert!(cli.mx);
        assert_eq!(cli.strictness(), Strictness::new(3));
    }

    #[test]
    fn clap_definition_is_consistent() {
        Cli::clap_command().debug_assert();
    }
}
