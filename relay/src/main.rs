use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use relay::{
    commands::{email::EmailCommand, serve::serve, submit::SubmitCommand},
    telemetry,
};
use relay_utils::relay_version;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        command => command,
    };

    let config = relay_config::load().context("Failed to load config")?;
    let _sentry_guard = telemetry::init(config.sentry.as_ref());

    match command {
        Command::Serve => serve(config).await,
        Command::Submit(command) => command.invoke(config).await,
        Command::Email { command } => command.invoke(config).await,
        Command::CheckConfig { verbose } => {
            if verbose {
                println!("{config:#?}");
            }
            Ok(())
        }
        Command::Completion { .. } => unreachable!(),
    }
}

/// Relay contact form submissions from a website to a mailbox
#[derive(Debug, Parser)]
#[command(version = relay_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Accept contact form submissions over HTTP and forward them by email
    #[command(aliases(["run", "start", "s"]))]
    Serve,
    /// Fill in the contact form and submit it to a running relay
    Submit(SubmitCommand),
    /// Test email deliverability
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Load the configuration and report errors
    CheckConfig {
        /// Print the parsed config, with secrets redacted
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print shell completions
    Completion {
        #[clap(value_enum)]
        shell: Shell,
    },
}
