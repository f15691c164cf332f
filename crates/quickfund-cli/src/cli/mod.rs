//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use quickfund_core::auth::{AuthMode, Role};
use quickfund_core::config;
use quickfund_core::i18n::Language;
use quickfund_core::logging;
use quickfund_core::theme::Theme;

mod commands;

#[derive(Parser)]
#[command(name = "quickfund")]
#[command(version)]
#[command(about = "QuickFund: verified emergency funding, in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interface language for this session (en, hi, te, ta)
    #[arg(long, value_name = "LANG")]
    lang: Option<Language>,

    /// Color theme for this session (light, dark)
    #[arg(long, value_name = "THEME")]
    theme: Option<Theme>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// List supported interface languages
    Languages,
    /// Print the text of a translation key
    Translate {
        /// Translation key, e.g. `hero.title`
        #[arg(value_name = "KEY")]
        key: String,

        /// Language to translate into (defaults to the configured language)
        #[arg(long, value_name = "LANG")]
        lang: Option<Language>,
    },
    /// Check login/signup form values without contacting any backend
    Validate(ValidateArgs),
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    Login,
    Signup,
}

impl From<ModeArg> for AuthMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Login => AuthMode::Login,
            ModeArg::Signup => AuthMode::Signup,
        }
    }
}

#[derive(clap::Args)]
struct ValidateArgs {
    /// Form to validate
    #[arg(long, value_enum, default_value = "login")]
    mode: ModeArg,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    password: String,

    /// Full name (signup only)
    #[arg(long, default_value = "")]
    name: String,

    /// Phone number (signup only)
    #[arg(long, default_value = "")]
    phone: String,

    /// Role: user, donor, admin or organization
    #[arg(long)]
    role: Option<Role>,

    /// Organization name (organization signups only)
    #[arg(long, default_value = "")]
    organization: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so only one-shot commands log to stderr.
    let _log_guard = if cli.command.is_none() {
        logging::init_file_logging(&config::paths::logs_dir())?
    } else {
        logging::init_stderr_logging();
        None
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

/// Loads the config file and applies the session overrides from flags.
fn load_config(lang: Option<Language>, theme: Option<Theme>) -> Result<config::Config> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(lang) = lang {
        config.language = lang;
    }
    if let Some(theme) = theme {
        config.theme = theme;
    }
    Ok(config)
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        lang,
        theme,
    } = cli;

    // default to the landing page
    let Some(command) = command else {
        let config = load_config(lang, theme)?;
        return commands::landing::run(config).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Languages => {
            let config = load_config(lang, theme)?;
            commands::i18n::languages(config.language);
            Ok(())
        }
        Commands::Translate {
            key,
            lang: key_lang,
        } => {
            let language = match key_lang.or(lang) {
                Some(language) => language,
                None => load_config(None, theme)?.language,
            };
            commands::i18n::translate(&key, language);
            Ok(())
        }
        Commands::Validate(args) => commands::validate::run(&commands::validate::ValidateInput {
            mode: args.mode.into(),
            email: args.email,
            password: args.password,
            name: args.name,
            phone: args.phone,
            role: args.role,
            organization: args.organization,
        }),
    }
}
