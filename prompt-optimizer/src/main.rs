//! Interactive prompt optimizer.
//!
//! Walks through the questionnaire in the terminal, prints the assembled
//! prompt with platform tips and copies it to the clipboard.

mod clipboard;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use prompt_wizard::assembler::ready_summary;
use prompt_wizard::{Choice, Platform, PlatformProfile, WizardEngine, WizardError, run_session};
use prompt_wizard_dialoguer::{BACK_KEYWORD, DialoguerFrontend};
use tracing::{info, warn};

use crate::settings::{Settings, Theme};

#[derive(Debug, Parser)]
#[command(name = "prompt-optimizer", version, about = "Build optimized prompts for AI assistants")]
struct Cli {
    /// Use the plain theme for this run
    #[arg(long, global = true)]
    plain: bool,

    /// Do not copy the generated prompt to the clipboard
    #[arg(long, global = true)]
    no_copy: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Default, Subcommand)]
enum Command {
    /// Run the questionnaire (default)
    #[default]
    Run,
    /// List supported platforms with their tips and best practices
    Platforms,
    /// Show or change the saved theme
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Colorful,
    Plain,
    Toggle,
}

impl ThemeChoice {
    fn apply(self, current: Theme) -> Theme {
        match self {
            Self::Colorful => Theme::Colorful,
            Self::Plain => Theme::Plain,
            Self::Toggle => current.toggled(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = cli.settings.clone().or_else(settings::default_path);
    match cli.command.clone().unwrap_or_default() {
        Command::Run => run(&cli, settings_path.as_deref()),
        Command::Platforms => {
            for platform in Platform::ALL {
                print_profile(platform.key(), platform.profile());
            }
            Ok(())
        }
        Command::Theme { choice } => theme(choice, settings_path.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli, settings_path: Option<&Path>) -> Result<()> {
    let saved = settings_path.map(Settings::load).unwrap_or_default();
    let theme = if cli.plain { Theme::Plain } else { saved.theme };
    let colorful = theme == Theme::Colorful;
    let mut frontend = if colorful {
        DialoguerFrontend::new()
    } else {
        DialoguerFrontend::plain()
    };
    info!(theme = theme.name(), "starting wizard");

    println!("Prompt Optimizer");
    println!("Answer a few questions to build an optimized prompt.");
    println!("Press Esc on a list, or type {BACK_KEYWORD}, to go back.");

    let mut engine = WizardEngine::new();
    loop {
        let prompt = match run_session(&mut engine, &mut frontend) {
            Ok(prompt) => prompt,
            Err(WizardError::Cancelled) => {
                println!("Cancelled.");
                return Ok(());
            }
            Err(err) => return Err(err).context("Wizard session failed"),
        };

        println!();
        println!("{}", ready_summary(engine.prompt_request().platform.as_ref()));
        let Some(generate) = confirm(colorful, "Generate your prompt now?", true)? else {
            println!("Cancelled.");
            return Ok(());
        };
        if !generate {
            engine.retreat();
            continue;
        }

        println!();
        println!("Prompt generated successfully!");
        println!();
        println!("{prompt}");
        println!();

        if let Some(profile) = engine.platform_profile() {
            print_tips(profile);
        }

        if !cli.no_copy {
            match clipboard::copy(&prompt) {
                Ok(()) => println!("Prompt copied to clipboard!"),
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "clipboard copy failed");
                    println!("Unable to copy. Please select and copy the prompt above manually.");
                }
            }
        }

        match confirm(colorful, "Start a new prompt?", false)? {
            Some(true) => {}
            Some(false) => return Ok(()),
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
        engine.reset();
        println!("Started new prompt generation");
    }
}

/// Ask a yes/no question. `None` means the user pressed Ctrl+C.
fn confirm(colorful: bool, prompt: &str, default: bool) -> Result<Option<bool>> {
    let mut builder: Confirm;
    let _theme;
    if colorful {
        _theme = ColorfulTheme::default();
        builder = Confirm::with_theme(&_theme);
    } else {
        builder = Confirm::new();
    }

    let reply = builder.with_prompt(prompt).default(default).interact_opt();
    confirmation(reply)
}

/// Escape counts as "no"; an interrupted read is a cancellation.
fn confirmation(reply: Result<Option<bool>, dialoguer::Error>) -> Result<Option<bool>> {
    match reply {
        Ok(answer) => Ok(Some(answer.unwrap_or(false))),
        Err(dialoguer::Error::IO(err)) if err.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err).context("Failed to read confirmation"),
    }
}

fn print_tips(profile: &PlatformProfile) {
    println!("{} Best Practices", profile.name);
    for tip in profile.tips {
        println!("  - {tip}");
    }
    println!();
}

fn print_profile(key: &str, profile: &PlatformProfile) {
    println!("{} [{key}]", profile.name);
    println!("  {}", profile.description);
    for tip in profile.tips {
        println!("  - {tip}");
    }
    for practice in profile.best_practices {
        println!("  * {}: {}", practice.label, practice.advice);
    }
    println!();
}

fn theme(choice: Option<ThemeChoice>, settings_path: Option<&Path>) -> Result<()> {
    let path = settings_path.context("No config directory found, pass --settings <PATH>")?;
    let mut settings = Settings::load(path);

    let Some(choice) = choice else {
        println!("{}", settings.theme.name());
        return Ok(());
    };

    settings.theme = choice.apply(settings.theme);
    settings.save(path)?;
    println!("Switched to {} theme", settings.theme.name());
    Ok(())
}
