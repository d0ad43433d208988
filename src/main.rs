// SPDX-License-Identifier: MPL-2.0
use iced_lingo::app::Flags;
use iced_lingo::bootstrap::{self, Startup, WindowDocument};
use iced_lingo::i18n::SystemLanguage;
use std::process::ExitCode;

const HELP: &str = "\
iced_lingo

USAGE:
  iced_lingo [OPTIONS]

OPTIONS:
  --lang <TAG>          Initial language (en, pt, es, fr, zh)
  --i18n-dir <DIR>      Read <code>.ftl dictionaries from DIR
  --config-dir <DIR>    Read settings.toml from DIR
  -h, --help            Print this help
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let flags = match Flags::from_args(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{}\n\n{}", err, HELP);
            return ExitCode::FAILURE;
        }
    };

    match launch(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "start-up failed");
            ExitCode::FAILURE
        }
    }
}

fn launch(flags: Flags) -> Result<(), Box<dyn std::error::Error>> {
    let startup = Startup::from_flags(flags, &SystemLanguage);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mounted = runtime.block_on(bootstrap::start(&WindowDocument::standard(), startup))?;
    drop(runtime);

    mounted.run()?;
    Ok(())
}
