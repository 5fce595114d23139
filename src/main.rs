use std::process::ExitCode;
use translateme_icons::app;
use translateme_icons::cli::{Flags, HELP};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let flags = match Flags::from_env() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{HELP}");
            return ExitCode::FAILURE;
        }
    };

    if flags.help {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match app::run(&flags) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("icon generation failed: {err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
