use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use phpdecl::version::PhpVersion;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
enum CliArgs {
    /// Renders an argument list.
    Arguments {
        /// JSON file holding the list of arguments, standard input by default.
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// JSON file holding the render settings.
        #[clap(short, long)]
        config: Option<PathBuf>,

        #[clap(short, long)]
        min_version: Option<PhpVersion>,

        #[clap(short = 'b', long)]
        base_indent: Option<String>,
    },
    /// Renders a function header followed by its property bindings.
    Function {
        /// Name of the function.
        name: String,

        #[clap(short, long)]
        input: Option<PathBuf>,

        #[clap(short, long)]
        config: Option<PathBuf>,

        #[clap(short, long)]
        min_version: Option<PhpVersion>,

        #[clap(short = 'b', long)]
        base_indent: Option<String>,
    },
}

fn main() -> ExitCode {
    if let Ok(filter) = EnvFilter::try_from_env("PHPDECL_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli_args = CliArgs::parse();
    let result = match cli_args {
        CliArgs::Arguments {
            input,
            config,
            min_version,
            base_indent,
        } => render::run_render(render::Args {
            function: None,
            input,
            config,
            min_version,
            base_indent: base_indent.unwrap_or_default(),
        }),
        CliArgs::Function {
            name,
            input,
            config,
            min_version,
            base_indent,
        } => render::run_render(render::Args {
            function: Some(name),
            input,
            config,
            min_version,
            base_indent: base_indent.unwrap_or_default(),
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
