use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use phpdecl::{
    config::{RenderConfig, RenderSettings},
    declaration::{
        argument::{Argument, PropertyBinding},
        spec::{arguments, ArgumentSpec},
    },
    render::{render_function_header, render_property_bindings, ArgumentListRenderer},
    version::PhpVersion,
};
use serde::Deserialize;

pub struct Args {
    pub function: Option<String>,
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub min_version: Option<PhpVersion>,
    pub base_indent: String,
}

/// Input document, either a bare list of arguments or a list with inline settings.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Input {
    Arguments(Vec<ArgumentSpec>),
    Document {
        arguments: Vec<ArgumentSpec>,
        #[serde(default)]
        settings: Option<RenderSettings>,
    },
}

pub fn run_render(
    Args {
        function,
        input,
        config,
        min_version,
        base_indent,
    }: Args,
) -> anyhow::Result<()> {
    let (specs, inline_settings) = match read_input(input.as_deref())? {
        Input::Arguments(specs) => (specs, None),
        Input::Document {
            arguments,
            settings,
        } => (arguments, settings),
    };

    let mut settings = match config {
        Some(path) => load_settings(&path)?,
        None => inline_settings.unwrap_or_default(),
    };
    if min_version.is_some() {
        settings.min_version = min_version;
    }
    tracing::debug!(?settings, "render settings");
    let config = RenderConfig::from(settings);

    let arguments = arguments(specs).context("invalid argument")?;
    tracing::debug!(count = arguments.len(), "arguments resolved");

    for line in render_lines(&config, function.as_deref(), &arguments, &base_indent)? {
        println!("{}", line);
    }
    Ok(())
}

fn render_lines(
    config: &RenderConfig,
    function: Option<&str>,
    arguments: &[Argument],
    base_indent: &str,
) -> anyhow::Result<Vec<String>> {
    let Some(function) = function else {
        return Ok(ArgumentListRenderer::new(config)
            .render(arguments, base_indent)
            .into_lines());
    };

    let mut lines = render_function_header(config, function, arguments, base_indent)
        .with_context(|| format!("invalid function name {:?}", function))?;
    if let Some(last) = lines.last_mut() {
        last.push_str(" {");
    }
    let body_indent = format!("{}{}", base_indent, config.indent_unit());
    for mode in [PropertyBinding::Before, PropertyBinding::After] {
        lines.extend(
            render_property_bindings(arguments, mode)
                .into_iter()
                .map(|line| format!("{}{}", body_indent, line)),
        );
    }
    lines.push(format!("{}}}", base_indent));
    Ok(lines)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Input> {
    let mut reader: Box<dyn Read> = match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };
    let input = serde_json::from_reader(&mut reader).context("could not parse the arguments")?;
    Ok(input)
}

fn load_settings(path: &Path) -> anyhow::Result<RenderSettings> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let settings = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("could not parse the settings in {}", path.display()))?;
    Ok(settings)
}
