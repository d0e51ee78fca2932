use anyhow::{Context, Result, bail};
use clap::Parser;
use prompt_markup_config::Config;
use prompt_markup_engine::io;
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

mod page;

use page::{DEFAULT_TITLE, PageOptions};

#[derive(Parser, Debug)]
#[command(name = "prompt-markup")]
#[command(version)]
#[command(about = "Convert model responses written in a small Markdown subset to HTML")]
struct Cli {
    /// Markdown file or directory to convert; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Output file, or output directory when INPUT is a directory (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Wrap the markup in a complete HTML page
    #[arg(long)]
    standalone: bool,

    /// Page title for standalone output
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Config file to use instead of ~/.config/prompt-markup/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Where the Markdown comes from.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
    Dir(PathBuf),
}

impl Input {
    fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            None => Input::Stdin,
            Some(path) if path.as_os_str() == "-" => Input::Stdin,
            Some(path) if path.is_dir() => Input::Dir(path),
            Some(path) => Input::File(path),
        }
    }
}

/// Command line options merged over the config file.
#[derive(Debug)]
struct Settings {
    input: Input,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    page: PageOptions,
}

impl Settings {
    fn resolve(cli: Cli, config: Config) -> Self {
        Self {
            input: Input::from_arg(cli.input),
            output_dir: cli.output.clone().or(config.output_dir),
            output: cli.output,
            page: PageOptions {
                standalone: cli.standalone || config.standalone,
                title: cli.title.or(config.title),
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file '{}' does not exist", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    log::debug!("effective config: {config:?}");

    run(Settings::resolve(cli, config))
}

fn run(settings: Settings) -> Result<()> {
    match &settings.input {
        Input::Stdin => {
            let mut markdown = String::new();
            std::io::stdin()
                .read_to_string(&mut markdown)
                .context("failed to read markdown from stdin")?;
            let html = settings.page.render(&markdown, DEFAULT_TITLE);
            emit(&html, settings.output.as_deref())
        }
        Input::File(path) => {
            let markdown = io::read_file(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            let html = settings.page.render(&markdown, &title_from_path(path));
            emit(&html, settings.output.as_deref())
        }
        Input::Dir(root) => {
            let Some(out_dir) = settings.output_dir.as_deref() else {
                bail!(
                    "converting a directory needs --output or output_dir in {}",
                    Config::config_path().display()
                );
            };
            let summary = convert_dir(root, out_dir, &settings.page)?;
            log::info!(
                "converted {} files into {} ({} failed)",
                summary.converted,
                out_dir.display(),
                summary.failed
            );
            Ok(())
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct DirSummary {
    converted: usize,
    failed: usize,
}

/// Converts every Markdown file below `root` into `out_dir`.
///
/// A file that cannot be read still gets an output page, holding the
/// converted error message.
fn convert_dir(root: &Path, out_dir: &Path, page: &PageOptions) -> Result<DirSummary> {
    let files = io::scan_markdown_files(root)?;
    let mut summary = DirSummary::default();

    for file in files {
        let target = io::output_path_for(root, &file, out_dir)?;
        let title = title_from_path(&file);
        let html = match io::read_file(&file) {
            Ok(markdown) => {
                summary.converted += 1;
                page.render(&markdown, &title)
            }
            Err(e) => {
                log::warn!("failed to read '{}': {e}", file.display());
                summary.failed += 1;
                page.render_failure(&format!("Error reading file: {e}"), &title)
            }
        };
        io::write_file(&target, &document(&html))
            .with_context(|| format!("failed to write '{}'", target.display()))?;
        log::info!("{} -> {}", file.display(), target.display());
    }

    Ok(summary)
}

/// Output bytes for `html`, newline-terminated wherever they are written.
fn document(html: &str) -> String {
    format!("{html}\n")
}

fn emit(html: &str, output: Option<&Path>) -> Result<()> {
    let document = document(html);
    match output {
        Some(path) => io::write_file(path, &document)
            .with_context(|| format!("failed to write '{}'", path.display())),
        None => write_to(std::io::stdout().lock(), &document),
    }
}

fn write_to(mut out: impl Write, document: &str) -> Result<()> {
    out.write_all(document.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
