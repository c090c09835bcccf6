use std::io::{BufRead as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use mockupgen::{RenderConfig, TemplateCatalog, TemplateDescriptor, render_mockup, save_image};

/// Environment variable naming the template directory when `--custom-template-dir` is absent.
const TEMPLATE_DIR_ENV: &str = "MOCKUPGEN_TEMPLATE_DIR";

/// Mock up a screenshot in a device frame.
#[derive(Parser, Debug)]
#[command(name = "mockupgen", version)]
struct Cli {
    /// Screenshot file path.
    #[arg(value_name = "SCREENSHOT", required_unless_present = "list")]
    screenshot: Option<PathBuf>,

    /// Template name or number.
    #[arg(short = 't', value_name = "TEMPLATE")]
    template: Option<String>,

    /// Output file name (use the extension to pick the format).
    #[arg(short = 'o', value_name = "OUTFILE")]
    out: Option<PathBuf>,

    /// Output width (the template photo is upscaled if needed).
    #[arg(short = 'w', value_name = "WIDTH")]
    width: Option<u32>,

    /// Crop instead of stretching the screenshot to fit the template.
    #[arg(long)]
    crop: bool,

    /// Rotate the screenshot by this many quarter turns counter-clockwise.
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    rotate: i32,

    /// Screen brightness adjustment (0 skips it).
    #[arg(long, value_name = "B", default_value_t = 1.0)]
    brightness: f64,

    /// Screen contrast adjustment (0 skips it).
    #[arg(long, value_name = "C", default_value_t = 1.0)]
    contrast: f64,

    /// List available templates and exit.
    #[arg(long)]
    list: bool,

    /// Use a custom directory of templates (must contain `info.json`).
    #[arg(long, value_name = "DIR")]
    custom_template_dir: Option<PathBuf>,

    /// Log pipeline details.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = template_dir(cli.custom_template_dir.as_deref())?;
    let catalog = TemplateCatalog::load(&dir)
        .with_context(|| format!("load templates from '{}'", dir.display()))?;

    if cli.list {
        print!("Available templates:\n{}", catalog.listing());
        return Ok(());
    }

    let screenshot_path = cli
        .screenshot
        .as_deref()
        .context("screenshot not specified")?;
    if !screenshot_path.is_file() {
        anyhow::bail!("screenshot '{}' not found", screenshot_path.display());
    }

    let template = choose_template(&catalog, cli.template.as_deref())?;
    println!("Generating mockup for {}", template.name);
    if let Some(author) = &template.author {
        println!("Template created by {author}");
    }
    if let Some(backlink) = &template.backlink {
        println!("Original template: {backlink}");
    }

    let config = RenderConfig {
        crop: cli.crop,
        rotate: cli.rotate,
        brightness: cli.brightness,
        contrast: cli.contrast,
        output_width: cli.width,
    };

    let screenshot = mockupgen::open_image(screenshot_path)?;
    let assets = catalog.load_assets(template)?;
    let output = render_mockup(
        screenshot,
        assets.base,
        assets.mask.as_ref(),
        template,
        &config,
    )
    .context("error generating mockup")?;

    let written = save_image(&output.image, cli.out.as_deref())?;
    println!("Saved mockup as {}", written.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn template_dir(custom: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = custom {
        if !dir.is_dir() {
            anyhow::bail!("custom template directory '{}' not found", dir.display());
        }
        println!("Using custom template directory: {}\n", dir.display());
        return Ok(dir.to_path_buf());
    }
    std::env::var_os(TEMPLATE_DIR_ENV)
        .map(PathBuf::from)
        .with_context(|| {
            format!("no template directory: pass --custom-template-dir or set {TEMPLATE_DIR_ENV}")
        })
}

/// Resolve `-t`, prompting on stdin until a valid template is picked.
fn choose_template<'a>(
    catalog: &'a TemplateCatalog,
    requested: Option<&str>,
) -> anyhow::Result<&'a TemplateDescriptor> {
    if let Some(choice) = requested {
        if let Some(t) = catalog.select(choice) {
            return Ok(t);
        }
        println!("Invalid template selection\n");
    }

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("Available templates:\n{}Select one: ", catalog.listing());
        std::io::stdout().flush().context("flush stdout")?;

        line.clear();
        let read = stdin.lock().read_line(&mut line).context("read template choice")?;
        if read == 0 {
            anyhow::bail!("no template selected");
        }
        match catalog.select(&line) {
            Some(t) => return Ok(t),
            None => println!("Invalid template selection\n"),
        }
    }
}
