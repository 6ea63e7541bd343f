use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::{bail, Context};
use autofit_demo::{Screen, ScreenKind};
use autofit_render_rusttype::{RusttypeTextMeasurer, DEFAULT_CACHE_CAPACITY};
use autofit_text::{MonospacedTextMeasurer, TextMeasurer};
use autofit_ui_graphics::Density;

const USAGE: &str = "usage: autofit-demo [single|multi] [--font <path>] [--density <scale>]";

struct Options {
    screen: ScreenKind,
    font: Option<String>,
    density: f32,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut options = Options {
        screen: ScreenKind::SingleLine,
        font: None,
        density: 1.0,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--font" => options.font = Some(args.next().context("--font needs a path")?),
            "--density" => {
                let value = args.next().context("--density needs a value")?;
                options.density = value
                    .parse()
                    .with_context(|| format!("invalid density {value:?}"))?;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => match ScreenKind::parse(other) {
                Some(screen) => options.screen = screen,
                None => bail!("unknown argument {other:?}\n{USAGE}"),
            },
        }
    }
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    let measurer: Rc<dyn TextMeasurer> = match &options.font {
        Some(path) => Rc::new(
            RusttypeTextMeasurer::from_file(path, DEFAULT_CACHE_CAPACITY)
                .with_context(|| format!("loading font {path}"))?,
        ),
        None => Rc::new(MonospacedTextMeasurer::default()),
    };

    let mut screen = Screen::new(
        options.screen,
        measurer,
        Density::new(options.density, 1.0),
    )?;

    println!("=== {} ===", screen.kind().title());
    println!("Type text and press enter; every line replaces the input field.");
    if screen.kind() == ScreenKind::MultiLine {
        println!("Use \\n for a line break.");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        let text = match screen.kind() {
            ScreenKind::SingleLine => line,
            ScreenKind::MultiLine => line.replace("\\n", "\n"),
        };
        screen.type_text(&text)?;
        for label in screen.labels()? {
            writeln!(stdout, "{label}")?;
        }
        stdout.flush()?;
    }
    Ok(())
}
