use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use ikona::{DirSource, IconRenderer, IconRendererOpts, IconSize, Weight};

#[derive(Parser, Debug)]
#[command(name = "ikona", version, about = "Render a vector icon to PNG")]
struct Cli {
    /// Directory containing `<id>.svg` markup files.
    #[arg(long)]
    icons: PathBuf,

    /// Icon identifier (file stem under the icons directory).
    icon: String,

    /// Weight variant to derive.
    #[arg(long, value_enum, default_value_t = WeightChoice::Regular)]
    weight: WeightChoice,

    /// Output size in pixels (square).
    #[arg(long, default_value_t = 64)]
    size: u32,

    /// Foreground color as RRGGBB or RRGGBBAA hex.
    #[arg(long, default_value = "000000")]
    color: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WeightChoice {
    Thin,
    Light,
    Regular,
    Bold,
    Fill,
    Duotone,
}

impl From<WeightChoice> for Weight {
    fn from(choice: WeightChoice) -> Weight {
        match choice {
            WeightChoice::Thin => Weight::Thin,
            WeightChoice::Light => Weight::Light,
            WeightChoice::Regular => Weight::Regular,
            WeightChoice::Bold => Weight::Bold,
            WeightChoice::Fill => Weight::Fill,
            WeightChoice::Duotone => Weight::Duotone,
        }
    }
}

fn parse_hex_color(raw: &str) -> anyhow::Result<[u8; 4]> {
    let hex = raw.trim_start_matches('#');
    if !hex.is_ascii() {
        anyhow::bail!("color must be RRGGBB or RRGGBBAA hex, got {raw:?}");
    }
    let channel = |i: usize| -> anyhow::Result<u8> {
        u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .with_context(|| format!("invalid hex color {raw:?}"))
    };
    match hex.len() {
        6 => Ok([channel(0)?, channel(1)?, channel(2)?, 255]),
        8 => Ok([channel(0)?, channel(1)?, channel(2)?, channel(3)?]),
        _ => anyhow::bail!("color must be RRGGBB or RRGGBBAA hex, got {raw:?}"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let foreground_rgba = parse_hex_color(&cli.color)?;
    let renderer = IconRenderer::new(
        Arc::new(DirSource::new(&cli.icons)),
        IconRendererOpts {
            foreground_rgba,
            ..Default::default()
        },
    );

    let weight = Weight::from(cli.weight);
    let bitmap = renderer.render(&cli.icon, weight, IconSize::square(cli.size))?;

    let img = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.to_straight_rgba8())
        .context("rendered bitmap has inconsistent dimensions")?;
    img.save(&cli.out)
        .with_context(|| format!("write {}", cli.out.display()))?;

    println!(
        "wrote {} ({}x{}, {} weight)",
        cli.out.display(),
        bitmap.width,
        bitmap.height,
        weight
    );
    Ok(())
}
