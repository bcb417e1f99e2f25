use std::path::PathBuf;

use clap::Parser;
use img_core::{Compat, ReadOptions, PLUGIN};
use img_inspect::{run, InspectConfig, OutputMode};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "img-inspect",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect IMG image/spectral-map files and export them as raster images",
    long_about = None,
)]
struct Cli {
    /// Путь к .img файлу
    input: PathBuf,
    /// Отложенное чтение выборок
    #[arg(long)]
    lazy: bool,
    /// Режим совместимости: legacy, corrected
    #[arg(long, default_value = "legacy")]
    compat: String,
    /// Вывести сводку в JSON
    #[arg(long)]
    json: bool,
    /// Экспортировать изображение (png, tiff)
    #[arg(short, long)]
    export: Option<PathBuf>,
    /// Формат экспорта (по умолчанию — расширение файла)
    #[arg(long)]
    export_format: Option<String>,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let compat: Compat = match cli.compat.parse() {
        Ok(c) => c,
        Err(e) => {
            error!("--compat: {e}");
            std::process::exit(1);
        }
    };

    if !PLUGIN.accepts(&cli.input) {
        info!(
            "{:?} has no .{} extension, decoding anyway",
            cli.input,
            PLUGIN.default_extension()
        );
    }

    let config = InspectConfig {
        input: cli.input,
        read: ReadOptions::default().lazy(cli.lazy).compat(compat),
        output: if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        export_path: cli.export,
        export_format: cli.export_format,
    };

    let stdout = std::io::stdout();
    if let Err(e) = run(&config, &mut stdout.lock()) {
        error!("Inspection failed: {e}");
        std::process::exit(1);
    }
}
