use std::io::Write;

use img_core::{file_reader, file_writer, RecordSummary};
use log::{debug, info};

use crate::{InspectConfig, InspectError, InspectResult, OutputMode};

/// Читает файл, печатает отчёт в `out` и при необходимости экспортирует
/// изображение. Возвращает сводку прочитанной записи.
pub fn run<W: Write>(
    config: &InspectConfig,
    out: &mut W,
) -> InspectResult<RecordSummary> {
    config.validate()?;

    debug!("inspect config: {config:?}");

    let mut records = file_reader(&config.input, &config.read)?;
    let record = records
        .pop()
        .ok_or_else(|| InspectError::Config("file produced no records".to_string()))?;
    let summary = record.summary();

    match config.output {
        OutputMode::Text => write_report(out, &summary)?,
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }

    if let Some(path) = &config.export_path {
        let format = config.resolved_export_format();
        file_writer(path, record, Some(format.as_str()))?;
        info!("✓ Exported {:?} as {format}", path);
    }

    Ok(summary)
}

/// Текстовый отчёт о записи.
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &RecordSummary,
) -> std::io::Result<()> {
    let (rows, cols) = summary.shape;

    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "  File          : {}", summary.metadata.general.original_filename)?;
    writeln!(out, "  Shape         : {rows} x {cols}")?;
    writeln!(out, "  Data type     : {}", summary.dtype)?;
    writeln!(out, "  Lazy          : {}", summary.lazy)?;

    for (i, axis) in summary.axes.iter().enumerate() {
        writeln!(
            out,
            "  Axis {i}        : {} size={} scale={} {} offset={}",
            axis.name, axis.size, axis.scale, axis.units, axis.offset
        )?;
    }

    if let Some(original) = &summary.metadata.original {
        writeln!(out, "  Parameters    : {:?}", original.parameters)?;
        writeln!(out, "  Comment       : {:?}", original.comment)?;
    }

    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use img_core::{Compat, DType};
    use tempfile::NamedTempFile;

    use super::*;

    /// Файл 2 x 3 float32 с одним параметром и комментарием.
    fn sample_file() -> NamedTempFile {
        let mut buf = Vec::new();
        for v in [0i32, 1, 4, 3, 2, 0, 4, 0] {
            buf.extend_from_slice(&v.to_ne_bytes());
        }
        for v in [0.0f64, 0.5, 2.0, 42.0] {
            buf.extend_from_slice(&v.to_ne_bytes());
        }
        buf.extend_from_slice(b"note");
        for v in 0..6 {
            buf.extend_from_slice(&(v as f32).to_ne_bytes());
        }

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&buf).unwrap();
        file
    }

    #[test]
    fn test_text_report() {
        let file = sample_file();
        let cfg = InspectConfig {
            input: file.path().to_path_buf(),
            read: img_core::ReadOptions::default().compat(Compat::Corrected),
            ..InspectConfig::default()
        };

        let mut out = Vec::new();
        let summary = run(&cfg, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary.shape, (2, 3));
        assert_eq!(summary.dtype, DType::Float32);
        assert!(text.contains("Shape         : 2 x 3"));
        assert!(text.contains("Axis 1        : x size=3 scale=0.5 nm"));
        assert!(text.contains("Parameters    : [42.0]"));
        assert!(text.contains("\"note\""));
    }

    #[test]
    fn test_json_report_and_export() {
        let file = sample_file();
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("out.png");

        let cfg = InspectConfig {
            input: file.path().to_path_buf(),
            read: img_core::ReadOptions::default()
                .compat(Compat::Corrected)
                .lazy(true),
            output: OutputMode::Json,
            export_path: Some(png.clone()),
            export_format: None,
        };

        let mut out = Vec::new();
        let summary = run(&cfg, &mut out).unwrap();
        assert!(summary.lazy);

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["dtype"], "float32");
        assert_eq!(json["metadata"]["Original"]["comment"], "note");
        assert!(png.exists());
    }

    #[test]
    fn test_missing_input() {
        let cfg = InspectConfig {
            input: "/nonexistent/dir/scan.img".into(),
            ..InspectConfig::default()
        };
        let err = run(&cfg, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, InspectError::Img(_)));
    }
}
