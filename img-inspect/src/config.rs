use std::path::PathBuf;

use img_core::{ReadOptions, DEFAULT_RASTER_FORMAT};

use crate::{InspectError, InspectResult};

/// Формат вывода отчёта.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

/// Полная конфигурация одного запуска.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Путь к входному .img файлу
    pub input: PathBuf,
    /// Параметры чтения (lazy, режим совместимости)
    pub read: ReadOptions,
    pub output: OutputMode,
    /// Куда экспортировать растровое изображение (None = не экспортировать)
    pub export_path: Option<PathBuf>,
    /// Формат экспорта; по умолчанию берётся из расширения `export_path`
    pub export_format: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl InspectConfig {
    /// Проверяет согласованность параметров.
    pub fn validate(&self) -> InspectResult<()> {
        if self.input.as_os_str().is_empty() {
            return Err(InspectError::Config("input path is empty".to_string()));
        }

        if self.export_format.is_some() && self.export_path.is_none() {
            return Err(InspectError::Config(
                "--export-format requires --export".to_string(),
            ));
        }

        Ok(())
    }

    /// Формат экспорта: явный, иначе расширение файла, иначе png.
    pub fn resolved_export_format(&self) -> String {
        if let Some(fmt) = &self.export_format {
            return fmt.to_lowercase();
        }

        self.export_path
            .as_ref()
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_else(|| DEFAULT_RASTER_FORMAT.to_string())
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("scan.img"),
            read: ReadOptions::default(),
            output: OutputMode::Text,
            export_path: None,
            export_format: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
