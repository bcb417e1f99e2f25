//! Спецификация формата файлов IMG
//!
//! Бинарное представление .img файлов с одной 2D картой выборок.
//! Все многобайтовые числа хранятся в нативном порядке байт машины,
//! записавшей файл; поля версии и контрольной суммы нет.
//!
//! ```text
//! offset 0:  int32[8]              заголовок
//! offset 32: float64               метка времени (не используется)
//! offset 40: float64               dx
//! offset 48: float64               dy
//! offset 56: float64[header[1]]    параметры (если header[1] > 0)
//! далее:     byte[..]              комментарий (если header[2] > 0)
//! далее:     выборки, формат по коду типа
//! ```

use std::path::Path;

/// Количество полей i32 в заголовке
pub const IMG_HEADER_FIELDS: usize = 8;

/// Размер заголовка i32 (32 байта)
pub const IMG_HEADER_SIZE: usize = IMG_HEADER_FIELDS * 4;

/// Заголовок + время + dx + dy (56 байт)
pub const IMG_PREAMBLE_SIZE: usize = IMG_HEADER_SIZE + 3 * 8;

/// Описание плагина для регистрации в приложении-хосте.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    pub format_name: &'static str,
    pub description: &'static str,
    /// Поддерживается ли формат полностью (чтение и запись без потерь)
    pub full_support: bool,
    pub file_extensions: &'static [&'static str],
    /// Индекс расширения по умолчанию в `file_extensions`
    pub default_extension: usize,
    /// Поддерживаемые для записи пары (размерность сигнала, навигации)
    pub writes: &'static [(u8, u8)],
}

/// Дескриптор IMG плагина.
pub const PLUGIN: PluginDescriptor = PluginDescriptor {
    format_name: "Signal2D",
    description: "Import/Export IMG format",
    full_support: false,
    file_extensions: &["img"],
    default_extension: 0,
    writes: &[(2, 0)],
};

impl PluginDescriptor {
    /// Проверяет расширение файла (без учёта регистра).
    pub fn accepts<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> bool {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.file_extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    pub fn can_write(
        &self,
        signal_dim: u8,
        navigation_dim: u8,
    ) -> bool {
        self.writes.contains(&(signal_dim, navigation_dim))
    }

    pub fn default_extension(&self) -> &'static str {
        self.file_extensions[self.default_extension]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(IMG_HEADER_SIZE, 32);
        assert_eq!(IMG_PREAMBLE_SIZE, 56);
    }

    #[test]
    fn test_plugin_descriptor() {
        assert_eq!(PLUGIN.format_name, "Signal2D");
        assert_eq!(PLUGIN.default_extension(), "img");
        assert!(!PLUGIN.full_support);
        assert!(PLUGIN.can_write(2, 0));
        assert!(!PLUGIN.can_write(1, 1));
    }

    #[test]
    fn test_accepts_extension() {
        assert!(PLUGIN.accepts("scan.img"));
        assert!(PLUGIN.accepts("/data/SCAN.IMG"));
        assert!(!PLUGIN.accepts("scan.png"));
        assert!(!PLUGIN.accepts("img"));
    }
}
