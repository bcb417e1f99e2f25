use thiserror::Error;

/// Результат для операций чтения/записи IMG
pub type ImgResult<T> = std::result::Result<T, ImgError>;

/// Типы ошибок формата IMG.
#[derive(Debug, Error)]
pub enum ImgError {
    /// Файл закончился раньше, чем была прочитана секция
    #[error("Truncated data in {section}: expected {expected} bytes, found {found}")]
    Truncated {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    /// Код типа выборок вне {0, 1, 2, 4, 5, 6}
    #[error("Unsupported sample type code: {0}")]
    UnsupportedTypeCode(u8),

    /// Нарушение формата (отрицательные размеры, переполнение)
    #[error("Format violation: {0}")]
    FormatViolation(String),

    /// Отложенное чтение вернуло не то, что было объявлено
    #[error("Lazy load mismatch: declared {declared}, materialized {found}")]
    LazyMismatch { declared: String, found: String },

    /// Ошибка растрового кодировщика при записи
    #[error("Encode error: {0}")]
    Encode(String),

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImgError {
    /// Удобные конструкторы
    pub fn format_violation<S: Into<String>>(s: S) -> Self {
        Self::FormatViolation(s.into())
    }

    pub fn encode<S: Into<String>>(s: S) -> Self {
        Self::Encode(s.into())
    }

    /// `true`, если ошибка означает усечённый файл.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}
