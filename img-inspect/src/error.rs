use thiserror::Error;

pub type InspectResult<T> = std::result::Result<T, InspectError>;

#[derive(Debug, Error)]
pub enum InspectError {
    /// Ошибка формата IMG
    #[error("IMG error: {0}")]
    Img(#[from] img_core::ImgError),

    /// Ошибка вывода отчёта
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации сводки
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Некорректные параметры командной строки
    #[error("Config error: {0}")]
    Config(String),
}
