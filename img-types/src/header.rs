use crate::{ImgError, ImgResult};

/// Заголовок IMG файла: 8 × i32 плюс три f64 (время, dx, dy).
///
/// Значения индексов заголовка:
/// - `[1]` длина блока параметров (количество f64)
/// - `[2]` длина блока комментария (байт)
/// - `[3]` число строк (Ny)
/// - `[4]` число столбцов (Nx)
/// - `[5]` флаг комплексных данных
/// - `[6]` ширина одной выборки в байтах
///
/// Индексы 0 и 7 не используются, но сохраняются как есть.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImgHeader {
    /// Сырые поля заголовка в порядке файла
    pub raw: [i32; 8],
    /// Метка времени (не используется)
    pub time: f64,
    /// Масштаб пикселя по столбцам, нм
    pub dx: f64,
    /// Масштаб пикселя по строкам, нм
    pub dy: f64,
}

impl ImgHeader {
    pub fn new(raw: [i32; 8]) -> Self {
        Self {
            raw,
            time: 0.0,
            dx: 1.0,
            dy: 1.0,
        }
    }

    /// Длина блока параметров (f64), как записано в файле.
    pub fn param_count(&self) -> i32 {
        self.raw[1]
    }

    /// Заявленная длина блока комментария (байт).
    pub fn comment_len(&self) -> i32 {
        self.raw[2]
    }

    pub fn ny(&self) -> i32 {
        self.raw[3]
    }

    pub fn nx(&self) -> i32 {
        self.raw[4]
    }

    pub fn complex_flag(&self) -> i32 {
        self.raw[5]
    }

    pub fn sample_width(&self) -> i32 {
        self.raw[6]
    }

    /// Размеры изображения `(nx, ny)` с проверкой знака.
    pub fn dims(&self) -> ImgResult<(usize, usize)> {
        let nx = usize::try_from(self.nx())
            .map_err(|_| ImgError::format_violation(format!("negative Nx: {}", self.nx())))?;
        let ny = usize::try_from(self.ny())
            .map_err(|_| ImgError::format_violation(format!("negative Ny: {}", self.ny())))?;
        Ok((nx, ny))
    }
}
