use img_types::{ImgError, ImgResult};

/// Режим совместимости декодера.
///
/// `Legacy` повторяет поведение исходного читателя байт в байт:
/// комментарий читается длиной блока параметров, обе оси называются `"y"`,
/// параметры и комментарий в метаданные не попадают. `Corrected` читает
/// комментарий заявленной длины, называет вторую ось `"x"` и кладёт оба
/// блока в раздел `Original`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compat {
    #[default]
    Legacy,
    Corrected,
}

/// Параметры чтения файла.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// Отложить чтение выборок до `force()`
    pub lazy: bool,
    pub compat: Compat,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl ReadOptions {
    pub fn lazy(
        mut self,
        lazy: bool,
    ) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn compat(
        mut self,
        compat: Compat,
    ) -> Self {
        self.compat = compat;
        self
    }
}

impl Compat {
    /// Сколько байт занимает блок комментария в данном режиме.
    ///
    /// В `Legacy` отрицательная длина блока параметров означала бы чтение
    /// комментария до конца файла, после чего выборок не остаётся: это ошибка.
    pub fn comment_bytes(
        &self,
        param_count: i32,
        comment_len: i32,
    ) -> ImgResult<usize> {
        match self {
            Compat::Legacy if param_count < 0 && comment_len > 0 => {
                Err(ImgError::format_violation(format!(
                    "legacy comment length comes from parameter count {param_count}, \
                     comment would consume the sample data"
                )))
            }
            Compat::Legacy => Ok(usize::try_from(param_count).unwrap_or(0)),
            Compat::Corrected => Ok(usize::try_from(comment_len).unwrap_or(0)),
        }
    }

    /// Имя второй оси записи.
    pub fn second_axis_name(&self) -> &'static str {
        match self {
            Compat::Legacy => "y",
            Compat::Corrected => "x",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для Compat
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for Compat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Compat::Legacy => write!(f, "legacy"),
            Compat::Corrected => write!(f, "corrected"),
        }
    }
}

impl std::str::FromStr for Compat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Compat::Legacy),
            "corrected" => Ok(Compat::Corrected),
            _ => Err(format!(
                "Unknown compatibility mode: '{s}'. Use: legacy, corrected"
            )),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
