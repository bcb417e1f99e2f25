use crate::{DType, ImgError, ImgHeader, ImgResult};

/// Код формата выборок (младшие 3 бита флага заголовка).
///
/// `flag = integer + 4 * double + 2 * complex`, где `integer` всегда 0,
/// `complex = header[5]`, `double = header[6] == 8 * (complex + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeCode {
    /// f32, Nx·Ny значений
    Float32 = 0,
    /// f16, Nx·Ny значений
    Float16 = 1,
    /// Пары f32 (re, im), 2·Nx·Ny значений
    ComplexFloat32 = 2,
    /// f64, Nx·Ny значений
    Float64 = 4,
    /// f32, читается так же, как код 0; другие программы могут придавать
    /// ему иной смысл, поэтому это отдельный вариант
    Float32Alt = 5,
    /// Пары f64 (re, im), 2·Nx·Ny значений
    ComplexFloat64 = 6,
}

impl TypeCode {
    pub fn from_bits(v: u8) -> ImgResult<Self> {
        match v {
            0 => Ok(TypeCode::Float32),
            1 => Ok(TypeCode::Float16),
            2 => Ok(TypeCode::ComplexFloat32),
            4 => Ok(TypeCode::Float64),
            5 => Ok(TypeCode::Float32Alt),
            6 => Ok(TypeCode::ComplexFloat64),
            _ => Err(ImgError::UnsupportedTypeCode(v)),
        }
    }

    /// Вычисляет флаг из полей заголовка и отбрасывает всё, кроме 3 бит.
    pub fn raw_flag(header: &ImgHeader) -> u8 {
        let integer_flag = 0i32;
        let complex_flag = header.complex_flag();
        let double_flag =
            (header.sample_width() == complex_flag.wrapping_add(1).wrapping_mul(8)) as i32;
        let flag = integer_flag
            .wrapping_add(double_flag.wrapping_mul(4))
            .wrapping_add(complex_flag.wrapping_mul(2));

        (flag & 7) as u8
    }

    pub fn from_header(header: &ImgHeader) -> ImgResult<Self> {
        Self::from_bits(Self::raw_flag(header))
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Тип элементов результирующего массива.
    pub fn dtype(&self) -> DType {
        match self {
            TypeCode::Float32 | TypeCode::Float32Alt => DType::Float32,
            TypeCode::Float16 => DType::Float16,
            TypeCode::Float64 => DType::Float64,
            TypeCode::ComplexFloat32 => DType::Complex64,
            TypeCode::ComplexFloat64 => DType::Complex128,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, TypeCode::ComplexFloat32 | TypeCode::ComplexFloat64)
    }

    /// Количество скалярных значений на один пиксель
    pub fn scalars_per_pixel(&self) -> usize {
        if self.is_complex() {
            2
        } else {
            1
        }
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_u8(), self.dtype())
    }
}
