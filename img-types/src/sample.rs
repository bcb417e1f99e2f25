use half::f16;
use ndarray::Array2;
use num_complex::{Complex32, Complex64};
use serde::Serialize;

/// Тип элементов декодированного массива (имена как у numpy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Float16,
    Float32,
    Float64,
    /// Пара f32
    Complex64,
    /// Пара f64
    Complex128,
}

impl DType {
    pub fn is_complex(&self) -> bool {
        matches!(self, DType::Complex64 | DType::Complex128)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float16 => "float16",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Двумерный массив выборок формы (Nx, Ny).
#[derive(Debug, Clone, PartialEq)]
pub enum ImgData {
    Float16(Array2<f16>),
    Float32(Array2<f32>),
    Float64(Array2<f64>),
    Complex64(Array2<Complex32>),
    Complex128(Array2<Complex64>),
}

impl ImgData {
    pub fn dtype(&self) -> DType {
        match self {
            ImgData::Float16(_) => DType::Float16,
            ImgData::Float32(_) => DType::Float32,
            ImgData::Float64(_) => DType::Float64,
            ImgData::Complex64(_) => DType::Complex64,
            ImgData::Complex128(_) => DType::Complex128,
        }
    }

    /// Форма `(shape[0], shape[1])`; ось 0 соответствует X файла.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            ImgData::Float16(a) => a.dim(),
            ImgData::Float32(a) => a.dim(),
            ImgData::Float64(a) => a.dim(),
            ImgData::Complex64(a) => a.dim(),
            ImgData::Complex128(a) => a.dim(),
        }
    }

    pub fn len(&self) -> usize {
        let (rows, cols) = self.shape();
        rows * cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Действительные значения приводятся к f64, комплексные берутся по модулю.
    pub fn to_magnitude(&self) -> Array2<f64> {
        match self {
            ImgData::Float16(a) => a.mapv(|v| v.to_f64()),
            ImgData::Float32(a) => a.mapv(f64::from),
            ImgData::Float64(a) => a.clone(),
            ImgData::Complex64(a) => a.mapv(|v| f64::from(v.norm())),
            ImgData::Complex128(a) => a.mapv(|v| v.norm()),
        }
    }

    pub fn as_float32(&self) -> Option<&Array2<f32>> {
        match self {
            ImgData::Float32(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_float64(&self) -> Option<&Array2<f64>> {
        match self {
            ImgData::Float64(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_complex64(&self) -> Option<&Array2<Complex32>> {
        match self {
            ImgData::Complex64(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_complex128(&self) -> Option<&Array2<Complex64>> {
        match self {
            ImgData::Complex128(a) => Some(a),
            _ => None,
        }
    }
}
