use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use byteorder::{ByteOrder, NativeEndian};
use img_types::{ImgData, ImgError, ImgHeader, ImgResult, TypeCode};
use log::{debug, warn};
use ndarray::{s, Array2, Zip};
use num_complex::Complex;

use crate::{
    binary::{byte_len, read_f16_vec, read_f32_vec, read_f64_vec, read_section},
    config::Compat,
    format::{IMG_HEADER_FIELDS, IMG_HEADER_SIZE, IMG_PREAMBLE_SIZE},
};

const SAMPLES: &str = "samples";

/// Результат полного декодирования одного файла.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub header: ImgHeader,
    pub type_code: TypeCode,
    /// Блок параметров (пустой, если `header[1] <= 0`)
    pub params: Vec<f64>,
    /// Сырые байты комментария
    pub comment: Vec<u8>,
    /// Массив формы (Nx, Ny)
    pub data: ImgData,
}

impl DecodedImage {
    pub fn dx(&self) -> f64 {
        self.header.dx
    }

    pub fn dy(&self) -> f64 {
        self.header.dy
    }

    /// Комментарий как текст (невалидный UTF-8 заменяется, хвостовые NUL
    /// отбрасываются).
    pub fn comment_text(&self) -> String {
        String::from_utf8_lossy(&self.comment)
            .trim_end_matches('\0')
            .to_string()
    }

    /// `(data, dx, dy)`
    pub fn into_parts(self) -> (ImgData, f64, f64) {
        (self.data, self.header.dx, self.header.dy)
    }
}

/// Потоковый декодер IMG.
pub struct ImgDecoder<R: Read> {
    reader: R,
    compat: Compat,
}

impl<R: Read> ImgDecoder<R> {
    /// Декодер над потоком, стоящим на смещении 0.
    pub fn new(
        inner: R,
        compat: Compat,
    ) -> Self {
        Self {
            reader: inner,
            compat,
        }
    }

    /// Читает 8 × i32, время, dx и dy.
    pub fn read_header(&mut self) -> ImgResult<ImgHeader> {
        let buf = read_section(&mut self.reader, IMG_PREAMBLE_SIZE, "header")?;

        let mut raw = [0i32; IMG_HEADER_FIELDS];
        NativeEndian::read_i32_into(&buf[..IMG_HEADER_SIZE], &mut raw);

        let header = ImgHeader {
            raw,
            time: NativeEndian::read_f64(&buf[IMG_HEADER_SIZE..IMG_HEADER_SIZE + 8]),
            dx: NativeEndian::read_f64(&buf[IMG_HEADER_SIZE + 8..IMG_HEADER_SIZE + 16]),
            dy: NativeEndian::read_f64(&buf[IMG_HEADER_SIZE + 16..IMG_PREAMBLE_SIZE]),
        };

        debug!(
            "IMG header: raw={:?}, dx={}, dy={}",
            header.raw, header.dx, header.dy
        );

        Ok(header)
    }

    /// Декодирует весь файл: заголовок, блоки параметров/комментария и выборки.
    pub fn decode(mut self) -> ImgResult<DecodedImage> {
        let header = self.read_header()?;

        let params = match usize::try_from(header.param_count()) {
            Ok(n) if n > 0 => read_f64_vec(&mut self.reader, n, "parameters")?,
            _ => Vec::new(),
        };

        let comment = if header.comment_len() > 0 {
            let len = self
                .compat
                .comment_bytes(header.param_count(), header.comment_len())?;
            if len != header.comment_len() as usize {
                warn!(
                    "comment block declares {} bytes, reading {len} ({} mode)",
                    header.comment_len(),
                    self.compat
                );
            }
            read_section(&mut self.reader, len, "comment")?
        } else {
            Vec::new()
        };

        let type_code = TypeCode::from_header(&header)?;
        let (nx, ny) = header.dims()?;

        debug!("IMG samples: code={type_code}, nx={nx}, ny={ny}");

        let data = decode_samples(&mut self.reader, type_code, nx, ny)?;

        Ok(DecodedImage {
            header,
            type_code,
            params,
            comment,
            data,
        })
    }
}

/// Читает блок выборок формата `code` и возвращает массив формы (nx, ny).
///
/// В файле выборки лежат построчно, форма (ny, nx) (для комплексных
/// (ny, 2·nx) с чередованием re/im).
pub fn decode_samples<R: Read>(
    reader: &mut R,
    code: TypeCode,
    nx: usize,
    ny: usize,
) -> ImgResult<ImgData> {
    let pixels = nx
        .checked_mul(ny)
        .ok_or_else(|| ImgError::format_violation(format!("image too large: {nx} x {ny}")))?;
    let count = byte_len(pixels, code.scalars_per_pixel())?;

    let data = match code {
        TypeCode::Float32 => ImgData::Float32(roll_axis(read_f32_vec(reader, count, SAMPLES)?, nx, ny)?),
        TypeCode::Float16 => ImgData::Float16(roll_axis(read_f16_vec(reader, count, SAMPLES)?, nx, ny)?),
        TypeCode::ComplexFloat32 => {
            ImgData::Complex64(combine_pairs(read_f32_vec(reader, count, SAMPLES)?, nx, ny)?)
        }
        TypeCode::Float64 => ImgData::Float64(roll_axis(read_f64_vec(reader, count, SAMPLES)?, nx, ny)?),
        TypeCode::Float32Alt => {
            ImgData::Float32(roll_axis(read_f32_vec(reader, count, SAMPLES)?, nx, ny)?)
        }
        TypeCode::ComplexFloat64 => {
            ImgData::Complex128(combine_pairs(read_f64_vec(reader, count, SAMPLES)?, nx, ny)?)
        }
    };

    Ok(data)
}

/// Открывает файл и декодирует его целиком.
pub fn read_file<P: AsRef<Path>>(
    path: P,
    compat: Compat,
) -> ImgResult<DecodedImage> {
    let file = File::open(path.as_ref())?;
    ImgDecoder::new(BufReader::new(file), compat).decode()
}

/// Только массив выборок (используется отложенным чтением).
pub fn read_data<P: AsRef<Path>>(
    path: P,
    compat: Compat,
) -> ImgResult<ImgData> {
    Ok(read_file(path, compat)?.data)
}

/// `(data, dx, dy)`
pub fn read_data_with_scales<P: AsRef<Path>>(
    path: P,
    compat: Compat,
) -> ImgResult<(ImgData, f64, f64)> {
    Ok(read_file(path, compat)?.into_parts())
}

/// (ny, nx) построчно → (nx, ny), ось 0 соответствует X.
fn roll_axis<T: Clone>(
    values: Vec<T>,
    nx: usize,
    ny: usize,
) -> ImgResult<Array2<T>> {
    let stored = Array2::from_shape_vec((ny, nx), values)
        .map_err(|e| ImgError::format_violation(format!("sample reshape: {e}")))?;
    Ok(stored.reversed_axes().as_standard_layout().into_owned())
}

/// (ny, 2·nx) → (2·nx, ny), затем чётные строки — re, нечётные — im.
fn combine_pairs<T: Clone>(
    values: Vec<T>,
    nx: usize,
    ny: usize,
) -> ImgResult<Array2<Complex<T>>> {
    let rolled = roll_axis(values, 2 * nx, ny)?;
    let re = rolled.slice(s![0..;2, ..]);
    let im = rolled.slice(s![1..;2, ..]);

    Ok(Zip::from(re)
        .and(im)
        .map_collect(|r, i| Complex::new(r.clone(), i.clone()))
        .as_standard_layout()
        .into_owned())
}
