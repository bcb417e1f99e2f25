use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use img_types::{ImgData, ImgError, ImgResult};
use log::info;
use ndarray::Array2;

use crate::reader::Record;

/// Формат по умолчанию для записи
pub const DEFAULT_RASTER_FORMAT: &str = "png";

/// Записывает запись растровым изображением через крейт `image`.
///
/// `file_format` — расширение целевого формата (`"png"`, `"tiff"`);
/// отложенная запись сначала материализуется.
pub fn file_writer<P: AsRef<Path>>(
    path: P,
    record: Record,
    file_format: Option<&str>,
) -> ImgResult<()> {
    let data = record.data.compute()?;
    write_image(path, &data, file_format)
}

/// Записывает массив как 8-битное серое изображение.
///
/// Строки изображения — ось 0 массива, столбцы — ось 1.
pub fn write_image<P: AsRef<Path>>(
    path: P,
    data: &ImgData,
    file_format: Option<&str>,
) -> ImgResult<()> {
    let ext = file_format.unwrap_or(DEFAULT_RASTER_FORMAT);
    let format = ImageFormat::from_extension(ext)
        .ok_or_else(|| ImgError::encode(format!("unknown raster format '{ext}'")))?;

    let img = to_gray(&data.to_magnitude())?;
    img.save_with_format(path.as_ref(), format)
        .map_err(|e| ImgError::encode(e.to_string()))?;

    info!(
        "Wrote {:?} ({}x{}, {:?})",
        path.as_ref(),
        img.width(),
        img.height(),
        format
    );

    Ok(())
}

/// Линейно растягивает конечные значения в диапазон 0..=255.
fn to_gray(values: &Array2<f64>) -> ImgResult<GrayImage> {
    let (rows, cols) = values.dim();
    if rows == 0 || cols == 0 {
        return Err(ImgError::format_violation(format!(
            "cannot write empty image {rows}x{cols}"
        )));
    }

    let height = u32::try_from(rows)
        .map_err(|_| ImgError::format_violation(format!("too many rows: {rows}")))?;
    let width = u32::try_from(cols)
        .map_err(|_| ImgError::format_violation(format!("too many columns: {cols}")))?;

    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    // Половины, чтобы max - min не переполнялся при значениях около f64::MAX
    let half_range = max / 2.0 - min / 2.0;

    Ok(GrayImage::from_fn(width, height, |x, y| {
        let v = values[[y as usize, x as usize]];
        let level = if v.is_finite() && half_range > 0.0 {
            ((v / 2.0 - min / 2.0) / half_range * 255.0).round() as u8
        } else {
            0
        };
        Luma([level])
    }))
}
