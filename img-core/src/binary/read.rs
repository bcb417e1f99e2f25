use std::io::Read;

use byteorder::{ByteOrder, NativeEndian};
use half::f16;
use img_types::{ImgError, ImgResult};
use log::trace;

/// Читает ровно `len` байт секции `section`.
///
/// Короткий поток даёт [`ImgError::Truncated`] с фактическим количеством байт.
pub fn read_section<R: Read>(
    reader: &mut R,
    len: usize,
    section: &'static str,
) -> ImgResult<Vec<u8>> {
    // Не доверяем длине из заголовка при выделении памяти
    let mut buf = Vec::with_capacity(len.min(1 << 20));
    reader.take(len as u64).read_to_end(&mut buf)?;

    trace!("read {} of {len} bytes for {section}", buf.len());

    if buf.len() < len {
        return Err(ImgError::Truncated {
            section,
            expected: len,
            found: buf.len(),
        });
    }

    Ok(buf)
}

/// `count * size` с проверкой переполнения.
pub fn byte_len(
    count: usize,
    size: usize,
) -> ImgResult<usize> {
    count
        .checked_mul(size)
        .ok_or_else(|| ImgError::format_violation(format!("block too large: {count} x {size} bytes")))
}

pub fn read_f16_vec<R: Read>(
    reader: &mut R,
    count: usize,
    section: &'static str,
) -> ImgResult<Vec<f16>> {
    let bytes = read_section(reader, byte_len(count, 2)?, section)?;
    let mut bits = vec![0u16; count];
    NativeEndian::read_u16_into(&bytes, &mut bits);
    Ok(bits.into_iter().map(f16::from_bits).collect())
}

pub fn read_f32_vec<R: Read>(
    reader: &mut R,
    count: usize,
    section: &'static str,
) -> ImgResult<Vec<f32>> {
    let bytes = read_section(reader, byte_len(count, 4)?, section)?;
    let mut out = vec![0f32; count];
    NativeEndian::read_f32_into(&bytes, &mut out);
    Ok(out)
}

pub fn read_f64_vec<R: Read>(
    reader: &mut R,
    count: usize,
    section: &'static str,
) -> ImgResult<Vec<f64>> {
    let bytes = read_section(reader, byte_len(count, 8)?, section)?;
    let mut out = vec![0f64; count];
    NativeEndian::read_f64_into(&bytes, &mut out);
    Ok(out)
}
