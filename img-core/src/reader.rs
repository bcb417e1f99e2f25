use std::path::Path;

use img_types::{Axis, DType, ImgData, ImgResult, Metadata, OriginalMetadata};
use log::info;
use serde::Serialize;

use crate::{
    config::{Compat, ReadOptions},
    decode::{read_file, DecodedImage},
    lazy::LazyImage,
};

/// Данные записи: уже прочитанный массив или отложенное чтение.
#[derive(Debug)]
pub enum RecordData {
    Eager(ImgData),
    Lazy(LazyImage),
}

impl RecordData {
    pub fn shape(&self) -> (usize, usize) {
        match self {
            RecordData::Eager(d) => d.shape(),
            RecordData::Lazy(l) => l.shape(),
        }
    }

    pub fn dtype(&self) -> DType {
        match self {
            RecordData::Eager(d) => d.dtype(),
            RecordData::Lazy(l) => l.dtype(),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, RecordData::Lazy(_))
    }

    /// Материализует массив (для отложенного варианта читает файл).
    pub fn compute(self) -> ImgResult<ImgData> {
        match self {
            RecordData::Eager(d) => Ok(d),
            RecordData::Lazy(l) => l.force(),
        }
    }
}

/// Запись, передаваемая приложению-хосту: данные, оси и метаданные.
#[derive(Debug)]
pub struct Record {
    pub data: RecordData,
    pub axes: Vec<Axis>,
    pub metadata: Metadata,
}

/// Сводка записи без самих выборок (для вывода/JSON).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub shape: (usize, usize),
    pub dtype: DType,
    pub lazy: bool,
    pub axes: Vec<Axis>,
    pub metadata: Metadata,
}

impl Record {
    /// Возвращает запись с материализованными данными.
    pub fn compute(self) -> ImgResult<Record> {
        Ok(Record {
            data: RecordData::Eager(self.data.compute()?),
            axes: self.axes,
            metadata: self.metadata,
        })
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            shape: self.data.shape(),
            dtype: self.data.dtype(),
            lazy: self.data.is_lazy(),
            axes: self.axes.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Читает IMG файл и возвращает одну запись.
///
/// Файл всегда читается целиком один раз; при `options.lazy` массив этого
/// чтения используется только для формы и типа, а данные записи заменяются
/// отложенным повторным чтением.
pub fn file_reader<P: AsRef<Path>>(
    path: P,
    options: &ReadOptions,
) -> ImgResult<Vec<Record>> {
    let path = path.as_ref();
    let decoded = read_file(path, options.compat)?;

    info!(
        "Read {:?}: {:?} {} (code {})",
        path,
        decoded.data.shape(),
        decoded.data.dtype(),
        decoded.type_code.as_u8()
    );

    let original_filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = assemble_record(decoded, original_filename, options, |shape, dtype| {
        LazyImage::from_path(path.to_path_buf(), options.compat, shape, dtype)
    });

    Ok(vec![record])
}

/// Собирает запись из результата декодирования.
fn assemble_record<F>(
    decoded: DecodedImage,
    original_filename: String,
    options: &ReadOptions,
    make_lazy: F,
) -> Record
where
    F: FnOnce((usize, usize), DType) -> LazyImage,
{
    let (rows, cols) = decoded.data.shape();

    let axes = vec![
        Axis::new("y", rows, decoded.dy()),
        Axis::new(options.compat.second_axis_name(), cols, decoded.dx()),
    ];

    let mut metadata = Metadata::for_file(original_filename);
    if options.compat == Compat::Corrected {
        metadata.original = Some(OriginalMetadata {
            comment: decoded.comment_text(),
            parameters: decoded.params.clone(),
        });
    }

    let data = if options.lazy {
        let dtype = decoded.data.dtype();
        // Прочитанный массив больше не нужен: данные придут из force()
        drop(decoded);
        RecordData::Lazy(make_lazy((rows, cols), dtype))
    } else {
        RecordData::Eager(decoded.data)
    };

    Record {
        data,
        axes,
        metadata,
    }
}
