//! Отложенное чтение массива выборок.
//!
//! [`LazyImage`] хранит форму и тип, полученные при первом (полном) чтении,
//! и одну отложенную задачу, которая повторно читает файл при вызове
//! [`LazyImage::force`]. Задача одноразовая: `force` потребляет handle.

use std::path::PathBuf;

use img_types::{DType, ImgData, ImgError, ImgResult};
use log::debug;

use crate::{config::Compat, decode::read_data};

/// Отложенная задача чтения.
pub type DeferredRead = Box<dyn FnOnce() -> ImgResult<ImgData> + Send>;

/// Одноразовый handle на ещё не прочитанный массив.
pub struct LazyImage {
    shape: (usize, usize),
    dtype: DType,
    task: DeferredRead,
}

impl LazyImage {
    /// Оборачивает произвольную задачу с объявленными формой и типом.
    pub fn new<F>(
        shape: (usize, usize),
        dtype: DType,
        task: F,
    ) -> Self
    where
        F: FnOnce() -> ImgResult<ImgData> + Send + 'static,
    {
        Self {
            shape,
            dtype,
            task: Box::new(task),
        }
    }

    /// Задача, повторно читающая файл `path`.
    pub fn from_path(
        path: PathBuf,
        compat: Compat,
        shape: (usize, usize),
        dtype: DType,
    ) -> Self {
        Self::new(shape, dtype, move || {
            debug!("materializing deferred read of {:?}", path);
            read_data(&path, compat)
        })
    }

    /// Объявленная форма
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Объявленный тип элементов
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Выполняет отложенное чтение и сверяет результат с объявленным.
    pub fn force(self) -> ImgResult<ImgData> {
        let data = (self.task)()?;

        if data.shape() != self.shape || data.dtype() != self.dtype {
            return Err(ImgError::LazyMismatch {
                declared: format!("{:?} {}", self.shape, self.dtype),
                found: format!("{:?} {}", data.shape(), data.dtype()),
            });
        }

        Ok(data)
    }
}

impl std::fmt::Debug for LazyImage {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("LazyImage")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype)
            .finish_non_exhaustive()
    }
}
