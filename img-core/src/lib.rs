//! Библиотека чтения формата IMG
//!
//! Декодер бинарных файлов IMG (2D изображения и спектральные карты для
//! микроскопии): заголовок фиксированной структуры, код типа выборок,
//! двумерный (возможно комплексный) массив и масштабы пикселя.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use img_core::{file_reader, ReadOptions};
//!
//! let records = file_reader("scan.img", &ReadOptions::default())?;
//! let record = &records[0];
//! println!("{:?} {}", record.data.shape(), record.data.dtype());
//! for axis in &record.axes {
//!     println!("{}: {} x {} {}", axis.name, axis.size, axis.scale, axis.units);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod config;
pub mod decode;
pub mod format;
pub mod lazy;
pub mod reader;
pub mod writer;

pub use config::*;
pub use decode::*;
pub use format::*;
pub use img_types::*;
pub use lazy::*;
pub use reader::*;
pub use writer::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
