use serde::Serialize;

/// Единицы по умолчанию для осей IMG (в файле не хранятся).
pub const DEFAULT_UNITS: &str = "nm";

/// Описание одной оси записи.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub name: String,
    pub size: usize,
    pub offset: f64,
    pub scale: f64,
    pub units: String,
}

impl Axis {
    pub fn new<S: Into<String>>(
        name: S,
        size: usize,
        scale: f64,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            offset: 0.0,
            scale,
            units: DEFAULT_UNITS.to_string(),
        }
    }
}

/// Раздел `General` метаданных.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneralMetadata {
    pub original_filename: String,
}

/// Раздел `Signal` метаданных.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalMetadata {
    pub signal_type: String,
    pub record_by: String,
}

impl Default for SignalMetadata {
    fn default() -> Self {
        Self {
            signal_type: String::new(),
            record_by: "image".to_string(),
        }
    }
}

/// Блоки параметров и комментария из файла.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OriginalMetadata {
    pub parameters: Vec<f64>,
    pub comment: String,
}

/// Вложенные метаданные записи.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(rename = "General")]
    pub general: GeneralMetadata,
    #[serde(rename = "Signal")]
    pub signal: SignalMetadata,
    #[serde(rename = "Original", skip_serializing_if = "Option::is_none")]
    pub original: Option<OriginalMetadata>,
}

impl Metadata {
    pub fn for_file<S: Into<String>>(original_filename: S) -> Self {
        Self {
            general: GeneralMetadata {
                original_filename: original_filename.into(),
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_defaults() {
        let axis = Axis::new("x", 16, 0.25);
        assert_eq!(axis.offset, 0.0);
        assert_eq!(axis.units, "nm");
    }

    #[test]
    fn test_metadata_for_file() {
        let md = Metadata::for_file("scan.img");
        assert_eq!(md.general.original_filename, "scan.img");
        assert_eq!(md.signal.record_by, "image");
        assert!(md.signal.signal_type.is_empty());
        assert!(md.original.is_none());
    }
}
