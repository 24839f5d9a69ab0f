use serde::{Deserialize, Serialize};
use std::path::Path;

/// Formatting conventions for the exported tables, threaded into the
/// exporter as an explicit value so output never depends on the ambient
/// process locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Field separator between cells.
    pub list_separator: String,
    /// Decimal separator inside distance cells.
    pub decimal_separator: char,
    /// Fixed number of decimals in distance cells.
    pub decimal_places: usize,
    /// Rendering of an unreachable (infinite) distance.
    pub infinity: String,
    /// Hop separator inside route cells.
    pub route_separator: String,
}

impl FormatConfig {
    /// Spanish-locale conventions: semicolon-separated fields, comma
    /// decimals, the `∞` infinity symbol.
    pub fn es_es() -> Self {
        Self {
            list_separator: ";".to_string(),
            decimal_separator: ',',
            decimal_places: 2,
            infinity: "∞".to_string(),
            route_separator: " -> ".to_string(),
        }
    }

    /// English-locale conventions: comma-separated fields, dot decimals.
    pub fn en_us() -> Self {
        Self {
            list_separator: ",".to_string(),
            decimal_separator: '.',
            decimal_places: 2,
            infinity: "∞".to_string(),
            route_separator: " -> ".to_string(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::es_es()
    }
}

/// Shape of the dataset files fed into the parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Field separator inside the node and polyline files. Coordinates
    /// themselves always use `.` decimals regardless of export format.
    pub separator: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            separator: ";".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub format: FormatConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct FormatConfigFile {
    preset: Option<String>,
    list_separator: Option<String>,
    decimal_separator: Option<char>,
    decimal_places: Option<usize>,
    infinity: Option<String>,
    route_separator: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct DatasetConfigFile {
    separator: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    format: Option<FormatConfigFile>,
    dataset: Option<DatasetConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(_) => json5::from_str(&contents)?,
    };

    if let Some(format) = parsed.format {
        if let Some(preset) = format.preset.as_deref() {
            if preset == "en" || preset == "enUs" {
                config.format = FormatConfig::en_us();
            } else if preset == "es" || preset == "esEs" {
                config.format = FormatConfig::es_es();
            }
        }
        if let Some(v) = format.list_separator {
            config.format.list_separator = v;
        }
        if let Some(v) = format.decimal_separator {
            config.format.decimal_separator = v;
        }
        if let Some(v) = format.decimal_places {
            config.format.decimal_places = v;
        }
        if let Some(v) = format.infinity {
            config.format.infinity = v;
        }
        if let Some(v) = format.route_separator {
            config.format.route_separator = v;
        }
    }

    if let Some(dataset) = parsed.dataset {
        if let Some(v) = dataset.separator {
            config.dataset.separator = v;
        }
    }

    Ok(config)
}
