use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::culture::cultureloader::culture_from_json;
use crate::culture::cultureregistry::{CultureRegistry, DEFAULT_CULTURE};
use crate::culture::workingdayculture::WorkingDayCulture;
use crate::error::Result;


fn default_culture() -> String {
    DEFAULT_CULTURE.to_owned()
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_culture")]
    default_culture: String,
    #[serde(default)]
    fallback_culture: Option<String>,
    #[serde(default)]
    cultures: Vec<serde_json::Value>
}

/// Registry settings and custom cultures loaded from a JSON document.
pub struct Configuration {
    default_culture: String,
    fallback_culture: Option<String>,
    cultures: Vec<WorkingDayCulture>
}


impl Configuration {
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Configuration> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration> {
        let cultures = json_prop.cultures
            .into_iter()
            .map(culture_from_json)
            .collect::<Result<Vec<_>>>()?;
        info!(
            cultures = cultures.len(),
            default_culture = %json_prop.default_culture,
            "loaded working day configuration"
        );
        Ok(Configuration {
            default_culture: json_prop.default_culture,
            fallback_culture: json_prop.fallback_culture,
            cultures
        })
    }

    pub fn default_culture(&self) -> &str {
        &self.default_culture
    }

    pub fn fallback_culture(&self) -> Option<&str> {
        self.fallback_culture.as_deref()
    }

    pub fn cultures(&self) -> &[WorkingDayCulture] {
        &self.cultures
    }

    /// A registry serving the configured cultures next to the built-in ones.
    pub fn registry(&self) -> CultureRegistry {
        let mut builder = CultureRegistry::builder().default_culture(self.default_culture.clone());
        if let Some(fallback) = &self.fallback_culture {
            builder = builder.fallback_culture(fallback.clone());
        }
        for culture in self.cultures.iter() {
            builder = builder.register(culture.clone());
        }
        builder.build()
    }
}
