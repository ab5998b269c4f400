//! Formatting configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Number and currency formatting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Separator between groups of three integer digits
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,

    /// Separator between integer and fraction digits
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Fraction digits shown in change percentages
    #[serde(default = "default_change_precision")]
    pub change_precision: usize,

    /// Currency code -> display symbol
    #[serde(default = "default_currency_symbols")]
    pub currency_symbols: BTreeMap<String, String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            grouping_separator: default_grouping_separator(),
            decimal_separator: default_decimal_separator(),
            change_precision: default_change_precision(),
            currency_symbols: default_currency_symbols(),
        }
    }
}

fn default_grouping_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_change_precision() -> usize {
    1
}

fn default_currency_symbols() -> BTreeMap<String, String> {
    [("USD", "US $"), ("EUR", "€"), ("GBP", "£"), ("JPY", "¥")]
        .into_iter()
        .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
        .collect()
}

impl FormatConfig {
    /// Load configuration: defaults, then the optional file, then `IXV_*`
    /// environment variables.
    pub fn load(path: Option<&str>) -> Result<Self, ViewerError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&FormatConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("IXV")
                .prefix_separator("_")
                .separator("__"),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Display symbol for a currency code; the code itself when unknown.
    ///
    /// Codes match case-insensitively since layered sources may lowercase keys.
    pub fn currency_symbol<'a>(&'a self, code: &'a str) -> &'a str {
        self.currency_symbols
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map_or(code, |(_, symbol)| symbol.as_str())
    }
}
