use thiserror::Error;

/// Structural problems that stop a table-level report before any computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns {
        columns: Vec<String>
    },
    #[error("Failed to parse dates: value [{value}] is not a {format} date")]
    DateParse {
        value: String,
        format: &'static str
    }
}

impl ReportError {
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns { columns: columns.into_iter().map(Into::into).collect() }
    }

    pub fn date_parse(value: &str, format: &'static str) -> Self {
        Self::DateParse { value: value.to_string(), format }
    }
}
