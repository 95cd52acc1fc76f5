use thiserror::Error;

/// Feil ved grensesnittet (JSON, fil, konfig). Analysene selv feiler aldri.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error ({what}) at {path}: {message}")]
    Parse {
        what: &'static str,
        path: String,
        message: String,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    InvalidCfg(String),
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// JSON-parsing med sti til feltet som feilet.
pub(crate) fn parse_json<T>(what: &'static str, json_in: &str) -> CoreResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let mut de = serde_json::Deserializer::from_str(json_in);
    serde_path_to_error::deserialize(&mut de).map_err(|e| CoreError::Parse {
        what,
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}
