use thiserror::Error;

/// Postal-code lookup errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CepError {
    /// Value does not hold exactly 8 digits
    #[error("Invalid CEP: {cep}")]
    InvalidCep { cep: String },

    #[error("HTTP request failed: {error}")]
    HttpRequestFailed { error: String },

    #[error("Unexpected HTTP status {status} for CEP {cep}")]
    UnexpectedStatus { status: u16, cep: String },

    #[error("JSON parse error: {error}")]
    JsonParseError { error: String },

    /// ViaCEP answered `{"erro": true}`
    #[error("CEP not found: {cep}")]
    NotFound { cep: String },

    #[error("HTTP client could not be built: {error}")]
    ClientBuild { error: String },
}

pub type CepResult<T> = Result<T, CepError>;
