use thiserror::Error;

/// Errors raised while building a style sheet from raw input
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Style sheet root must be an object of rule name to declaration body")]
    RootNotAnObject,

    #[error("Declaration body of rule '{name}' must be an object")]
    NotAnObject { name: String },
}

pub type SheetResult<T> = Result<T, SheetError>;
