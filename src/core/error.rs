use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrambleError {
    #[error("Widget {0:?} is not focusable")]
    NotFocusable(crate::ui::WidgetId),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BrambleError>;
