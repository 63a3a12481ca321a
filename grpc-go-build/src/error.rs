// errors raised while turning descriptors into the generator model

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file `{0}` is not part of the descriptor set")]
    FileNotFound(String),

    #[error("method `{method}` references unknown message type `{type_name}`")]
    UnresolvedType { method: String, type_name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
