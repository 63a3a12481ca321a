#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("failed to encode CodeGeneratorResponse: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Generate(#[from] grpc_go_build::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
