// protoc plugin framing around grpc-go-build

use std::io::{Read, Write};

use grpc_go_build::{DescriptorSet, GeneratorOptions};
use prost::Message;
use prost_types::compiler::{code_generator_response, CodeGeneratorRequest, CodeGeneratorResponse};
use tracing::{info, warn};

use crate::error::Result;

pub fn read_request<R: Read>(mut reader: R) -> Result<CodeGeneratorRequest> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(CodeGeneratorRequest::decode(buf.as_slice())?)
}

pub fn write_response<W: Write>(mut writer: W, response: &CodeGeneratorResponse) -> Result<()> {
    let mut buf = Vec::with_capacity(response.encoded_len());
    response.encode(&mut buf)?;
    writer.write_all(&buf)?;
    writer.flush()?;
    Ok(())
}

/// Generates one Go file per entry of `file_to_generate`.
pub fn generate(request: &CodeGeneratorRequest) -> Result<CodeGeneratorResponse> {
    let options = GeneratorOptions::parse(request.parameter());
    let builder = grpc_go_build::Builder::with_options(options);
    let descriptors = DescriptorSet::new(&request.proto_file);

    let mut files = Vec::with_capacity(request.file_to_generate.len());
    for name in &request.file_to_generate {
        let service_file = descriptors.service_file(name)?;
        let generated = builder.generate(&service_file);
        info!(input = %name, output = %generated.name, "generated");
        files.push(code_generator_response::File {
            name: Some(generated.name),
            content: Some(generated.content),
            ..Default::default()
        });
    }

    Ok(CodeGeneratorResponse {
        file: files,
        ..Default::default()
    })
}

/// Like [`generate`], but reports failures back to protoc through the
/// response instead of returning them.
pub fn run(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    match generate(request) {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "generation failed");
            CodeGeneratorResponse {
                error: Some(err.to_string()),
                ..Default::default()
            }
        }
    }
}
