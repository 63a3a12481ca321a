// converts protoc descriptors into the generator model

use std::collections::HashMap;

use prost_types::{DescriptorProto, FileDescriptorProto, MethodDescriptorProto};
use tracing::debug;

use crate::{
    descriptor::{MessageRef, Method, Module, Service, ServiceFile},
    error::{Error, Result},
};

/// Index over every file protoc handed us, so message references can be
/// traced back to their declaring file.
pub struct DescriptorSet<'a> {
    files: &'a [FileDescriptorProto],
    // fully qualified name (".pkg.Outer.Inner") -> (file index, Go name)
    messages: HashMap<String, (usize, String)>,
}

impl<'a> DescriptorSet<'a> {
    pub fn new(files: &'a [FileDescriptorProto]) -> DescriptorSet<'a> {
        let mut messages = HashMap::new();
        for (idx, file) in files.iter().enumerate() {
            let scope = match file.package() {
                "" => String::new(),
                pkg => format!(".{}", pkg),
            };
            for msg in &file.message_type {
                index_message(&mut messages, idx, &scope, "", msg);
            }
        }
        DescriptorSet { files, messages }
    }

    pub fn service_file(&self, name: &str) -> Result<ServiceFile> {
        let file = self
            .files
            .iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| Error::FileNotFound(name.to_string()))?;

        let mut services = Vec::with_capacity(file.service.len());
        for svc in &file.service {
            let methods = svc
                .method
                .iter()
                .map(|m| self.method(m))
                .collect::<Result<Vec<_>>>()?;
            services.push(Service {
                name: svc.name().to_string(),
                methods,
            });
        }
        debug!(file = name, services = services.len(), "converted descriptor");

        Ok(ServiceFile {
            name: name.to_string(),
            module: module_of(file),
            services,
        })
    }

    fn method(&self, method: &MethodDescriptorProto) -> Result<Method> {
        Ok(Method {
            name: method.name().to_string(),
            input: self.message(method.name(), method.input_type())?,
            output: self.message(method.name(), method.output_type())?,
            client_streaming: method.client_streaming(),
            server_streaming: method.server_streaming(),
        })
    }

    fn message(&self, method: &str, type_name: &str) -> Result<MessageRef> {
        // protoc always hands out absolute names; be lenient about the leading dot
        let key = if type_name.starts_with('.') {
            type_name.to_string()
        } else {
            format!(".{}", type_name)
        };
        let (idx, go_name) =
            self.messages
                .get(&key)
                .ok_or_else(|| Error::UnresolvedType {
                    method: method.to_string(),
                    type_name: type_name.to_string(),
                })?;
        Ok(MessageRef {
            name: go_name.clone(),
            module: module_of(&self.files[*idx]),
        })
    }
}

fn module_of(file: &FileDescriptorProto) -> Module {
    let go_package = file.options.as_ref().map(|o| o.go_package());
    Module::new(file.name(), file.package(), go_package)
}

fn index_message(
    messages: &mut HashMap<String, (usize, String)>,
    file_idx: usize,
    scope: &str,
    go_prefix: &str,
    msg: &DescriptorProto,
) {
    let full_name = format!("{}.{}", scope, msg.name());
    // nested messages are flattened with `_` like protoc-gen-go does
    let go_name = format!("{}{}", go_prefix, msg.name());
    for nested in &msg.nested_type {
        index_message(
            messages,
            file_idx,
            &full_name,
            &format!("{}_", go_name),
            nested,
        );
    }
    messages.insert(full_name, (file_idx, go_name));
}
