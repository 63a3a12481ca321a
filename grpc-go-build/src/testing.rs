// fixtures shared by the unit tests

use crate::descriptor::{MessageRef, Method, Module, Service, ServiceFile};

pub fn local_module() -> Module {
    Module::new("echo/echo.proto", "echo", None)
}

pub fn message(name: &str, module: &Module) -> MessageRef {
    MessageRef {
        name: name.to_string(),
        module: module.clone(),
    }
}

pub fn method(name: &str, input: MessageRef, output: MessageRef, cs: bool, ss: bool) -> Method {
    Method {
        name: name.to_string(),
        input,
        output,
        client_streaming: cs,
        server_streaming: ss,
    }
}

/// Method whose request/response (`Req`/`Resp`) live in the `echo` module.
pub fn local_method(name: &str, cs: bool, ss: bool) -> Method {
    let module = local_module();
    method(
        name,
        message("Req", &module),
        message("Resp", &module),
        cs,
        ss,
    )
}

pub fn service(name: &str, methods: Vec<Method>) -> Service {
    Service {
        name: name.to_string(),
        methods,
    }
}

pub fn file(services: Vec<Service>) -> ServiceFile {
    ServiceFile {
        name: "echo/echo.proto".to_string(),
        module: local_module(),
        services,
    }
}
