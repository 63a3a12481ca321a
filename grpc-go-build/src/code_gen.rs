// file driver: header, imports, then client and server per service

use tracing::debug;

use crate::{
    client,
    descriptor::{Method, Service, ServiceFile},
    imports::ImportContext,
    names,
    options::GeneratorOptions,
    printer::{Printer, Vars},
    server,
    streaming,
};

const RUNTIME_IMPORTS: &str = "\t\"google.golang.org/grpc\"\n\
     \tcontext \"golang.org/x/net/context\"\n\
     \tproto \"github.com/golang/protobuf/proto\"\n\
     )\n\n";

pub struct CodeGenBuilder<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> CodeGenBuilder<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        CodeGenBuilder { options }
    }

    /// Renders the whole Go source for one file.
    pub fn generate_file(&self, file: &ServiceFile) -> String {
        let imports = ImportContext::resolve(file);
        debug!(
            file = %file.name,
            imports = imports.imports().len(),
            services = file.services.len(),
            "generating"
        );

        let mut printer = Printer::new();
        let mut vars = Vars::new();
        vars.set("PackageName", file.module.display_name());
        printer.print(&vars, "package $PackageName$\n\n");

        printer.print_raw("import (\n");
        if file.has_client_only_streaming() {
            printer.print_raw("\t\"io\"\n");
        }
        printer.print_raw(RUNTIME_IMPORTS);
        for line in imports.import_lines(&self.options.import_prefix) {
            printer.print_raw(&line);
            printer.print_raw("\n");
        }
        printer.print_raw("\n");

        for service in &file.services {
            set_service_vars(&mut vars, file, service);
            let plan = streaming::plan(service);
            client::generate_internal(&mut printer, &mut vars, service, &plan, &imports);
            printer.print_raw("\n");
            server::generate_internal(&mut printer, &mut vars, service, &plan, &imports);
            printer.print_raw("\n");
        }
        printer.into_inner()
    }
}

pub(crate) fn set_service_vars(vars: &mut Vars, file: &ServiceFile, service: &Service) {
    // qualifies full method names: "/pkg.Service/Method"
    let package = match file.module.package() {
        "" => String::new(),
        pkg => format!("{}.", pkg),
    };
    vars.set("Package", package);
    vars.set("Service", service.name.as_str());
    vars.set("ServiceStruct", names::lower_first(&service.name));
}

pub(crate) fn set_method_vars(vars: &mut Vars, method: &Method, imports: &ImportContext) {
    vars.set("Method", method.name.as_str());
    vars.set("Request", imports.qualify(&method.input));
    vars.set("Response", imports.qualify(&method.output));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        descriptor::Module,
        testing::{file, local_method, message, method, service},
    };

    fn render(f: &ServiceFile) -> String {
        CodeGenBuilder::new(&GeneratorOptions::default()).generate_file(f)
    }

    #[test]
    fn echo_end_to_end() {
        let f = file(vec![service(
            "Echo",
            vec![
                local_method("Say", false, false),
                local_method("Chat", true, true),
            ],
        )]);
        let out = render(&f);

        let expected = r#"package echo

import (
	"google.golang.org/grpc"
	context "golang.org/x/net/context"
	proto "github.com/golang/protobuf/proto"
)


type EchoClient interface {
	Say(ctx context.Context, in *Req, opts ...grpc.CallOption) (*Resp, error)
	Chat(ctx context.Context, opts ...grpc.CallOption) (Echo_ChatClient, error)
}

type echoClient struct {
	cc *grpc.ClientConn
}

func NewEchoClient(cc *grpc.ClientConn) EchoClient {
	return &echoClient{cc}
}

func (c *echoClient) Say(ctx context.Context, in *Req, opts ...grpc.CallOption) (*Resp, error) {
	out := new(Resp)
	err := grpc.Invoke(ctx, "/echo.Echo/Say", in, out, c.cc, opts...)
	if err != nil {
		return nil, err
	}
	return out, nil
}

func (c *echoClient) Chat(ctx context.Context, opts ...grpc.CallOption) (Echo_ChatClient, error) {
	stream, err := grpc.NewClientStream(ctx, &_Echo_serviceDesc.Streams[0], c.cc, "/echo.Echo/Chat", opts...)
	if err != nil {
		return nil, err
	}
	return &echoChatClient{stream}, nil
}

type Echo_ChatClient interface {
	Send(*Req) error
	Recv() (*Resp, error)
	grpc.ClientStream
}

type echoChatClient struct {
	grpc.ClientStream
}

func (x *echoChatClient) Send(m *Req) error {
	return x.ClientStream.SendProto(m)
}

func (x *echoChatClient) Recv() (*Resp, error) {
	m := new(Resp)
	if err := x.ClientStream.RecvProto(m); err != nil {
		return nil, err
	}
	return m, nil
}


type EchoServer interface {
	Say(context.Context, *Req) (*Resp, error)
	Chat(Echo_ChatServer) error
}

func RegisterEchoServer(s *grpc.Server, srv EchoServer) {
	s.RegisterService(&_Echo_serviceDesc, srv)
}

func _Echo_Say_Handler(srv interface{}, ctx context.Context, buf []byte) (proto.Message, error) {
	in := new(Req)
	if err := proto.Unmarshal(buf, in); err != nil {
		return nil, err
	}
	out, err := srv.(EchoServer).Say(ctx, in)
	if err != nil {
		return nil, err
	}
	return out, nil
}

func _Echo_Chat_Handler(srv interface{}, stream grpc.ServerStream) error {
	return srv.(EchoServer).Chat(&echoChatServer{stream})
}

type Echo_ChatServer interface {
	Send(*Resp) error
	Recv() (*Req, error)
	grpc.ServerStream
}

type echoChatServer struct {
	grpc.ServerStream
}

func (x *echoChatServer) Send(m *Resp) error {
	return x.ServerStream.SendProto(m)
}

func (x *echoChatServer) Recv() (*Req, error) {
	m := new(Req)
	if err := x.ServerStream.RecvProto(m); err != nil {
		return nil, err
	}
	return m, nil
}

var _Echo_serviceDesc = grpc.ServiceDesc{
	ServiceName: "echo.Echo",
	HandlerType: (*EchoServer)(nil),
	Methods: []grpc.MethodDesc{
		{
			MethodName:	"Say",
			Handler:	_Echo_Say_Handler,
		},
	},
	Streams: []grpc.StreamDesc{
		{
			StreamName:	"Chat",
			Handler:	_Echo_Chat_Handler,
			ClientStreams:	true,
			ServerStreams:	true,
		},
	},
}


"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn io_is_imported_only_for_client_only_streaming() {
        let without = render(&file(vec![service(
            "Echo",
            vec![
                local_method("Chat", true, true),
                local_method("Watch", false, true),
            ],
        )]));
        assert!(!without.contains("\"io\""));

        let with = render(&file(vec![service(
            "Echo",
            vec![local_method("Upload", true, false)],
        )]));
        assert!(with.starts_with("package echo\n\nimport (\n\t\"io\"\n\t\"google.golang.org/grpc\"\n"));
    }

    #[test]
    fn message_imports_follow_runtime_block() {
        let a = Module::new("x/api/t.proto", "api", None);
        let b = Module::new("y/api/t.proto", "api", None);
        let f = file(vec![service(
            "Echo",
            vec![method("Say", message("In", &b), message("Out", &a), false, false)],
        )]);
        let options = GeneratorOptions {
            import_prefix: "github.com/acme/".to_string(),
        };
        let out = CodeGenBuilder::new(&options).generate_file(&f);

        assert!(out.contains(
            ")\n\nimport apb0 \"github.com/acme/x/api\"\nimport \"github.com/acme/y/api\"\n\n"
        ));
        assert!(out.contains("Say(ctx context.Context, in *api.In, opts ...grpc.CallOption) (*apb0.Out, error)"));
    }

    #[test]
    fn every_service_is_emitted() {
        let f = file(vec![
            service("Echo", vec![local_method("Say", false, false)]),
            service("Admin", vec![local_method("Watch", false, true)]),
        ]);
        let out = render(&f);
        assert!(out.contains("type EchoClient interface"));
        assert!(out.contains("type AdminClient interface"));
        assert!(out.contains("var _Echo_serviceDesc"));
        assert!(out.contains("var _Admin_serviceDesc"));
        assert!(out.contains("&_Admin_serviceDesc.Streams[0], c.cc, \"/echo.Admin/Watch\""));
    }

    #[test]
    fn empty_package_drops_dot() {
        let mut f = file(vec![service("Echo", vec![local_method("Say", false, false)])]);
        f.module = Module::new("echo/echo.proto", "", Some("echopb"));
        for m in &mut f.services[0].methods {
            m.input.module = f.module.clone();
            m.output.module = f.module.clone();
        }
        let out = render(&f);
        assert!(out.starts_with("package echopb\n"));
        assert!(out.contains("\"/Echo/Say\""));
        assert!(out.contains("ServiceName: \"Echo\","));
    }

    #[test]
    fn mixed_shapes_share_stream_numbering_and_imports() {
        let local = crate::testing::local_module();
        let root = Module::new("in.proto", "root", None);
        let foreign = Module::new("x/echo/types.proto", "echo", None);
        let f = file(vec![service(
            "Echo",
            vec![
                local_method("Upload", true, false),
                local_method("Say", false, false),
                method("Watch", message("In", &root), message("Out", &foreign), false, true),
                method("Chat", message("Req", &local), message("Resp", &local), true, true),
            ],
        )]);
        let out = render(&f);

        assert!(out.starts_with("package echo\n\nimport (\n\t\"io\"\n"));
        assert!(out.contains(")\n\nimport apb0 \"x/echo\"\n\n"));
        assert!(out.contains(
            "\tWatch(ctx context.Context, m *In, opts ...grpc.CallOption) (Echo_WatchClient, error)\n"
        ));
        assert!(out.contains("\tWatch(*In, Echo_WatchServer) error\n"));
        assert!(out.contains("func (x *echoWatchClient) Recv() (*apb0.Out, error) {\n"));

        assert!(out.contains("&_Echo_serviceDesc.Streams[0], c.cc, \"/echo.Echo/Upload\""));
        assert!(out.contains("&_Echo_serviceDesc.Streams[1], c.cc, \"/echo.Echo/Watch\""));
        assert!(out.contains("&_Echo_serviceDesc.Streams[2], c.cc, \"/echo.Echo/Chat\""));

        let streams = &out[out.find("Streams: []grpc.StreamDesc{").unwrap()..];
        let upload = streams.find("StreamName:\t\"Upload\"").unwrap();
        let watch = streams.find("StreamName:\t\"Watch\"").unwrap();
        let chat = streams.find("StreamName:\t\"Chat\"").unwrap();
        assert!(upload < watch && watch < chat);
        assert!(!streams.contains("\"Say\""));
    }
}
