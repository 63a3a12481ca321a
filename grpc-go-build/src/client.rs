// client code

use tracing::debug;

use crate::{
    code_gen::set_method_vars,
    descriptor::Service,
    imports::ImportContext,
    printer::{Printer, Vars},
    streaming::{PlannedMethod, StreamShape},
};

pub fn generate_internal(
    printer: &mut Printer,
    vars: &mut Vars,
    service: &Service,
    plan: &[PlannedMethod<'_>],
    imports: &ImportContext,
) {
    printer.print(vars, "type $Service$Client interface {\n");
    for planned in plan {
        set_method_vars(vars, planned.method, imports);
        generate_method_def(printer, vars, planned.shape);
    }
    printer.print_raw("}\n\n");

    printer.print(
        vars,
        "type $ServiceStruct$Client struct {\n\
         \tcc *grpc.ClientConn\n\
         }\n\n",
    );
    printer.print(
        vars,
        "func New$Service$Client(cc *grpc.ClientConn) $Service$Client {\n\
         \treturn &$ServiceStruct$Client{cc}\n\
         }\n\n",
    );

    for planned in plan {
        set_method_vars(vars, planned.method, imports);
        if let Some(index) = planned.stream_index {
            vars.set("StreamInd", index.to_string());
        }
        generate_method_impl(printer, vars, planned.shape);
    }
    debug!(service = %service.name, methods = plan.len(), "emitted client");
}

fn generate_method_def(printer: &mut Printer, vars: &Vars, shape: StreamShape) {
    let def = match shape {
        StreamShape::Unary => {
            "\t$Method$(ctx context.Context, in *$Request$, opts ...grpc.CallOption) (*$Response$, error)\n"
        }
        StreamShape::ServerStream => {
            "\t$Method$(ctx context.Context, m *$Request$, opts ...grpc.CallOption) ($Service$_$Method$Client, error)\n"
        }
        StreamShape::ClientStream | StreamShape::Bidi => {
            "\t$Method$(ctx context.Context, opts ...grpc.CallOption) ($Service$_$Method$Client, error)\n"
        }
    };
    printer.print(vars, def);
}

const NEW_STREAM: &str = "\tstream, err := grpc.NewClientStream(ctx, &_$Service$_serviceDesc.Streams[$StreamInd$], c.cc, \"/$Package$$Service$/$Method$\", opts...)\n\
     \tif err != nil {\n\
     \t\treturn nil, err\n\
     \t}\n";

const WRAPPER_STRUCT: &str = "type $ServiceStruct$$Method$Client struct {\n\
     \tgrpc.ClientStream\n\
     }\n\n";

const SEND: &str = "func (x *$ServiceStruct$$Method$Client) Send(m *$Request$) error {\n\
     \treturn x.ClientStream.SendProto(m)\n\
     }\n\n";

const RECV: &str = "func (x *$ServiceStruct$$Method$Client) Recv() (*$Response$, error) {\n\
     \tm := new($Response$)\n\
     \tif err := x.ClientStream.RecvProto(m); err != nil {\n\
     \t\treturn nil, err\n\
     \t}\n\
     \treturn m, nil\n\
     }\n\n";

fn generate_method_impl(printer: &mut Printer, vars: &Vars, shape: StreamShape) {
    match shape {
        StreamShape::Unary => {
            printer.print(
                vars,
                "func (c *$ServiceStruct$Client) $Method$(ctx context.Context, in *$Request$, opts ...grpc.CallOption) (*$Response$, error) {\n\
                 \tout := new($Response$)\n\
                 \terr := grpc.Invoke(ctx, \"/$Package$$Service$/$Method$\", in, out, c.cc, opts...)\n\
                 \tif err != nil {\n\
                 \t\treturn nil, err\n\
                 \t}\n\
                 \treturn out, nil\n\
                 }\n\n",
            );
        }
        StreamShape::Bidi => {
            printer.print(
                vars,
                "func (c *$ServiceStruct$Client) $Method$(ctx context.Context, opts ...grpc.CallOption) ($Service$_$Method$Client, error) {\n",
            );
            printer.print(vars, NEW_STREAM);
            printer.print(
                vars,
                "\treturn &$ServiceStruct$$Method$Client{stream}, nil\n\
                 }\n\n",
            );
            printer.print(
                vars,
                "type $Service$_$Method$Client interface {\n\
                 \tSend(*$Request$) error\n\
                 \tRecv() (*$Response$, error)\n\
                 \tgrpc.ClientStream\n\
                 }\n\n",
            );
            printer.print(vars, WRAPPER_STRUCT);
            printer.print(vars, SEND);
            printer.print(vars, RECV);
        }
        StreamShape::ServerStream => {
            printer.print(
                vars,
                "func (c *$ServiceStruct$Client) $Method$(ctx context.Context, m *$Request$, opts ...grpc.CallOption) ($Service$_$Method$Client, error) {\n",
            );
            printer.print(vars, NEW_STREAM);
            // exactly one request, then half-close
            printer.print(
                vars,
                "\tx := &$ServiceStruct$$Method$Client{stream}\n\
                 \tif err := x.ClientStream.SendProto(m); err != nil {\n\
                 \t\treturn nil, err\n\
                 \t}\n\
                 \tif err := x.ClientStream.CloseSend(); err != nil {\n\
                 \t\treturn nil, err\n\
                 \t}\n\
                 \treturn x, nil\n\
                 }\n\n",
            );
            printer.print(
                vars,
                "type $Service$_$Method$Client interface {\n\
                 \tRecv() (*$Response$, error)\n\
                 \tgrpc.ClientStream\n\
                 }\n\n",
            );
            printer.print(vars, WRAPPER_STRUCT);
            printer.print(vars, RECV);
        }
        StreamShape::ClientStream => {
            printer.print(
                vars,
                "func (c *$ServiceStruct$Client) $Method$(ctx context.Context, opts ...grpc.CallOption) ($Service$_$Method$Client, error) {\n",
            );
            printer.print(vars, NEW_STREAM);
            printer.print(
                vars,
                "\treturn &$ServiceStruct$$Method$Client{stream}, nil\n\
                 }\n\n",
            );
            printer.print(
                vars,
                "type $Service$_$Method$Client interface {\n\
                 \tSend(*$Request$) error\n\
                 \tCloseAndRecv() (*$Response$, error)\n\
                 \tgrpc.ClientStream\n\
                 }\n\n",
            );
            printer.print(vars, WRAPPER_STRUCT);
            printer.print(vars, SEND);
            // io.EOF after the single response is the success path
            printer.print(
                vars,
                "func (x *$ServiceStruct$$Method$Client) CloseAndRecv() (*$Response$, error) {\n\
                 \tif err := x.ClientStream.CloseSend(); err != nil {\n\
                 \t\treturn nil, err\n\
                 \t}\n\
                 \tm := new($Response$)\n\
                 \tif err := x.ClientStream.RecvProto(m); err != io.EOF {\n\
                 \t\treturn nil, err\n\
                 \t}\n\
                 \treturn m, nil\n\
                 }\n\n",
            );
        }
    }
}
