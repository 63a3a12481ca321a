// generate server code

use tracing::debug;

use crate::{
    code_gen::set_method_vars,
    descriptor::Service,
    imports::ImportContext,
    printer::{Printer, Vars},
    service_desc::ServiceTable,
    streaming::{PlannedMethod, StreamShape},
};

pub fn generate_internal(
    printer: &mut Printer,
    vars: &mut Vars,
    service: &Service,
    plan: &[PlannedMethod<'_>],
    imports: &ImportContext,
) {
    // User needs to implement
    printer.print(vars, "type $Service$Server interface {\n");
    for planned in plan {
        set_method_vars(vars, planned.method, imports);
        generate_method_def(printer, vars, planned.shape);
    }
    printer.print_raw("}\n\n");

    printer.print(
        vars,
        "func Register$Service$Server(s *grpc.Server, srv $Service$Server) {\n\
         \ts.RegisterService(&_$Service$_serviceDesc, srv)\n\
         }\n\n",
    );

    for planned in plan {
        set_method_vars(vars, planned.method, imports);
        generate_handler(printer, vars, planned.shape);
    }

    ServiceTable::build(plan).generate(printer, vars);
    debug!(service = %service.name, methods = plan.len(), "emitted server");
}

fn generate_method_def(printer: &mut Printer, vars: &Vars, shape: StreamShape) {
    let def = match shape {
        StreamShape::Unary => "\t$Method$(context.Context, *$Request$) (*$Response$, error)\n",
        StreamShape::ServerStream => "\t$Method$(*$Request$, $Service$_$Method$Server) error\n",
        StreamShape::ClientStream | StreamShape::Bidi => {
            "\t$Method$($Service$_$Method$Server) error\n"
        }
    };
    printer.print(vars, def);
}

const STREAM_HANDLER: &str = "func _$Service$_$Method$_Handler(srv interface{}, stream grpc.ServerStream) error {\n\
     \treturn srv.($Service$Server).$Method$(&$ServiceStruct$$Method$Server{stream})\n\
     }\n\n";

const WRAPPER_STRUCT: &str = "type $ServiceStruct$$Method$Server struct {\n\
     \tgrpc.ServerStream\n\
     }\n\n";

const SEND: &str = "func (x *$ServiceStruct$$Method$Server) Send(m *$Response$) error {\n\
     \treturn x.ServerStream.SendProto(m)\n\
     }\n\n";

const RECV: &str = "func (x *$ServiceStruct$$Method$Server) Recv() (*$Request$, error) {\n\
     \tm := new($Request$)\n\
     \tif err := x.ServerStream.RecvProto(m); err != nil {\n\
     \t\treturn nil, err\n\
     \t}\n\
     \treturn m, nil\n\
     }\n\n";

fn generate_handler(printer: &mut Printer, vars: &Vars, shape: StreamShape) {
    match shape {
        StreamShape::Unary => {
            printer.print(
                vars,
                "func _$Service$_$Method$_Handler(srv interface{}, ctx context.Context, buf []byte) (proto.Message, error) {\n\
                 \tin := new($Request$)\n\
                 \tif err := proto.Unmarshal(buf, in); err != nil {\n\
                 \t\treturn nil, err\n\
                 \t}\n\
                 \tout, err := srv.($Service$Server).$Method$(ctx, in)\n\
                 \tif err != nil {\n\
                 \t\treturn nil, err\n\
                 \t}\n\
                 \treturn out, nil\n\
                 }\n\n",
            );
        }
        StreamShape::Bidi => {
            printer.print(vars, STREAM_HANDLER);
            printer.print(
                vars,
                "type $Service$_$Method$Server interface {\n\
                 \tSend(*$Response$) error\n\
                 \tRecv() (*$Request$, error)\n\
                 \tgrpc.ServerStream\n\
                 }\n\n",
            );
            printer.print(vars, WRAPPER_STRUCT);
            printer.print(vars, SEND);
            printer.print(vars, RECV);
        }
        StreamShape::ServerStream => {
            // the single request is read before the implementation runs
            printer.print(
                vars,
                "func _$Service$_$Method$_Handler(srv interface{}, stream grpc.ServerStream) error {\n\
                 \tm := new($Request$)\n\
                 \tif err := stream.RecvProto(m); err != nil {\n\
                 \t\treturn err\n\
                 \t}\n\
                 \treturn srv.($Service$Server).$Method$(m, &$ServiceStruct$$Method$Server{stream})\n\
                 }\n\n",
            );
            printer.print(
                vars,
                "type $Service$_$Method$Server interface {\n\
                 \tSend(*$Response$) error\n\
                 \tgrpc.ServerStream\n\
                 }\n\n",
            );
            printer.print(vars, WRAPPER_STRUCT);
            printer.print(vars, SEND);
        }
        StreamShape::ClientStream => {
            printer.print(vars, STREAM_HANDLER);
            printer.print(
                vars,
                "type $Service$_$Method$Server interface {\n\
                 \tSendAndClose(*$Response$) error\n\
                 \tRecv() (*$Request$, error)\n\
                 \tgrpc.ServerStream\n\
                 }\n\n",
            );
            printer.print(vars, WRAPPER_STRUCT);
            printer.print(
                vars,
                "func (x *$ServiceStruct$$Method$Server) SendAndClose(m *$Response$) error {\n\
                 \tif err := x.ServerStream.SendProto(m); err != nil {\n\
                 \t\treturn err\n\
                 \t}\n\
                 \treturn nil\n\
                 }\n\n",
            );
            printer.print(vars, RECV);
        }
    }
}
