// grpc.ServiceDesc literal binding method names to handlers

use crate::{
    printer::{Printer, Vars},
    streaming::PlannedMethod,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodEntry<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEntry<'a> {
    pub name: &'a str,
    pub index: usize,
    pub client_streams: bool,
    pub server_streams: bool,
}

/// Unary and streaming tables of one service, both in declaration order.
#[derive(Debug, Default)]
pub struct ServiceTable<'a> {
    pub methods: Vec<MethodEntry<'a>>,
    pub streams: Vec<StreamEntry<'a>>,
}

impl<'a> ServiceTable<'a> {
    pub fn build(plan: &[PlannedMethod<'a>]) -> ServiceTable<'a> {
        let mut table = ServiceTable::default();
        for planned in plan {
            let name = planned.method.name.as_str();
            match planned.stream_index {
                None => table.methods.push(MethodEntry { name }),
                Some(index) => table.streams.push(StreamEntry {
                    name,
                    index,
                    client_streams: planned.shape.client_streams(),
                    server_streams: planned.shape.server_streams(),
                }),
            }
        }
        // the client stubs address streams by position
        debug_assert!(table.streams.iter().enumerate().all(|(i, s)| s.index == i));
        table
    }

    pub(crate) fn generate(&self, printer: &mut Printer, vars: &mut Vars) {
        printer.print(
            vars,
            "var _$Service$_serviceDesc = grpc.ServiceDesc{\n\
             \tServiceName: \"$Package$$Service$\",\n\
             \tHandlerType: (*$Service$Server)(nil),\n\
             \tMethods: []grpc.MethodDesc{\n",
        );
        for entry in &self.methods {
            vars.set("Method", entry.name);
            printer.print(
                vars,
                "\t\t{\n\
                 \t\t\tMethodName:\t\"$Method$\",\n\
                 \t\t\tHandler:\t_$Service$_$Method$_Handler,\n\
                 \t\t},\n",
            );
        }
        printer.print_raw("\t},\n");

        printer.print_raw("\tStreams: []grpc.StreamDesc{\n");
        for entry in &self.streams {
            vars.set("Method", entry.name);
            printer.print(
                vars,
                "\t\t{\n\
                 \t\t\tStreamName:\t\"$Method$\",\n\
                 \t\t\tHandler:\t_$Service$_$Method$_Handler,\n",
            );
            if entry.client_streams {
                printer.print_raw("\t\t\tClientStreams:\ttrue,\n");
            }
            if entry.server_streams {
                printer.print_raw("\t\t\tServerStreams:\ttrue,\n");
            }
            printer.print_raw("\t\t},\n");
        }
        printer.print_raw("\t},\n}\n\n");
    }
}
