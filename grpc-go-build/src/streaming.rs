// streaming shape of a method and the per-service stream numbering

use crate::descriptor::{Method, Service};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamShape {
    Unary,
    ClientStream,
    ServerStream,
    Bidi,
}

impl StreamShape {
    pub fn from_flags(client_streaming: bool, server_streaming: bool) -> StreamShape {
        match (client_streaming, server_streaming) {
            (false, false) => StreamShape::Unary,
            (true, false) => StreamShape::ClientStream,
            (false, true) => StreamShape::ServerStream,
            (true, true) => StreamShape::Bidi,
        }
    }

    pub fn client_streams(self) -> bool {
        matches!(self, StreamShape::ClientStream | StreamShape::Bidi)
    }

    pub fn server_streams(self) -> bool {
        matches!(self, StreamShape::ServerStream | StreamShape::Bidi)
    }

    pub fn is_streaming(self) -> bool {
        self != StreamShape::Unary
    }
}

pub fn classify(method: &Method) -> StreamShape {
    StreamShape::from_flags(method.client_streaming, method.server_streaming)
}

/// A method together with its shape and, for streaming methods, its slot in
/// the service's `Streams` table. Both the client stubs and the descriptor
/// table read `stream_index` from here.
#[derive(Debug, Clone, Copy)]
pub struct PlannedMethod<'a> {
    pub method: &'a Method,
    pub shape: StreamShape,
    pub stream_index: Option<usize>,
}

pub fn plan(service: &Service) -> Vec<PlannedMethod<'_>> {
    let mut next_stream = 0;
    service
        .methods
        .iter()
        .map(|method| {
            let shape = classify(method);
            let stream_index = if shape.is_streaming() {
                next_stream += 1;
                Some(next_stream - 1)
            } else {
                None
            };
            PlannedMethod {
                method,
                shape,
                stream_index,
            }
        })
        .collect()
}
