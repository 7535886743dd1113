//! Crate-level integration and BDD tests.

use serde_json::json;

use crate::{
    ErrorCode, JSONRPC_VERSION, Message, MessageKind, Request, Response, ResponseError, decode,
    decode_str, encode, encode_to_string,
};

mod behaviour;

#[test]
fn request_response_exchange() {
    let request = decode_str(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"processId":null,"rootUri":null,"capabilities":{}}}"#,
    )
    .expect("decode initialize");
    let Message::Request(request) = request else {
        panic!("expected a request");
    };

    let reply = Response::success(
        request.id().clone(),
        json!({"capabilities": {"hoverProvider": true}}),
    );
    let wire = encode_to_string(&Message::from(reply)).expect("encode reply");
    let echoed = decode_str(&wire).expect("decode reply");
    assert_eq!(echoed.kind(), MessageKind::Response);
    assert_eq!(echoed.id(), Some(request.id()));
}

#[test]
fn error_reply_round_trips() {
    let reply = Message::from(Response::failure(
        Some("abc".into()),
        ResponseError::new(ErrorCode::METHOD_NOT_FOUND, "unhandled method")
            .with_data(json!({"method": "custom/unknown"})),
    ));
    let value = encode(&reply);
    assert_eq!(value["jsonrpc"], json!(JSONRPC_VERSION));
    assert_eq!(decode(value).expect("decode"), reply);
}

#[test]
fn request_with_typed_params_survives_the_wire() {
    let request = Request::with_params(11_u64, "workspace/symbol", &json!({"query": "main"}))
        .expect("serialise params");
    let wire = encode_to_string(&Message::from(request.clone())).expect("encode");
    assert_eq!(decode_str(&wire).expect("decode"), Message::Request(request));
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<crate::Decoder>();
    assert_send_sync::<crate::DecodeOptions>();
    assert_send_sync::<crate::RequestId>();
    assert_send_sync::<Message>();
    assert_send_sync::<crate::Notification>();
    assert_send_sync::<Request>();
    assert_send_sync::<Response>();
    assert_send_sync::<ResponseError>();
    assert_send_sync::<crate::DecodeError>();
    assert_send_sync::<crate::PayloadDecodeError>();
}
