use msg_proto::{encode, Encode, Error, Flags, Message, MessageType, Route};

fn decode_varint(buf: &[u8]) -> (u64, usize) {
    let mut value = 0u64;
    for (i, b) in buf.iter().enumerate() {
        value |= u64::from(b & 0x7F) << (7 * i);
        if b & 0x80 == 0 {
            return (value, i + 1);
        }
    }
    panic!("unterminated varint");
}

#[test]
fn request_scenario() {
    let buf = encode(1, 0, false, Route::Name("foo"), Some(&b"bar"[..]), false).unwrap();
    assert_eq!(buf, b"\x00\x01\x03foobar");
}

#[test]
fn push_scenario() {
    let buf = encode(0, 3, true, Route::Code(300), None, false).unwrap();
    assert_eq!(buf, [0x07, 0x01, 0x2C]);
}

#[test]
fn notify_scenario() {
    let buf = encode(0, 1, false, Route::None, Some(&b"x"[..]), false).unwrap();
    assert_eq!(buf, [0x02, 0x00, 0x78]);
}

#[test]
fn response_scenario() {
    let buf = encode(300, 2, false, Route::None, Some(&b"ok"[..]), false).unwrap();
    assert_eq!(buf[0], 0x04);
    let (id, n) = decode_varint(&buf[1..]);
    assert_eq!(id, 300);
    assert_eq!(&buf[1 + n..], b"ok");
}

#[test]
fn push_gzip_flag() {
    let buf = encode(0, 3, true, Route::Code(1), None, true).unwrap();
    assert_eq!(buf[0], 0x17);
}

#[test]
fn route_code_boundary() {
    assert!(encode(1, 0, true, Route::Code(65535), None, false).is_ok());
    assert_eq!(
        encode(1, 0, true, Route::Code(65536), None, false),
        Err(Error::RouteCodeOverflow(65536))
    );
}

#[test]
fn route_name_boundary() {
    let name = "r".repeat(255);
    let buf = encode(1, 1, false, Route::Name(&name), None, false).unwrap();
    assert_eq!(buf.len(), 1 + 1 + 255);

    let name = "r".repeat(256);
    assert_eq!(
        encode(1, 1, false, Route::Name(&name), None, false),
        Err(Error::RouteNameOverflow(256))
    );
}

#[test]
fn route_kind_mismatch() {
    assert_eq!(
        encode(1, 3, true, Route::Name("push.route"), None, false),
        Err(Error::InvalidRouteKind)
    );
}

#[test]
fn invalid_type_wins() {
    for ty in 4..=255u8 {
        assert_eq!(
            encode(1, ty, true, Route::Name("x"), None, false),
            Err(Error::InvalidType(ty))
        );
    }
}

#[test]
fn id_ignored_without_capability() {
    let a = encode(1, 1, false, Route::Name("a"), None, false).unwrap();
    let b = encode(u64::MAX, 1, false, Route::Name("a"), None, false).unwrap();
    assert_eq!(a, b);
}

#[test]
fn length_matches_computed_size() {
    fn prop(id: u64, ty: u8, code: u16, name: String, body: Vec<u8>, gzip: bool) -> bool {
        let ty = match MessageType::try_from(ty % 4) {
            Ok(ty) => ty,
            Err(_) => return false,
        };
        let name: String = name.chars().filter(|c| (*c as u32) < 256).take(255).collect();

        let by_code = Message::new(ty)
            .with_id(id)
            .with_route(code)
            .with_body(&body)
            .compress_route(true)
            .compress_gzip(gzip);
        let by_name = Message::new(ty)
            .with_id(id)
            .with_route(name.as_str())
            .with_body(&body)
            .compress_gzip(gzip);

        [by_code, by_name].iter().all(|msg| {
            let len = msg.encoded_len().unwrap();
            let buf = msg.encode_to_vec().unwrap();
            buf.len() == len && (buf[0] >> 1) & 0x03 == ty as u8 && buf.ends_with(&body)
        })
    }
    quickcheck::quickcheck(prop as fn(u64, u8, u16, String, Vec<u8>, bool) -> bool);
}

#[test]
fn flags_from_bools() {
    assert_eq!(Flags::new(false, false), Flags::empty());
    assert_eq!(Flags::new(true, false), Flags::COMPRESS_ROUTE);
    assert_eq!(
        Flags::new(true, true),
        Flags::COMPRESS_ROUTE | Flags::COMPRESS_GZIP
    );
}
