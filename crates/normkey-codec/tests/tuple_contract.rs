use normkey_codec::{
    BookmarkPolicy, CodecConfig, Field, KeyOutcome, NormKeyError, OverflowPolicy, Tuple,
    TupleKeyCodec, TypeTag, norm_key_val,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).expect("ascii hex");
            u8::from_str_radix(text, 16).expect("hex digit pair")
        })
        .collect()
}

#[test]
fn three_field_tuple_has_exactly_two_interior_delimiters() {
    init_tracing();
    let key = norm_key_val(
        &[Some("S"), Some("S"), Some("S")],
        &[Some("ab"), Some("cd"), Some("ef")],
    )
    .expect("encode")
    .expect("key");
    let bytes = hex_to_bytes(&key);
    assert_eq!(bytes, b"AB\0CD\0EF");
    let delimiters: Vec<usize> = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == 0)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(delimiters, vec![2, 5]);
    assert_ne!(bytes.first(), Some(&0));
    assert_ne!(bytes.last(), Some(&0));
}

#[test]
fn malformed_date_and_time_match_absent_fields() {
    init_tracing();
    let types = [Some("D"), Some("T"), Some("S"), Some("I")];
    let malformed = norm_key_val(&types, &[Some("not-a-date"), Some("noon"), Some("x"), None])
        .expect("malformed values never fail")
        .expect("key");
    let absent = norm_key_val(&types, &[None, None, Some("x"), None])
        .expect("encode")
        .expect("key");
    assert_eq!(malformed, absent);
    assert!(malformed.starts_with("00000000000000"));
}

#[test]
fn guard_ignores_bookmark_content() {
    init_tracing();
    for bookmark in [None, Some(""), Some("row-1"), Some("12345")] {
        let result = norm_key_val(
            &[Some("S"), Some("N.2"), Some("D"), Some("I")],
            &[None, Some(""), None, bookmark],
        )
        .expect("encode");
        assert_eq!(result, None, "bookmark {bookmark:?}");
    }
}

#[test]
fn whitespace_is_not_empty_for_the_guard() {
    let result = norm_key_val(&[Some("S"), Some("I")], &[Some(" "), Some("1")]).expect("encode");
    assert_eq!(result.as_deref(), Some("20000DE0B6B3A7640000"));
}

#[test]
fn arity_mismatch_surfaces_before_anything_else() {
    let err = norm_key_val(&[Some("I"), Some("I"), Some("I")], &[Some("1"), Some("2")])
        .expect_err("3 types, 2 values");
    assert!(matches!(
        err,
        NormKeyError::ArityMismatch {
            types: 3,
            values: 2
        }
    ));
    assert!(err.is_contract_violation());
}

#[test]
fn missing_type_tag_reports_one_based_message() {
    let err = norm_key_val(&[Some("I"), Some("S"), None], &[Some("1"), Some("a"), Some("b")])
        .expect_err("missing tag");
    assert_eq!(err, NormKeyError::MissingTypeTag { position: 2 });
    assert_eq!(err.to_string(), "type[3] cannot be NULL");
}

#[test]
fn typed_tuple_and_parts_agree() {
    let tuple: Tuple<'_> = [
        Field::new(TypeTag::parse("N.-2"), Some("12345")),
        Field::new(TypeTag::Date, Some("2024-02-29")),
        Field::new(TypeTag::Integer, Some("9")),
    ]
    .into_iter()
    .collect();
    let codec = TupleKeyCodec::default();
    let typed = codec.encode(&tuple).expect("encode");
    let parts = codec
        .encode_parts(
            &[Some("N.-2"), Some("D"), Some("I")],
            &[Some("12345"), Some("2024-02-29"), Some("9")],
        )
        .expect("encode");
    assert_eq!(typed, parts);
    let KeyOutcome::Key(key) = typed else {
        panic!("expected a key");
    };
    assert!(key.as_str().starts_with("0DE0B6B3A764007A00258AD200"));
}

#[test]
fn wide_tuples_are_supported() {
    let types: Vec<Option<&str>> = (0..25).map(|_| Some("I")).collect();
    let numbers: Vec<String> = (0..25).map(|i| i.to_string()).collect();
    let values: Vec<Option<&str>> = numbers.iter().map(|s| Some(s.as_str())).collect();
    let key = norm_key_val(&types, &values).expect("encode").expect("key");
    assert_eq!(key.len(), 2 * (25 * 8 + 24));
}

#[test]
fn saturate_policy_keeps_out_of_range_values_ordered() {
    let codec = TupleKeyCodec::new(
        CodecConfig::legacy()
            .with_overflow(OverflowPolicy::Saturate)
            .with_bookmark(BookmarkPolicy::NoBookmark),
    );
    let encode = |value: &str| {
        codec
            .encode_parts(&[Some("I")], &[Some(value)])
            .expect("saturate never fails")
            .into_option()
            .expect("key")
    };
    let lowest = encode("-9223372036854775808");
    assert_eq!(lowest, "0000000000000000");
    assert!(lowest <= encode("-999999999999999999"));
    assert!(lowest < encode("0"));

    let wrapped = TupleKeyCodec::new(CodecConfig::legacy().with_bookmark(BookmarkPolicy::NoBookmark))
        .encode_parts(&[Some("I")], &[Some("-9223372036854775808")])
        .expect("wrap")
        .into_option()
        .expect("key");
    assert!(wrapped > encode("9223372036854775807"));
}

#[test]
fn codec_is_shareable_across_threads() {
    let codec = TupleKeyCodec::default();
    let expected = codec
        .encode_parts(&[Some("S"), Some("I")], &[Some("abc"), Some("1")])
        .expect("encode");
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let expected = expected.clone();
            scope.spawn(move || {
                for _ in 0..100 {
                    let outcome = codec
                        .encode_parts(&[Some("S"), Some("I")], &[Some("abc"), Some("1")])
                        .expect("encode");
                    assert_eq!(outcome, expected);
                }
            });
        }
    });
}
