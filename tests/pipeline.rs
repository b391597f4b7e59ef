// Integration tests for pipeline construction and the four conversions
use binpipe::codec::{Base64, Base64Scheme, Codec};
use binpipe::{BinpipeError, Pipeline, Step};

const RAW: [u8; 16] = [
    84, 1, 27, 111, 235, 146, 132, 246, 2, 23, 45, 167, 190, 169, 55, 90,
];

#[test]
fn str_to_str() {
    let cases: Vec<(&str, &str, Vec<&str>)> = vec![
        (
            "01H3W1T4BNATG1KGP7S817K4BF",
            "01H3W1T4BNATG1KGP7S817K4BF",
            vec!["ulid"],
        ),
        (
            "01H3W1T4BNATG1KGP7S817K4BF",
            "AYj4HRF1VqAZwsfKAnmRbw==",
            vec!["ulid", "b64"],
        ),
        (
            "AYj4HRF1VqAZwsfKAnmRbw==",
            "01H3W1T4BNATG1KGP7S817K4BF",
            vec!["b64", "ulid"],
        ),
        (
            "01H3W1T4BNATG1KGP7S817K4BF",
            "0188f81d117556a019c2c7ca0279916f",
            vec!["ulid", "hex"],
        ),
        (
            "0188f81d117556a019c2c7ca0279916f",
            "01H3W1T4BNATG1KGP7S817K4BF",
            vec!["hex", "ulid"],
        ),
        (
            "a1372ed62623e0037e46c31535a407041e48c21cb240acf5bc8863",
            "oTcu1iYj4AN+RsMVNaQHBB5IwhyyQKz1vIhj",
            vec!["hex", "b64"],
        ),
        (
            "oTcu1iYj4AN+RsMVNaQHBB5IwhyyQKz1vIhj",
            "a1372ed62623e0037e46c31535a407041e48c21cb240acf5bc8863",
            vec!["b64", "hex"],
        ),
        (
            "3ecb2f46-0242-4642-bdef-91d191650369",
            "PssvRgJCRkK975HRkWUDaQ==",
            vec!["uuid", "b64"],
        ),
        (
            "PssvRgJCRkK975HRkWUDaQ==",
            "3ecb2f46-0242-4642-bdef-91d191650369",
            vec!["b64", "uuid"],
        ),
        (
            "3ecb2f46-0242-4642-bdef-91d191650369",
            "3ecb2f4602424642bdef91d191650369",
            vec!["uuid", "hex"],
        ),
        (
            "3ecb2f4602424642bdef91d191650369",
            "3ecb2f46-0242-4642-bdef-91d191650369",
            vec!["hex", "uuid"],
        ),
        (
            "01H3W1T4BNATG1KGP7S817K4BF",
            "0188f81d-1175-56a0-19c2-c7ca0279916f",
            vec!["ulid", "uuid"],
        ),
        (
            "0188f81d-1175-56a0-19c2-c7ca0279916f",
            "01H3W1T4BNATG1KGP7S817K4BF",
            vec!["uuid", "ulid"],
        ),
        (
            "0188f81d-1175-56a0-19c2-c7ca0279916f",
            "0188f81d-1175-56a0-19c2-c7ca0279916f",
            vec!["uuid", "hex", "b64", "uuid"],
        ),
    ];

    for (i, (input, expected, steps)) in cases.iter().enumerate() {
        let pipe = Pipeline::new(steps.clone())
            .unwrap_or_else(|e| panic!("could not make pipeline for test case {i}: {e}"));
        let actual = pipe
            .str_to_str(input)
            .unwrap_or_else(|e| panic!("could not convert str to str for test case {i}: {e}"));
        assert_eq!(&actual, expected, "incorrect conversion for test case {i}");
    }
}

#[test]
fn bin_to_bin() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["uuid"],
        vec!["hex"],
        vec!["ulid", "uuid"],
        vec!["hex", "b64"],
        vec!["ulid", "hex", "b64", "uuid"],
    ];

    for (i, steps) in cases.iter().enumerate() {
        let pipe = Pipeline::new(steps.clone())
            .unwrap_or_else(|e| panic!("could not make pipeline for test case {i}: {e}"));
        let actual = pipe
            .bin_to_bin(&RAW)
            .unwrap_or_else(|e| panic!("could not convert bin to bin for test case {i}: {e}"));
        assert_eq!(actual, RAW.to_vec(), "incorrect conversion for test case {i}");
    }
}

#[test]
fn bin_to_str() {
    let cases: Vec<(&str, Vec<&str>)> = vec![
        ("54011b6f-eb92-84f6-0217-2da7bea9375a", vec!["uuid"]),
        ("2M04DPZTWJGKV045SDMYZAJDTT", vec!["ulid"]),
        ("VAEbb+uShPYCFy2nvqk3Wg", vec!["hex", "b64raw"]),
        ("54011b6feb9284f602172da7bea9375a", vec!["uuid", "hex"]),
        (
            "54011b6f-eb92-84f6-0217-2da7bea9375a",
            vec!["b64", "hex", "uuid"],
        ),
    ];

    for (i, (expected, steps)) in cases.iter().enumerate() {
        let pipe = Pipeline::new(steps.clone())
            .unwrap_or_else(|e| panic!("could not make pipeline for test case {i}: {e}"));
        let actual = pipe
            .bin_to_str(&RAW)
            .unwrap_or_else(|e| panic!("could not convert bin to str for test case {i}: {e}"));
        assert_eq!(&actual, expected, "incorrect conversion for test case {i}");
    }
}

#[test]
fn str_to_bin() {
    let cases: Vec<(&str, Vec<&str>)> = vec![
        ("54011b6f-eb92-84f6-0217-2da7bea9375a", vec!["uuid"]),
        ("54011b6f-eb92-84f6-0217-2da7bea9375a", vec!["uuid", "ulid"]),
        (
            "54011b6f-eb92-84f6-0217-2da7bea9375a",
            vec!["uuid", "hex", "b64", "ulid"],
        ),
    ];

    for (i, (input, steps)) in cases.iter().enumerate() {
        let pipe = Pipeline::new(steps.clone())
            .unwrap_or_else(|e| panic!("could not make pipeline for test case {i}: {e}"));
        let actual = pipe
            .str_to_bin(input)
            .unwrap_or_else(|e| panic!("could not convert str to bin for test case {i}: {e}"));
        assert_eq!(actual, RAW.to_vec(), "incorrect conversion for test case {i}");
    }
}

#[test]
fn empty_pipeline_fails_every_conversion() {
    let pipe = Pipeline::new(Vec::<Step>::new()).unwrap();
    assert!(pipe.is_empty());
    assert!(matches!(
        pipe.bin_to_bin(b"data"),
        Err(BinpipeError::EmptyPipeline)
    ));
    assert!(matches!(
        pipe.bin_to_str(b"data"),
        Err(BinpipeError::EmptyPipeline)
    ));
    assert!(matches!(
        pipe.str_to_bin("data"),
        Err(BinpipeError::EmptyPipeline)
    ));
    assert!(matches!(
        pipe.str_to_str("data"),
        Err(BinpipeError::EmptyPipeline)
    ));
}

#[test]
fn mixed_name_and_instance_steps() {
    let raw: Box<dyn Codec> = Box::new(Base64::new(Base64Scheme::RawStandard));
    let pipe = Pipeline::new(vec![Step::from("hex"), Step::from(raw)]).unwrap();
    assert_eq!(pipe.len(), 2);
    assert_eq!(pipe.bin_to_str(&RAW).unwrap(), "VAEbb+uShPYCFy2nvqk3Wg");
}

#[test]
fn construction_fails_fast_on_unknown_name() {
    let err = Pipeline::new(["hex", "nope", "b64"]).unwrap_err();
    assert!(matches!(err, BinpipeError::UnknownCodec(name) if name == "nope"));
}

#[test]
fn step_failures_carry_their_index() {
    let pipe = Pipeline::new(["hex", "b64"]).unwrap();
    let err = pipe.str_to_str("not hex at all").unwrap_err();
    match err {
        BinpipeError::Step { index, source } => {
            assert_eq!(index, 0);
            assert!(matches!(*source, BinpipeError::Hex(_)));
        }
        other => panic!("expected a step error, got {other}"),
    }

    // A failure in a later step reports that step's index.
    let pipe = Pipeline::new(["b64", "uuid"]).unwrap();
    let err = pipe.str_to_str("aGVsbG8=").unwrap_err();
    match err {
        BinpipeError::Step { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(*source, BinpipeError::Uuid(_)));
        }
        other => panic!("expected a step error, got {other}"),
    }
}

#[test]
fn single_step_string_conversion_skips_binary() {
    // A single text step must preserve the string projection directly.
    let pipe = Pipeline::new(["latin1"]).unwrap();
    assert_eq!(pipe.str_to_str("café").unwrap(), "café");
}
