use super::*;

#[test]
fn test_parse_args_defaults() {
    let args: Vec<String> = vec!["in.txt".into(), "out.bin".into()];
    match parse_args("compile", &args).unwrap() {
        Parsed::Run(a) => {
            assert_eq!(a.delimiter, b':');
            assert!(a.with_content);
            assert_eq!(a.input, OsString::from("in.txt"));
            assert_eq!(a.output, OsString::from("out.bin"));
        }
        Parsed::Help => panic!("expected Run"),
    }
}

#[test]
fn test_parse_args_custom_delimiter_attached() {
    let args: Vec<String> = vec!["-d,".into(), "in.txt".into(), "out.bin".into()];
    match parse_args("compile", &args).unwrap() {
        Parsed::Run(a) => assert_eq!(a.delimiter, b','),
        Parsed::Help => panic!("expected Run"),
    }
}

#[test]
fn test_parse_args_membership_only_flag() {
    let args: Vec<String> = vec!["-e".into(), "in.txt".into(), "out.bin".into()];
    match parse_args("compile", &args).unwrap() {
        Parsed::Run(a) => assert!(!a.with_content),
        Parsed::Help => panic!("expected Run"),
    }
}

#[test]
fn test_parse_args_help_flag() {
    let args: Vec<String> = vec!["-h".into()];
    assert!(matches!(parse_args("compile", &args).unwrap(), Parsed::Help));
}

#[test]
fn test_parse_args_missing_operands_is_err() {
    let args: Vec<String> = vec!["in.txt".into()];
    assert!(parse_args("compile", &args).is_err());
}

#[test]
fn test_parse_args_unknown_flag_is_err() {
    let args: Vec<String> = vec!["-z".into(), "in.txt".into(), "out.bin".into()];
    assert!(parse_args("compile", &args).is_err());
}

#[test]
fn test_parse_record_basic() {
    let (k, v) = parse_record("foo:1", b':', true).unwrap();
    assert_eq!(k, b"foo");
    assert_eq!(v, b"1");
}

#[test]
fn test_parse_record_short_line_skipped() {
    assert!(parse_record("a", b':', true).is_none());
    assert!(parse_record("", b':', true).is_none());
}

#[test]
fn test_parse_record_no_delimiter_skipped_with_content() {
    assert!(parse_record("nodeleimiter", b':', true).is_none());
}

#[test]
fn test_parse_record_no_delimiter_tolerated_membership_only() {
    let (k, v) = parse_record("justakey", b':', false).unwrap();
    assert_eq!(k, b"justakey");
    assert!(v.is_empty());
}

#[test]
fn test_parse_record_custom_delimiter() {
    let (k, v) = parse_record("foo,bar,baz", b',', true).unwrap();
    assert_eq!(k, b"foo");
    assert_eq!(v, b"bar,baz");
}
