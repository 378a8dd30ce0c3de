use super::*;

#[test]
fn exit_words_are_case_insensitive() {
    assert!(is_exit("EXIT"));
    assert!(is_exit("Выход"));
    assert!(!is_exit("выйди из зума"));
}

#[test]
fn describe_renders_wire_json() {
    assert_eq!(describe(&Command::ResetImage), r#"{"cmd":"reset_image"}"#);
}

#[test]
fn phrase_words_are_joined() {
    let args = Args::try_parse_from(["voice", "сильно", "вправо"]).expect("parse");
    assert_eq!(args.phrase.join(" "), "сильно вправо");
    assert_eq!(args.port, DEFAULT_PORT);
}
