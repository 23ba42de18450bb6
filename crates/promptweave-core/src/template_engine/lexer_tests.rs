use super::*;
use crate::error::OpenConstruct;

fn call(name: &str, args: &[&str]) -> Directive {
    Directive::FunctionCall {
        name: name.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
    }
}

#[test]
fn test_plain_text_is_single_directive() {
    for text in ["Hello, world!", "a { single } brace", "}} stray close", "x"] {
        let directives = compile(text).unwrap();
        assert_eq!(directives, vec![Directive::Text(text.to_string())]);
    }
}

#[test]
fn test_empty_template() {
    assert!(compile("").unwrap().is_empty());
}

#[test]
fn test_variable() {
    assert_eq!(
        compile("{{$x}}").unwrap(),
        vec![Directive::Variable("x".to_string())]
    );
}

#[test]
fn test_scoped_variable_key() {
    assert_eq!(
        compile("{{$temp.input}}").unwrap(),
        vec![Directive::Variable("temp.input".to_string())]
    );
}

#[test]
fn test_function_with_quoted_arg() {
    assert_eq!(compile("{{foo 'a b' c}}").unwrap(), vec![call("foo", &["a b", "c"])]);
}

#[test]
fn test_mixed_sequence_keeps_order() {
    assert_eq!(
        compile("{{foo}}{{$bar}}baz").unwrap(),
        vec![
            call("foo", &[]),
            Directive::Variable("bar".to_string()),
            Directive::Text("baz".to_string()),
        ]
    );
}

#[test]
fn test_text_around_directives() {
    assert_eq!(
        compile("Hello, {{$name}}! Today is {{date.now}}.").unwrap(),
        vec![
            Directive::Text("Hello, ".to_string()),
            Directive::Variable("name".to_string()),
            Directive::Text("! Today is ".to_string()),
            call("date.now", &[]),
            Directive::Text(".".to_string()),
        ]
    );
}

#[test]
fn test_closing_marker_inside_quotes() {
    assert_eq!(
        compile("{{say '}} not the end' `{{`}}").unwrap(),
        vec![call("say", &["}} not the end", "{{"])]
    );
}

#[test]
fn test_empty_directive_is_dropped() {
    assert_eq!(
        compile("a{{}}b").unwrap(),
        vec![Directive::Text("a".to_string()), Directive::Text("b".to_string())]
    );
}

#[test]
fn test_unterminated_directive() {
    let err = compile("abc {{foo").unwrap_err();
    assert!(matches!(
        err,
        PromptError::MalformedTemplate {
            state: OpenConstruct::Directive,
            offset: 4
        }
    ));
}

#[test]
fn test_unterminated_quote() {
    let err = compile("{{foo 'a}}").unwrap_err();
    assert!(matches!(
        err,
        PromptError::MalformedTemplate {
            state: OpenConstruct::QuotedString,
            offset: 6
        }
    ));
}

#[test]
fn test_mismatched_quote_does_not_close() {
    assert!(compile("{{foo 'a\"}}").is_err());
}

#[test]
fn test_single_closing_brace_does_not_close() {
    assert!(compile("{{foo}").is_err());
}

#[test]
fn test_compile_is_deterministic() {
    let source = "{{greet 'dear friend'}} {{$name}}, see {{link `a b` c}}";
    assert_eq!(compile(source).unwrap(), compile(source).unwrap());
}

#[test]
fn test_multibyte_text() {
    assert_eq!(
        compile("héllo {{$wörld}} ✓").unwrap(),
        vec![
            Directive::Text("héllo ".to_string()),
            Directive::Variable("wörld".to_string()),
            Directive::Text(" ✓".to_string()),
        ]
    );
}

#[test]
fn test_offset_is_byte_based() {
    let err = compile("é{{x").unwrap_err();
    assert!(matches!(err, PromptError::MalformedTemplate { offset: 2, .. }));
}
