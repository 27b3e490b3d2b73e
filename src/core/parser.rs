use crate::domain::model::{ApiCommand, Command, Verb};
use thiserror::Error;

pub const QUIT_COMMAND: &str = "q";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}", .0.usage())]
    Usage(Verb),

    #[error("Program: unknown command")]
    Unknown(String),
}

/// Classifies one line of input. The verb token is matched first, then
/// the arguments are checked against that verb's forms.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    if line == QUIT_COMMAND {
        return Ok(Command::Quit);
    }

    let (token, rest) = split_token(line);
    let verb = Verb::from_token(token).ok_or_else(|| ParseError::Unknown(line.trim().to_string()))?;

    let command = match verb {
        Verb::Get => parse_get(rest),
        Verb::Post => parse_post(rest),
        Verb::Put => parse_put(rest),
        Verb::Delete => parse_delete(rest),
    };

    command.map(Command::Api).ok_or(ParseError::Usage(verb))
}

fn parse_get(args: &str) -> Option<ApiCommand> {
    if args.is_empty() {
        return Some(ApiCommand::GetAll { sorted: false });
    }

    let (flag, value) = split_token(args);
    if flag.eq_ignore_ascii_case("--sorted") {
        parse_bool(value).map(|sorted| ApiCommand::GetAll { sorted })
    } else if flag.eq_ignore_ascii_case("--id") && !value.is_empty() {
        Some(ApiCommand::GetById {
            id: value.to_string(),
        })
    } else {
        None
    }
}

fn parse_post(args: &str) -> Option<ApiCommand> {
    is_object_literal(args).then(|| ApiCommand::Post {
        body: args.to_string(),
    })
}

fn parse_put(args: &str) -> Option<ApiCommand> {
    let (id, body) = split_token(args);
    (!id.is_empty() && is_object_literal(body)).then(|| ApiCommand::Put {
        id: id.to_string(),
        body: body.to_string(),
    })
}

fn parse_delete(args: &str) -> Option<ApiCommand> {
    let (id, extra) = split_token(args);
    (!id.is_empty() && extra.is_empty()).then(|| ApiCommand::Delete { id: id.to_string() })
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// `{...}` with at least one character between the braces.
fn is_object_literal(text: &str) -> bool {
    text.len() > 2 && text.starts_with('{') && text.ends_with('}')
}

/// Splits off the first whitespace-delimited token; the remainder comes
/// back trimmed on both ends.
fn split_token(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim()),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(line: &str) -> ApiCommand {
        match parse_command(line) {
            Ok(Command::Api(cmd)) => cmd,
            other => panic!("expected api command for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_quit_is_exact() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert!(matches!(parse_command("Q"), Err(ParseError::Unknown(_))));
        assert!(matches!(parse_command("quit"), Err(ParseError::Unknown(_))));
    }

    #[test]
    fn test_get_all() {
        assert_eq!(api("get"), ApiCommand::GetAll { sorted: false });
        assert_eq!(api("GET   "), ApiCommand::GetAll { sorted: false });
        assert_eq!(api("get --sorted True"), ApiCommand::GetAll { sorted: true });
        assert_eq!(api("get --sorted false"), ApiCommand::GetAll { sorted: false });
        assert_eq!(api("Get --SORTED TRUE "), ApiCommand::GetAll { sorted: true });
    }

    #[test]
    fn test_get_by_id() {
        assert_eq!(
            api("get --id abc-123"),
            ApiCommand::GetById {
                id: "abc-123".to_string()
            }
        );
        assert_eq!(
            api("get --id  42  "),
            ApiCommand::GetById { id: "42".to_string() }
        );
    }

    #[test]
    fn test_get_usage_errors() {
        for line in ["get --sorted maybe", "get --sorted", "get --id", "get --id   ", "get 42", "get --sorted True x"] {
            assert_eq!(parse_command(line), Err(ParseError::Usage(Verb::Get)), "{}", line);
        }
    }

    #[test]
    fn test_post() {
        assert_eq!(
            api(r#"post {"a":1}"#),
            ApiCommand::Post {
                body: r#"{"a":1}"#.to_string()
            }
        );
        assert_eq!(
            api(r#"POST {"dataId": "x", "weight": 42}   "#),
            ApiCommand::Post {
                body: r#"{"dataId": "x", "weight": 42}"#.to_string()
            }
        );
        assert_eq!(parse_command("post"), Err(ParseError::Usage(Verb::Post)));
        assert_eq!(parse_command("post {}"), Err(ParseError::Usage(Verb::Post)));
        assert_eq!(parse_command("post [1, 2]"), Err(ParseError::Usage(Verb::Post)));
    }

    #[test]
    fn test_put() {
        assert_eq!(
            api(r#"put 42 {"a":1}"#),
            ApiCommand::Put {
                id: "42".to_string(),
                body: r#"{"a":1}"#.to_string()
            }
        );
        assert_eq!(parse_command("put 42"), Err(ParseError::Usage(Verb::Put)));
        assert_eq!(parse_command(r#"put {"a":1}"#), Err(ParseError::Usage(Verb::Put)));
    }

    #[test]
    fn test_delete() {
        assert_eq!(api("delete 42"), ApiCommand::Delete { id: "42".to_string() });
        assert_eq!(api("DELETE 42  "), ApiCommand::Delete { id: "42".to_string() });
        assert_eq!(parse_command("delete"), Err(ParseError::Usage(Verb::Delete)));
        assert_eq!(parse_command("delete 1 2"), Err(ParseError::Usage(Verb::Delete)));
    }

    #[test]
    fn test_unknown_commands() {
        for line in ["", "   ", "fetch 1", "getall", "patch 1 {\"a\":1}"] {
            assert!(matches!(parse_command(line), Err(ParseError::Unknown(_))), "{:?}", line);
        }
        assert_eq!(
            ParseError::Unknown("x".to_string()).to_string(),
            "Program: unknown command"
        );
    }

    #[test]
    fn test_verb_must_be_a_whole_token() {
        for line in [r#"postx {"a":1}"#, "puts 1 {\"a\":1}", "deletex 1", "get--id 1"] {
            assert_eq!(
                parse_command(line),
                Err(ParseError::Unknown(line.to_string())),
                "{:?}",
                line
            );
        }
    }

    #[test]
    fn test_usage_error_message_is_usage_string() {
        assert_eq!(
            ParseError::Usage(Verb::Delete).to_string(),
            "Delete usage: delete {id}"
        );
    }
}
