use cliap::{CommandLineParser, Parameter, ParseError};

fn server() -> CommandLineParser {
    CommandLineParser::new()
        .add(Parameter::named("h,help").flag().help("show help message"))
        .add(
            Parameter::named("p,port")
                .required()
                .set_default("8080")
                .help("listen port"),
        )
        .add(Parameter::named("a,ip-address").required().help("ip address"))
        .add_usage_string("./server --ip-address=127.0.0.1")
}

#[test]
fn parse_server() {
    let mut parser = server();

    parser
        .parse_tokens(&["./server", "--help", "--port=8080", "-a", "127.0.0.1"])
        .unwrap();

    assert!(parser.arg("help").is_parsed());
    assert_eq!(parser.arg("port").value_as::<u32>(), 8080);
    assert_eq!(parser.arg("ip-address").value_as_str(), "127.0.0.1");
}

#[test]
fn parse_error() {
    let mut parser = server();

    let result = parser.parse_tokens(&["./server", "--port", "80"]);

    assert_eq!(
        result,
        Err(ParseError::MissingRequired {
            short: "a".to_string(),
            long: "ip-address".to_string(),
        })
    );
    assert_eq!(
        result.err().map(|e| e.to_string()),
        Some("Expected required parameter value: a [ip-address]".to_string())
    );
    assert_eq!(parser.arg("port").value_as::<u32>(), 80);
}

#[test]
fn value_conversion() {
    let mut parser = CommandLineParser::new()
        .add(Parameter::named("r,ratio").set_default("0.5"))
        .add(Parameter::named("n,name"));

    parser.parse_tokens(&["./program", "--name", "abc"]).unwrap();

    assert_eq!(parser.arg("r").value_as::<f64>(), 0.5);
    assert_eq!(parser.arg("n").value_as::<u32>(), 0);
    assert!(parser.arg("n").try_value_as::<u32>().is_err());
    assert_eq!(parser.arg("missing").try_value_as::<u32>(), Ok(None));
}

#[test]
fn reset() {
    let mut parser = server();

    parser.reset();

    assert_eq!(parser.parameter_count(), 0);
    assert!(parser.usage_examples().is_empty());
}

#[test]
fn named_invalid() {
    assert!(Parameter::try_named("").is_err());
    assert!(Parameter::try_named("a,b").is_err());
    assert!(Parameter::try_named("alpha,beta").is_err());
}

#[test]
#[cfg(feature = "unit_test")]
fn help_message() {
    let mut parser = server();

    let message = parser.help_message();

    assert_eq!(
        message,
        r#"Usage:
    ./server --ip-address=127.0.0.1

    -h [ --help       ] show help message
    -p [ --port       ] listen port [required] (default: 8080)
    -a [ --ip-address ] ip address [required]"#
    );
}
