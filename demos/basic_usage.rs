use cliap::{CommandLineParser, Parameter};

fn main() {
    let mut parser = CommandLineParser::new()
        .add(Parameter::named("h,help").flag().help("Show this help message."))
        .add(
            Parameter::named("p,target-port")
                .required()
                .help("The port to connect to."),
        )
        .add(
            Parameter::named("t,target-host")
                .required()
                .set_default("127.0.0.1")
                .help("The host to connect to."),
        )
        .add_usage_string("basic_usage --target-port=8080 [--target-host=localhost]");

    let result = parser.parse();

    // A flag is bound even when a later check fails.
    if parser.arg("help").is_parsed() {
        parser.print_help();
        return;
    }

    if let Err(error) = result {
        parser.print_error(&error);
        parser.print_help();
        std::process::exit(1);
    }

    let port: u16 = parser.arg("target-port").value_as();
    let host = parser.arg("target-host").value_as_str();
    println!("Connecting to {host}:{port}");
}
