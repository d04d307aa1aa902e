use crate::global_settings::GlobalSettings;
use clap::{arg, Arg, Command};

fn scalar(arg: Arg) -> Arg {
    arg.allow_negative_numbers(true)
}

pub(crate) fn build_cli() -> Command {
    Command::new("ranges")
        .version("0.1")
        .about("Parse, encode and compare int4range and float8range values")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("parse")
                .about("Parse a literal and show it in canonical form")
                .arg(arg!(<LITERAL> "Range literal, like '[1,5)' or 'empty'")),
        )
        .subcommand(
            Command::new("make")
                .about("Construct a range from its bounds")
                .arg(scalar(arg!(<LOWER> "Lower bound")))
                .arg(scalar(arg!(<UPPER> "Upper bound")))
                .arg(
                    arg!([BOUNDS] "One of '[)', '[]', '(]' or '()'")
                        .default_value("[)"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Show the binary payload of a range, in hexadecimal")
                .arg(arg!(<LITERAL> "Range literal")),
        )
        .subcommand(
            Command::new("decode")
                .about("Show the range stored in a hexadecimal payload")
                .arg(arg!(<PAYLOAD> "Payload, in hexadecimal")),
        )
        .subcommand(
            Command::new("info")
                .about("Show the bounds of a range and whether it is empty")
                .arg(arg!(<LITERAL> "Range literal")),
        )
        .subcommand(
            Command::new("overlaps")
                .visible_alias("&&")
                .about("Whether two ranges have values in common")
                .arg(arg!(<LEFT> "Range literal"))
                .arg(arg!(<RIGHT> "Range literal")),
        )
        .subcommand(
            Command::new("contains")
                .visible_alias("@>")
                .about("Whether a range contains a value")
                .arg(arg!(<RANGE> "Range literal"))
                .arg(scalar(arg!(<VALUE> "Value to look for"))),
        )
        .subcommand(
            Command::new("contained-by")
                .visible_alias("<@")
                .about("Whether a value is contained in a range")
                .arg(scalar(arg!(<VALUE> "Value to look for")))
                .arg(arg!(<RANGE> "Range literal")),
        )
        .subcommand(
            // Use    eval "$(ranges completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
