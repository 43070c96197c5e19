// macrogen CLI entry point

use macrogen_cli::{output, router::CommandRouter, VerbosityLevel};

fn main() {
    if let Err(e) = CommandRouter::route() {
        output::print_error(&e.user_message());
        if VerbosityLevel::Verbose.should_output() {
            eprintln!("{}", e.technical_details());
        }
        std::process::exit(1);
    }
}
