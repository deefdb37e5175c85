//! Zinc Compiler CLI
//!
//! Only the lexical front end exists today; `zinc lex` dumps the token
//! stream the parser will eventually consume.

use zincc::commands::lex_file;

fn main() {
    zincc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: zinc lex <file.zn>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Zinc compiler");
    println!();
    println!("Usage: zinc <command> [args]");
    println!();
    println!("Commands:");
    println!("  lex <file.zn>    Tokenize a file and print the token stream");
    println!("  help             Show this message");
}
