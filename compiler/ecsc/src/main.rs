//! ECS command-line driver.

use ecsc::commands::{lex_file, parse_file, run_file};

fn main() {
    ecsc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" | "lex" | "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: ecs {command} <file.ecs>");
                std::process::exit(1);
            }
            let path = &args[2];
            match command.as_str() {
                "run" => run_file(path),
                "lex" => lex_file(path),
                _ => parse_file(path),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("ecs {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            // A bare script path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("ecs"))
            {
                run_file(command)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("ECS scripting language");
    println!();
    println!("Usage: ecs <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.ecs>     Evaluate a program and print its result");
    println!("  lex <file.ecs>     Tokenize and display tokens");
    println!("  parse <file.ecs>   Parse and display each statement");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Environment:");
    println!("  ECS_LOG            Tracing filter, e.g. ECS_LOG=ecs_eval=trace");
}
