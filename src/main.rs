use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use clex::{render_error, tokenize};
use log::info;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: clex <file>");
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(file_path));

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(1);
        }
    };

    let start = Instant::now();

    match tokenize(file_contents.clone(), Some(file_name)) {
        Ok(tokens) => {
            info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());
            for token in &tokens {
                token.debug();
            }
        }
        Err(error) => {
            eprint!("{}", render_error(&error, &file_contents));
            process::exit(1);
        }
    }
}
