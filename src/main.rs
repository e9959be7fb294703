use std::{env, fs, path::Path, process, time::Instant};

use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use zx_compiler::{
    compiler::compiler::{generate, CodegenOptions},
    display_error,
    errors::errors::CompileError,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

fn main() {
    if let Err(error) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Failed to set up logging: {}", error);
    }

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: zxc <source> [output]");
        process::exit(2);
    }

    let file_path = &args[1];
    let file_contents = match fs::read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let options = CodegenOptions {
        snapshot_name: Path::new(file_path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned()),
    };

    let assembly = match compile(&file_contents, &options) {
        Ok(assembly) => assembly,
        Err(error) => {
            display_error(&error, &file_contents, file_path);
            process::exit(1);
        }
    };

    match args.get(2) {
        Some(output_path) => {
            if let Err(error) = fs::write(output_path, assembly) {
                eprintln!("Failed to write {}: {}", output_path, error);
                process::exit(1);
            }
            info!("Wrote {}", output_path);
        }
        None => print!("{}", assembly),
    }
}

fn compile(source: &str, options: &CodegenOptions) -> Result<String, CompileError> {
    let start = Instant::now();

    let tokens = tokenize(source)?;
    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = parse(tokens)?;
    info!("Parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    type_check(&program)?;
    info!("Type checked in {:?}", type_check_start.elapsed());

    let compile_start = Instant::now();
    let assembly = generate(&program, options)?;
    info!("Compiled in {:?}", compile_start.elapsed());

    info!("Total time: {:?}", start.elapsed());
    Ok(assembly)
}
