//! Convert inputs from the command line
//!
//! Usage: mic-convert 3.1mi 1/2gal kg

use tracing_subscriber::EnvFilter;

use mic::tools::convert::convert_input;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mic=error".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("Usage: mic-convert <input>...");
        eprintln!("Example: mic-convert 3.1mi 1/2gal kg");
        std::process::exit(2);
    }

    let mut failures = 0;
    for input in &inputs {
        match convert_input(input) {
            Ok(result) => println!("{}", result.string),
            Err(e) => {
                println!("{}: {}", input, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}
