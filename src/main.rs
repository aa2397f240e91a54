// Packwright - declarative build configuration assembler
// Entry point with clean separation of concerns

use packwright::cli::CliHandler;

fn main() {
    let handler = CliHandler::new();

    if let Err(e) = handler.run() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
