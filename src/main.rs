// reckon: C-style arithmetic expression interpreter with variables

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use reckon::interpreter::engine::Evaluator;
use reckon::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") => {
            print_usage(&args);
            Ok(())
        }
        Some(path) => run_batch(path),
        None => run_session(),
    }
}

fn print_usage(args: &[String]) {
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("reckon");
    eprintln!("Usage: {} [file]", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {}                 # interactive session",
        program_name
    );
    eprintln!(
        "  {} exprs.txt       # evaluate one expression per line, print the table",
        program_name
    );
    eprintln!(
        "  {} -               # read expressions from stdin",
        program_name
    );
}

/// Evaluate a file (or stdin) with one expression per line and print the
/// final variable table.
fn run_batch(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let source = if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !Path::new(path).exists() {
            eprintln!("Error: File '{}' not found", path);
            eprintln!(
                "Usage: {} [file]",
                std::env::args().next().unwrap_or_else(|| "reckon".to_string())
            );
            std::process::exit(1);
        }
        fs::read_to_string(path)?
    };

    let expressions: Vec<&str> = source.lines().collect();

    let mut evaluator = Evaluator::new();
    match evaluator.process_expressions(&expressions) {
        Ok(table) => println!("{}", table),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Run the interactive TUI session.
fn run_session() -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Evaluator::new());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
