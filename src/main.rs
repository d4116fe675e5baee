use metriscope::{
    cli::{Args, Command},
    error::{ErrorSeverity, MetriscopeError},
};
use std::process;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Create command from arguments
    let command = Command::from_args(args);

    // Run the command and get exit code
    let exit_code = run_command(command);

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Run the command with proper error handling
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(_) => 0,
        Err(err) => {
            // Print user-friendly error message
            eprintln!("\nError: {}", err.user_message());

            // Print suggestion if available
            if let Some(suggestion) = err.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            } else {
                // Provide default suggestions based on error type
                match &err {
                    MetriscopeError::InvalidOutputFormat { .. } => {
                        eprintln!("Suggestion: Use one of 'text', 'json' or 'csv'");
                    }
                    MetriscopeError::EmptyDataset { .. } => {
                        eprintln!("Suggestion: Check that the dataset export completed");
                    }
                    MetriscopeError::OutputWrite { .. } => {
                        eprintln!("Suggestion: Create the output directory first or specify a different path");
                    }
                    _ => {} // No default suggestion for other error types
                }
            }

            // Print backtrace in verbose mode
            #[cfg(not(tarpaulin_include))]
            if std::env::var("METRISCOPE_VERBOSE").is_ok() || std::env::var("RUST_BACKTRACE").is_ok()
            {
                if let Some(backtrace) = err.backtrace() {
                    eprintln!("\nBacktrace:\n{}", backtrace);
                }
            }

            // Return appropriate exit code based on error severity
            let exit_code = match err.severity() {
                ErrorSeverity::Warning => 0,  // Warnings don't cause failure
                ErrorSeverity::Error => 1,    // Regular errors
                ErrorSeverity::Critical => 2, // Critical errors
            };

            // Print a helpful message about exit code if it's non-zero
            if exit_code > 0 {
                eprintln!("\nExiting with code {} due to {}", exit_code, err.severity());
            }

            exit_code
        }
    }
}
