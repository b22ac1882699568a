use kimsufi_cli::display::print_error;
use kimsufi_cli::run;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(()) => {
            // Success - no additional output needed
        }
        Err(e) => {
            print_error(&format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
