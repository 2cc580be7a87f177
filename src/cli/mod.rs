//! # Command-line client
//!
//! Each invocation maps one subcommand to one HTTP request, prints the rendered
//! response on stdout and returns the process exit code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | The API answered 2xx |
//! | 1 | The API answered with any other status |
//! | 2 | No response (connection refused, timeout, bad URL) |

pub mod args;
pub mod error;
pub mod render;
pub mod transport;

pub use args::{Cli, Commands, DEFAULT_BASE_URL};
pub use error::CliError;
pub use transport::{ApiRequest, ApiResponse, HttpTransport};

use tracing::warn;

pub const EXIT_OK: i32 = 0;
pub const EXIT_API_ERROR: i32 = 1;
pub const EXIT_TRANSPORT: i32 = 2;

/// Sends the request for `cli.command` and renders the outcome.
pub async fn execute(cli: &Cli) -> Result<render::Rendered, CliError> {
    let request = ApiRequest::from(&cli.command);
    let transport = HttpTransport::new(&cli.base_url)?;
    let response = transport.send(&request).await?;
    Ok(render::render(&response, request.no_content))
}

/// Runs the CLI, printing to stdout. Returns the exit code.
pub async fn run(cli: Cli) -> i32 {
    match execute(&cli).await {
        Ok(rendered) => {
            for line in &rendered.lines {
                println!("{line}");
            }
            rendered.exit_code
        }
        Err(e) => {
            warn!(base_url = %cli.base_url, error = ?e, "No response");
            println!("{e}");
            e.exit_code()
        }
    }
}
