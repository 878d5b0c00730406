use cart_service::bootstrap::{self, BootstrapError};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let app = match bootstrap::start(std::env::args_os().skip(1)).await {
        Ok(app) => app,
        // Prints help, version or usage and exits with clap's status.
        Err(BootstrapError::Arguments(e)) => e.exit(),
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            eprintln!("cart-service: startup failed: {e}");
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    if let Err(e) = app.run().await {
        tracing::error!(error = %e, "service terminated");
        return ExitCode::from(e.exit_code() as u8);
    }

    ExitCode::SUCCESS
}
