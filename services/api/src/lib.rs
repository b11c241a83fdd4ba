mod allocate;
mod cli;
mod infra;
mod routes;
mod server;

use ward_pay::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
