use gale_core::ShipperError;
use gale_log_store::NameError;
use gale_object_store::RetrievalError;
use snafu::Snafu;

/// CLI error types.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CliError {
    #[snafu(display("Invalid {name} argument: {message}"))]
    InvalidArgument { name: &'static str, message: String },
    #[snafu(display("Invalid destination name"))]
    InvalidDestinationName { source: NameError },
    #[snafu(display("Object retrieval error"))]
    Retrieval { source: RetrievalError },
    #[snafu(display("Shipment error"))]
    Shipment { source: ShipperError },
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
