pub mod results_client;

pub use results_client::ResultsClient;
