use std::io::{self, Write};

use tracing::{debug, warn};

pub const DEFAULT_STOCK_DATA: f64 = 4.0;

/// Retrieves currency data for a fixed endpoint.
///
/// The endpoint is not contacted yet: retrieval only reports the endpoint
/// and hands back the stored value.
#[derive(Clone, Debug)]
pub struct Retriever {
    retrieval_url: String,
    stock_data: f64,
}

impl Retriever {
    pub fn new(retrieval_url: impl Into<String>) -> Self {
        Self {
            retrieval_url: retrieval_url.into(),
            stock_data: DEFAULT_STOCK_DATA,
        }
    }

    pub fn retrieval_url(&self) -> &str {
        &self.retrieval_url
    }

    pub fn get_stock_data(&self) -> f64 {
        self.get_stock_data_to(&mut io::stdout().lock())
    }

    /// Writes the endpoint line to `out` and returns the stock data.
    /// A failed write is logged, never returned.
    pub fn get_stock_data_to<W: Write>(&self, out: &mut W) -> f64 {
        if let Err(err) = writeln!(out, "{}", self.retrieval_url) {
            warn!("unable to write retrieval url='{}': {err}", self.retrieval_url);
        }

        debug!(url = %self.retrieval_url, value = self.stock_data, "stock data requested");

        return self.stock_data;
    }
}
