//! The two button handlers: read `n`, call one endpoint, show the reply.

use crate::api::{ApiClient, ApiResponse, Endpoint};
use crate::error::ClientResult;
use crate::input::{InputSource, read_number};
use crate::log_event;
use crate::render::{ResultSink, render};

/// An input field, a result element, and the client that connects them.
pub struct PrimePage<I, S> {
    client: ApiClient,
    input: I,
    sink: S,
    strict_input: bool,
}

impl<I: InputSource, S: ResultSink> PrimePage<I, S> {
    pub fn new(client: ApiClient, input: I, sink: S) -> Self {
        Self {
            client,
            input,
            sink,
            strict_input: false,
        }
    }

    /// Refuse to send `n=NaN`.
    pub fn strict_input(mut self, strict: bool) -> Self {
        self.strict_input = strict;
        self
    }

    pub async fn get_nth_prime(&mut self) -> ClientResult<ApiResponse> {
        self.trigger(Endpoint::NthPrime).await
    }

    pub async fn get_prime_count(&mut self) -> ClientResult<ApiResponse> {
        self.trigger(Endpoint::PrimeCount).await
    }

    /// Read input, fetch `endpoint`, render the reply.
    ///
    /// Transport and decode errors are returned before the sink is touched.
    pub async fn trigger(&mut self, endpoint: Endpoint) -> ClientResult<ApiResponse> {
        let n = read_number(&mut self.input, self.strict_input)?;
        let response = self.client.fetch(endpoint, &n).await?;
        render(&response, &mut self.sink)?;
        log_event!("page", "rendered", "{endpoint}(n={n}) ok={}", response.is_ok());
        Ok(response)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
