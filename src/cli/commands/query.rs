//! nth-prime and prime-count commands.

use crate::api::{ApiClient, Endpoint};
use crate::config::Settings;
use crate::error::ClientResult;
use crate::input::{ArgInput, StdinInput};
use crate::page::PrimePage;
use crate::render::StdoutSink;

/// Run one query and print the rendered reply.
///
/// `raw` is the text given on the command line; stdin supplies it otherwise.
pub async fn run(endpoint: Endpoint, raw: Option<&str>, config: &Settings) -> ClientResult<()> {
    let client = ApiClient::new(&config.api)?;
    let strict = config.client.strict_input;

    match raw {
        Some(raw) => {
            let mut page = PrimePage::new(client, ArgInput(raw.to_string()), StdoutSink::new())
                .strict_input(strict);
            page.trigger(endpoint).await?;
        }
        None => {
            let mut page =
                PrimePage::new(client, StdinInput::new(), StdoutSink::new()).strict_input(strict);
            page.trigger(endpoint).await?;
        }
    }

    Ok(())
}
