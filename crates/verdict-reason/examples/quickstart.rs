//! Quick Start Example
//!
//! Validates a few lookups and reacts to each verdict.

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use verdict_reason::prelude::*;

fn find_user(id: &str) -> Verdict<&'static str> {
    match id {
        "" => Reason::invalid_argument("id cannot be blank").into(),
        "42" => Success("ada").into(),
        other => Reason::not_found("no such user").with_value(other).into(),
    }
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    for id in ["42", "7", ""] {
        find_user(id)
            .on_success(|name| info!(id, name, "found user"))
            .on_failure(|reason| warn!(id, kind = %reason.kind(), "{}", reason.message()));
    }

    let strict = Reason::checked(MessagePolicy::RejectBlank, ReasonKind::Conflict, " ");
    if let Err(err) = strict {
        warn!("{}", err);
    }

    Ok(())
}
