use serde::Serialize;
use zmb_api::ApiError;
use zmb_core::responses::NotFoundResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Print the fetched entity, or a `found: false` response when the backend
/// reports it missing. Other failures propagate.
pub fn output_or_not_found<T: Serialize>(
    result: Result<T, ApiError>,
    entity_type: &str,
    id: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match result {
        Ok(entity) => output(&entity, flags.format),
        Err(error) if error.is_not_found() => {
            tracing::debug!(entity_type, id, "entity not found");
            output(&NotFoundResponse::new(entity_type, id), flags.format)
        }
        Err(error) => Err(error.into()),
    }
}
