use std::path::Path;

use zmb_core::responses::{NotFoundResponse, ProofUploadResponse};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProofCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `zmb proof`.
pub async fn handle(action: &ProofCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProofCommands::Upload { order_id, file } => upload(order_id, Path::new(file), ctx, flags).await,
    }
}

/// Check the order still awaits payment, upload the receipt to the asset
/// host, then attach the hosted URL to the order.
async fn upload(order_id: &str, file: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let upload_url = ctx.config.upload_url()?;

    let order = match ctx.api.order(order_id).await {
        Ok(order) => order,
        Err(error) if error.is_not_found() => {
            return output(&NotFoundResponse::new("order", order_id), flags.format);
        }
        Err(error) => return Err(error.into()),
    };
    if !order.status.accepts_payment_proof() {
        anyhow::bail!(
            "order {order_id} is {}; a payment receipt can only be attached while it awaits payment",
            ctx.translator.t(&format!("order.status.{}", order.status))
        );
    }

    let spinner = Progress::spinner(&file.display().to_string());
    let asset_url = match ctx.api.upload_asset(upload_url, file).await {
        Ok(url) => url,
        Err(error) => {
            spinner.finish_clear();
            return Err(error.into());
        }
    };
    tracing::debug!(%asset_url, order_id, "receipt uploaded");

    let proof = ctx.api.submit_payment_proof(order_id, &asset_url).await;
    spinner.finish_clear();
    let proof = proof?;
    ctx.notices.success("proof.uploaded");

    output(
        &ProofUploadResponse {
            order_id: order_id.to_string(),
            asset_url,
            proof,
        },
        flags.format,
    )
}
