use zmb_core::catalog::slugify;
use zmb_core::entities::{NewCategory, ProofReview};
use zmb_core::enums::ProofStatus;
use zmb_core::validate::{self, ValidationError};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::commands::shared::found::output_or_not_found;
use crate::context::{AppContext, describe_validation};
use crate::output::output;

const MAX_NAME: usize = 80;
const MAX_NOTE: usize = 500;

/// Handle `zmb admin`.
pub async fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let invalid = |error: ValidationError| anyhow::anyhow!(describe_validation(&ctx.translator, &error));
    match action {
        AdminCommands::CategoryCreate {
            name,
            slug,
            parent,
            image,
        } => {
            let category = new_category(name, slug.as_deref(), parent.as_deref(), image.as_deref())
                .map_err(invalid)?;
            let created = ctx.api.create_category(&category).await?;
            output(&created, flags.format)
        }
        AdminCommands::ProofReview {
            id,
            approve,
            reject: _,
            note,
        } => {
            let review = proof_review(*approve, note.as_deref()).map_err(invalid)?;
            let result = ctx.api.review_payment_proof(id, &review).await;
            output_or_not_found(result, "payment_proof", id, flags)
        }
    }
}

fn new_category(
    name: &str,
    slug: Option<&str>,
    parent: Option<&str>,
    image: Option<&str>,
) -> Result<NewCategory, ValidationError> {
    let name = validate::bounded("name", name, MAX_NAME)?;
    // A name made only of symbols slugifies to nothing and needs --slug.
    let slug = match slug {
        Some(slug) => slug.to_string(),
        None => slugify(name),
    };
    let slug = validate::required("slug", &slug)?.to_string();

    Ok(NewCategory {
        name: name.to_string(),
        slug,
        image: image.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
        parent_id: parent.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
    })
}

fn proof_review(approve: bool, note: Option<&str>) -> Result<ProofReview, ValidationError> {
    let note = match note.map(str::trim).filter(|note| !note.is_empty()) {
        Some(note) => Some(validate::bounded("note", note, MAX_NOTE)?.to_string()),
        None => None,
    };

    Ok(ProofReview {
        status: if approve {
            ProofStatus::Approved
        } else {
            ProofStatus::Rejected
        },
        note,
    })
}
