use zmb_core::responses::{CategoryListResponse, NotFoundResponse};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(parent: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner(ctx.translator.t("category.loading"));
    let result = ctx.api.categories(parent).await;
    spinner.finish_clear();

    match result {
        Ok(mut categories) => {
            if let Some(limit) = flags.limit {
                categories.truncate(usize::try_from(limit)?);
            }
            output(
                &CategoryListResponse {
                    parent: parent.map(str::to_string),
                    categories,
                },
                flags.format,
            )
        }
        Err(error) if error.is_not_found() => output(
            &NotFoundResponse::new("category", parent.unwrap_or_default()),
            flags.format,
        ),
        Err(error) => Err(error.into()),
    }
}
