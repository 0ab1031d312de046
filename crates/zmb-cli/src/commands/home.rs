use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use zmb_api::ProductQuery;
use zmb_core::entities::{Category, Product};
use zmb_core::enums::{Language, TextDirection};
use zmb_ui::{Carousel, Navigator};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HomeArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// How often the carousel clock is advanced while rotating.
const FRAME: Duration = Duration::from_millis(250);

#[derive(Debug, Serialize)]
struct HomeResponse {
    language: Language,
    direction: TextDirection,
    categories: Vec<Category>,
    featured: Vec<Product>,
    /// Index into `featured` of the slide on screen.
    slide: Option<usize>,
}

/// Handle `zmb home`: root categories and featured products, loaded together.
pub async fn handle(args: &HomeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let navigator = Navigator::new(Arc::new(ctx.api.clone()), ctx.notices.clone());
    let query = ProductQuery {
        limit: ctx.limit(None, flags),
        ..ProductQuery::default()
    };

    let spinner = Progress::spinner(ctx.translator.t("nav.home"));
    let (root, featured) = tokio::join!(navigator.load_root(), ctx.api.products(&query));
    spinner.finish_clear();

    // Either half failing leaves the other on screen; the failure is a notice.
    if let Err(error) = root {
        tracing::debug!(%error, "home categories unavailable");
    }
    let featured = match featured {
        Ok(page) => page.items,
        Err(error) => {
            ctx.notices.api_error(&error);
            Vec::new()
        }
    };

    let interval = Duration::from_millis(ctx.config.general.carousel_interval_ms);
    let mut carousel = Carousel::new(featured.len(), interval);
    if args.rotate > 0 {
        rotate(&mut carousel, &featured, args.rotate, flags).await;
    }

    let snapshot = navigator.snapshot();
    navigator.unmount();
    output(
        &HomeResponse {
            language: ctx.translator.language(),
            direction: ctx.translator.direction(),
            categories: snapshot.categories.to_vec(),
            featured,
            slide: carousel.current(),
        },
        flags.format,
    )
}

/// Let the carousel advance `times` slides on its own clock, announcing each
/// slide on stderr.
async fn rotate(carousel: &mut Carousel, featured: &[Product], times: u32, flags: &GlobalFlags) {
    if carousel.len() < 2 || carousel.interval().is_zero() {
        tracing::debug!(slides = carousel.len(), "nothing to rotate");
        return;
    }

    let mut ticker = tokio::time::interval(FRAME);
    let mut shown = 0;
    while shown < times {
        ticker.tick().await;
        let advanced = carousel.tick(FRAME);
        if advanced == 0 {
            continue;
        }
        shown += u32::try_from(advanced).unwrap_or(u32::MAX);
        if let Some(product) = carousel.current().and_then(|i| featured.get(i))
            && !flags.quiet
        {
            eprintln!("▸ {} · {} {}", product.name, product.price, product.currency);
        }
    }
}
