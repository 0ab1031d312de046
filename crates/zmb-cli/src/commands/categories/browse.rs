use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use zmb_core::catalog::CategoryForest;
use zmb_core::entities::Category;
use zmb_i18n::Translator;
use zmb_ui::{CatalogSource, Navigator, NavigatorError, Notices, Outcome, Snapshot};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::{AppContext, describe_notice};
use crate::output::render;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Open(usize),
    Back,
    Home,
    Reload,
    Quit,
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "q" | "quit" => Some(Self::Quit),
            "b" | "back" => Some(Self::Back),
            "0" | "h" | "home" => Some(Self::Home),
            "r" | "reload" => Some(Self::Reload),
            other => other.parse::<usize>().ok().map(Self::Open),
        }
    }
}

pub async fn run(catalog_file: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source: Arc<dyn CatalogSource> = match catalog_file {
        Some(path) => Arc::new(load_catalog(Path::new(path))?),
        None => Arc::new(ctx.api.clone()),
    };
    let navigator = Navigator::new(source, ctx.notices.clone());
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    let view = View {
        translator: &ctx.translator,
        format: flags.format,
        verbose: flags.verbose,
    };
    session(&navigator, &view, input, &mut out).await
}

/// Read a JSON array of categories into an offline catalog.
fn load_catalog(path: &Path) -> anyhow::Result<CategoryForest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let categories: Vec<Category> = serde_json::from_str(&raw)
        .with_context(|| format!("catalog file {} is not a JSON category list", path.display()))?;
    let forest = CategoryForest::from_categories(categories)
        .with_context(|| format!("catalog file {} is inconsistent", path.display()))?;
    tracing::debug!(path = %path.display(), categories = forest.len(), "offline catalog loaded");
    Ok(forest)
}

struct View<'a> {
    translator: &'a Translator,
    format: OutputFormat,
    verbose: bool,
}

impl View<'_> {
    fn draw(&self, snapshot: &Snapshot, out: &mut impl Write) -> anyhow::Result<()> {
        if self.format != OutputFormat::Table {
            writeln!(out, "{}", render(snapshot, self.format)?)?;
            return Ok(());
        }

        let mut crumbs = vec![self.translator.t("nav.home").to_string()];
        crumbs.extend(snapshot.path.categories().map(|c| c.name.clone()));
        writeln!(out, "{}", crumbs.join(" › "))?;

        if snapshot.categories.is_empty() {
            writeln!(out, "  {}", self.translator.t("category.empty"))?;
        }
        for (index, category) in snapshot.categories.iter().enumerate() {
            writeln!(out, "  {:>2}. {}", index + 1, category.name)?;
        }
        writeln!(out, "{}", self.translator.t("category.browse_prompt"))?;
        Ok(())
    }

    fn notices(&self, notices: &Notices, out: &mut impl Write) -> anyhow::Result<()> {
        for notice in notices.drain() {
            writeln!(out, "{}", describe_notice(self.translator, &notice, self.verbose))?;
        }
        Ok(())
    }
}

/// Drive `navigator` from line-based input until `q` or end of input.
async fn session<S, R, W>(
    navigator: &Navigator<S>,
    view: &View<'_>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: CatalogSource + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    settle(navigator.load_root().await)?;
    view.notices(navigator.notices(), out)?;
    view.draw(&navigator.snapshot(), out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = match Input::parse(&line) {
            Some(Input::Quit) => break,
            Some(Input::Back) => navigator.ascend().await,
            Some(Input::Home) => navigator.jump_to(0).await,
            Some(Input::Reload) => navigator.reload().await,
            Some(Input::Open(number)) => {
                let snapshot = navigator.snapshot();
                match number.checked_sub(1).and_then(|i| snapshot.categories.get(i)) {
                    Some(category) => navigator.descend(category).await,
                    None => {
                        writeln!(out, "{}", view.translator.t("category.browse_prompt"))?;
                        continue;
                    }
                }
            }
            None => {
                writeln!(out, "{}", view.translator.t("category.browse_prompt"))?;
                continue;
            }
        };

        if settle(outcome)? == Outcome::Unchanged {
            continue;
        }
        view.notices(navigator.notices(), out)?;
        view.draw(&navigator.snapshot(), out)?;
    }

    navigator.unmount();
    Ok(())
}

/// Fetch failures were already queued as notices and leave the level as it
/// was, so the session carries on. Anything else ends it.
fn settle(result: Result<Outcome, NavigatorError>) -> anyhow::Result<Outcome> {
    match result {
        Ok(outcome) => Ok(outcome),
        Err(NavigatorError::Fetch(error)) => {
            tracing::debug!(%error, "fetch failed; staying on current level");
            Ok(Outcome::Applied)
        }
        Err(error) => Err(error.into()),
    }
}
