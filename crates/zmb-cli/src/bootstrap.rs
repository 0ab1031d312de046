use anyhow::Context;
use zmb_config::ZumbaraConfig;

/// Load `.env` (current directory, else the nearest parent that has one),
/// then the layered config.
pub fn load_config() -> anyhow::Result<ZumbaraConfig> {
    load_dotenv()?;
    ZumbaraConfig::load().context("failed to load zumbara configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    if let Some(env_path) = cwd.ancestors().map(|dir| dir.join(".env")).find(|p| p.is_file()) {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv file");
    }
    Ok(())
}
