//! Interactive menu driver for the health-centre member system.

mod menu;

use anyhow::Result;
use hc_members_core::{Database, MemberRegistry};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "members.db".to_string());
    let db = Database::open(&db_path)?;
    let registry = MemberRegistry::open(db);

    let stdin = std::io::stdin();
    let mut menu = menu::Menu::new(registry, stdin.lock());
    menu.run()?;
    Ok(())
}
