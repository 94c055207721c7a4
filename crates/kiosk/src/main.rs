//! `digimenu` — terminal kiosk entry point.

use anyhow::Context;

use digimenu_catalog::Catalog;
use digimenu_kiosk::{KioskConfig, MenuSession, shell};

fn main() -> anyhow::Result<()> {
    let config = KioskConfig::from_env().context("invalid configuration")?;

    digimenu_observability::init(config.log_format);
    config.report_defaults();

    let catalog = Catalog::load_from_path(&config.catalog_path).with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.catalog_path.display()
        )
    })?;

    let mut session = MenuSession::new(catalog, config.checkout);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut session, stdin.lock(), stdout.lock())?;

    Ok(())
}
