//! Page listing command

use crate::config::CliConfigLoader;
use anyhow::Result;
use pagestack_core::config::DEFAULT_PARAM_KEY_SUFFIX;
use pagestack_core::PageRegistry;
use tracing::info;

/// Show the normalized page registry
pub async fn pages_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    let registry = PageRegistry::normalize(config.pages.as_deref());
    info!("Listing {} registered pages", registry.len());

    if registry.is_empty() {
        println!("No pages registered.");
        return Ok(());
    }

    println!("📄 Registered Pages\n");
    for page in &registry {
        let tab = if config.tab_bar.iter().any(|name| name == page.name.as_str()) {
            "  [tab]"
        } else {
            ""
        };
        println!("{:<16} {}{}", page.name, page.url, tab);
        if config.param_key_suffix != DEFAULT_PARAM_KEY_SUFFIX {
            println!("{:<16} params key: {}{}", "", page.name, config.param_key_suffix);
        }
    }

    Ok(())
}
