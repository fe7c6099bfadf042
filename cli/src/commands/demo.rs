//! Built-in login walkthrough

use crate::pages::{demo_config, IndexPage, LoginPage};
use crate::session::{build_router, describe_stack, describe_state};
use anyhow::Result;
use pagestack_core::MemoryStore;
use tracing::info;

/// Run the sample flow: index opens login with a phone number, login reads
/// it and sends a result back.
pub async fn demo_command() -> Result<()> {
    info!("Running demo flow");
    let mut router = build_router(&demo_config(), Box::new(MemoryStore::new()));
    println!("🧭 {}\n", describe_stack(&router));

    println!("index: open login");
    IndexPage.open_login(&mut router, "13800000000")?;
    router.host_mut().run_pending();
    println!("   🧭 {}", describe_stack(&router));

    let login = LoginPage::on_load(&router)?;
    println!("   📱 phone number: {}\n", login.phone_number);

    println!("login: back with params");
    login.handle_back_params(&mut router)?;
    router.host_mut().run_pending();
    println!("   🧭 {}", describe_stack(&router));
    println!("   📌 {}\n", describe_state(&router));

    println!("index: open login, then back without params");
    IndexPage.open_login(&mut router, "13800000000")?;
    LoginPage::on_load(&router)?.handle_back(&mut router)?;
    router.host_mut().run_pending();
    println!("   🧭 {}", describe_stack(&router));
    println!("   📌 {}", describe_state(&router));

    Ok(())
}
