//! Replay a scripted navigation session against the simulated host

use crate::config::CliConfigLoader;
use crate::session::{build_router, describe_stack, describe_state, CliRouter};
use anyhow::{Context, Result};
use pagestack_core::{FileStore, RouterResult};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// One navigation in a replay script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Step {
    Push {
        page: String,
        #[serde(default)]
        params: Option<Value>,
    },
    ReLaunch {
        page: String,
        #[serde(default)]
        params: Option<Value>,
    },
    Redirect {
        page: String,
        #[serde(default)]
        params: Option<Value>,
    },
    SwitchTab {
        page: String,
        #[serde(default)]
        params: Option<Value>,
    },
    Back {
        #[serde(default = "default_delta")]
        delta: u64,
        #[serde(default)]
        params: Option<Value>,
    },
    BackHome {
        #[serde(default)]
        params: Option<Value>,
    },
}

fn default_delta() -> u64 {
    1
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Push { page, .. } => write!(f, "push {}", page),
            Step::ReLaunch { page, .. } => write!(f, "reLaunch {}", page),
            Step::Redirect { page, .. } => write!(f, "redirect {}", page),
            Step::SwitchTab { page, .. } => write!(f, "switchTab {}", page),
            Step::Back { delta, .. } => write!(f, "back {}", delta),
            Step::BackHome { .. } => f.write_str("backHome"),
        }
    }
}

impl Step {
    /// Dispatch this step through the router
    pub fn apply(self, router: &mut CliRouter) -> RouterResult<()> {
        let (navigation, params) = match self {
            Step::Push { page, params } => (router.push(page), params),
            Step::ReLaunch { page, params } => (router.re_launch(page), params),
            Step::Redirect { page, params } => (router.redirect(page), params),
            Step::SwitchTab { page, params } => (router.switch_tab(page), params),
            Step::Back { delta, params } => (router.back(delta), params),
            Step::BackHome { params } => (router.back_home(), params),
        };
        let navigation = match params {
            Some(payload) => navigation.params(&payload),
            None => navigation,
        };

        navigation
            .success(|res| println!("   ✅ {}", res))
            .fail(|res| println!("   ❌ {}", res))
            .dispatch()?;
        Ok(())
    }
}

/// Parse a replay script: a JSON array of steps
pub fn parse_script(content: &str) -> Result<Vec<Step>> {
    serde_json::from_str(content).context("Replay script must be a JSON array of steps")
}

/// Run every step of `script`, settling host calls after each one
pub async fn replay_command(config_loader: CliConfigLoader, script: PathBuf) -> Result<()> {
    let config = config_loader.load().await?;
    let content = tokio::fs::read_to_string(&script)
        .await
        .with_context(|| format!("Failed to read replay script: {}", script.display()))?;
    let steps = parse_script(&content)?;

    let storage_path = config_loader.storage_path();
    let store = FileStore::open(&storage_path)
        .with_context(|| format!("Failed to open storage: {}", storage_path.display()))?;
    debug!("Using storage file: {}", store.path().display());

    let mut router = build_router(&config, Box::new(store));
    info!("Replaying {} steps from {}", steps.len(), script.display());
    println!("🧭 {}\n", describe_stack(&router));

    for (index, step) in steps.into_iter().enumerate() {
        println!("[{}] {}", index + 1, step);
        let label = step.to_string();
        step.apply(&mut router)
            .with_context(|| format!("Step {} ({}) failed", index + 1, label))?;

        router.host_mut().run_pending();
        println!("   🧭 {}", describe_stack(&router));
        println!("   📌 {}\n", describe_state(&router));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::demo_config;
    use pagestack_core::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_parse_script() {
        let steps = parse_script(
            r#"[
                { "op": "push", "page": "login", "params": { "phoneNumber": "123" } },
                { "op": "back" },
                { "op": "switchTab", "page": "index" },
                { "op": "backHome" }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                Step::Push {
                    page: "login".to_string(),
                    params: Some(json!({ "phoneNumber": "123" })),
                },
                Step::Back {
                    delta: 1,
                    params: None
                },
                Step::SwitchTab {
                    page: "index".to_string(),
                    params: None
                },
                Step::BackHome { params: None },
            ]
        );
    }

    #[test]
    fn test_parse_script_rejects_unknown_op() {
        assert!(parse_script(r#"[{ "op": "jump", "page": "login" }]"#).is_err());
    }

    #[test]
    fn test_apply_steps() {
        let mut router = build_router(&demo_config(), Box::new(MemoryStore::new()));

        Step::Push {
            page: "login".to_string(),
            params: Some(json!({ "phoneNumber": "123" })),
        }
        .apply(&mut router)
        .unwrap();
        router.host_mut().run_pending();
        assert_eq!(
            describe_stack(&router),
            "/pages/index/index > /pages/login/login"
        );

        Step::BackHome { params: None }.apply(&mut router).unwrap();
        router.host_mut().run_pending();
        assert_eq!(describe_stack(&router), "/pages/index/index");
        assert_eq!(
            describe_state(&router),
            "current page: login (/pages/login/login)  params: null"
        );
    }

    #[test]
    fn test_apply_unknown_page_fails() {
        let mut router = build_router(&demo_config(), Box::new(MemoryStore::new()));
        let error = Step::Redirect {
            page: "ghost".to_string(),
            params: None,
        }
        .apply(&mut router)
        .unwrap_err();

        assert_eq!(error.to_string(), "Page 'ghost' is not registered");
        assert_eq!(router.host().pending_count(), 0);
    }
}
