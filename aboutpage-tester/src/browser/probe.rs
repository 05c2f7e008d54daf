use anyhow::{Context, Result, bail};
use std::time::Duration;
use thirtyfour::prelude::*;

const BOUND_TIMEOUT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Reads and pokes the About page through injected JavaScript.
#[derive(Clone)]
pub struct PageProbe<'a> {
    driver: &'a WebDriver,
}

impl<'a> PageProbe<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    async fn eval(&self, script: &str, args: Vec<serde_json::Value>) -> Result<serde_json::Value> {
        let ret = self
            .driver
            .execute(script, args)
            .await
            .with_context(|| format!("executing `{script}`"))?;
        Ok(ret.json().clone())
    }

    async fn eval_f64(&self, script: &str, args: Vec<serde_json::Value>) -> Result<f64> {
        let value = self.eval(script, args).await?;
        value
            .as_f64()
            .with_context(|| format!("`{script}` returned {value}"))
    }

    /// Load the page and wait for the navigator to hide the floating button.
    pub async fn open(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        let deadline = tokio::time::Instant::now() + BOUND_TIMEOUT;
        while tokio::time::Instant::now() < deadline {
            if self.floating_display().await?.as_deref() == Some("none") {
                return Ok(());
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        bail!("navigation never bound: #floatingBtn was not hidden within {BOUND_TIMEOUT:?}")
    }

    pub async fn scroll_y(&self) -> Result<f64> {
        self.eval_f64(
            "return Math.max(window.pageYOffset || 0, document.documentElement.scrollTop || 0);",
            vec![],
        )
        .await
    }

    pub async fn viewport_height(&self) -> Result<f64> {
        self.eval_f64("return window.innerHeight;", vec![]).await
    }

    /// Largest reachable scroll offset.
    pub async fn max_scroll(&self) -> Result<f64> {
        self.eval_f64(
            "return document.documentElement.scrollHeight - window.innerHeight;",
            vec![],
        )
        .await
    }

    pub async fn element_top(&self, id: &str) -> Result<Option<f64>> {
        let value = self
            .eval(
                "const el = document.getElementById(arguments[0]);\
                 return el ? el.getBoundingClientRect().top + window.pageYOffset : null;",
                vec![id.into()],
            )
            .await?;
        Ok(value.as_f64())
    }

    /// Where a scroll to `id` can actually land, given the document height.
    pub async fn reachable_top(&self, id: &str) -> Result<f64> {
        let top = self
            .element_top(id)
            .await?
            .with_context(|| format!("#{id} is not on the page"))?;
        Ok(top.min(self.max_scroll().await?.max(0.0)))
    }

    pub async fn jump_to(&self, y: f64) -> Result<()> {
        self.eval("window.scrollTo(0, arguments[0]); return null;", vec![y.into()])
            .await?;
        Ok(())
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.eval(
            "const el = document.getElementById(arguments[0]); if (el) el.remove(); return null;",
            vec![id.into()],
        )
        .await?;
        Ok(())
    }

    /// Dispatch a cancelable click on `id`; returns whether the default was prevented.
    pub async fn click(&self, id: &str) -> Result<bool> {
        let value = self
            .eval(
                "const el = document.getElementById(arguments[0]);\
                 if (!el) return null;\
                 const ev = new MouseEvent('click', { bubbles: true, cancelable: true });\
                 return !el.dispatchEvent(ev);",
                vec![id.into()],
            )
            .await?;
        value
            .as_bool()
            .with_context(|| format!("#{id} is not on the page"))
    }

    pub async fn floating_display(&self) -> Result<Option<String>> {
        let value = self
            .eval(
                "const el = document.getElementById('floatingBtn');\
                 return el ? el.style.display : null;",
                vec![],
            )
            .await?;
        Ok(value.as_str().map(str::to_string))
    }

    pub async fn floating_shown(&self) -> Result<bool> {
        let value = self
            .eval(
                "const el = document.getElementById('floatingBtn');\
                 if (!el) return false;\
                 return el.style.display !== 'none' && parseFloat(el.style.opacity || '1') > 0;",
                vec![],
            )
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }
}
