use aboutpage_nav::fake::{FakeEvent, FakePage};
use aboutpage_nav::{Activation, NavSetup, Page, SectionId, TriggerId};
use anyhow::{Context, Result, ensure};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, LogicScenario, PageScenario, SETTLE_MS, ScenarioCtx};

/// Tolerance for sub-pixel layout differences between browsers.
const PX_TOLERANCE: f64 = 2.0;

pub struct SectionJumps;

impl PageScenario for SectionJumps {
    fn name(&self) -> &'static str {
        "Section buttons scroll to their sections"
    }
}

impl LogicScenario for SectionJumps {
    fn run_logic(&self) -> Result<()> {
        let setup = NavSetup::default();
        for binding in setup.navigator.bindings() {
            let page = FakePage::standard();
            let event = FakeEvent::default();
            let expected = page
                .element_top(binding.target.dom_id())
                .context("standard page has every section")?;

            let outcome = setup.navigator.activate(&page, binding.trigger, &event);
            ensure!(outcome.scrolled(), "{} did not scroll: {outcome:?}", binding.trigger);
            ensure!(event.suppressed() == 1, "{} kept its default action", binding.trigger);

            page.advance(f64::from(binding.duration_ms));
            ensure!(
                (page.scroll_position() - expected).abs() < f64::EPSILON,
                "{} landed at {} instead of {expected}",
                binding.trigger,
                page.scroll_position()
            );
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SectionJumps {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let probe = &ctx.probe;
        probe.open(&ctx.base_url).await?;
        for binding in NavSetup::default().navigator.bindings() {
            probe.jump_to(0.0).await?;
            let expected = probe.reachable_top(binding.target.dom_id()).await?;
            let suppressed = probe.click(binding.trigger.dom_id()).await?;
            ensure!(suppressed, "{} did not prevent the anchor jump", binding.trigger);

            tokio::time::sleep(Duration::from_millis(
                u64::from(binding.duration_ms) + SETTLE_MS,
            ))
            .await;
            let landed = probe.scroll_y().await?;
            if ctx.verbose {
                println!(
                    "   {} -> #{}: {landed:.1} (want {expected:.1})",
                    binding.trigger, binding.target
                );
            }
            ensure!(
                (landed - expected).abs() < PX_TOLERANCE,
                "{} landed at {landed} instead of {expected}",
                binding.trigger
            );
        }
        Ok(())
    }
}

pub struct MissingTarget;

impl PageScenario for MissingTarget {
    fn name(&self) -> &'static str {
        "Missing section leaves the page in place"
    }
}

impl LogicScenario for MissingTarget {
    fn run_logic(&self) -> Result<()> {
        let page = FakePage::standard();
        page.remove_element(SectionId::Developer.dom_id());
        let event = FakeEvent::default();

        let outcome = NavSetup::default()
            .navigator
            .activate(&page, TriggerId::DevBtn, &event);
        ensure!(
            outcome == Activation::MissingTarget(SectionId::Developer),
            "unexpected outcome {outcome:?}"
        );
        ensure!(event.suppressed() == 1, "default action was not suppressed");
        ensure!(page.scroll_requests().is_empty(), "a scroll was started");
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for MissingTarget {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let probe = &ctx.probe;
        probe.open(&ctx.base_url).await?;
        probe.remove(SectionId::Developer.dom_id()).await?;
        probe.jump_to(0.0).await?;

        let suppressed = probe.click(TriggerId::DevBtn.dom_id()).await?;
        ensure!(suppressed, "devBtn did not prevent the anchor jump");
        tokio::time::sleep(Duration::from_millis(SETTLE_MS)).await;
        let y = probe.scroll_y().await?;
        ensure!(y < 1.0, "page moved to {y} with no target");
        Ok(())
    }
}
