use aboutpage_nav::fake::{FakeEvent, FakePage};
use aboutpage_nav::{Fade, FloatingButton, SectionId, Visibility};
use anyhow::{Result, ensure};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, LogicScenario, PageScenario, SETTLE_MS, ScenarioCtx};

const FLOATING_ID: &str = "floatingBtn";

fn installed(page: &FakePage) -> FloatingButton {
    let mut button = FloatingButton::default();
    button.install(page);
    button
}

async fn settle_fade() {
    tokio::time::sleep(Duration::from_millis(
        u64::from(aboutpage_nav::FADE_MS) + SETTLE_MS,
    ))
    .await;
}

pub struct BackToTop;

impl PageScenario for BackToTop {
    fn name(&self) -> &'static str {
        "Floating button scrolls back to the top"
    }
}

impl LogicScenario for BackToTop {
    fn run_logic(&self) -> Result<()> {
        let page = FakePage::standard();
        page.scroll_to(3500.0);
        let event = FakeEvent::default();
        let button = installed(&page);

        let outcome = button.activate(&page, &event);
        ensure!(outcome.scrolled(), "no scroll started: {outcome:?}");
        ensure!(event.suppressed() == 1, "default action was not suppressed");
        page.advance(f64::from(button.binding().duration_ms));
        ensure!(
            page.scroll_position().abs() < f64::EPSILON,
            "stopped at {}",
            page.scroll_position()
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for BackToTop {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let probe = &ctx.probe;
        probe.open(&ctx.base_url).await?;
        let viewport = probe.viewport_height().await?;
        probe.jump_to(viewport * 2.0).await?;
        settle_fade().await;

        let expected = probe.reachable_top(SectionId::Main.dom_id()).await?;
        ensure!(probe.click(FLOATING_ID).await?, "floating button kept its default action");
        tokio::time::sleep(Duration::from_millis(
            u64::from(aboutpage_nav::TOP_SCROLL_MS) + SETTLE_MS,
        ))
        .await;
        let y = probe.scroll_y().await?;
        ensure!((y - expected).abs() < 2.0, "stopped at {y}, expected {expected}");
        Ok(())
    }
}

pub struct InitialHidden;

impl PageScenario for InitialHidden {
    fn name(&self) -> &'static str {
        "Floating button starts hidden"
    }
}

impl LogicScenario for InitialHidden {
    fn run_logic(&self) -> Result<()> {
        let page = FakePage::standard();
        let button = installed(&page);
        ensure!(button.visibility() == Visibility::Hidden, "button starts visible");
        ensure!(!page.is_shown(FLOATING_ID), "button is still showing");
        let first = page.fade_requests().into_iter().next();
        ensure!(
            first.as_ref().is_some_and(|f| f.fade == Fade::Out && f.duration_ms == 0),
            "initial hide was not instant: {first:?}"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for InitialHidden {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let probe = &ctx.probe;
        probe.open(&ctx.base_url).await?;
        ensure!(probe.scroll_y().await? < 1.0, "page did not load at the top");
        ensure!(!probe.floating_shown().await?, "floating button visible on load");
        Ok(())
    }
}

pub struct FloatingToggle;

impl PageScenario for FloatingToggle {
    fn name(&self) -> &'static str {
        "Floating button follows the viewport threshold"
    }
}

impl LogicScenario for FloatingToggle {
    fn run_logic(&self) -> Result<()> {
        let page = FakePage::standard();
        page.set_viewport_height(800.0);
        let mut button = installed(&page);

        page.scroll_to(900.0);
        let shown = button.on_scroll(&page);
        ensure!(shown == Some(Visibility::Visible), "900px did not show: {shown:?}");
        page.scroll_to(400.0);
        let hidden = button.on_scroll(&page);
        ensure!(hidden == Some(Visibility::Hidden), "400px did not hide: {hidden:?}");

        let fades: Vec<_> = page
            .fade_requests()
            .iter()
            .skip(1)
            .map(|f| (f.fade, f.duration_ms))
            .collect();
        ensure!(
            fades == [(Fade::In, 300_u32), (Fade::Out, 300_u32)],
            "unexpected fades {fades:?}"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for FloatingToggle {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let probe = &ctx.probe;
        probe.open(&ctx.base_url).await?;
        let viewport = probe.viewport_height().await?;

        probe.jump_to(viewport + 100.0).await?;
        settle_fade().await;
        ensure!(probe.floating_shown().await?, "not shown past one viewport");

        probe.jump_to(viewport / 2.0).await?;
        settle_fade().await;
        ensure!(
            probe.floating_display().await?.as_deref() == Some("none"),
            "not hidden within one viewport"
        );
        Ok(())
    }
}

pub struct IdempotentScroll;

impl PageScenario for IdempotentScroll {
    fn name(&self) -> &'static str {
        "Repeated scrolls keep the button visible"
    }
}

impl LogicScenario for IdempotentScroll {
    fn run_logic(&self) -> Result<()> {
        let page = FakePage::standard();
        let mut button = installed(&page);

        page.scroll_to(1500.0);
        button.on_scroll(&page);
        page.scroll_to(1600.0);
        let second = button.on_scroll(&page);

        ensure!(second.is_none(), "second scroll changed state: {second:?}");
        ensure!(button.visibility() == Visibility::Visible, "button hid");
        let fade_ins = page
            .fade_requests()
            .iter()
            .filter(|f| f.fade == Fade::In)
            .count();
        ensure!(fade_ins == 1, "{fade_ins} fade-ins issued");
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for IdempotentScroll {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let probe = &ctx.probe;
        probe.open(&ctx.base_url).await?;
        let viewport = probe.viewport_height().await?;

        probe.jump_to(viewport + 100.0).await?;
        settle_fade().await;
        probe.jump_to(viewport + 200.0).await?;
        settle_fade().await;
        ensure!(probe.floating_shown().await?, "button hid after a second scroll");
        Ok(())
    }
}
