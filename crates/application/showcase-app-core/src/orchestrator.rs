use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::app_core::{DomainEvent, SimRunEvent};
use crate::domain::{SimRunId, SimSlot};
use showcase_core::progress::{ProgressRun, RandomIncrements};
use showcase_core::roi;
use showcase_core::tour::StepId;

/// Drives the fake long-running operations. Each start spawns a worker that
/// ticks on a fixed period and reports back over the event channel; the
/// driver keeps the cancellation handle so a superseded or torn-down run
/// stops ticking instead of mutating state it no longer owns.
pub struct SimulationDriver {
    tx: mpsc::Sender<DomainEvent>,
    cancel: Option<CancellationToken>,
}

impl SimulationDriver {
    pub fn new(tx: mpsc::Sender<DomainEvent>) -> Self {
        Self { tx, cancel: None }
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }

    /// Runs one progress simulation (download or version update): random
    /// increments every `period` until 100, then after `settle` signals the
    /// walkthrough step named by `step` as complete.
    pub fn start_progress(
        &mut self,
        run_id: SimRunId,
        slot: SimSlot,
        period: Duration,
        settle: Duration,
        step: StepId,
    ) -> anyhow::Result<()> {
        self.cancel();
        let token = CancellationToken::new();
        self.cancel = Some(token.clone());

        let tx = self.tx.clone();

        std::thread::Builder::new()
            .name("showcase-progress".into())
            .spawn(move || {
                let rt = match crate::async_runtime::runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let _ = tx.blocking_send(DomainEvent::UserError(format!(
                            "Failed to start async runtime: {e}"
                        )));
                        return;
                    }
                };

                rt.block_on(async move {
                    let _ = tx
                        .send(DomainEvent::Simulation {
                            run_id,
                            ev: SimRunEvent::Started { slot },
                        })
                        .await;

                    let mut run = ProgressRun::new();
                    let mut src = RandomIncrements::default();
                    let mut ticker = interval(period);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    // The first interval tick resolves immediately.
                    ticker.tick().await;

                    while !run.is_complete() {
                        tokio::select! {
                            _ = token.cancelled() => return,
                            _ = ticker.tick() => {}
                        }
                        let percent = run.tick(&mut src);
                        let _ = tx
                            .send(DomainEvent::Simulation {
                                run_id,
                                ev: SimRunEvent::Progress { percent },
                            })
                            .await;
                    }

                    let _ = tx
                        .send(DomainEvent::Simulation {
                            run_id,
                            ev: SimRunEvent::Completed,
                        })
                        .await;

                    tokio::select! {
                        _ = token.cancelled() => return,
                        _ = tokio::time::sleep(settle) => {}
                    }
                    let _ = tx.send(DomainEvent::StepCompleted { step }).await;
                });
            })
            .context("Failed to start progress worker thread")?;

        Ok(())
    }

    /// Walks the ROI stage table: one stage per `period`, then after `settle`
    /// marks the animation as done.
    pub fn start_roi_stages(
        &mut self,
        run_id: SimRunId,
        period: Duration,
        settle: Duration,
    ) -> anyhow::Result<()> {
        self.cancel();
        let token = CancellationToken::new();
        self.cancel = Some(token.clone());

        let tx = self.tx.clone();

        std::thread::Builder::new()
            .name("showcase-roi-stages".into())
            .spawn(move || {
                let rt = match crate::async_runtime::runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let _ = tx.blocking_send(DomainEvent::UserError(format!(
                            "Failed to start async runtime: {e}"
                        )));
                        return;
                    }
                };

                rt.block_on(async move {
                    let _ = tx
                        .send(DomainEvent::Simulation {
                            run_id,
                            ev: SimRunEvent::Started {
                                slot: SimSlot::RoiStages,
                            },
                        })
                        .await;

                    let mut ticker = interval(period);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    ticker.tick().await;

                    for index in 1..roi::STAGE_COUNT {
                        tokio::select! {
                            _ = token.cancelled() => return,
                            _ = ticker.tick() => {}
                        }
                        let _ = tx
                            .send(DomainEvent::Simulation {
                                run_id,
                                ev: SimRunEvent::StageAdvanced { index },
                            })
                            .await;
                    }

                    tokio::select! {
                        _ = token.cancelled() => return,
                        _ = tokio::time::sleep(settle) => {}
                    }
                    let _ = tx
                        .send(DomainEvent::Simulation {
                            run_id,
                            ev: SimRunEvent::Settled,
                        })
                        .await;
                });
            })
            .context("Failed to start ROI stage worker thread")?;

        Ok(())
    }
}

impl Drop for SimulationDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
