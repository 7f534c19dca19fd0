//! Replays the clicks of a finished game on a background task.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
    time::sleep,
};

use crate::{GameSession, Position, Result};

/// The pause before each replayed click, and after the last one.
pub const DEFAULT_REPLAY_INTERVAL: Duration = Duration::from_secs(1);

/// A running replay. Dropping the handle cancels it.
#[derive(Debug)]
pub struct ReplayHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ReplayHandle {
    /// Stops the replay at its next pause. The replayed game ends without being saved.
    pub fn cancel(&self) {
        // Fails only when the task already finished.
        let _ = self.cancel.send(true);
    }

    /// Whether the replay is over.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the replay to finish.
    pub async fn join(self) {
        let ReplayHandle { cancel, task } = self;

        if let Err(err) = task.await {
            log::warn!("replay task failed: {err}");
        }
        drop(cancel);
    }
}

/// Puts `session` in replay mode and replays its recorded clicks, one every `interval`.
///
/// Fails like [`GameSession::replay`] when there's no finished game to replay. Player input
/// is refused until the replay ends.
pub async fn spawn(session: Arc<Mutex<GameSession>>, interval: Duration) -> Result<ReplayHandle> {
    let clicks = session.lock().await.replay()?;
    let (cancel, cancelled) = watch::channel(false);

    let task = tokio::spawn(run(session, clicks, interval, cancelled));

    Ok(ReplayHandle { cancel, task })
}

async fn run(
    session: Arc<Mutex<GameSession>>,
    clicks: Vec<Position>,
    interval: Duration,
    mut cancelled: watch::Receiver<bool>,
) {
    let mut finished = true;

    for pos in clicks {
        if !pause(interval, &mut cancelled).await {
            finished = false;
            break;
        }

        if let Err(err) = session.lock().await.replay_click(pos) {
            // The replayed game already ended.
            log::debug!("stopping replay at {pos:?}: {err}");
            break;
        }
    }

    if finished && !pause(interval, &mut cancelled).await {
        finished = false;
    }
    if !finished {
        log::info!("replay cancelled");
    }

    session.lock().await.finish_replay();
}

/// Sleeps for `interval`, returning `false` if cancelled first.
async fn pause(interval: Duration, cancelled: &mut watch::Receiver<bool>) -> bool {
    tokio::select! {
        _ = sleep(interval) => true,
        _ = cancelled.changed() => false,
    }
}
