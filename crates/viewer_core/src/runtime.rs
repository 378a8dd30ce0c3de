//! The applier: one task that owns the [`Session`] and applies queued
//! commands and render ticks strictly one at a time.

use std::time::{Duration, Instant};

use shared::{domain::Camera, protocol::Command};
use thiserror::Error;
use tokio::{
    runtime::{Handle, RuntimeFlavor},
    sync::{mpsc, watch},
    task::{self, JoinHandle},
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{session::Session, surface::RenderSurface};

const MIN_TICK: Duration = Duration::from_millis(1);

#[derive(Debug, Error)]
#[error("viewer applier has stopped")]
pub struct ViewerClosed;

/// Producer side of the viewer. Cheap to clone; the applier stops once every
/// handle and sender is dropped.
#[derive(Clone)]
pub struct ViewerHandle {
    commands: mpsc::Sender<Command>,
    camera: watch::Receiver<Camera>,
}

impl ViewerHandle {
    pub async fn submit(&self, command: Command) -> Result<(), ViewerClosed> {
        self.commands.send(command).await.map_err(|_| ViewerClosed)
    }

    /// Runs `phrase` through the intent parser and queues the result.
    /// Returns `false` when the phrase did not map to a command.
    pub async fn submit_phrase(&self, phrase: &str) -> Result<bool, ViewerClosed> {
        match intent::parse_phrase(phrase) {
            Some(command) => {
                self.submit(command).await?;
                Ok(true)
            }
            None => {
                debug!(phrase, "phrase did not match any command");
                Ok(false)
            }
        }
    }

    /// Latest camera published by the applier.
    pub fn camera(&self) -> Camera {
        *self.camera.borrow()
    }

    pub async fn camera_changed(&mut self) -> Result<Camera, ViewerClosed> {
        self.camera.changed().await.map_err(|_| ViewerClosed)?;
        Ok(*self.camera.borrow_and_update())
    }

    pub fn sender(&self) -> mpsc::Sender<Command> {
        self.commands.clone()
    }
}

/// Spawns the applier on the current runtime. The join handle yields the
/// session back once the queue closes.
pub fn spawn_viewer(
    session: Session,
    surface: Box<dyn RenderSurface>,
    tick: Duration,
    queue: usize,
) -> (ViewerHandle, JoinHandle<Session>) {
    let (commands_tx, commands_rx) = mpsc::channel(queue.max(1));
    let (camera_tx, camera_rx) = watch::channel(session.current_camera(Instant::now()));

    let task = tokio::spawn(run_applier(
        session,
        surface,
        commands_rx,
        camera_tx,
        tick.max(MIN_TICK),
    ));

    (
        ViewerHandle {
            commands: commands_tx,
            camera: camera_rx,
        },
        task,
    )
}

async fn run_applier(
    mut session: Session,
    mut surface: Box<dyn RenderSurface>,
    mut commands: mpsc::Receiver<Command>,
    camera_tx: watch::Sender<Camera>,
    tick: Duration,
) -> Session {
    let mut ticker = time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                session.set_viewport(surface.viewport_size());
                let now = Instant::now();
                if touches_pixels(&command) {
                    run_blocking(|| session.dispatch(command, now));
                } else {
                    session.dispatch(command, now);
                }
                publish(&camera_tx, session.current_camera(now));
            }
            _ = ticker.tick() => {
                session.set_viewport(surface.viewport_size());
                let camera = session.tick(Instant::now());
                surface.draw(&camera, session.pixels());
                publish(&camera_tx, camera);
            }
        }
    }

    info!("command queue closed; viewer applier stopping");
    session
}

fn touches_pixels(command: &Command) -> bool {
    matches!(command, Command::Sharpen { .. } | Command::CropView { .. })
}

/// Runs filter and encode work without stalling other tasks on this worker.
/// `block_in_place` is only available on the multi-thread scheduler.
fn run_blocking<R>(work: impl FnOnce() -> R) -> R {
    match Handle::current().runtime_flavor() {
        RuntimeFlavor::MultiThread => task::block_in_place(work),
        _ => work(),
    }
}

fn publish(camera_tx: &watch::Sender<Camera>, camera: Camera) {
    camera_tx.send_if_modified(|current| {
        if *current == camera {
            return false;
        }
        *current = camera;
        true
    });
}
