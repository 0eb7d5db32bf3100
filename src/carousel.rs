//! Hero media carousel.
//!
//! [`HeroCarousel`] is the state machine: it shows one item of a fixed media
//! sequence and steps to the next one, wrapping at the end. Images advance after
//! the reveal animation plus a dwell time; videos advance when playback ends.
//! [`CarouselDriver`] runs that machine on a tokio clock for one mounted
//! instance.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::services::storage::MediaItem;

pub const DEFAULT_IMAGE_DURATION: Duration = Duration::from_millis(3000);
/// Length of the reveal wipe; must match the stylesheet.
pub const REVEAL_DURATION: Duration = Duration::from_millis(1200);

/// What moves the carousel off the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    After(Duration),
    PlaybackEnded,
}

/// Snapshot of what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselFrame {
    /// No media: render a placeholder.
    Empty,
    /// Exactly one item, rendered without transitions.
    Static,
    /// `current` animates in over `previous`. `generation` counts transitions.
    Showing {
        current: usize,
        previous: usize,
        generation: u64,
    },
}

#[derive(Debug, Clone)]
pub struct HeroCarousel {
    media: Vec<MediaItem>,
    current: usize,
    generation: u64,
    image_duration: Duration,
    reveal_duration: Duration,
}

impl HeroCarousel {
    pub fn new(media: Vec<MediaItem>, image_duration: Duration) -> Self {
        Self {
            media,
            current: 0,
            generation: 0,
            image_duration,
            reveal_duration: REVEAL_DURATION,
        }
    }

    pub fn with_reveal_duration(mut self, reveal_duration: Duration) -> Self {
        self.reveal_duration = reveal_duration;
        self
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    pub fn image_duration(&self) -> Duration {
        self.image_duration
    }

    pub fn reveal_duration(&self) -> Duration {
        self.reveal_duration
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.media.get(self.current)
    }

    pub fn frame(&self) -> CarouselFrame {
        match self.media.len() {
            0 => CarouselFrame::Empty,
            1 => CarouselFrame::Static,
            n => CarouselFrame::Showing {
                current: self.current,
                previous: (self.current + n - 1) % n,
                generation: self.generation,
            },
        }
    }

    /// `None` when there is nothing to rotate through.
    pub fn next_trigger(&self) -> Option<Trigger> {
        if self.media.len() <= 1 {
            return None;
        }
        let item = self.current_item()?;
        if item.is_video() {
            Some(Trigger::PlaybackEnded)
        } else {
            Some(Trigger::After(self.reveal_duration + self.image_duration))
        }
    }

    /// Step to the next item. No-op (returns false) for zero or one item.
    pub fn advance(&mut self) -> bool {
        let n = self.media.len();
        if n <= 1 {
            return false;
        }
        self.current = (self.current + 1) % n;
        self.generation += 1;
        true
    }

    /// Playback of the current item finished. Only a showing video advances.
    pub fn playback_ended(&mut self) -> bool {
        if self.next_trigger() == Some(Trigger::PlaybackEnded) {
            self.advance()
        } else {
            false
        }
    }
}

/// Aborts the wrapped task when dropped.
#[cfg_attr(not(test), allow(dead_code))]
struct TaskGuard(JoinHandle<()>);

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs a [`HeroCarousel`] for one mounted instance.
///
/// At most one timer is pending at any time: each transition drops the
/// previous sleep before the next one is created. Dropping the driver
/// (unmounting) aborts the task and with it any pending timer.
///
/// Pages run the carousel in the browser (`static/site.js`); this driver is
/// the reference model for that script's timing and is only exercised by
/// tests in this binary.
#[cfg_attr(not(test), allow(dead_code))]
pub struct CarouselDriver {
    frames: watch::Receiver<CarouselFrame>,
    ended: mpsc::UnboundedSender<()>,
    _task: TaskGuard,
}

#[cfg_attr(not(test), allow(dead_code))]
impl CarouselDriver {
    pub fn spawn(carousel: HeroCarousel) -> Self {
        let (frames_tx, frames) = watch::channel(carousel.frame());
        let (ended, ended_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(carousel, frames_tx, ended_rx));

        Self {
            frames,
            ended,
            _task: TaskGuard(task),
        }
    }

    pub fn frame(&self) -> CarouselFrame {
        *self.frames.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselFrame> {
        self.frames.clone()
    }

    /// Signal that the video currently on screen finished playing.
    pub fn playback_ended(&self) {
        let _ = self.ended.send(());
    }
}

#[cfg_attr(not(test), allow(dead_code))]
async fn run(
    mut carousel: HeroCarousel,
    frames: watch::Sender<CarouselFrame>,
    mut ended: mpsc::UnboundedReceiver<()>,
) {
    loop {
        match carousel.next_trigger() {
            None => {
                // Static or empty: nothing ever changes.
                std::future::pending::<()>().await;
            }
            Some(Trigger::After(delay)) => {
                let timer = tokio::time::sleep(delay);
                tokio::pin!(timer);
                loop {
                    tokio::select! {
                        _ = &mut timer => break,
                        signal = ended.recv() => {
                            // An image is showing; stray playback signals are ignored.
                            if signal.is_none() {
                                return;
                            }
                        }
                    }
                }
                carousel.advance();
            }
            Some(Trigger::PlaybackEnded) => {
                if ended.recv().await.is_none() {
                    return;
                }
                carousel.playback_ended();
            }
        }

        tracing::trace!(frame = ?carousel.frame(), "Carousel advanced");
        if frames.send(carousel.frame()).is_err() {
            return;
        }
    }
}
