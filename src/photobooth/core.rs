use crate::composition::{ComposedImage, CompositionError};
use crate::config::Config;
use crate::device_controls::interface::DeviceControlsEvent;
use crate::error::PhotoboothError;
use crate::photobooth::countdown::{Countdown, CountdownStep};
use crate::photobooth::frame::{CapturedFrame, FrameCollection, FRAME_COUNT};
use crate::photobooth::frame_color::FrameColor;
use image::RgbaImage;
use std::path::PathBuf;

//
//
//

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ModelCamera {
    #[default]
    Acquiring,
    Ready,
    Unavailable(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ModelLifecycle {
    #[default]
    Running,
    Disposed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub camera: ModelCamera,
    pub countdown: Countdown,
    /// Countdown fired and the snapshot has not come back yet.
    pub snapshot_pending: bool,
    pub frames: FrameCollection,
    pub frame_color: FrameColor,
    /// Bumped on reset. Ticks and snapshots from an older session are dropped.
    pub session: u64,
    pub next_frame_id: u64,
    pub lifecycle: ModelLifecycle,
}

impl Model {
    pub fn new(frame_color: FrameColor) -> Self {
        Self {
            camera: ModelCamera::default(),
            countdown: Countdown::Idle,
            snapshot_pending: false,
            frames: FrameCollection::default(),
            frame_color,
            session: 0,
            next_frame_id: 1,
            lifecycle: ModelLifecycle::default(),
        }
    }

    pub fn is_capture_in_flight(&self) -> bool {
        self.countdown.is_counting() || self.snapshot_pending
    }

    pub fn is_disposed(&self) -> bool {
        self.lifecycle == ModelLifecycle::Disposed
    }

    fn clear_session(&mut self) {
        self.frames.clear();
        self.countdown = Countdown::Idle;
        self.snapshot_pending = false;
        self.session += 1;
    }
}

#[derive(Debug)]
pub enum Msg {
    CameraAcquireDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    Controls(DeviceControlsEvent),
    CountdownTick {
        session: u64,
    },
    FrameCaptureDone {
        session: u64,
        result: Result<RgbaImage, Box<dyn std::error::Error + Send + Sync>>,
    },
    ComposeDone {
        session: u64,
        result: Result<ComposedImage, CompositionError>,
    },
    DownloadDone(Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>),
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::FrameCaptureDone {
                session,
                result: Ok(image),
            } => format!(
                "FrameCaptureDone {{ session: {}, result: Ok({}x{}) }}",
                session,
                image.width(),
                image.height()
            ),
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeToControls,
    AcquireCamera,
    ScheduleCountdownTick {
        session: u64,
    },
    CaptureFrame {
        session: u64,
    },
    ComposeImage {
        session: u64,
        frames: Vec<CapturedFrame>,
        frame_color: FrameColor,
    },
    Download {
        file_name: String,
        image: ComposedImage,
    },
    Alert(PhotoboothError),
    ReleaseCamera,
}

//
//
//

pub fn init(config: &Config) -> (Model, Vec<Effect>) {
    (
        Model::new(config.default_frame_color),
        vec![Effect::SubscribeToControls, Effect::AcquireCamera],
    )
}

//
//
//

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    if model.is_disposed() {
        return (model, vec![]);
    }

    match msg {
        Msg::CameraAcquireDone(result) => {
            let camera = match result {
                Ok(()) => ModelCamera::Ready,
                Err(e) => ModelCamera::Unavailable(e.to_string()),
            };
            (Model { camera, ..model }, vec![])
        }

        Msg::Controls(event) => transition_controls(config, model, event),

        Msg::CountdownTick { session } => {
            if session != model.session {
                return (model, vec![]);
            }

            let (countdown, step) = model.countdown.tick();
            match step {
                CountdownStep::Show(_) => (
                    Model { countdown, ..model },
                    vec![Effect::ScheduleCountdownTick { session }],
                ),
                CountdownStep::Fire => (
                    Model {
                        countdown,
                        snapshot_pending: true,
                        ..model
                    },
                    vec![Effect::CaptureFrame { session }],
                ),
                CountdownStep::Ignored => (model, vec![]),
            }
        }

        Msg::FrameCaptureDone { session, result } => {
            if session != model.session || !model.snapshot_pending {
                return (model, vec![]);
            }

            let mut model = Model {
                snapshot_pending: false,
                ..model
            };
            if let Ok(image) = result {
                if model
                    .frames
                    .push(CapturedFrame::new(model.next_frame_id, image))
                {
                    model.next_frame_id += 1;
                }
            }
            (model, vec![])
        }

        Msg::ComposeDone { session, result } => match result {
            Ok(image) if session == model.session => (
                model,
                vec![Effect::Download {
                    file_name: config.download_file_name.clone(),
                    image,
                }],
            ),
            _ => (model, vec![]),
        },

        Msg::DownloadDone(_) => (model, vec![]),
    }
}

fn transition_controls(
    config: &Config,
    mut model: Model,
    event: DeviceControlsEvent,
) -> (Model, Vec<Effect>) {
    match event {
        DeviceControlsEvent::Capture => {
            if model.frames.is_full() {
                return (
                    model,
                    vec![Effect::Alert(PhotoboothError::CaptureLimitExceeded {
                        max: FRAME_COUNT,
                    })],
                );
            }
            if model.is_capture_in_flight() {
                return (model, vec![Effect::Alert(PhotoboothError::CaptureInProgress)]);
            }

            let session = model.session;
            (
                Model {
                    countdown: Countdown::start(config.countdown_from),
                    ..model
                },
                vec![Effect::ScheduleCountdownTick { session }],
            )
        }

        DeviceControlsEvent::Reset => {
            model.clear_session();
            (model, vec![])
        }

        DeviceControlsEvent::Download => {
            if model.frames.len() != FRAME_COUNT {
                let have = model.frames.len();
                return (
                    model,
                    vec![Effect::Alert(PhotoboothError::InsufficientFrames {
                        have,
                        need: FRAME_COUNT,
                    })],
                );
            }

            let effect = Effect::ComposeImage {
                session: model.session,
                frames: model.frames.to_vec(),
                frame_color: model.frame_color,
            };
            (model, vec![effect])
        }

        DeviceControlsEvent::FrameColor(frame_color) => (
            Model {
                frame_color,
                ..model
            },
            vec![],
        ),

        DeviceControlsEvent::Quit => {
            model.clear_session();
            model.lifecycle = ModelLifecycle::Disposed;
            (model, vec![Effect::ReleaseCamera])
        }
    }
}
