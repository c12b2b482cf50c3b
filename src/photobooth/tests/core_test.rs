use crate::composition::ComposedImage;
use crate::config::Config;
use crate::device_controls::interface::DeviceControlsEvent;
use crate::error::PhotoboothError;
use crate::photobooth::core::{
    init, transition, Effect, Model, ModelCamera, ModelLifecycle, Msg,
};
use crate::photobooth::countdown::Countdown;
use crate::photobooth::frame_color::FrameColor;
use image::RgbaImage;

fn capture() -> Msg {
    Msg::Controls(DeviceControlsEvent::Capture)
}

fn snapshot(session: u64) -> Msg {
    Msg::FrameCaptureDone {
        session,
        result: Ok(RgbaImage::new(8, 6)),
    }
}

/// Drives one full capture: request, ticks until the snapshot effect,
/// then the snapshot result.
fn take_photo(config: &Config, model: Model) -> Model {
    let (mut model, mut effects) = transition(config, model, capture());
    loop {
        match effects.as_slice() {
            [Effect::ScheduleCountdownTick { session }] => {
                let session = *session;
                (model, effects) = transition(config, model, Msg::CountdownTick { session });
            }
            [Effect::CaptureFrame { session }] => {
                let session = *session;
                let (model, _) = transition(config, model, snapshot(session));
                return model;
            }
            other => panic!("Unexpected effects: {:?}", other),
        }
    }
}

fn model_with_photos(config: &Config, count: usize) -> Model {
    let (mut model, _) = init(config);
    for _ in 0..count {
        model = take_photo(config, model);
    }
    model
}

#[test]
fn test_init() {
    let config = Config::default();

    let (model, effects) = init(&config);

    assert_eq!(model.camera, ModelCamera::Acquiring);
    assert_eq!(model.countdown, Countdown::Idle);
    assert!(model.frames.is_empty());
    assert_eq!(model.frame_color, config.default_frame_color);
    assert_eq!(
        effects,
        vec![Effect::SubscribeToControls, Effect::AcquireCamera]
    );
}

#[test]
fn test_camera_acquisition_failure_marks_camera_unavailable() {
    let config = Config::default();
    let (model, _) = init(&config);

    let (model, effects) = transition(
        &config,
        model,
        Msg::CameraAcquireDone(Err("Permission denied".into())),
    );

    assert_eq!(
        model.camera,
        ModelCamera::Unavailable("Permission denied".to_string())
    );
    assert!(effects.is_empty());
}

#[test]
fn test_capture_starts_countdown_at_three() {
    let config = Config::default();
    let (model, _) = init(&config);

    let (model, effects) = transition(&config, model, capture());

    assert_eq!(model.countdown, Countdown::Counting(3));
    assert_eq!(effects, vec![Effect::ScheduleCountdownTick { session: 0 }]);
}

#[test]
fn test_countdown_ticks_three_two_one_then_captures_once() {
    let config = Config::default();
    let (model, _) = init(&config);
    let (mut model, _) = transition(&config, model, capture());
    let mut shown = vec![model.countdown.remaining().unwrap()];
    let mut captures = 0;

    for _ in 0..3 {
        let (next, effects) = transition(&config, model, Msg::CountdownTick { session: 0 });
        model = next;
        if let Some(value) = model.countdown.remaining() {
            shown.push(value);
        }
        captures += effects
            .iter()
            .filter(|e| matches!(e, Effect::CaptureFrame { .. }))
            .count();
    }

    assert_eq!(shown, vec![3, 2, 1]);
    assert_eq!(captures, 1);
    assert_eq!(model.countdown, Countdown::Idle);
    assert!(model.snapshot_pending);
}

#[test]
fn test_snapshot_is_appended_in_capture_order() {
    let config = Config::default();

    let model = model_with_photos(&config, 3);

    let ids: Vec<u64> = model.frames.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(!model.is_capture_in_flight());
}

#[test]
fn test_capture_when_full_alerts_and_changes_nothing() {
    let config = Config::default();
    let model = model_with_photos(&config, 3);
    let before = model.clone();

    let (model, effects) = transition(&config, model, capture());

    assert_eq!(model, before);
    assert_eq!(
        effects,
        vec![Effect::Alert(PhotoboothError::CaptureLimitExceeded { max: 3 })]
    );
}

#[test]
fn test_overlapping_capture_is_rejected() {
    let config = Config::default();
    let (model, _) = init(&config);
    let (model, _) = transition(&config, model, capture());
    let before = model.clone();

    let (model, effects) = transition(&config, model, capture());

    assert_eq!(model, before);
    assert_eq!(
        effects,
        vec![Effect::Alert(PhotoboothError::CaptureInProgress)]
    );
}

#[test]
fn test_capture_rejected_while_snapshot_pending() {
    let config = Config::default();
    let (model, _) = init(&config);
    let (mut model, _) = transition(&config, model, capture());
    for _ in 0..3 {
        (model, _) = transition(&config, model, Msg::CountdownTick { session: 0 });
    }
    assert!(model.snapshot_pending);

    let (_, effects) = transition(&config, model, capture());

    assert_eq!(
        effects,
        vec![Effect::Alert(PhotoboothError::CaptureInProgress)]
    );
}

#[test]
fn test_failed_snapshot_frees_capture_without_appending() {
    let config = Config::default();
    let (model, _) = init(&config);
    let (mut model, _) = transition(&config, model, capture());
    for _ in 0..3 {
        (model, _) = transition(&config, model, Msg::CountdownTick { session: 0 });
    }

    let (model, effects) = transition(
        &config,
        model,
        Msg::FrameCaptureDone {
            session: 0,
            result: Err("Camera not started".into()),
        },
    );

    assert!(model.frames.is_empty());
    assert!(!model.is_capture_in_flight());
    assert!(effects.is_empty());
}

#[test]
fn test_reset_clears_frames_and_countdown() {
    let config = Config::default();
    let model = model_with_photos(&config, 2);
    let (model, _) = transition(&config, model, capture());

    let (model, effects) = transition(&config, model, Msg::Controls(DeviceControlsEvent::Reset));

    assert!(model.frames.is_empty());
    assert_eq!(model.countdown, Countdown::Idle);
    assert!(!model.snapshot_pending);
    assert!(effects.is_empty());
}

#[test]
fn test_stale_tick_and_snapshot_after_reset_are_ignored() {
    let config = Config::default();
    let (model, _) = init(&config);
    let (model, _) = transition(&config, model, capture());
    let (model, _) = transition(&config, model, Msg::Controls(DeviceControlsEvent::Reset));
    let after_reset = model.clone();

    let (model, effects) = transition(&config, model, Msg::CountdownTick { session: 0 });
    assert_eq!(model, after_reset);
    assert!(effects.is_empty());

    let (model, effects) = transition(&config, model, snapshot(0));
    assert_eq!(model, after_reset);
    assert!(effects.is_empty());
}

#[test]
fn test_download_with_fewer_than_three_frames_alerts() {
    let config = Config::default();

    for count in 0..3 {
        let model = model_with_photos(&config, count);
        let before = model.clone();

        let (model, effects) =
            transition(&config, model, Msg::Controls(DeviceControlsEvent::Download));

        assert_eq!(model, before);
        assert_eq!(
            effects,
            vec![Effect::Alert(PhotoboothError::InsufficientFrames {
                have: count,
                need: 3
            })]
        );
    }
}

#[test]
fn test_download_composes_with_current_color() {
    let config = Config::default();
    let model = model_with_photos(&config, 3);
    let pink = FrameColor::rgb(255, 105, 180);
    let (model, _) = transition(
        &config,
        model,
        Msg::Controls(DeviceControlsEvent::FrameColor(pink)),
    );

    let (model, effects) = transition(&config, model, Msg::Controls(DeviceControlsEvent::Download));

    assert_eq!(
        effects,
        vec![Effect::ComposeImage {
            session: 0,
            frames: model.frames.to_vec(),
            frame_color: pink,
        }]
    );
}

#[test]
fn test_color_change_after_download_does_not_touch_requested_composition() {
    let config = Config::default();
    let model = model_with_photos(&config, 3);

    let (model, effects) = transition(&config, model, Msg::Controls(DeviceControlsEvent::Download));
    let (model, _) = transition(
        &config,
        model,
        Msg::Controls(DeviceControlsEvent::FrameColor(FrameColor::rgb(0, 0, 0))),
    );

    assert_eq!(model.frame_color, FrameColor::rgb(0, 0, 0));
    match &effects[..] {
        [Effect::ComposeImage { frame_color, .. }] => {
            assert_eq!(*frame_color, config.default_frame_color)
        }
        other => panic!("Unexpected effects: {:?}", other),
    }
}

#[test]
fn test_composed_image_is_downloaded_under_fixed_name() {
    let config = Config::default();
    let model = model_with_photos(&config, 3);
    let image = ComposedImage {
        width: 48,
        height: 148,
        png: vec![1, 2, 3],
    };

    let (_, effects) = transition(
        &config,
        model,
        Msg::ComposeDone {
            session: 0,
            result: Ok(image.clone()),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Download {
            file_name: "photobooth.png".to_string(),
            image,
        }]
    );
}

#[test]
fn test_reset_discards_composition_in_flight() {
    let config = Config::default();
    let model = model_with_photos(&config, 3);
    let (model, effects) = transition(&config, model, Msg::Controls(DeviceControlsEvent::Download));
    let session = match &effects[..] {
        [Effect::ComposeImage { session, .. }] => *session,
        other => panic!("Unexpected effects: {:?}", other),
    };
    let (model, _) = transition(&config, model, Msg::Controls(DeviceControlsEvent::Reset));

    let (model, effects) = transition(
        &config,
        model,
        Msg::ComposeDone {
            session,
            result: Ok(ComposedImage {
                width: 1,
                height: 1,
                png: vec![0],
            }),
        },
    );

    assert!(effects.is_empty());
    assert!(model.frames.is_empty());
}

#[test]
fn test_quit_disposes_session_and_releases_camera() {
    let config = Config::default();
    let model = model_with_photos(&config, 1);

    let (model, effects) = transition(&config, model, Msg::Controls(DeviceControlsEvent::Quit));

    assert_eq!(model.lifecycle, ModelLifecycle::Disposed);
    assert!(model.frames.is_empty());
    assert_eq!(effects, vec![Effect::ReleaseCamera]);

    let (_, effects) = transition(&config, model, capture());
    assert!(effects.is_empty());
}
