use clap::{Parser, ValueEnum};
use config::Config;
use device_camera::{
    impl_fake::DeviceCameraFake, impl_image_files::DeviceCameraImageFiles,
    interface::DeviceCamera,
};
use device_controls::{
    impl_console::DeviceControlsConsole,
    impl_fake::DeviceControlsFake,
    impl_gui::DeviceControlsGui,
    interface::{DeviceControls, DeviceControlsEvent},
};
use device_display::{impl_console::DeviceDisplayConsole, impl_gui::DeviceDisplayGui};
use device_download::impl_file_system::DeviceDownloadFileSystem;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use photobooth::core::Msg;
use photobooth::frame_color::FrameColor;
use photobooth::main::Photobooth;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

mod composition;
mod config;
mod device_camera;
mod device_controls;
mod device_display;
mod device_download;
mod error;
mod library;
mod photobooth;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayKind {
    Console,
    Gui,
}

/// Take three photos and download them as one framed strip.
#[derive(Debug, Parser)]
#[command(name = "photobooth", version)]
struct Args {
    #[arg(long, value_enum, default_value_t = DisplayKind::Console)]
    display: DisplayKind,

    /// Use still images from this directory as the camera
    #[arg(long)]
    images: Option<PathBuf>,

    /// Where photobooth.png is written
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Starting frame color, e.g. #ff69b4
    #[arg(long)]
    frame_color: Option<FrameColor>,

    /// Console only: play a scripted session instead of reading stdin
    #[arg(long)]
    script: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let mut config = Config::default();
    if let Some(dir) = args.output_dir {
        config.download_dir = dir;
    }
    if let Some(color) = args.frame_color {
        config.default_frame_color = color;
    }

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = match args.images {
        Some(dir) => Arc::new(DeviceCameraImageFiles::new(dir, logger.clone())),
        None => Arc::new(DeviceCameraFake::new(
            config.fake_camera_width,
            config.fake_camera_height,
            logger.clone(),
        )),
    };

    let device_download = Arc::new(DeviceDownloadFileSystem::new(
        config.download_dir.clone(),
        logger.clone(),
    ));

    match args.display {
        DisplayKind::Console => {
            let device_controls: Arc<dyn DeviceControls + Send + Sync> = if args.script {
                Arc::new(DeviceControlsFake::demo(config.tick_rate, logger.clone()))
            } else {
                Arc::new(DeviceControlsConsole::new(logger.clone()))
            };

            let photobooth = Photobooth::new(
                config,
                logger,
                device_camera,
                device_controls,
                Arc::new(Mutex::new(DeviceDisplayConsole::new())),
                device_download,
            );

            photobooth.run()
        }
        DisplayKind::Gui => {
            let device_controls = Arc::new(DeviceControlsGui::new());
            let window_controls = device_controls.sender();
            let device_display = DeviceDisplayGui::new();
            let initial_color = config.default_frame_color;

            let photobooth = Photobooth::new(
                config,
                logger,
                device_camera,
                device_controls,
                Arc::new(Mutex::new(device_display.clone())),
                device_download,
            );
            let session_sender = photobooth.sender();
            let session = std::thread::spawn(move || photobooth.run());

            // The window needs the main thread.
            device_display.run_window(window_controls, initial_color)?;

            let _ = session_sender.send(Msg::Controls(DeviceControlsEvent::Quit));
            session.join().map_err(|_| "Session thread panicked")??;
            Ok(())
        }
    }
}
