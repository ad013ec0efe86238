use {
    anyhow::Result,
    gesture_view::{HostClassifier, Options},
    minifb::{Key, KeyRepeat, Window, WindowOptions},
    palm_base::log,
    palm_gesture::{GestureConfig, GestureLoop, TraceHandler},
    palm_image::image_to_u32,
    palm_video::{NullSource, StillFrames, V4l2Device, VideoConfig, VideoIn, VideoSource},
};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

type Loop = GestureLoop<Box<dyn VideoSource>, HostClassifier, TraceHandler>;

fn open_source(options: &Options) -> Box<dyn VideoSource> {
    let opened = match &options.frames {
        Some(dir) => VideoIn::open(
            StillFrames::new(),
            VideoConfig::default().with_device(dir),
        ),
        None => VideoIn::open(
            V4l2Device::new(),
            VideoConfig::default()
                .with_device(&options.device)
                .with_size(palm_base::Vec2::new(WIDTH, HEIGHT)),
        ),
    };
    match opened {
        Ok(video) => Box::new(video),
        Err(e) => {
            // keep ticking, every tick will be a skip
            log::error!("video: {}, continuing without frames", e);
            Box::new(NullSource)
        }
    }
}

fn run_headless(gesture_loop: &mut Loop, limit: Option<u64>) {
    let mut ticks = 0u64;
    gesture_loop.run(|_| {
        ticks += 1;
        limit.is_none_or(|limit| ticks < limit)
    });
}

fn run_window(gesture_loop: &mut Loop) -> Result<()> {
    let mut window = Window::new(
        "Gesture View - 0-9 set finger count, ESC to exit",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;
    window.set_target_fps(gesture_loop.config().tick_rate() as usize);

    // last grayscale frame, shown again on ticks without a new one
    let mut preview: Option<(Vec<u32>, usize, usize)> = None;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        for key in window.get_keys_pressed(KeyRepeat::No) {
            if let Some(signal) = gesture_loop.classifier_mut().press(key) {
                log::info!("keyboard: finger count set to {}", signal);
            }
        }

        gesture_loop.tick_with(|frame| match image_to_u32(frame) {
            Ok(pixels) => preview = Some((pixels, frame.width(), frame.height())),
            Err(e) => log::warn!("preview: {}", e),
        });

        match &preview {
            Some((pixels, width, height)) => window.update_with_buffer(pixels, *width, *height)?,
            None => window.update(),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("gesture-view");
    let options = match Options::parse(args.iter().skip(1).cloned()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", Options::usage(program));
            std::process::exit(1);
        }
    };

    match &options.log_dir {
        Some(dir) => palm_base::init_file_logger(dir)?,
        None => palm_base::init_stdout_logger(),
    }

    let classifier = HostClassifier::from_option(options.signal.as_deref())?;
    let config = GestureConfig::default().with_mirror(options.mirror);
    let mut gesture_loop = GestureLoop::new(open_source(&options), classifier, TraceHandler, config);

    if options.headless {
        run_headless(&mut gesture_loop, options.ticks);
    } else {
        run_window(&mut gesture_loop)?;
    }

    log::info!(
        "done: {} ({:.1} fps)",
        gesture_loop.stats(),
        gesture_loop.fps()
    );
    Ok(())
}
