use {
    std::error::Error,
    tokio::io::{AsyncBufReadExt, BufReader},
    wave_camera::{FrameSampler, ReplaySampler, V4l2Sampler},
    wave_control::{
        CaptureLoop, CommandReceiver, EntryPublisher, EntrySnapshot, dispatch_bridge,
        entry_channel,
    },
    wave_gesture::{Credentials, FacePlusPlusClassifier},
    wave_player::{ConsoleInput, ConsolePlayer, Settings},
};

// The capture thread owns a blocking HTTP client, which must not be created
// or dropped inside an async context, so only the player side runs on tokio.
fn main() -> Result<(), Box<dyn Error>> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match &settings.log_dir {
        Some(dir) => wave_base::init_file_logger(dir)?,
        None => wave_base::init_stdout_logger(),
    }

    let credentials = Credentials::from_property_file(&settings.property_store)?;
    let classifier = FacePlusPlusClassifier::new(credentials, settings.classifier_config())?;

    let sampler: Box<dyn FrameSampler> = match &settings.replay_dir {
        Some(dir) => {
            log::info!("replaying frames from {}", dir.display());
            Box::new(ReplaySampler::from_dir(dir)?)
        }
        None => Box::new(V4l2Sampler::new(settings.camera_config())),
    };

    let mut player = ConsolePlayer::new(settings.playlist.clone());
    let (sender, mut receiver) = dispatch_bridge(settings.queue_capacity);
    let (publisher, entry) = entry_channel(EntrySnapshot::of(&player));

    let mut capture = CaptureLoop::new(
        sampler,
        Box::new(classifier),
        sender,
        entry,
        settings.capture_config(),
    );
    capture.start()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run_player(&mut player, &mut receiver, &publisher));
    // stdin reads may still be parked on a blocking thread
    runtime.shutdown_background();

    capture.stop();
    let stats = capture.stats();
    log::info!(
        "{} classifications ({} failed), {} commands dispatched",
        stats.classifications(),
        stats.classify_failures(),
        stats.dispatched()
    );
    result
}

async fn run_player(
    player: &mut ConsolePlayer,
    commands: &mut CommandReceiver,
    entry: &EntryPublisher,
) -> Result<(), Box<dyn Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    println!("type to edit the search box, /hide to toggle it, /quit to exit");
    println!("{}", player.status());

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                command.apply(player);
                commands.drain(player);
                entry.publish_from(player);
                println!("{}", player.status());
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !player.handle_input(ConsoleInput::parse(&line)) {
                    break;
                }
                entry.publish_from(player);
                println!("{}", player.status());
            }
            _ = &mut ctrl_c => {
                log::info!("interrupted");
                break;
            }
        }
    }
    Ok(())
}
