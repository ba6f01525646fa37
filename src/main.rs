use std::sync::Arc;
use std::time::Duration;

use geobeacon::{ChannelNotifier, Config, ControllerBuilder, Error, Notice, Result, StatusView};
use tracing::warn;

const NOTICE_WAIT: Duration = Duration::from_secs(15);

fn usage() {
    println!("Usage: geobeacon [locate|sos]");
    println!();
    println!("  locate   acquire the current position and submit it (default)");
    println!("  sos      as locate, then open a nearest-hospital search");
    println!();
    println!("Set GEOBEACON_LATITUDE and GEOBEACON_LONGITUDE to provide a position.");
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let args: Vec<String> = std::env::args().collect();
    let sos = match wants_sos(args.get(1).map(String::as_str)) {
        Ok(sos) => sos,
        Err(e) => {
            usage();
            return Err(e);
        }
    };

    let config = Config::load()?;
    let (notifier, mut notices) = ChannelNotifier::new();
    let controller = ControllerBuilder::from_config(&config)?
        .notifier(Arc::new(notifier))
        .build();

    println!("Location Services\n");

    match controller.start() {
        Ok(()) => println!("{}\n", StatusView::from_state(&controller.state())),
        Err(Error::CapabilityMissing) => {}
        Err(e) => return Err(e),
    }

    let state = controller.settled().await;
    println!("{}\n", StatusView::from_state(&state));

    // One notice per outstanding submission or refused SOS.
    let mut expected = usize::from(state.coordinate().is_some());
    if sos {
        if let Err(e) = controller.trigger_emergency() {
            warn!("{}", e);
            expected += 1;
        }
    }

    for _ in 0..expected {
        match tokio::time::timeout(NOTICE_WAIT, notices.recv()).await {
            Ok(Some(notice)) => print_notice(&notice),
            Ok(None) => break,
            Err(_) => {
                warn!("No response from {} within {:?}", controller.endpoint(), NOTICE_WAIT);
                break;
            }
        }
    }

    Ok(())
}

/// Maps the command argument to whether the emergency search should run
fn wants_sos(command: Option<&str>) -> Result<bool> {
    match command {
        None | Some("locate") => Ok(false),
        Some("sos") => Ok(true),
        Some(other) => Err(Error::Config(format!("unknown command '{}'", other))),
    }
}

fn print_notice(notice: &Notice) {
    println!("{}: {}", notice.title(), notice.description());
}
