//! Probe subcommand: one direct fetch per robot endpoint.

use eyesbot_bridge::{
    CameraIndex, FetchError, Payload, ROBOT_NAME_PATH, RobotBridge, SURROUNDINGS_PATH,
    UpstreamRequest,
};
use eyesbot_config::RobotConfig;

/// Outcome of probing one endpoint.
#[derive(Debug)]
pub(crate) enum ProbeOutcome {
    Ok(Payload),
    Fetch(FetchError),
    Config(String),
}

impl ProbeOutcome {
    fn is_ok(&self) -> bool {
        matches!(self, ProbeOutcome::Ok(_))
    }

    fn describe(&self) -> String {
        match self {
            ProbeOutcome::Ok(Payload::Text(text)) => format!("ok {:?}", text),
            ProbeOutcome::Ok(Payload::Binary(bytes)) => format!("ok {} bytes", bytes.len()),
            ProbeOutcome::Fetch(e) => format!("failed [{}] {}", e.kind(), e),
            ProbeOutcome::Config(msg) => format!("failed [config] {}", msg),
        }
    }
}

/// Fetch every endpoint without degrading failures.
pub(crate) async fn probe(bridge: &RobotBridge) -> Vec<(&'static str, ProbeOutcome)> {
    let image_path = CameraIndex::Left.image_path();
    let targets = [
        ("robot_name", ROBOT_NAME_PATH, false),
        ("surroundings", SURROUNDINGS_PATH, false),
        ("camera_0", image_path.as_str(), true),
    ];

    let mut outcomes = Vec::with_capacity(targets.len());
    for (label, path, binary) in targets {
        let outcome = match bridge.resolver().resolve(path) {
            Err(e) => ProbeOutcome::Config(e.to_string()),
            Ok(url) => {
                let request = if binary {
                    UpstreamRequest::binary(url)
                } else {
                    UpstreamRequest::text(url)
                };
                match bridge.fetcher().try_fetch(&request).await {
                    Ok(payload) => ProbeOutcome::Ok(payload),
                    Err(e) => ProbeOutcome::Fetch(e),
                }
            }
        };
        outcomes.push((label, outcome));
    }
    outcomes
}

/// Handle the probe subcommand.
pub(crate) async fn handle_probe_command(
    robot: &RobotConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let bridge = RobotBridge::new(robot)?;
    let outcomes = probe(&bridge).await;

    for (label, outcome) in &outcomes {
        println!("{:<14} {}", label, outcome.describe());
    }

    let failed = outcomes.iter().filter(|(_, o)| !o.is_ok()).count();
    if failed > 0 {
        return Err(format!("{} of {} probes failed", failed, outcomes.len()).into());
    }
    Ok(())
}
