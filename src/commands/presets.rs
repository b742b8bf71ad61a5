use u_seek::models::DEFAULT_DISK_SIZE;
use u_seek::presets::Preset;

use super::render;

pub fn list() -> anyhow::Result<()> {
    for preset in Preset::ALL {
        let request = preset.request(DEFAULT_DISK_SIZE);
        println!(
            "{:<5} head {:>4}  requests {}",
            preset.to_string(),
            request.head,
            render::sequence(&request.positions)
        );
    }
    Ok(())
}
