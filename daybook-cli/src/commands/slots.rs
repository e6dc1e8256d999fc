use anyhow::Result;
use daybook_core::DaybookConfig;

pub fn run(config: &DaybookConfig) -> Result<()> {
    for slot in config.slots.slots() {
        println!("{}", slot);
    }
    Ok(())
}
