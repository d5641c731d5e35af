mod settings;
mod vision_ability;

pub use settings::{Settings, SettingsPatch};
pub use vision_ability::VisionAbility;
