//! # Config Commands

use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub success: bool,
    pub config: ConfigState,
}

/// Gets the configuration the register was started with.
pub fn get_config(config: &ConfigState) -> ConfigResponse {
    debug!("get_config command");
    ConfigResponse {
        success: true,
        config: config.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_shape() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["config"]["currencySymbol"], "$");
        assert_eq!(json["config"]["defaultStrategy"], "maxLarge");
        assert_eq!(json["config"]["openingFloat"]["0.1"], 30);
        assert_eq!(
            json["config"].as_object().unwrap().len(),
            3,
            "only currencySymbol, defaultStrategy and openingFloat are reported"
        );
    }
}
