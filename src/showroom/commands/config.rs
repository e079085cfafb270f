use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShowroomConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShowroomConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config(config);
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{}: {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            result = result.with_config(config);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("currency-symbol".into(), "LKR".into()),
        )
        .unwrap();

        let res = run(dir.path(), ConfigAction::ShowKey("currency-symbol".into())).unwrap();
        assert_eq!(res.messages[0].content, "currency-symbol: LKR");
    }

    #[test]
    fn test_show_all_returns_config() {
        let dir = TempDir::new().unwrap();
        let res = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(res.config, Some(ShowroomConfig::default()));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("nope".into())).is_err());
    }
}
