use crate::commands::{CmdMessage, CmdResult, PracticePaths};
use crate::config::PracticeConfig;
use crate::error::{PracticeError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &PracticePaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.home;
    match action {
        ConfigAction::ShowAll => {
            let config = PracticeConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = PracticeConfig::load(dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| PracticeError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = PracticeConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_show_reads_back() {
        let temp_dir = tempfile::tempdir().unwrap();
        let paths = PracticePaths::new(temp_dir.path());

        let set = run(
            &paths,
            ConfigAction::Set("guest-name".into(), "Bea".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Success);

        let shown = run(&paths, ConfigAction::ShowKey("guest-name".into())).unwrap();
        assert_eq!(shown.messages[0].content, "Bea");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().guest_name, "Bea");
    }

    #[test]
    fn unknown_key_is_an_error_and_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let paths = PracticePaths::new(temp_dir.path());

        let err = run(&paths, ConfigAction::Set("colour".into(), "red".into())).unwrap_err();
        assert!(matches!(err, PracticeError::Config(_)));
        assert!(!temp_dir.path().join("config.json").exists());

        let err = run(&paths, ConfigAction::ShowKey("colour".into())).unwrap_err();
        assert!(matches!(err, PracticeError::Config(_)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let paths = PracticePaths::new(temp_dir.path());

        let err = run(&paths, ConfigAction::Set("guest-name".into(), " ".into())).unwrap_err();
        assert!(matches!(err, PracticeError::Config(_)));
    }
}
