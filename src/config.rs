//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::options::{ConsonantAssimilation, RenderOptions, WordCategory};
use crate::error::RomanizeError;

/// Koroman 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RomanizerConfig {
    /// 로마자 구간마다 첫 글자 대문자
    #[serde(default = "default_true")]
    pub capitalize_first_letter: bool,
    /// 모호한 모음 경계에 붙임표 삽입
    #[serde(default = "default_true")]
    pub hyphen_on_ambiguous_vowel: bool,
    /// 기본 단어 유형
    #[serde(default)]
    pub category: WordCategory,
    /// 기본 자음동화 방향
    #[serde(default)]
    pub assimilation: ConsonantAssimilation,
}

fn default_true() -> bool {
    true
}

impl Default for RomanizerConfig {
    fn default() -> Self {
        Self {
            capitalize_first_letter: default_true(),
            hyphen_on_ambiguous_vowel: default_true(),
            category: WordCategory::default(),
            assimilation: ConsonantAssimilation::default(),
        }
    }
}

impl RomanizerConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            capitalize_first_letter: self.capitalize_first_letter,
            hyphen_on_ambiguous_vowel: self.hyphen_on_ambiguous_vowel,
        }
    }
}

/// 설정 파일 경로: ~/.config/koroman/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("koroman").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RomanizerConfig {
    load_config_from(&config_path())
}

/// 지정 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> RomanizerConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            RomanizerConfig::default()
        }),
        Err(_) => RomanizerConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &RomanizerConfig) -> Result<(), RomanizeError> {
    save_config_to(&config_path(), config)
}

/// 지정 경로에 설정 저장 (상위 디렉토리 생성)
pub fn save_config_to(path: &Path, config: &RomanizerConfig) -> Result<(), RomanizeError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| RomanizeError::Config(format!("직렬화 실패: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RomanizerConfig::default();
        assert!(config.capitalize_first_letter);
        assert!(config.hyphen_on_ambiguous_vowel);
        assert_eq!(config.category, WordCategory::Typical);
        assert_eq!(config.assimilation, ConsonantAssimilation::Regressive);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = RomanizerConfig {
            capitalize_first_letter: false,
            hyphen_on_ambiguous_vowel: true,
            category: WordCategory::District,
            assimilation: ConsonantAssimilation::Progressive,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RomanizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 일부 필드가 없는 경우 기본값 사용
        let json = r#"{"category": "Name"}"#;
        let config: RomanizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.category, WordCategory::Name);
        assert!(config.capitalize_first_letter);
        assert_eq!(config.assimilation, ConsonantAssimilation::Regressive);
    }

    #[test]
    fn test_render_options() {
        let config = RomanizerConfig {
            hyphen_on_ambiguous_vowel: false,
            ..RomanizerConfig::default()
        };
        let options = config.render_options();
        assert!(options.capitalize_first_letter);
        assert!(!options.hyphen_on_ambiguous_vowel);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = RomanizerConfig {
            capitalize_first_letter: false,
            ..RomanizerConfig::default()
        };
        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_load_missing_or_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.json");
        assert_eq!(load_config_from(&missing), RomanizerConfig::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(load_config_from(&broken), RomanizerConfig::default());
    }
}
