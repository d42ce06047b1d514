//! 설정 파일 관리.
//!
//! 플랫폼별 설정 디렉토리에 JSON 파일로 설정을 저장/로드한다.

use crate::config::AppConfig;
use crate::error::CoreError;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 설정 관리자
///
/// 설정 파일의 로드/저장 및 런타임 설정 변경을 관리한다.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 현재 설정 (스레드 안전)
    config: Arc<RwLock<AppConfig>>,
    /// 설정 파일 경로
    config_path: PathBuf,
}

impl ConfigManager {
    /// 새 설정 관리자 생성 및 설정 로드
    ///
    /// 설정 파일이 없으면 기본 설정을 생성하고 저장한다.
    pub fn new() -> Result<Self, CoreError> {
        let config_path = Self::default_config_path()?;
        Self::with_path(config_path)
    }

    /// 지정된 경로로 설정 관리자 생성
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        // 설정 디렉토리 생성
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Config(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("설정 디렉토리 생성: {}", parent.display());
            }
        }

        // 설정 파일 로드 또는 기본값 생성
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default_config();
            Self::save_to_file(&config_path, &default_config)?;
            info!("기본 설정 파일 생성: {}", config_path.display());
            default_config
        };

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// 현재 설정 반환 (복제본)
    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    /// 설정 업데이트 및 파일 저장
    pub fn update(&self, new_config: AppConfig) -> Result<(), CoreError> {
        {
            let mut config = self.config.write().unwrap();
            *config = new_config.clone();
        }

        Self::save_to_file(&self.config_path, &new_config)?;
        debug!("설정 저장 완료: {}", self.config_path.display());

        Ok(())
    }

    /// 설정 파일 경로 반환
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// 플랫폼별 기본 설정 파일 경로
    ///
    /// - macOS: `~/Library/Application Support/com.jari.monitor/config.json`
    /// - Windows: `%APPDATA%\jari\monitor\config\config.json`
    /// - Linux: `~/.config/jari/config.json`
    fn default_config_path() -> Result<PathBuf, CoreError> {
        let dirs = ProjectDirs::from("com", "jari", "monitor")
            .ok_or_else(|| CoreError::Config("설정 디렉토리를 찾을 수 없습니다".to_string()))?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// 파일에서 설정 로드
    fn load_from_file(path: &PathBuf) -> Result<AppConfig, CoreError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e)))?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| CoreError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e)))?;
        debug!("설정 로드 완료: {}", path.display());
        Ok(config)
    }

    /// 파일에 설정 저장
    fn save_to_file(path: &PathBuf, config: &AppConfig) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)
            .map_err(|e| CoreError::Config(format!("설정 파일 쓰기 실패: {}: {}", path.display(), e)))?;
        Ok(())
    }
}
