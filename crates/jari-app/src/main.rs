//! # jari-app
//!
//! JARI 바이너리 진입점.
//! DI 와이어링, 라이프사이클 관리, 폴링 스케줄러 오케스트레이션.

mod reporter;
mod scheduler;
mod shutdown;

use anyhow::Result;
use clap::Parser;
use jari_core::config::AppConfig;
use jari_core::config_manager::ConfigManager;
use jari_core::ports::monitor::ForegroundResolver;
use jari_core::ports::sink::StatusSink;
use jari_monitor::clock::ActivityClock;
use jari_monitor::engine::IdleStatusEngine;
use jari_monitor::foreground::PlatformForeground;
use jari_monitor::input::InputBridge;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::reporter::ConsoleReporter;
use crate::scheduler::{SchedulerConfig, StatusScheduler};
use crate::shutdown::{drain, ShutdownSignal, SignalListener};

/// JARI 데스크톱 모니터
///
/// 전역 입력 이벤트와 활성 앱 감지로 사용자 유휴/활성 상태를 보고한다.
#[derive(Parser, Debug)]
#[command(name = "jari")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 유휴 임계값 (초) — 이 시간을 초과해 입력이 없으면 IDLE
    #[arg(long, short = 't')]
    threshold: Option<u64>,

    /// 상태 폴링 간격 (초)
    #[arg(long, short = 'i')]
    interval: Option<u64>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// 배너 출력
fn print_banner() {
    println!();
    println!("╔══════════════════════════════════════════╗");
    println!("║   JARI — 자리 지킴 데스크톱 모니터       ║");
    println!("╚══════════════════════════════════════════╝");
    println!();
}

/// 설정 로드 (파일 실패 시 기본값으로 계속)
fn load_config(path: Option<PathBuf>) -> AppConfig {
    let manager = match path {
        Some(p) => ConfigManager::with_path(p),
        None => ConfigManager::new(),
    };

    match manager {
        Ok(m) => {
            info!("설정 파일: {}", m.config_path().display());
            m.get()
        }
        Err(e) => {
            warn!("설정 로드 실패, 기본 설정 사용: {e}");
            AppConfig::default_config()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "jari={},jari_app={},jari_core={},jari_monitor={}",
        args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    print_banner();

    // 설정 로드 + CLI 오버라이드
    let mut config = load_config(args.config);
    if let Some(threshold) = args.threshold {
        config.monitor.idle_threshold_secs = threshold;
    }
    if let Some(interval) = args.interval {
        config.monitor.poll_interval_secs = interval;
    }
    config.validate()?;

    println!(
        "{}초 동안 입력이 없으면 IDLE로 표시됩니다. ({}초 간격 폴링)",
        config.monitor.idle_threshold_secs, config.monitor.poll_interval_secs
    );
    println!("Ctrl+C로 종료합니다.");
    println!();

    info!("JARI 모니터 시작");

    // 시그널 핸들러는 프로듀서 시작 전에 설치한다 —
    // 시작 직후의 Ctrl+C도 브리지 정지를 포함한 정상 종료 경로를 탄다
    let signals = SignalListener::install()?;

    // ── 어댑터 생성 (DI 와이어링) ──

    // 1. 활동 시계 (프로세스 시작 시각으로 초기화)
    let clock = Arc::new(ActivityClock::new());

    // 2. 전역 입력 브리지
    let bridge = Arc::new(InputBridge::new(clock.clone()));
    bridge.start();

    // 3. 활성 앱 조회기
    let resolver: Arc<dyn ForegroundResolver> = Arc::new(PlatformForeground::new());

    // 4. 유휴 판정 엔진
    let engine = Arc::new(IdleStatusEngine::new(
        clock,
        resolver,
        config.monitor.idle_threshold_secs,
    ));

    // 5. 콘솔 리포터
    let sink: Arc<dyn StatusSink> = Arc::new(ConsoleReporter::new());

    // ── 폴링 루프 시작 ──
    let sched = StatusScheduler::new(
        SchedulerConfig {
            poll_interval: config.poll_interval(),
        },
        engine,
        sink,
    );
    let shutdown = ShutdownSignal::new();
    let shutdown_rx = shutdown.subscribe();
    let sched_task = tokio::spawn(async move {
        sched.run(shutdown_rx).await;
    });

    // OS 시그널 대기 후 종료 전파
    signals.recv().await;
    shutdown.trigger();

    // 폴링 루프가 먼저 끝나야 종료 이후 레코드가 방출되지 않는다
    drain(sched_task).await;

    // 입력 프로듀서 정지 — 반환 이후 시계 갱신 없음
    bridge.stop();
    let stats = bridge.snapshot();
    info!(
        "입력 집계: 이동={}, 클릭={}, 스크롤={}, 키={}",
        stats.moves, stats.clicks, stats.scrolls, stats.key_presses
    );

    println!();
    println!("모니터가 종료되었습니다.");
    info!("JARI 모니터 종료");
    Ok(())
}
