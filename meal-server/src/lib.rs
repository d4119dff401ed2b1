//! Moliceiro Meal Server - 校园餐厅订餐预约服务
//!
//! # 架构概述
//!
//! 本模块是订餐服务的主入口，提供以下核心功能：
//!
//! - **预约引擎** (`reservations`): 座位账本、预约码、生命周期状态机
//! - **目录** (`catalog`): 餐厅/餐品目录 (协作方，只读)
//! - **天气缓存** (`weather`): IPMA 天气标注与命中统计
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! meal-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── reservations/  # 预约引擎 (核心并发域)
//! ├── catalog/       # 餐厅/餐品目录
//! ├── weather/       # 天气缓存服务
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod reservations;
pub mod utils;
pub mod weather;

// Re-export 公共类型
pub use catalog::Catalog;
pub use core::{Config, Server, ServerState};
pub use reservations::{
    AvailabilityLedger, ReservationError, ReservationStore, ReservationsManager,
};
pub use weather::WeatherService;

// Re-export unified error types from shared
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    __  ___      ___           _
   /  |/  /___  / (_)_______  (_)________
  / /|_/ / __ \/ / / ___/ _ \/ / ___/ __ \
 / /  / / /_/ / / / /__/  __/ / /  / /_/ /
/_/  /_/\____/_/_/\___/\___/_/_/   \____/
              __  ___           __
             /  |/  /__  ____ _/ /____
            / /|_/ / _ \/ __ `/ / ___/
           / /  / /  __/ /_/ / (__  )
          /_/  /_/\___/\__,_/_/____/
    "#
    );
}
