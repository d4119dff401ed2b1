use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::{Catalog, seed_demo_data};
use crate::core::Config;
use crate::reservations::ReservationsManager;
use crate::weather::{IpmaForecastSource, WeatherService};

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<Catalog> | 餐厅/餐品目录 |
/// | reservations | Arc<ReservationsManager> | 预约生命周期引擎 |
/// | weather | Arc<WeatherService> | 天气缓存服务 |
///
/// 状态作为显式句柄传入处理器，而不是全局变量，
/// 测试可以为每个用例构造独立实例。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 餐厅/餐品目录
    pub catalog: Arc<Catalog>,
    /// 预约引擎 (座位账本 + 预约存储)
    pub reservations: Arc<ReservationsManager>,
    /// 天气缓存服务
    pub weather: Arc<WeatherService>,
    /// 进程启动时间 (用于 /health 的 uptime)
    started_at: Instant,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：目录 (可选演示数据) → 预约引擎 → 天气服务
    pub async fn initialize(config: &Config) -> Self {
        let catalog = Arc::new(Catalog::new());
        if config.seed_demo_data {
            seed_demo_data(&catalog);
        }

        let reservations = Arc::new(ReservationsManager::new(Arc::clone(&catalog)));

        let source = Arc::new(IpmaForecastSource::new(
            config.weather_api_url.clone(),
            config.weather_city_code.clone(),
        ));
        let weather = Arc::new(WeatherService::new(
            source,
            Duration::from_millis(config.weather_cache_ttl_ms),
        ));

        tracing::info!(
            restaurants = catalog.restaurant_count(),
            meals = catalog.meal_count(),
            "Server state initialized"
        );

        Self {
            config: config.clone(),
            catalog,
            reservations,
            weather,
            started_at: Instant::now(),
        }
    }

    /// 进程已运行秒数
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
