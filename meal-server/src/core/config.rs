/// 服务器配置 - 订餐服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8081 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | CORS_ORIGIN | http://localhost:5173 | 前端来源 |
/// | SEED_DEMO_DATA | true | 是否填充演示数据 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | WEATHER_API_URL | (IPMA daily forecast) | 天气数据源 |
/// | WEATHER_CITY_CODE | 1010500 | IPMA 城市代码 (Aveiro) |
/// | WEATHER_CACHE_TTL_MS | 3600000 | 天气缓存 TTL(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SEED_DEMO_DATA=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 允许的前端来源 (CORS)
    pub cors_origin: String,
    /// 启动时是否填充演示餐厅/餐品
    pub seed_demo_data: bool,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,

    // === 天气数据源配置 ===
    /// IPMA 天气 API 基础地址
    pub weather_api_url: String,
    /// IPMA 城市代码
    pub weather_city_code: String,
    /// 天气缓存 TTL (毫秒)
    pub weather_cache_ttl_ms: u64,
}

const DEFAULT_WEATHER_API_URL: &str =
    "https://api.ipma.pt/open-data/forecast/meteorology/cities/daily";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),

            weather_api_url: std::env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.into()),
            weather_city_code: std::env::var("WEATHER_CITY_CODE")
                .unwrap_or_else(|_| "1010500".into()),
            weather_cache_ttl_ms: std::env::var("WEATHER_CACHE_TTL_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3_600_000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_demo_data: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_demo_data = seed_demo_data;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
