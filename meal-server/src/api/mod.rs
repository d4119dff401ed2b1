//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`restaurants`] - 餐厅查询、员工端有效预约列表
//! - [`meals`] - 餐品查询 (含天气标注)
//! - [`reservations`] - 预约创建/查询/核销/取消
//! - [`metrics`] - 天气缓存指标

pub mod convert;

pub mod health;
pub mod meals;
pub mod metrics;
pub mod reservations;
pub mod restaurants;

// Re-export common types for handlers
pub use shared::error::{AppError, AppResult};
