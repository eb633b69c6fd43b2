//! # Production Planning Core
//!
//! 核心資料模型、配置與資料來源介面

pub mod catalog;
pub mod composition;
pub mod config;
pub mod product;
pub mod raw_material;
pub mod snapshot;
pub mod suggestion;
pub mod validation;

// Re-export 主要類型
pub use catalog::{InMemoryCatalog, InventoryCatalog};
pub use composition::Composition;
pub use config::PlannerConfig;
pub use product::Product;
pub use raw_material::RawMaterial;
pub use snapshot::PlanningSnapshot;
pub use suggestion::{SuggestionItem, SuggestionResult};

/// 生產計劃錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("找不到資料: {0}")]
    NotFound(String),

    #[error("資料衝突: {0}")]
    Conflict(String),

    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("違反計算前置條件: {0}")]
    PreconditionViolation(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("序列化錯誤: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
