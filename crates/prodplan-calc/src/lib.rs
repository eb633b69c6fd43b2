//! # Production Planning Calculation Engine
//!
//! 依原物料庫存計算各成品的建議生產數量：
//! 虛擬庫存 → 組成索引 → 依售價優先的貪婪分配

pub mod allocation;
pub mod composition_index;
pub mod planner;
pub mod virtual_stock;

// Re-export 主要類型
pub use allocation::AllocationEngine;
pub use composition_index::CompositionIndex;
pub use planner::ProductionPlanner;
pub use virtual_stock::VirtualStock;

use prodplan_core::{InventoryCatalog, Result, SuggestionResult};

/// 以預設配置計算一次生產建議
pub fn compute_suggestions<C: InventoryCatalog>(catalog: C) -> Result<SuggestionResult> {
    ProductionPlanner::new(catalog).compute_suggestions()
}
