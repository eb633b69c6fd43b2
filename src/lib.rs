//! # Production Planning
//!
//! 依原物料庫存與成品組成，計算依售價優先的生產建議。

pub use prodplan_calc::{
    compute_suggestions, AllocationEngine, CompositionIndex, ProductionPlanner, VirtualStock,
};
pub use prodplan_core::{
    validation, Composition, InMemoryCatalog, InventoryCatalog, PlanError, PlannerConfig,
    PlanningSnapshot, Product, RawMaterial, Result, SuggestionItem, SuggestionResult,
};
