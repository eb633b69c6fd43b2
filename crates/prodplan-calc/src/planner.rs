//! 生產建議主計算器

use prodplan_core::validation::validate_snapshot;
use prodplan_core::{InventoryCatalog, PlanError, PlannerConfig, SuggestionResult};
use uuid::Uuid;

use crate::allocation::AllocationEngine;
use crate::composition_index::CompositionIndex;
use crate::virtual_stock::VirtualStock;

/// 生產建議計算器
pub struct ProductionPlanner<C> {
    /// 資料來源
    catalog: C,

    /// 計算配置
    config: PlannerConfig,
}

impl<C: InventoryCatalog> ProductionPlanner<C> {
    /// 以預設配置創建計算器
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            config: PlannerConfig::default(),
        }
    }

    /// 建構器模式：設置計算配置
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// 主計算入口
    ///
    /// 每次呼叫各自建立虛擬庫存，不修改資料來源；相同輸入得到相同結果。
    pub fn compute_suggestions(&self) -> prodplan_core::Result<SuggestionResult> {
        let start_time = std::time::Instant::now();

        let products = self.catalog.list_products_by_value_desc_code_asc()?;
        let raw_materials = self.catalog.list_raw_materials()?;
        let product_ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let compositions = self.catalog.list_compositions_for_products(&product_ids)?;

        tracing::info!(
            "開始生產建議計算：成品 {} 筆，原物料 {} 筆，組成 {} 筆",
            products.len(),
            raw_materials.len(),
            compositions.len()
        );

        if self.config.validate_input {
            tracing::debug!("Step 0: 驗證快照");
            validate_snapshot(&products, &raw_materials, &compositions)?;
        }

        // Step 1: 載入虛擬庫存
        tracing::debug!("Step 1: 載入虛擬庫存");
        let mut stock = VirtualStock::load(&raw_materials);

        // Step 2: 按成品分組組成
        tracing::debug!("Step 2: 建立組成索引");
        let index = CompositionIndex::build(&compositions);
        tracing::debug!("有組成的成品數量: {}", index.product_count());
        self.check_unmapped_materials(&index, &stock)?;

        // Step 3: 依優先順序分配
        tracing::debug!("Step 3: 依優先順序分配");
        let result = AllocationEngine::allocate(&products, &index, &mut stock)?;

        tracing::info!(
            "生產建議計算完成，耗時 {:?}，建議 {} 筆，總生產價值 {}",
            start_time.elapsed(),
            result.len(),
            result.total_production_value
        );

        Ok(result)
    }

    /// 組成引用了快照中不存在的原物料
    fn check_unmapped_materials(
        &self,
        index: &CompositionIndex,
        stock: &VirtualStock,
    ) -> prodplan_core::Result<()> {
        let mut unmapped: Vec<Uuid> = index
            .raw_material_ids()
            .filter(|id| !stock.contains(id))
            .copied()
            .collect();
        if unmapped.is_empty() {
            return Ok(());
        }
        unmapped.sort();
        unmapped.dedup();

        if self.config.include_unmapped_materials_as_zero {
            tracing::warn!(
                "{} 種原物料不在庫存快照中，視為可用量 0: {:?}",
                unmapped.len(),
                unmapped
            );
            Ok(())
        } else {
            Err(PlanError::PreconditionViolation(format!(
                "組成引用了不存在的原物料: {:?}",
                unmapped
            )))
        }
    }

    /// 獲取計算配置
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 獲取資料來源引用
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
