//! 虛擬庫存
//!
//! 每次計算各自持有一份，只在計算過程中扣減，不回寫原始資料。

use prodplan_core::RawMaterial;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

/// 虛擬庫存（原物料ID → 剩餘數量）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualStock {
    quantities: HashMap<Uuid, Decimal>,
}

impl VirtualStock {
    /// 從原物料目前庫存建立
    pub fn load(raw_materials: &[RawMaterial]) -> Self {
        let mut quantities = HashMap::with_capacity(raw_materials.len());
        for raw_material in raw_materials {
            // 重複ID以第一筆為準
            quantities
                .entry(raw_material.id)
                .or_insert(raw_material.stock_quantity);
        }
        Self { quantities }
    }

    /// 可用數量（不存在的原物料視為 0）
    pub fn available(&self, raw_material_id: &Uuid) -> Decimal {
        self.quantities
            .get(raw_material_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 是否包含該原物料
    pub fn contains(&self, raw_material_id: &Uuid) -> bool {
        self.quantities.contains_key(raw_material_id)
    }

    /// 扣減庫存
    pub fn consume(&mut self, raw_material_id: Uuid, quantity: Decimal) {
        let current = self.quantities.entry(raw_material_id).or_insert(Decimal::ZERO);
        *current -= quantity;
    }

    /// 原物料種類數
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// 是否沒有任何原物料
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_mirrors_stock() {
        let steel = RawMaterial::new("RM-STEEL", "Aco", Decimal::new(10000, 3));
        let resin = RawMaterial::new("RM-RESIN", "Resina", Decimal::new(500, 3));

        let stock = VirtualStock::load(&[steel.clone(), resin.clone()]);

        assert_eq!(stock.len(), 2);
        assert_eq!(stock.available(&steel.id), Decimal::from(10));
        assert_eq!(stock.available(&resin.id), Decimal::new(5, 1));
    }

    #[test]
    fn test_unknown_material_is_zero() {
        let stock = VirtualStock::load(&[]);

        assert!(stock.is_empty());
        assert_eq!(stock.available(&Uuid::new_v4()), Decimal::ZERO);
    }

    #[test]
    fn test_consume_does_not_touch_source() {
        let steel = RawMaterial::new("RM-STEEL", "Aco", Decimal::from(10));
        let mut stock = VirtualStock::load(std::slice::from_ref(&steel));

        stock.consume(steel.id, Decimal::from(8));

        assert_eq!(stock.available(&steel.id), Decimal::from(2));
        assert_eq!(steel.stock_quantity, Decimal::from(10));
    }
}
