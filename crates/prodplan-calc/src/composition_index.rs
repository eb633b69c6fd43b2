//! 成品組成索引

use prodplan_core::Composition;
use std::collections::HashMap;
use uuid::Uuid;

/// 依成品分組的組成（組內保持輸入順序）
#[derive(Debug, Clone, Default)]
pub struct CompositionIndex {
    by_product: HashMap<Uuid, Vec<Composition>>,
}

impl CompositionIndex {
    /// 按成品分組
    pub fn build(compositions: &[Composition]) -> Self {
        let mut by_product: HashMap<Uuid, Vec<Composition>> = HashMap::new();
        for composition in compositions {
            by_product
                .entry(composition.product_id)
                .or_default()
                .push(composition.clone());
        }
        Self { by_product }
    }

    /// 成品的組成；沒有組成的成品回傳 None
    pub fn get(&self, product_id: &Uuid) -> Option<&[Composition]> {
        self.by_product
            .get(product_id)
            .map(Vec::as_slice)
            .filter(|entries| !entries.is_empty())
    }

    /// 有組成的成品數量
    pub fn product_count(&self) -> usize {
        self.by_product.len()
    }

    /// 所有組成引用到的原物料ID
    pub fn raw_material_ids(&self) -> impl Iterator<Item = &Uuid> {
        self.by_product
            .values()
            .flatten()
            .map(|composition| &composition.raw_material_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_group_by_product_keeps_order() {
        let product_a = Uuid::new_v4();
        let product_b = Uuid::new_v4();
        let rubber = Uuid::new_v4();
        let pigment = Uuid::new_v4();

        let compositions = vec![
            Composition::new(product_a, rubber, Decimal::from(2)),
            Composition::new(product_b, rubber, Decimal::from(1)),
            Composition::new(product_a, pigment, Decimal::from(1)),
        ];

        let index = CompositionIndex::build(&compositions);

        assert_eq!(index.product_count(), 2);
        let entries = index.get(&product_a).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].raw_material_id, rubber);
        assert_eq!(entries[1].raw_material_id, pigment);
        assert_eq!(index.get(&product_b).unwrap().len(), 1);
        assert_eq!(index.raw_material_ids().count(), 3);
    }

    #[test]
    fn test_product_without_composition_is_absent() {
        let index = CompositionIndex::build(&[]);

        assert!(index.get(&Uuid::new_v4()).is_none());
        assert_eq!(index.product_count(), 0);
    }
}
