//! 成品組成（BOM 用量）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 成品與原物料的組成關係
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// 組成ID
    pub id: Uuid,

    /// 成品ID
    pub product_id: Uuid,

    /// 原物料ID
    pub raw_material_id: Uuid,

    /// 每單位成品所需用量
    pub required_quantity: Decimal,
}

impl Composition {
    /// 創建新的組成記錄
    pub fn new(product_id: Uuid, raw_material_id: Uuid, required_quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            raw_material_id,
            required_quantity,
        }
    }

    /// 建構器模式：指定ID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 生產指定數量所需的總用量
    pub fn consumption_for(&self, quantity: Decimal) -> Option<Decimal> {
        self.required_quantity.checked_mul(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption_for() {
        let composition = Composition::new(Uuid::new_v4(), Uuid::new_v4(), Decimal::new(4000, 3));

        assert_eq!(
            composition.consumption_for(Decimal::from(2)),
            Some(Decimal::from(8))
        );
    }
}
