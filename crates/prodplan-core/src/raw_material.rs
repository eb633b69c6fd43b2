//! 原物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 原物料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// 原物料ID
    pub id: Uuid,

    /// 原物料代碼（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 現有庫存
    pub stock_quantity: Decimal,
}

impl RawMaterial {
    /// 創建新的原物料（代碼與名稱去除前後空白）
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        stock_quantity: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into().trim().to_string(),
            name: name.into().trim().to_string(),
            stock_quantity,
        }
    }

    /// 建構器模式：指定ID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_raw_material() {
        let steel = RawMaterial::new(" RM-STEEL", "Aco ", Decimal::new(10000, 3));

        assert_eq!(steel.code, "RM-STEEL");
        assert_eq!(steel.name, "Aco");
        assert_eq!(steel.stock_quantity, Decimal::from(10));
    }
}
