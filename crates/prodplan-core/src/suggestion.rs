//! 生產建議模型（計算結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PlanError, Product, Result};

/// 單一成品的生產建議
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    /// 成品ID
    pub product_id: Uuid,

    /// 成品代碼
    pub product_code: String,

    /// 成品名稱
    pub product_name: String,

    /// 單位售價
    pub unit_value: Decimal,

    /// 建議生產數量
    pub suggested_quantity: u64,

    /// 小計（單價 × 數量）
    pub subtotal_value: Decimal,
}

impl SuggestionItem {
    /// 依成品與數量建立建議，小計以精確十進位相乘
    pub fn for_product(product: &Product, suggested_quantity: u64) -> Result<Self> {
        let subtotal_value = product
            .value
            .checked_mul(Decimal::from(suggested_quantity))
            .ok_or_else(|| {
                PlanError::CalculationError(format!(
                    "成品 {} 小計溢位：{} × {}",
                    product.code, product.value, suggested_quantity
                ))
            })?;

        Ok(Self {
            product_id: product.id,
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            unit_value: product.value,
            suggested_quantity,
            subtotal_value,
        })
    }
}

/// 生產建議結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    /// 建議清單（依成品優先順序）
    pub items: Vec<SuggestionItem>,

    /// 總生產價值
    pub total_production_value: Decimal,
}

impl SuggestionResult {
    /// 創建空的結果
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_production_value: Decimal::ZERO,
        }
    }

    /// 加入建議並累加總價值
    pub fn push(&mut self, item: SuggestionItem) -> Result<()> {
        self.total_production_value = self
            .total_production_value
            .checked_add(item.subtotal_value)
            .ok_or_else(|| {
                PlanError::CalculationError(format!(
                    "總生產價值溢位：{} + {}",
                    self.total_production_value, item.subtotal_value
                ))
            })?;
        self.items.push(item);
        Ok(())
    }

    /// 是否沒有任何建議
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 建議筆數
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 依成品代碼查找建議
    pub fn find_by_code(&self, code: &str) -> Option<&SuggestionItem> {
        self.items.iter().find(|item| item.product_code == code)
    }

    /// 所有建議的總生產數量（以 `u64::MAX` 為上限）
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.suggested_quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_item_subtotal_is_exact() {
        let product = Product::new("PRD-C", "Produto C", dec("19.99"));
        let item = SuggestionItem::for_product(&product, 3).unwrap();

        assert_eq!(item.subtotal_value, dec("59.97"));
        assert_eq!(item.unit_value, dec("19.99"));
        assert_eq!(item.product_code, "PRD-C");
    }

    #[test]
    fn test_push_accumulates_total() {
        let high = Product::new("H", "High", dec("100.00"));
        let low = Product::new("L", "Low", dec("30.00"));

        let mut result = SuggestionResult::empty();
        result.push(SuggestionItem::for_product(&high, 2).unwrap()).unwrap();
        result.push(SuggestionItem::for_product(&low, 1).unwrap()).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.total_production_value, dec("230.00"));
        assert_eq!(result.total_quantity(), 3);
        assert_eq!(result.find_by_code("L").unwrap().suggested_quantity, 1);
    }

    #[test]
    fn test_total_quantity_saturates() {
        let cheap = Product::new("C", "Cheap", dec("0.01"));
        let mut result = SuggestionResult::empty();
        result.push(SuggestionItem::for_product(&cheap, u64::MAX).unwrap()).unwrap();
        result.push(SuggestionItem::for_product(&cheap, 7).unwrap()).unwrap();

        assert_eq!(result.total_quantity(), u64::MAX);
    }

    #[test]
    fn test_subtotal_overflow_is_reported() {
        let product = Product::new("BIG", "Big", Decimal::MAX);

        let err = SuggestionItem::for_product(&product, 2).unwrap_err();
        assert!(matches!(err, PlanError::CalculationError(_)));
    }

    #[test]
    fn test_serialized_shape() {
        let product = Product::new("PRD-A", "Produto A", dec("100.00"));
        let mut result = SuggestionResult::empty();
        result.push(SuggestionItem::for_product(&product, 2).unwrap()).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalProductionValue"], "200.00");
        assert_eq!(json["items"][0]["productCode"], "PRD-A");
        assert_eq!(json["items"][0]["suggestedQuantity"], 2);
        assert_eq!(json["items"][0]["subtotalValue"], "200.00");
    }
}
