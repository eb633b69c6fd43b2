//! 產能分配引擎
//!
//! 依成品優先順序逐一計算可生產數量，並從虛擬庫存扣減用量。
//! 單次走訪、不回溯：高價成品一旦分配，剩餘庫存才輪到後面的成品。

use prodplan_core::{Composition, PlanError, Product, Result, SuggestionItem, SuggestionResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::composition_index::CompositionIndex;
use crate::virtual_stock::VirtualStock;

/// 產能分配引擎
pub struct AllocationEngine;

impl AllocationEngine {
    /// 執行分配
    ///
    /// `products` 必須已依售價遞減、代碼遞增排序，引擎本身不排序。
    /// 沒有組成或可生產數量為 0 的成品不會出現在結果中。
    pub fn allocate(
        products: &[Product],
        index: &CompositionIndex,
        stock: &mut VirtualStock,
    ) -> Result<SuggestionResult> {
        let mut result = SuggestionResult::empty();

        for product in products {
            let composition = match index.get(&product.id) {
                Some(composition) => composition,
                None => {
                    tracing::debug!("成品 {} 沒有組成，跳過", product.code);
                    continue;
                }
            };

            let quantity = Self::max_producible(composition, stock)?;
            if quantity == 0 {
                tracing::debug!("成品 {} 原物料不足，跳過", product.code);
                continue;
            }

            let item = SuggestionItem::for_product(product, quantity)?;
            tracing::debug!(
                "成品 {} 建議生產 {} 件，小計 {}",
                product.code,
                quantity,
                item.subtotal_value
            );
            result.push(item)?;

            Self::consume(composition, quantity, stock)?;
        }

        Ok(result)
    }

    /// 以目前虛擬庫存計算可生產的最大整數數量（瓶頸原物料決定上限）
    pub fn max_producible(composition: &[Composition], stock: &VirtualStock) -> Result<u64> {
        let mut max_quantity: Option<u64> = None;

        for entry in composition {
            let units = Self::whole_units(
                stock.available(&entry.raw_material_id),
                entry.required_quantity,
            )?;
            max_quantity = Some(max_quantity.map_or(units, |current| current.min(units)));
        }

        Ok(max_quantity.unwrap_or(0))
    }

    /// floor(available / required)，精確十進位運算、向零截斷
    ///
    /// 結果以 `u64::MAX` 為上限；超過上限時只分配上限數量，剩餘庫存留給後續成品。
    pub fn whole_units(available: Decimal, required: Decimal) -> Result<u64> {
        if required <= Decimal::ZERO {
            return Err(PlanError::PreconditionViolation(format!(
                "每單位用量必須大於 0，目前為 {}",
                required
            )));
        }
        if available < required {
            return Ok(0);
        }

        let cap = Decimal::from(u64::MAX);

        // 商溢位代表遠大於上限
        let mut units = available
            .checked_div(required)
            .map_or(cap, |quotient| quotient.trunc().min(cap));

        // 除法在最後一位有效數字捨入，校正為精確的向下取整；乘積溢位代表已超過可用量
        while units > Decimal::ZERO
            && units
                .checked_mul(required)
                .map_or(true, |needed| needed > available)
        {
            units -= Decimal::ONE;
        }
        while units < cap {
            let next = units + Decimal::ONE;
            match next.checked_mul(required) {
                Some(needed) if needed <= available => units = next,
                _ => break,
            }
        }

        Ok(units.to_u64().unwrap_or(u64::MAX))
    }

    /// 從虛擬庫存扣減生產用量
    fn consume(composition: &[Composition], quantity: u64, stock: &mut VirtualStock) -> Result<()> {
        let quantity = Decimal::from(quantity);
        for entry in composition {
            let consumed = entry.consumption_for(quantity).ok_or_else(|| {
                PlanError::CalculationError(format!(
                    "用量溢位：{} × {}",
                    entry.required_quantity, quantity
                ))
            })?;
            stock.consume(entry.raw_material_id, consumed);
        }
        Ok(())
    }
}
