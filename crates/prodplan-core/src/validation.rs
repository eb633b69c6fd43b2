//! 輸入驗證規則
//!
//! 資料輸入時回傳 [`PlanError::InvalidInput`]；計算前的快照檢查回傳
//! [`PlanError::PreconditionViolation`]。

use rust_decimal::Decimal;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{Composition, PlanError, Product, RawMaterial, Result};

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlanError::InvalidInput(format!("{} 不可為空", field)));
    }
    Ok(())
}

/// 驗證成品：代碼、名稱不可為空，售價必須大於 0
pub fn validate_product(product: &Product) -> Result<()> {
    require_text("成品代碼", &product.code)?;
    require_text("成品名稱", &product.name)?;
    if product.value <= Decimal::ZERO {
        return Err(PlanError::InvalidInput(format!(
            "成品 {} 售價必須大於 0，目前為 {}",
            product.code, product.value
        )));
    }
    Ok(())
}

/// 驗證原物料：代碼、名稱不可為空，庫存不可為負
pub fn validate_raw_material(raw_material: &RawMaterial) -> Result<()> {
    require_text("原物料代碼", &raw_material.code)?;
    require_text("原物料名稱", &raw_material.name)?;
    if raw_material.stock_quantity < Decimal::ZERO {
        return Err(PlanError::InvalidInput(format!(
            "原物料 {} 庫存不可為負，目前為 {}",
            raw_material.code, raw_material.stock_quantity
        )));
    }
    Ok(())
}

/// 驗證組成：每單位用量必須大於 0
pub fn validate_composition(composition: &Composition) -> Result<()> {
    if composition.required_quantity <= Decimal::ZERO {
        return Err(PlanError::InvalidInput(format!(
            "組成 {} 用量必須大於 0，目前為 {}",
            composition.id, composition.required_quantity
        )));
    }
    Ok(())
}

/// 計算前檢查整份快照是否符合計算前置條件
pub fn validate_snapshot(
    products: &[Product],
    raw_materials: &[RawMaterial],
    compositions: &[Composition],
) -> Result<()> {
    let as_precondition = |err: PlanError| match err {
        PlanError::InvalidInput(message) => PlanError::PreconditionViolation(message),
        other => other,
    };

    let mut product_codes = HashSet::new();
    let mut product_ids = HashSet::new();
    for product in products {
        validate_product(product).map_err(as_precondition)?;
        if !product_codes.insert(product.code.as_str()) {
            return Err(PlanError::PreconditionViolation(format!(
                "成品代碼重複: {}",
                product.code
            )));
        }
        product_ids.insert(product.id);
    }

    let mut material_codes = HashSet::new();
    for raw_material in raw_materials {
        validate_raw_material(raw_material).map_err(as_precondition)?;
        if !material_codes.insert(raw_material.code.as_str()) {
            return Err(PlanError::PreconditionViolation(format!(
                "原物料代碼重複: {}",
                raw_material.code
            )));
        }
    }

    let mut pairs: HashSet<(Uuid, Uuid)> = HashSet::new();
    for composition in compositions {
        validate_composition(composition).map_err(as_precondition)?;
        if !product_ids.contains(&composition.product_id) {
            return Err(PlanError::PreconditionViolation(format!(
                "組成 {} 引用了不存在的成品 {}",
                composition.id, composition.product_id
            )));
        }
        if !pairs.insert((composition.product_id, composition.raw_material_id)) {
            return Err(PlanError::PreconditionViolation(format!(
                "成品 {} 與原物料 {} 的組成重複",
                composition.product_id, composition.raw_material_id
            )));
        }
    }

    Ok(())
}
