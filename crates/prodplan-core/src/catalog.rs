//! 資料來源介面與記憶體實作
//!
//! 計算核心只透過 [`InventoryCatalog`] 的三個唯讀查詢取得資料；
//! [`InMemoryCatalog`] 另外提供資料輸入操作（新增、修改、刪除）與唯一性檢查。

use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::HashMap;
use uuid::Uuid;

use crate::validation::{validate_composition, validate_product, validate_raw_material};
use crate::{Composition, PlanError, PlanningSnapshot, Product, RawMaterial, Result};

/// 生產計劃資料來源
pub trait InventoryCatalog {
    /// 所有成品，依售價遞減、代碼遞增排序
    fn list_products_by_value_desc_code_asc(&self) -> Result<Vec<Product>>;

    /// 所有原物料
    fn list_raw_materials(&self) -> Result<Vec<RawMaterial>>;

    /// 指定成品的所有組成
    fn list_compositions_for_products(&self, product_ids: &[Uuid]) -> Result<Vec<Composition>>;
}

impl<T: InventoryCatalog + ?Sized> InventoryCatalog for &T {
    fn list_products_by_value_desc_code_asc(&self) -> Result<Vec<Product>> {
        (**self).list_products_by_value_desc_code_asc()
    }

    fn list_raw_materials(&self) -> Result<Vec<RawMaterial>> {
        (**self).list_raw_materials()
    }

    fn list_compositions_for_products(&self, product_ids: &[Uuid]) -> Result<Vec<Composition>> {
        (**self).list_compositions_for_products(product_ids)
    }
}

/// 售價遞減、代碼遞增
fn by_value_desc_code_asc(a: &Product, b: &Product) -> Ordering {
    b.value.cmp(&a.value).then_with(|| a.code.cmp(&b.code))
}

/// 記憶體資料來源
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<Uuid, Product>,
    raw_materials: HashMap<Uuid, RawMaterial>,
    /// 依新增順序保存
    compositions: Vec<Composition>,
}

impl InMemoryCatalog {
    /// 創建空的資料來源
    pub fn new() -> Self {
        Self::default()
    }

    /// 從快照載入，套用與資料輸入相同的規則並保留快照中的ID
    pub fn from_snapshot(snapshot: PlanningSnapshot) -> Result<Self> {
        let mut catalog = Self::new();
        for product in snapshot.products {
            catalog.insert_product(product)?;
        }
        for raw_material in snapshot.raw_materials {
            catalog.insert_raw_material(raw_material)?;
        }
        for composition in snapshot.compositions {
            catalog.insert_composition(composition)?;
        }
        Ok(catalog)
    }

    /// 匯出目前資料為快照
    pub fn snapshot(&self) -> PlanningSnapshot {
        PlanningSnapshot {
            products: self.products(),
            raw_materials: self.raw_materials(),
            compositions: self.compositions.clone(),
        }
    }

    // ---------- 成品 ----------

    /// 新增成品
    pub fn create_product(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        value: Decimal,
    ) -> Result<Product> {
        self.insert_product(Product::new(code, name, value))
    }

    /// 新增已建立好的成品（保留其ID）
    pub fn insert_product(&mut self, product: Product) -> Result<Product> {
        let product = Product::new(product.code, product.name, product.value).with_id(product.id);
        validate_product(&product)?;
        if self.products.contains_key(&product.id) {
            return Err(PlanError::Conflict(format!("成品ID {} 已存在", product.id)));
        }
        self.ensure_unique_product_code(&product.code, None)?;

        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    /// 修改成品
    pub fn update_product(
        &mut self,
        id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
        value: Decimal,
    ) -> Result<Product> {
        self.product(id)?;
        let product = Product::new(code, name, value).with_id(id);
        validate_product(&product)?;
        self.ensure_unique_product_code(&product.code, Some(id))?;

        self.products.insert(id, product.clone());
        Ok(product)
    }

    /// 刪除成品（仍有組成引用時拒絕）
    pub fn delete_product(&mut self, id: Uuid) -> Result<()> {
        self.product(id)?;
        if self.compositions.iter().any(|c| c.product_id == id) {
            return Err(PlanError::Conflict(format!(
                "成品 {} 仍有關聯的原物料，無法刪除",
                id
            )));
        }
        self.products.remove(&id);
        Ok(())
    }

    /// 查詢成品
    pub fn product(&self, id: Uuid) -> Result<&Product> {
        self.products
            .get(&id)
            .ok_or_else(|| PlanError::NotFound(format!("成品 {}", id)))
    }

    /// 所有成品（售價遞減、代碼遞增）
    pub fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(by_value_desc_code_asc);
        products
    }

    fn ensure_unique_product_code(&self, code: &str, exclude: Option<Uuid>) -> Result<()> {
        let taken = self
            .products
            .values()
            .any(|p| p.code == code && Some(p.id) != exclude);
        if taken {
            return Err(PlanError::Conflict(format!("成品代碼 '{}' 已被使用", code)));
        }
        Ok(())
    }

    // ---------- 原物料 ----------

    /// 新增原物料
    pub fn create_raw_material(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        stock_quantity: Decimal,
    ) -> Result<RawMaterial> {
        self.insert_raw_material(RawMaterial::new(code, name, stock_quantity))
    }

    /// 新增已建立好的原物料（保留其ID）
    pub fn insert_raw_material(&mut self, raw_material: RawMaterial) -> Result<RawMaterial> {
        let raw_material = RawMaterial::new(
            raw_material.code,
            raw_material.name,
            raw_material.stock_quantity,
        )
        .with_id(raw_material.id);
        validate_raw_material(&raw_material)?;
        if self.raw_materials.contains_key(&raw_material.id) {
            return Err(PlanError::Conflict(format!(
                "原物料ID {} 已存在",
                raw_material.id
            )));
        }
        self.ensure_unique_material_code(&raw_material.code, None)?;

        self.raw_materials
            .insert(raw_material.id, raw_material.clone());
        Ok(raw_material)
    }

    /// 修改原物料
    pub fn update_raw_material(
        &mut self,
        id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
        stock_quantity: Decimal,
    ) -> Result<RawMaterial> {
        self.raw_material(id)?;
        let raw_material = RawMaterial::new(code, name, stock_quantity).with_id(id);
        validate_raw_material(&raw_material)?;
        self.ensure_unique_material_code(&raw_material.code, Some(id))?;

        self.raw_materials.insert(id, raw_material.clone());
        Ok(raw_material)
    }

    /// 刪除原物料（仍被組成引用時拒絕）
    pub fn delete_raw_material(&mut self, id: Uuid) -> Result<()> {
        self.raw_material(id)?;
        if self.compositions.iter().any(|c| c.raw_material_id == id) {
            return Err(PlanError::Conflict(format!(
                "原物料 {} 至少被一個成品使用，無法刪除",
                id
            )));
        }
        self.raw_materials.remove(&id);
        Ok(())
    }

    /// 查詢原物料
    pub fn raw_material(&self, id: Uuid) -> Result<&RawMaterial> {
        self.raw_materials
            .get(&id)
            .ok_or_else(|| PlanError::NotFound(format!("原物料 {}", id)))
    }

    /// 所有原物料（依代碼排序）
    pub fn raw_materials(&self) -> Vec<RawMaterial> {
        let mut raw_materials: Vec<RawMaterial> = self.raw_materials.values().cloned().collect();
        raw_materials.sort_by(|a, b| a.code.cmp(&b.code));
        raw_materials
    }

    fn ensure_unique_material_code(&self, code: &str, exclude: Option<Uuid>) -> Result<()> {
        let taken = self
            .raw_materials
            .values()
            .any(|m| m.code == code && Some(m.id) != exclude);
        if taken {
            return Err(PlanError::Conflict(format!("原物料代碼 '{}' 已被使用", code)));
        }
        Ok(())
    }

    // ---------- 組成 ----------

    /// 為成品新增原物料用量
    pub fn add_composition(
        &mut self,
        product_id: Uuid,
        raw_material_id: Uuid,
        required_quantity: Decimal,
    ) -> Result<Composition> {
        self.insert_composition(Composition::new(
            product_id,
            raw_material_id,
            required_quantity,
        ))
    }

    /// 新增已建立好的組成（保留其ID）
    pub fn insert_composition(&mut self, composition: Composition) -> Result<Composition> {
        self.product(composition.product_id)?;
        self.raw_material(composition.raw_material_id)?;
        validate_composition(&composition)?;
        if self.compositions.iter().any(|c| c.id == composition.id) {
            return Err(PlanError::Conflict(format!(
                "組成ID {} 已存在",
                composition.id
            )));
        }
        self.ensure_unique_pair(composition.product_id, composition.raw_material_id, None)?;

        self.compositions.push(composition.clone());
        Ok(composition)
    }

    /// 修改組成
    pub fn update_composition(
        &mut self,
        id: Uuid,
        product_id: Uuid,
        raw_material_id: Uuid,
        required_quantity: Decimal,
    ) -> Result<Composition> {
        let position = self.composition_position(id)?;
        self.product(product_id)?;
        self.raw_material(raw_material_id)?;
        let composition = Composition::new(product_id, raw_material_id, required_quantity).with_id(id);
        validate_composition(&composition)?;
        self.ensure_unique_pair(product_id, raw_material_id, Some(id))?;

        self.compositions[position] = composition.clone();
        Ok(composition)
    }

    /// 刪除組成
    pub fn delete_composition(&mut self, id: Uuid) -> Result<()> {
        let position = self.composition_position(id)?;
        self.compositions.remove(position);
        Ok(())
    }

    /// 成品的所有組成（依新增順序）
    pub fn compositions_for_product(&self, product_id: Uuid) -> Vec<Composition> {
        self.compositions
            .iter()
            .filter(|c| c.product_id == product_id)
            .cloned()
            .collect()
    }

    fn composition_position(&self, id: Uuid) -> Result<usize> {
        self.compositions
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| PlanError::NotFound(format!("組成 {}", id)))
    }

    fn ensure_unique_pair(
        &self,
        product_id: Uuid,
        raw_material_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<()> {
        let duplicated = self.compositions.iter().any(|c| {
            c.product_id == product_id
                && c.raw_material_id == raw_material_id
                && Some(c.id) != exclude
        });
        if duplicated {
            return Err(PlanError::Conflict(
                "此原物料已與所選成品關聯".to_string(),
            ));
        }
        Ok(())
    }
}

impl InventoryCatalog for InMemoryCatalog {
    fn list_products_by_value_desc_code_asc(&self) -> Result<Vec<Product>> {
        Ok(self.products())
    }

    fn list_raw_materials(&self) -> Result<Vec<RawMaterial>> {
        Ok(self.raw_materials())
    }

    fn list_compositions_for_products(&self, product_ids: &[Uuid]) -> Result<Vec<Composition>> {
        Ok(self
            .compositions
            .iter()
            .filter(|c| product_ids.contains(&c.product_id))
            .cloned()
            .collect())
    }
}
