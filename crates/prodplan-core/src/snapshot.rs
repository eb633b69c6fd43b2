//! 計劃快照（一次計算所需的全部資料）

use serde::{Deserialize, Serialize};

use crate::{Composition, Product, RawMaterial, Result};

/// 生產計劃快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningSnapshot {
    /// 成品
    pub products: Vec<Product>,

    /// 原物料
    pub raw_materials: Vec<RawMaterial>,

    /// 組成
    pub compositions: Vec<Composition>,
}

impl PlanningSnapshot {
    /// 從 JSON 解析快照
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 序列化為 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
