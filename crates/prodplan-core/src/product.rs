//! 成品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 成品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 成品ID
    pub id: Uuid,

    /// 成品代碼（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 單位售價
    pub value: Decimal,
}

impl Product {
    /// 創建新的成品（代碼與名稱去除前後空白）
    pub fn new(code: impl Into<String>, name: impl Into<String>, value: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into().trim().to_string(),
            name: name.into().trim().to_string(),
            value,
        }
    }

    /// 建構器模式：指定ID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}
