//! 生產計劃配置

use serde::{Deserialize, Serialize};

/// 生產建議計算配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 計算前是否先驗證快照（售價 > 0、庫存 >= 0、用量 > 0、代碼唯一）
    pub validate_input: bool,

    /// 組成引用了快照中不存在的原物料時的處理方式
    /// - true: 視為可用量 0（預設）
    /// - false: 回傳前置條件錯誤
    pub include_unmapped_materials_as_zero: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            validate_input: true,
            include_unmapped_materials_as_zero: true,
        }
    }
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 文件解析配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置是否驗證輸入
    pub fn with_validate_input(mut self, validate: bool) -> Self {
        self.validate_input = validate;
        self
    }

    /// 建構器模式：設置未對應原物料的處理方式
    pub fn with_include_unmapped_materials_as_zero(mut self, include: bool) -> Self {
        self.include_unmapped_materials_as_zero = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::new();

        assert!(config.validate_input);
        assert!(config.include_unmapped_materials_as_zero);
    }

    #[test]
    fn test_config_builder() {
        let config = PlannerConfig::new()
            .with_validate_input(false)
            .with_include_unmapped_materials_as_zero(false);

        assert!(!config.validate_input);
        assert!(!config.include_unmapped_materials_as_zero);
    }

    #[test]
    fn test_from_json_uses_defaults_for_missing_fields() {
        let config = PlannerConfig::from_json(r#"{ "validate_input": false }"#).unwrap();

        assert!(!config.validate_input);
        assert!(config.include_unmapped_materials_as_zero);
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = PlannerConfig::from_json("{ validate_input").unwrap_err();

        assert!(matches!(err, crate::PlanError::Serialization(_)));
    }
}
